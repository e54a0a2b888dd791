//! Input routing: pointer and keyboard events to extent operations.

use log::trace;
use tuiwin::{Event, MouseButton, WheelDirection};

use super::Inner;
use super::layout::track_for;
use super::state::DragState;
use crate::extent::{Axis, BarZone, ScrollbarGeometry};
use crate::host::Host;
use crate::keybinds::{KeyCombo, ScrollAction, Step};

/// Lines moved by one wheel notch.
const WHEEL_STEP: i32 = 5;

impl<H: Host + 'static> Inner<H> {
    pub(super) fn handle_event(&self, event: &Event) -> bool {
        match *event {
            Event::Press {
                button: MouseButton::Left,
                line,
                col,
            } => self.press(line, col),
            Event::DragStart {
                button: MouseButton::Left,
                line,
                col,
            } => self.drag_start(line, col),
            Event::Drag {
                button: MouseButton::Left,
                line,
                col,
            } => self.drag(line, col),
            Event::DragStop { .. } => self.drag_stop(),
            Event::Wheel {
                direction, line, col, ..
            } => self.wheel(direction, line, col),
            Event::Key { key, modifiers } => self.key(KeyCombo::new(key, modifiers)),
            Event::Press { .. }
            | Event::DragStart { .. }
            | Event::Drag { .. }
            | Event::Release { .. }
            | Event::Move { .. }
            | Event::Resize { .. } => false,
        }
    }

    /// Size of the scroll box's window.
    fn size(&self) -> Option<(i32, i32)> {
        let window = self.state.borrow().window?;
        self.window_size(window)
    }

    /// The visible bar under `(line, col)` and the position along it.
    fn bar_at(&self, line: i32, col: i32) -> Option<(Axis, i32)> {
        let (lines, cols) = self.size()?;
        if line < 0 || col < 0 || line >= lines || col >= cols {
            return None;
        }
        let visible = self.state.borrow().visible;
        [
            (Axis::Vertical, col == cols - 1, line),
            (Axis::Horizontal, line == lines - 1, col),
        ]
        .into_iter()
        .find(|&(axis, in_gutter, _)| in_gutter && visible.get(axis))
        .map(|(axis, _, pos)| (axis, pos))
    }

    /// Current geometry of a bar, or `None` if it has no room or nothing to
    /// show.
    pub(super) fn bar_geometry(&self, axis: Axis) -> Option<ScrollbarGeometry> {
        let extent = self.extent(axis)?;
        let (lines, cols) = self.size()?;
        let visible = self.state.borrow().visible;
        let (origin, length) = track_for(axis, lines, cols, visible);
        if length <= 0 || extent.total() == 0 {
            return None;
        }
        Some(extent.scrollbar_geometry(origin, length))
    }

    fn press(&self, line: i32, col: i32) -> bool {
        let Some((axis, pos)) = self.bar_at(line, col) else {
            return false;
        };
        let (Some(extent), Some(geometry)) = (self.extent(axis), self.bar_geometry(axis)) else {
            return true;
        };

        let half_page = extent.viewport() / 2;
        match geometry.zone(pos) {
            Some(BarZone::DecrementArrow) => extent.scroll(-1),
            Some(BarZone::TrackBefore) => extent.scroll(-half_page),
            Some(BarZone::TrackAfter) => extent.scroll(half_page),
            Some(BarZone::IncrementArrow) => extent.scroll(1),
            Some(BarZone::Thumb) | None => false,
        };
        true
    }

    fn drag_start(&self, line: i32, col: i32) -> bool {
        let Some((axis, pos)) = self.bar_at(line, col) else {
            return false;
        };
        let Some(geometry) = self.bar_geometry(axis) else {
            return false;
        };
        if geometry.zone(pos) != Some(BarZone::Thumb) {
            return false;
        }

        let offset = pos - geometry.visible_thumb().0;
        trace!("{} thumb grabbed at offset {}", axis, offset);
        self.state.borrow_mut().drag = DragState::Dragging { axis, offset };
        true
    }

    fn drag(&self, line: i32, col: i32) -> bool {
        let DragState::Dragging { axis, offset } = self.state.borrow().drag else {
            return false;
        };
        let (Some(extent), Some((lines, cols))) = (self.extent(axis), self.size()) else {
            return true;
        };

        let visible = self.state.borrow().visible;
        let (origin, length) = track_for(axis, lines, cols, visible);
        let pos = match axis {
            Axis::Vertical => line,
            Axis::Horizontal => col,
        };
        extent.scroll_to(extent.offset_for_track_cell(pos - offset - origin, length));
        true
    }

    fn drag_stop(&self) -> bool {
        let previous = std::mem::take(&mut self.state.borrow_mut().drag);
        matches!(previous, DragState::Dragging { .. })
    }

    fn wheel(&self, direction: WheelDirection, line: i32, col: i32) -> bool {
        let Some((lines, cols)) = self.size() else {
            return false;
        };
        if line < 0 || col < 0 || line >= lines || col >= cols {
            return false;
        }
        let Some(vertical) = &self.vertical else {
            return false;
        };
        match direction {
            WheelDirection::Up => vertical.scroll(-WHEEL_STEP),
            WheelDirection::Down => vertical.scroll(WHEEL_STEP),
        };
        true
    }

    fn key(&self, combo: KeyCombo) -> bool {
        let Some(action) = self.keymap.resolve(&combo) else {
            return false;
        };
        let Some(extent) = self.extent(action.axis()) else {
            trace!("{} ignored, axis disabled", action);
            return false;
        };

        match action {
            ScrollAction::Step { step, backward, .. } => {
                let amount = match step {
                    Step::One => 1,
                    Step::HalfPage => extent.viewport() / 2,
                };
                extent.scroll(if backward { -amount } else { amount });
            }
            ScrollAction::ToStart(_) => {
                extent.scroll_to(0);
            }
            ScrollAction::ToEnd(_) => {
                extent.scroll_to(extent.limit());
            }
        }
        true
    }
}
