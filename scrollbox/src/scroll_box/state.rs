//! Mutable per-container state.

use tuiwin::WindowId;

use crate::child::ChildHandle;
use crate::extent::Axis;

/// Scrollbar drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Dragging the thumb of `axis`, grabbed `offset` cells from its start.
    Dragging { axis: Axis, offset: i32 },
}

/// Which scrollbars the last layout pass decided to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    pub vertical: bool,
    pub horizontal: bool,
}

impl Visibility {
    pub fn get(&self, axis: Axis) -> bool {
        match axis {
            Axis::Vertical => self.vertical,
            Axis::Horizontal => self.horizontal,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct State {
    /// The container's own window.
    pub window: Option<WindowId>,
    /// Content area: the window minus the scrollbar gutter.
    pub viewport: Option<WindowId>,
    pub child: Option<ChildHandle>,
    /// The window the child was given. For a self-scrolling child this is
    /// the viewport itself.
    pub child_window: Option<WindowId>,
    /// Whether the child has been handed `child_window`.
    pub assigned: bool,
    pub visible: Visibility,
    pub drag: DragState,
    /// Last size the child declared, used while the child is busy.
    pub declared: (i32, i32),
}

impl State {
    /// Forget every sub-window, returning the ones this container created.
    pub fn release_windows(&mut self) -> Vec<WindowId> {
        let mut owned = Vec::with_capacity(2);
        let viewport = self.viewport.take();
        if let Some(child_window) = self.child_window.take() {
            if Some(child_window) != viewport {
                owned.push(child_window);
            }
        }
        owned.extend(viewport);
        self.assigned = false;
        self.drag = DragState::Idle;
        self.visible = Visibility::default();
        owned
    }
}
