//! Geometry derived from the container size, the content size and the
//! extents. Everything here is pure; the scroll box applies the results.

use log::{debug, trace, warn};
use tuiwin::Rect;

use super::Inner;
use super::state::Visibility;
use crate::child::ChildHandle;
use crate::config::AxisMode;
use crate::extent::{Axis, Extent};
use crate::host::Host;

/// Inputs of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInput {
    /// Size of the container's window.
    pub lines: i32,
    pub cols: i32,
    /// Size of the content.
    pub content_lines: i32,
    pub content_cols: i32,
    pub vertical: AxisMode,
    pub horizontal: AxisMode,
}

/// Decide which scrollbars to show.
///
/// A bar costs a line or column of the other axis, so content that exactly
/// fits one axis overflows it once the other axis needs a bar. That is
/// applied once to both axes from the uncorrected values; it is not iterated.
/// A disabled axis has no bar, so its spare never drives the correction.
pub fn scrollbar_visibility(input: &LayoutInput) -> Visibility {
    let v_spare = spare(input.vertical, input.content_lines - input.lines);
    let h_spare = spare(input.horizontal, input.content_cols - input.cols);

    let v_corrected = if v_spare == 0 && h_spare > 0 { 1 } else { v_spare };
    let h_corrected = if h_spare == 0 && v_spare > 0 { 1 } else { h_spare };

    Visibility {
        vertical: shown(input.vertical, v_corrected),
        horizontal: shown(input.horizontal, h_corrected),
    }
}

fn spare(mode: AxisMode, spare: i32) -> i32 {
    if mode.is_enabled() {
        spare
    } else {
        -1
    }
}

fn shown(mode: AxisMode, spare: i32) -> bool {
    mode.is_enabled() && (!mode.is_on_demand() || spare > 0)
}

/// The content area: the whole window minus the gutters of visible bars.
pub fn viewport_rect(lines: i32, cols: i32, visible: Visibility) -> Rect {
    Rect::new(
        0,
        0,
        (lines - i32::from(visible.horizontal)).max(0),
        (cols - i32::from(visible.vertical)).max(0),
    )
}

/// Window of a framed child, relative to the viewport.
///
/// A scrolled axis is as long as its extent's total and starts `start` cells
/// before the viewport; an unscrolled axis starts at zero and covers at
/// least the viewport.
pub fn framed_child_rect(
    viewport: Rect,
    content_lines: i32,
    content_cols: i32,
    vertical: Option<&Extent>,
    horizontal: Option<&Extent>,
) -> Rect {
    let (top, lines) = match vertical {
        Some(extent) => (-extent.start(), extent.total()),
        None => (0, content_lines.max(viewport.lines)),
    };
    let (left, cols) = match horizontal {
        Some(extent) => (-extent.start(), extent.total()),
        None => (0, content_cols.max(viewport.cols)),
    };
    Rect::new(top, left, lines, cols)
}

/// Where the track of `axis` runs along its gutter, as `(origin, length)`.
///
/// The cell before the origin holds the decrement arrow and the cell at
/// `origin + length` the increment arrow. The corner shared by both bars
/// belongs to neither.
pub fn track_for(axis: Axis, lines: i32, cols: i32, visible: Visibility) -> (i32, i32) {
    match axis {
        Axis::Vertical => (1, lines - 2 - i32::from(visible.horizontal)),
        Axis::Horizontal => (1, cols - 2 - i32::from(visible.vertical)),
    }
}

impl<H: Host + 'static> Inner<H> {
    /// One layout pass. Without a window or a child there is nothing to do.
    pub(super) fn layout_pass(&self) {
        let (window, child) = {
            let state = self.state.borrow();
            (state.window, state.child.clone())
        };
        let (Some(window), Some(child)) = (window, child) else {
            trace!("layout skipped, no window or no child");
            return;
        };
        let Some((lines, cols)) = self.window_size(window) else {
            warn!("scroll box window {:?} is not open", window);
            return;
        };

        let (mut content_lines, mut content_cols) = self.declared_size().unwrap_or_default();
        if child.supports_self_scrolling() {
            if let Some(vertical) = &self.vertical {
                content_lines = vertical.real_total();
            }
            if let Some(horizontal) = &self.horizontal {
                content_cols = horizontal.real_total();
            }
        }

        let visible = scrollbar_visibility(&LayoutInput {
            lines,
            cols,
            content_lines,
            content_cols,
            vertical: self.options.vertical,
            horizontal: self.options.horizontal,
        });
        let viewport = viewport_rect(lines, cols, visible);
        debug!(
            "layout {}x{} content {}x{}: bars {:?}, viewport {:?}",
            lines, cols, content_lines, content_cols, visible, viewport
        );

        if let Some(vertical) = &self.vertical {
            vertical.set_viewport(viewport.lines, content_lines);
        }
        if let Some(horizontal) = &self.horizontal {
            horizontal.set_viewport(viewport.cols, content_cols);
        }

        let existing = self.state.borrow().viewport;
        let viewport_window = self
            .with_host(|host| match existing {
                Some(id) => {
                    host.resize_subregion(id, viewport);
                    Some(id)
                }
                None => host.allocate_subregion(window, viewport),
            })
            .flatten();
        let Some(viewport_window) = viewport_window else {
            warn!("could not allocate a viewport in {:?}", window);
            return;
        };

        let child_window = {
            let mut state = self.state.borrow_mut();
            state.viewport = Some(viewport_window);
            state.visible = visible;
            state.child_window
        };

        let child_window = match &child {
            ChildHandle::SelfScrolling(_) => Some(viewport_window),
            ChildHandle::Framed(_) => {
                let rect = framed_child_rect(
                    viewport,
                    content_lines,
                    content_cols,
                    self.vertical.as_deref(),
                    self.horizontal.as_deref(),
                );
                trace!("framed child at {:?}", rect);
                self.with_host(|host| match child_window {
                    Some(id) => {
                        host.resize_subregion(id, rect);
                        Some(id)
                    }
                    None => host.allocate_subregion(viewport_window, rect),
                })
                .flatten()
            }
        };

        let needs_assignment = {
            let mut state = self.state.borrow_mut();
            state.child_window = child_window;
            !state.assigned && child_window.is_some()
        };
        if needs_assignment {
            if child.assign_window(child_window) {
                self.state.borrow_mut().assigned = true;
            } else {
                trace!("child busy, window assignment retried on next layout");
            }
        }

        self.with_host(|host| host.request_redraw(window));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(content_lines: i32, content_cols: i32, vertical: AxisMode, horizontal: AxisMode) -> LayoutInput {
        LayoutInput {
            lines: 25,
            cols: 80,
            content_lines,
            content_cols,
            vertical,
            horizontal,
        }
    }

    #[test]
    fn test_on_demand_vertical_only() {
        let vis = scrollbar_visibility(&input(100, 20, AxisMode::OnDemand, AxisMode::Disabled));
        assert!(vis.vertical);
        assert!(!vis.horizontal);
    }

    #[test]
    fn test_on_demand_hidden_when_content_fits() {
        let vis = scrollbar_visibility(&input(10, 20, AxisMode::OnDemand, AxisMode::OnDemand));
        assert_eq!(vis, Visibility::default());
    }

    #[test]
    fn test_enabled_always_shown() {
        let vis = scrollbar_visibility(&input(1, 1, AxisMode::Enabled, AxisMode::Enabled));
        assert!(vis.vertical && vis.horizontal);
    }

    #[test]
    fn test_exact_fit_overflows_when_other_bar_appears() {
        // Exactly 25 lines, but 81 columns need a horizontal bar, which eats a line.
        let vis = scrollbar_visibility(&input(25, 81, AxisMode::OnDemand, AxisMode::OnDemand));
        assert!(vis.vertical);
        assert!(vis.horizontal);

        let vis = scrollbar_visibility(&input(26, 80, AxisMode::OnDemand, AxisMode::OnDemand));
        assert!(vis.vertical);
        assert!(vis.horizontal);
    }

    #[test]
    fn test_disabled_axis_never_corrects() {
        // 100 columns overflow, but there is no horizontal bar to eat a line.
        let vis = scrollbar_visibility(&input(25, 100, AxisMode::OnDemand, AxisMode::Disabled));
        assert_eq!(vis, Visibility::default());

        let vis = scrollbar_visibility(&input(100, 80, AxisMode::Disabled, AxisMode::OnDemand));
        assert_eq!(vis, Visibility::default());
    }

    #[test]
    fn test_correction_is_not_iterated() {
        // Both exactly fit: neither correction fires.
        let vis = scrollbar_visibility(&input(25, 80, AxisMode::OnDemand, AxisMode::OnDemand));
        assert_eq!(vis, Visibility::default());
    }

    #[test]
    fn test_viewport_rect() {
        let vis = Visibility {
            vertical: true,
            horizontal: false,
        };
        assert_eq!(viewport_rect(25, 80, vis), Rect::new(0, 0, 25, 79));
        assert_eq!(viewport_rect(0, 0, vis), Rect::new(0, 0, 0, 0));
    }

    #[test]
    fn test_framed_child_rect() {
        let vertical = Extent::detached(Axis::Vertical);
        vertical.set_viewport(25, 100);
        vertical.scroll_to(30);

        let rect = framed_child_rect(Rect::new(0, 0, 25, 79), 100, 20, Some(&vertical), None);
        assert_eq!(rect, Rect::new(-30, 0, 100, 79));

        let rect = framed_child_rect(Rect::new(0, 0, 25, 79), 100, 120, Some(&vertical), None);
        assert_eq!(rect.cols, 120);
    }

    #[test]
    fn test_track_for() {
        let both = Visibility {
            vertical: true,
            horizontal: true,
        };
        assert_eq!(track_for(Axis::Vertical, 25, 80, both), (1, 22));
        assert_eq!(track_for(Axis::Horizontal, 25, 80, both), (1, 77));
        assert_eq!(track_for(Axis::Vertical, 25, 80, Visibility::default()), (1, 23));
    }
}
