//! The windowing system a scroll box lives in.

use tuiwin::{LineSpan, LineStyle, Pen, Rect, WindowId, WindowTree};

/// Sub-region management and drawing, as provided by the host.
///
/// Coordinates are relative to the window being addressed. Operations on
/// closed windows are ignored.
pub trait Host {
    /// Create a sub-region of `parent`.
    fn allocate_subregion(&mut self, parent: WindowId, geometry: Rect) -> Option<WindowId>;

    /// Move and resize a sub-region in place.
    fn resize_subregion(&mut self, window: WindowId, geometry: Rect);

    /// Move a sub-region without resizing it.
    fn reposition_subregion(&mut self, window: WindowId, top: i32, left: i32);

    fn close_subregion(&mut self, window: WindowId);

    /// `(lines, cols)` of a window, or `None` if it is not open.
    fn window_size(&self, window: WindowId) -> Option<(i32, i32)>;

    fn draw_text(&mut self, window: WindowId, line: i32, col: i32, text: &str, pen: &Pen);

    fn fill_cells(&mut self, window: WindowId, line: i32, col: i32, count: i32, pen: &Pen);

    fn draw_line(&mut self, window: WindowId, span: LineSpan, pen: &Pen, style: LineStyle);

    /// Ask for a window to be redrawn. Requests may be coalesced.
    fn request_redraw(&mut self, window: WindowId);
}

impl Host for WindowTree {
    fn allocate_subregion(&mut self, parent: WindowId, geometry: Rect) -> Option<WindowId> {
        self.make_sub(parent, geometry)
    }

    fn resize_subregion(&mut self, window: WindowId, geometry: Rect) {
        self.change_geometry(window, geometry);
    }

    fn reposition_subregion(&mut self, window: WindowId, top: i32, left: i32) {
        self.reposition(window, top, left);
    }

    fn close_subregion(&mut self, window: WindowId) {
        self.close(window);
    }

    fn window_size(&self, window: WindowId) -> Option<(i32, i32)> {
        self.geometry(window).map(|rect| (rect.lines, rect.cols))
    }

    fn draw_text(&mut self, window: WindowId, line: i32, col: i32, text: &str, pen: &Pen) {
        WindowTree::draw_text(self, window, line, col, text, pen);
    }

    fn fill_cells(&mut self, window: WindowId, line: i32, col: i32, count: i32, pen: &Pen) {
        WindowTree::fill_cells(self, window, line, col, count, pen);
    }

    fn draw_line(&mut self, window: WindowId, span: LineSpan, pen: &Pen, style: LineStyle) {
        WindowTree::draw_line(self, window, span, pen, style);
    }

    fn request_redraw(&mut self, window: WindowId) {
        self.expose(window);
    }
}
