//! A tree of nested, clipped sub-regions ("windows").
//!
//! Every window owns a cell buffer the size of its geometry. Geometry is
//! relative to the parent and may extend past the parent on any side; the
//! parent clips it when the tree is composed onto the screen.

use std::collections::HashMap;

use log::{trace, warn};

use crate::buffer::Buffer;
use crate::rect::Rect;
use crate::types::Pen;

/// Handle to a window in a [`WindowTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u32);

impl WindowId {
    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// Box-drawing weight for [`WindowTree::draw_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Single,
    Double,
    Thick,
}

impl LineStyle {
    pub const fn horizontal(&self) -> char {
        match self {
            Self::Single => '─',
            Self::Double => '═',
            Self::Thick => '━',
        }
    }

    pub const fn vertical(&self) -> char {
        match self {
            Self::Single => '│',
            Self::Double => '║',
            Self::Thick => '┃',
        }
    }
}

/// A straight run of cells. Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSpan {
    Horizontal { line: i32, start: i32, end: i32 },
    Vertical { col: i32, start: i32, end: i32 },
}

#[derive(Debug)]
struct Window {
    parent: Option<WindowId>,
    geometry: Rect,
    buffer: Buffer,
    children: Vec<WindowId>,
}

#[derive(Debug)]
pub struct WindowTree {
    windows: HashMap<WindowId, Window>,
    root: WindowId,
    next_id: u32,
    exposed: Vec<WindowId>,
}

impl WindowTree {
    /// Create a tree whose root window covers a `lines` x `cols` screen.
    pub fn new(lines: i32, cols: i32) -> Self {
        let root = WindowId(0);
        let mut windows = HashMap::new();
        windows.insert(
            root,
            Window {
                parent: None,
                geometry: Rect::from_size(lines, cols),
                buffer: Buffer::new(lines, cols),
                children: Vec::new(),
            },
        );
        Self {
            windows,
            root,
            next_id: 1,
            exposed: vec![root],
        }
    }

    pub fn root(&self) -> WindowId {
        self.root
    }

    pub fn is_open(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    /// Geometry relative to the parent window.
    pub fn geometry(&self, id: WindowId) -> Option<Rect> {
        self.windows.get(&id).map(|w| w.geometry)
    }

    /// Geometry relative to the screen.
    pub fn absolute_geometry(&self, id: WindowId) -> Option<Rect> {
        let window = self.windows.get(&id)?;
        match window.parent {
            Some(parent) => {
                let origin = self.absolute_geometry(parent)?;
                Some(window.geometry.translate(origin.top, origin.left))
            }
            None => Some(window.geometry),
        }
    }

    pub fn parent(&self, id: WindowId) -> Option<WindowId> {
        self.windows.get(&id).and_then(|w| w.parent)
    }

    pub fn children(&self, id: WindowId) -> &[WindowId] {
        self.windows
            .get(&id)
            .map(|w| w.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn buffer(&self, id: WindowId) -> Option<&Buffer> {
        self.windows.get(&id).map(|w| &w.buffer)
    }

    /// Create a sub-window of `parent`. Returns `None` if `parent` is closed.
    pub fn make_sub(&mut self, parent: WindowId, geometry: Rect) -> Option<WindowId> {
        let Some(parent_window) = self.windows.get_mut(&parent) else {
            warn!("make_sub on unknown window {:?}", parent);
            return None;
        };

        let id = WindowId(self.next_id);
        self.next_id += 1;
        parent_window.children.push(id);

        self.windows.insert(
            id,
            Window {
                parent: Some(parent),
                geometry,
                buffer: Buffer::new(geometry.lines, geometry.cols),
                children: Vec::new(),
            },
        );
        trace!("window {:?} created under {:?} at {:?}", id, parent, geometry);
        self.expose(parent);
        Some(id)
    }

    /// Move and resize a window in one step.
    pub fn change_geometry(&mut self, id: WindowId, geometry: Rect) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        if window.geometry == geometry {
            return true;
        }
        window.geometry = geometry;
        window.buffer.resize(geometry.lines, geometry.cols);
        let parent = window.parent.unwrap_or(id);
        self.expose(parent);
        true
    }

    pub fn reposition(&mut self, id: WindowId, top: i32, left: i32) -> bool {
        let Some(geometry) = self.geometry(id) else {
            return false;
        };
        self.change_geometry(
            id,
            Rect::new(top, left, geometry.lines, geometry.cols),
        )
    }

    /// Close a window and everything below it.
    pub fn close(&mut self, id: WindowId) -> bool {
        if id == self.root {
            warn!("refusing to close the root window");
            return false;
        }
        let Some(window) = self.windows.remove(&id) else {
            return false;
        };
        if let Some(parent) = window.parent {
            if let Some(parent_window) = self.windows.get_mut(&parent) {
                parent_window.children.retain(|child| *child != id);
                self.expose(parent);
            }
        }
        for child in window.children {
            self.close(child);
        }
        self.exposed.retain(|exposed| *exposed != id);
        trace!("window {:?} closed", id);
        true
    }

    /// Resize the root window, normally after the terminal was resized.
    pub fn resize_root(&mut self, lines: i32, cols: i32) {
        let root = self.root;
        self.change_geometry(root, Rect::from_size(lines, cols));
        self.expose(root);
    }

    pub fn draw_text(&mut self, id: WindowId, line: i32, col: i32, text: &str, pen: &Pen) -> i32 {
        match self.windows.get_mut(&id) {
            Some(window) => window.buffer.put_str(line, col, text, pen),
            None => 0,
        }
    }

    /// Blank `count` cells with `pen`.
    pub fn fill_cells(&mut self, id: WindowId, line: i32, col: i32, count: i32, pen: &Pen) {
        self.fill_char(id, line, col, count, ' ', pen);
    }

    pub fn fill_char(&mut self, id: WindowId, line: i32, col: i32, count: i32, ch: char, pen: &Pen) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.buffer.fill(line, col, count, ch, pen);
        }
    }

    pub fn draw_line(&mut self, id: WindowId, span: LineSpan, pen: &Pen, style: LineStyle) {
        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };
        match span {
            LineSpan::Horizontal { line, start, end } => {
                window
                    .buffer
                    .fill(line, start, end - start + 1, style.horizontal(), pen);
            }
            LineSpan::Vertical { col, start, end } => {
                for line in start..=end {
                    window.buffer.fill(line, col, 1, style.vertical(), pen);
                }
            }
        }
    }

    /// Clear a window's own cells.
    pub fn clear(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.buffer.clear();
        }
    }

    /// Mark a window as needing a redraw. Repeated requests coalesce.
    pub fn expose(&mut self, id: WindowId) {
        if !self.exposed.contains(&id) {
            self.exposed.push(id);
        }
    }

    pub fn is_exposed(&self, id: WindowId) -> bool {
        self.exposed.contains(&id)
    }

    /// Take the pending redraw requests, oldest first.
    pub fn take_exposed(&mut self) -> Vec<WindowId> {
        std::mem::take(&mut self.exposed)
    }

    /// Paint every window onto a screen-sized buffer, children over parents,
    /// each clipped to its ancestors.
    pub fn compose(&self) -> Buffer {
        let Some(root) = self.windows.get(&self.root) else {
            return Buffer::new(0, 0);
        };
        let mut screen = Buffer::new(root.geometry.lines, root.geometry.cols);
        self.compose_window(self.root, Rect::from_size(0, 0), None, &mut screen);
        screen
    }

    fn compose_window(&self, id: WindowId, origin: Rect, clip: Option<Rect>, screen: &mut Buffer) {
        let Some(window) = self.windows.get(&id) else {
            return;
        };
        let absolute = window.geometry.translate(origin.top, origin.left);
        let visible = match clip {
            Some(clip) => absolute.intersect(&clip),
            None => Some(absolute),
        };
        let Some(visible) = visible else {
            return;
        };

        let local = visible.translate(-absolute.top, -absolute.left);
        screen.blit(&window.buffer, local, absolute.top, absolute.left);

        for child in &window.children {
            self.compose_window(*child, absolute, Some(visible), screen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_offset_is_clipped() {
        let mut tree = WindowTree::new(3, 10);
        let view = tree.make_sub(tree.root(), Rect::new(0, 0, 3, 9)).unwrap();
        let content = tree.make_sub(view, Rect::new(-2, 0, 10, 9)).unwrap();
        for line in 0..10 {
            tree.draw_text(content, line, 0, &format!("line {line}"), &Pen::new());
        }

        let screen = tree.compose();
        assert!(screen.line_text(0).starts_with("line 2"));
        assert!(screen.line_text(2).starts_with("line 4"));
    }

    #[test]
    fn test_close_removes_descendants() {
        let mut tree = WindowTree::new(5, 5);
        let a = tree.make_sub(tree.root(), Rect::new(0, 0, 5, 5)).unwrap();
        let b = tree.make_sub(a, Rect::new(0, 0, 2, 2)).unwrap();

        assert!(tree.close(a));
        assert!(!tree.is_open(a));
        assert!(!tree.is_open(b));
        assert!(tree.children(tree.root()).is_empty());
        assert!(!tree.close(tree.root()));
    }

    #[test]
    fn test_change_geometry_keeps_content() {
        let mut tree = WindowTree::new(5, 5);
        let a = tree.make_sub(tree.root(), Rect::new(0, 0, 2, 2)).unwrap();
        tree.draw_text(a, 0, 0, "ab", &Pen::new());
        tree.change_geometry(a, Rect::new(1, 1, 3, 3));

        assert_eq!(tree.buffer(a).unwrap().line_text(0), "ab ");
        assert_eq!(tree.absolute_geometry(a), Some(Rect::new(1, 1, 3, 3)));
    }

    #[test]
    fn test_draw_line_inclusive() {
        let mut tree = WindowTree::new(4, 4);
        let root = tree.root();
        tree.draw_line(
            root,
            LineSpan::Vertical { col: 3, start: 1, end: 2 },
            &Pen::new(),
            LineStyle::Double,
        );
        let buf = tree.buffer(root).unwrap();
        assert_eq!(buf.get(0, 3).unwrap().char, ' ');
        assert_eq!(buf.get(1, 3).unwrap().char, '║');
        assert_eq!(buf.get(2, 3).unwrap().char, '║');
        assert_eq!(buf.get(3, 3).unwrap().char, ' ');
    }

    #[test]
    fn test_expose_coalesces() {
        let mut tree = WindowTree::new(2, 2);
        let root = tree.root();
        tree.take_exposed();
        tree.expose(root);
        tree.expose(root);
        assert_eq!(tree.take_exposed(), vec![root]);
        assert!(tree.take_exposed().is_empty());
    }
}
