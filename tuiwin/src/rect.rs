/// A rectangle in cell coordinates.
///
/// `top` and `left` are signed: a sub-region may begin above or to the left
/// of its parent, in which case the parent clips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub top: i32,
    pub left: i32,
    pub lines: i32,
    pub cols: i32,
}

impl Rect {
    pub const fn new(top: i32, left: i32, lines: i32, cols: i32) -> Self {
        Self {
            top,
            left,
            lines,
            cols,
        }
    }

    pub const fn from_size(lines: i32, cols: i32) -> Self {
        Self {
            top: 0,
            left: 0,
            lines,
            cols,
        }
    }

    pub const fn bottom(&self) -> i32 {
        self.top + self.lines
    }

    pub const fn right(&self) -> i32 {
        self.left + self.cols
    }

    pub const fn is_empty(&self) -> bool {
        self.lines <= 0 || self.cols <= 0
    }

    pub const fn contains(&self, line: i32, col: i32) -> bool {
        line >= self.top && line < self.bottom() && col >= self.left && col < self.right()
    }

    /// Move the rectangle by the given amounts.
    pub const fn translate(self, lines: i32, cols: i32) -> Self {
        Self {
            top: self.top + lines,
            left: self.left + cols,
            ..self
        }
    }

    /// The overlapping area of two rectangles, or `None` if they are disjoint.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let top = self.top.max(other.top);
        let left = self.left.max(other.left);
        let bottom = self.bottom().min(other.bottom());
        let right = self.right().min(other.right());

        let rect = Rect::new(top, left, bottom - top, right - left);
        if rect.is_empty() {
            None
        } else {
            Some(rect)
        }
    }
}
