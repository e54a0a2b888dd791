use super::Cell;
use crate::rect::Rect;
use crate::text::char_width;
use crate::types::Pen;

/// A grid of cells addressed by `(line, col)`.
///
/// Writes outside the grid are dropped, so callers can draw with
/// coordinates that have been clipped away.
#[derive(Debug, Clone)]
pub struct Buffer {
    lines: i32,
    cols: i32,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(lines: i32, cols: i32) -> Self {
        let lines = lines.max(0);
        let cols = cols.max(0);
        let cells = vec![Cell::default(); (lines as usize) * (cols as usize)];
        Self { lines, cols, cells }
    }

    pub fn lines(&self) -> i32 {
        self.lines
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn get(&self, line: i32, col: i32) -> Option<&Cell> {
        self.index(line, col).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, line: i32, col: i32) -> Option<&mut Cell> {
        self.index(line, col).map(|idx| &mut self.cells[idx])
    }

    pub fn set(&mut self, line: i32, col: i32, cell: Cell) {
        if let Some(idx) = self.index(line, col) {
            self.cells[idx] = cell;
        }
    }

    /// Resize, keeping the overlapping top-left content.
    pub fn resize(&mut self, lines: i32, cols: i32) {
        if lines == self.lines && cols == self.cols {
            return;
        }
        let mut next = Buffer::new(lines, cols);
        for line in 0..self.lines.min(next.lines) {
            for col in 0..self.cols.min(next.cols) {
                if let Some(cell) = self.get(line, col) {
                    next.set(line, col, *cell);
                }
            }
        }
        *self = next;
    }

    /// Write a string starting at `(line, col)`. Returns the number of
    /// columns consumed.
    pub fn put_str(&mut self, line: i32, col: i32, text: &str, pen: &Pen) -> i32 {
        let mut x = col;
        for ch in text.chars() {
            let width = char_width(ch) as i32;
            if width == 0 {
                continue;
            }
            if let Some(cell) = self.get_mut(line, x) {
                cell.char = ch;
                cell.wide_continuation = false;
                cell.apply(pen);
            }
            for cont in 1..width {
                if let Some(cell) = self.get_mut(line, x + cont) {
                    cell.char = ' ';
                    cell.wide_continuation = true;
                    cell.apply(pen);
                }
            }
            x += width;
        }
        x - col
    }

    /// Paint `ch` into `count` cells along a line.
    pub fn fill(&mut self, line: i32, col: i32, count: i32, ch: char, pen: &Pen) {
        for x in col..col + count.max(0) {
            if let Some(cell) = self.get_mut(line, x) {
                cell.char = ch;
                cell.wide_continuation = false;
                cell.apply(pen);
            }
        }
    }

    /// Copy the `src_area` part of `src` into this buffer, with the source
    /// origin landing at `(top, left)`.
    pub fn blit(&mut self, src: &Buffer, src_area: Rect, top: i32, left: i32) {
        for line in src_area.top..src_area.bottom() {
            for col in src_area.left..src_area.right() {
                if let Some(cell) = src.get(line, col) {
                    self.set(top + line, left + col, *cell);
                }
            }
        }
    }

    fn index(&self, line: i32, col: i32) -> Option<usize> {
        if line >= 0 && line < self.lines && col >= 0 && col < self.cols {
            Some((line as usize) * (self.cols as usize) + (col as usize))
        } else {
            None
        }
    }

    /// Cells that differ from `other`, as `(line, col, cell)`.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (i32, i32, &'a Cell)> {
        let cols = self.cols.max(1) as usize;
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| ((i / cols) as i32, (i % cols) as i32, cell))
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// The characters of one line, for inspection in tests and logs.
    pub fn line_text(&self, line: i32) -> String {
        (0..self.cols)
            .filter_map(|col| self.get(line, col))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }
}
