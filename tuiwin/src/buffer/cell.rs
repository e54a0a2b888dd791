use crate::types::{Pen, Rgb, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(229, 229, 229),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

impl Cell {
    pub fn new(char: char) -> Self {
        Self {
            char,
            ..Default::default()
        }
    }

    /// Apply a pen on top of this cell's current attributes.
    pub fn apply(&mut self, pen: &Pen) {
        if let Some(fg) = pen.fg {
            self.fg = fg;
        }
        if let Some(bg) = pen.bg {
            self.bg = bg;
        }
        self.style = pen.style;
    }

    /// Colors as they should reach the terminal, with reverse video resolved.
    pub fn effective_colors(&self) -> (Rgb, Rgb) {
        if self.style.reverse {
            (self.bg, self.fg)
        } else {
            (self.fg, self.bg)
        }
    }
}
