use super::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
    pub reverse: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
            reverse: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

/// Visual attributes applied to the cells a draw call touches.
///
/// Unset colors leave whatever the cell already had.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pen {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub style: TextStyle,
}

impl Pen {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            style: TextStyle::new(),
        }
    }

    pub const fn fg(mut self, fg: Rgb) -> Self {
        self.fg = Some(fg);
        self
    }

    pub const fn bg(mut self, bg: Rgb) -> Self {
        self.bg = Some(bg);
        self
    }

    pub const fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub const fn reverse(mut self) -> Self {
        self.style.reverse = true;
        self
    }
}
