//! Scrollbar appearance.
//!
//! Looked up once by string key when a scroll box is built, so drawing never
//! consults a shared style table.

use std::collections::HashMap;

use tuiwin::text::display_width;
use tuiwin::{Color, Pen, Rgb};

use crate::error::ConfigError;
use crate::extent::Axis;

/// String-keyed style lookup, typically backed by a theme file.
pub trait StyleSource {
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl StyleSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl StyleSource for HashMap<&str, &str> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).copied()
    }
}

/// A source that defines nothing; every key falls back to its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStyle;

impl StyleSource for NoStyle {
    fn lookup(&self, _key: &str) -> Option<&str> {
        None
    }
}

/// Pens and glyphs for drawing scrollbars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollBoxStyle {
    /// Track cells and the corner cell.
    pub gutter: Pen,
    /// Thumb cells.
    pub thumb: Pen,
    /// Arrow cells.
    pub arrow: Pen,
    pub arrow_up: char,
    pub arrow_down: char,
    pub arrow_left: char,
    pub arrow_right: char,
}

impl Default for ScrollBoxStyle {
    fn default() -> Self {
        let blue = Color::BLUE.to_rgb();
        Self {
            gutter: Pen::new().fg(blue),
            thumb: Pen::new().bg(blue),
            arrow: Pen::new().reverse(),
            arrow_up: '▴',
            arrow_down: '▾',
            arrow_left: '◂',
            arrow_right: '▸',
        }
    }
}

impl ScrollBoxStyle {
    /// Resolve every style key against `source`, falling back to the
    /// defaults for keys it does not define.
    ///
    /// Keys: `scrollbar.fg`, `scrollbar.bg`, `scrollmark.bg`, `arrow.fg`,
    /// `arrow.rv`, `arrow_up`, `arrow_down`, `arrow_left`, `arrow_right`.
    pub fn resolve(source: &dyn StyleSource) -> Result<Self, ConfigError> {
        let mut style = Self::default();

        if let Some(fg) = color(source, "scrollbar.fg")? {
            style.gutter.fg = Some(fg);
        }
        if let Some(bg) = color(source, "scrollbar.bg")? {
            style.gutter.bg = Some(bg);
        }
        if let Some(bg) = color(source, "scrollmark.bg")? {
            style.thumb.bg = Some(bg);
        }
        if let Some(fg) = color(source, "arrow.fg")? {
            style.arrow.fg = Some(fg);
        }
        if let Some(rv) = flag(source, "arrow.rv")? {
            style.arrow.style.reverse = rv;
        }

        style.arrow_up = glyph(source, "arrow_up")?.unwrap_or(style.arrow_up);
        style.arrow_down = glyph(source, "arrow_down")?.unwrap_or(style.arrow_down);
        style.arrow_left = glyph(source, "arrow_left")?.unwrap_or(style.arrow_left);
        style.arrow_right = glyph(source, "arrow_right")?.unwrap_or(style.arrow_right);

        Ok(style)
    }

    /// Arrow glyph at the start (`decrement`) or end of an axis's bar.
    pub fn arrow_glyph(&self, axis: Axis, decrement: bool) -> char {
        match (axis, decrement) {
            (Axis::Vertical, true) => self.arrow_up,
            (Axis::Vertical, false) => self.arrow_down,
            (Axis::Horizontal, true) => self.arrow_left,
            (Axis::Horizontal, false) => self.arrow_right,
        }
    }
}

fn color(source: &dyn StyleSource, key: &str) -> Result<Option<Rgb>, ConfigError> {
    let Some(value) = source.lookup(key) else {
        return Ok(None);
    };
    value
        .parse::<Color>()
        .map(|c| Some(c.to_rgb()))
        .map_err(|_| ConfigError::invalid_style(key, value))
}

fn flag(source: &dyn StyleSource, key: &str) -> Result<Option<bool>, ConfigError> {
    match source.lookup(key).map(str::trim) {
        None => Ok(None),
        Some("1" | "true" | "yes") => Ok(Some(true)),
        Some("0" | "false" | "no") => Ok(Some(false)),
        Some(other) => Err(ConfigError::invalid_style(key, other)),
    }
}

fn glyph(source: &dyn StyleSource, key: &str) -> Result<Option<char>, ConfigError> {
    let Some(value) = source.lookup(key) else {
        return Ok(None);
    };
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if display_width(value) == 1 => Ok(Some(ch)),
        _ => Err(ConfigError::invalid_style(key, value)),
    }
}
