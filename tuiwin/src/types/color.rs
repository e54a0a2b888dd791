use std::str::FromStr;

use thiserror::Error;

/// A color as written in a style table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Error returned when a color string cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color '{0}'")]
pub struct ParseColorError(pub String);

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const RED: Self = Self::rgb(205, 49, 49);
    pub const GREEN: Self = Self::rgb(13, 188, 121);
    pub const YELLOW: Self = Self::rgb(229, 229, 16);
    pub const BLUE: Self = Self::rgb(36, 114, 200);
    pub const MAGENTA: Self = Self::rgb(188, 63, 188);
    pub const CYAN: Self = Self::rgb(17, 168, 205);
    pub const WHITE: Self = Self::rgb(229, 229, 229);
    pub const GRAY: Self = Self::rgb(118, 118, 118);

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Look up one of the basic terminal color names.
    pub fn named(name: &str) -> Option<Self> {
        let color = match name {
            "black" => Self::BLACK,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "yellow" => Self::YELLOW,
            "blue" => Self::BLUE,
            "magenta" => Self::MAGENTA,
            "cyan" => Self::CYAN,
            "white" => Self::WHITE,
            "gray" | "grey" => Self::GRAY,
            _ => return None,
        };
        Some(color)
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

/// Accepts a color name (`blue`), a hex triplet (`#2472c8`),
/// `rgb(r, g, b)` or `oklch(l, c, h)`.
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseColorError(s.to_string());

        if let Some(color) = Self::named(&s.to_ascii_lowercase()) {
            return Ok(color);
        }

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 {
                return Err(err());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
            return Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        if let Some(args) = function_args(s, "rgb") {
            let [r, g, b] = parse_three::<u8>(args).ok_or_else(err)?;
            return Ok(Self::rgb(r, g, b));
        }

        if let Some(args) = function_args(s, "oklch") {
            let [l, c, h] = parse_three::<f32>(args).ok_or_else(err)?;
            return Ok(Self::oklch(l, c, h));
        }

        Err(err())
    }
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_three<T: FromStr>(args: &str) -> Option<[T; 3]> {
    let mut parts = args.split(',').map(|p| p.trim().parse::<T>());
    let a = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    let c = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some([a, b, c])
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
