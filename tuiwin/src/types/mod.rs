mod color;
mod pen;

pub use color::{Color, ParseColorError, Rgb};
pub use pen::{Pen, TextStyle};
