//! Terminal windowing: cell buffers, nested clipped windows, and a
//! crossterm-backed screen.

pub mod buffer;
pub mod event;
pub mod rect;
pub mod terminal;
pub mod text;
pub mod types;
pub mod window;

pub use buffer::{Buffer, Cell};
pub use event::{Event, EventTranslator, Key, Modifiers, MouseButton, WheelDirection};
pub use rect::Rect;
pub use terminal::Terminal;
pub use types::*;
pub use window::{LineSpan, LineStyle, WindowId, WindowTree};
