//! A scrollable viewport container for terminal UIs.
//!
//! A [`ScrollBox`] shows part of a larger child through a viewport window,
//! draws scrollbars in a one-cell gutter, and turns wheel, click, drag and
//! key events into scroll position changes. Scroll state per axis lives in
//! an [`Extent`].
//!
//! Children come in two kinds, chosen when attached through
//! [`ChildHandle`]:
//!
//! - framed children get a window as large as their content, which the
//!   scroll box slides behind the viewport;
//! - self-scrolling children get the viewport itself and the extents, and
//!   draw the visible part themselves.
//!
//! The windowing system is abstracted by [`Host`], implemented for
//! [`tuiwin::WindowTree`].

pub mod child;
pub mod config;
pub mod error;
pub mod extent;
pub mod host;
pub mod keybinds;
pub mod scroll_box;
pub mod style;

pub use child::{Child, ChildHandle, SelfScrollingChild};
pub use config::{AxisMode, ScrollBoxOptions};
pub use error::ConfigError;
pub use extent::{Axis, BarZone, Extent, ExtentObserver, ScrollbarGeometry};
pub use host::Host;
pub use keybinds::{KeyCombo, Keymap, ScrollAction, Step};
pub use scroll_box::{DragState, ScrollBox, ScrollBoxConfig, Visibility};
pub use style::{NoStyle, ScrollBoxStyle, StyleSource};
