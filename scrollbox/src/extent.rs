//! Per-axis scroll state.
//!
//! An [`Extent`] tracks how much of one axis is visible (`viewport`), how
//! large the content is (`total`), and where the visible part starts
//! (`start`). It keeps `0 <= start <= total - viewport` and `total >=
//! viewport` after every operation, clamping instead of rejecting.
//!
//! Extents live behind `Rc` and use interior mutability so a container and a
//! self-scrolling child can hold the same handle. Changes are reported to the
//! owning container through a weak [`ExtentObserver`] reference.

use std::cell::Cell;
use std::fmt;
use std::rc::Weak;

use log::trace;

/// Which scroll axis an extent, scrollbar or event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => f.write_str("vertical"),
            Self::Horizontal => f.write_str("horizontal"),
        }
    }
}

/// Receives change notifications from the extents it owns.
///
/// Called synchronously, from inside the mutating call.
pub trait ExtentObserver {
    /// `start` moved by `delta` to `start`.
    fn extent_scrolled(&self, axis: Axis, delta: i32, start: i32);

    /// The declared content size changed through [`Extent::set_total`].
    fn extent_total_changed(&self, axis: Axis);
}

/// Stand-in observer type for extents created without an owner.
struct Unobserved;

impl ExtentObserver for Unobserved {
    fn extent_scrolled(&self, _axis: Axis, _delta: i32, _start: i32) {}
    fn extent_total_changed(&self, _axis: Axis) {}
}

/// Scroll state of one axis.
pub struct Extent {
    axis: Axis,
    viewport: Cell<i32>,
    real_total: Cell<i32>,
    start: Cell<i32>,
    owner: Weak<dyn ExtentObserver>,
}

impl fmt::Debug for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extent")
            .field("axis", &self.axis)
            .field("viewport", &self.viewport.get())
            .field("total", &self.total())
            .field("start", &self.start.get())
            .finish()
    }
}

impl Extent {
    /// Create an extent reporting to `owner`. The owner is not kept alive.
    pub fn new(axis: Axis, owner: Weak<dyn ExtentObserver>) -> Self {
        Self {
            axis,
            viewport: Cell::new(0),
            real_total: Cell::new(0),
            start: Cell::new(0),
            owner,
        }
    }

    /// Create an extent nobody is notified about.
    pub fn detached(axis: Axis) -> Self {
        let owner: Weak<dyn ExtentObserver> = Weak::<Unobserved>::new();
        Self::new(axis, owner)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn viewport(&self) -> i32 {
        self.viewport.get()
    }

    /// Content size, never less than the viewport.
    pub fn total(&self) -> i32 {
        self.real_total.get().max(self.viewport.get())
    }

    /// Content size as last declared, before clamping up to the viewport.
    pub fn real_total(&self) -> i32 {
        self.real_total.get()
    }

    pub fn start(&self) -> i32 {
        self.start.get()
    }

    /// Largest valid `start`.
    pub fn limit(&self) -> i32 {
        self.total() - self.viewport.get()
    }

    /// Store new viewport and content sizes from a layout pass.
    ///
    /// If `start` no longer fits it is pulled back to the new limit without
    /// notifying the owner.
    pub fn set_viewport(&self, viewport: i32, total: i32) {
        self.viewport.set(viewport.max(0));
        self.real_total.set(total.max(0));
        self.clamp();
    }

    /// Declare the content size, as a self-scrolling child does.
    ///
    /// The owner is asked to lay out again since scrollbar visibility may
    /// depend on it.
    pub fn set_total(&self, total: i32) {
        let total = total.max(0);
        if total == self.real_total.get() {
            return;
        }
        self.real_total.set(total);
        self.clamp();
        if let Some(owner) = self.owner.upgrade() {
            owner.extent_total_changed(self.axis);
        }
    }

    /// Scroll by `delta` units. Returns whether `start` changed.
    pub fn scroll(&self, delta: i32) -> bool {
        self.scroll_to(self.start.get().saturating_add(delta))
    }

    /// Scroll so `target` is the first visible unit, clamped to `[0, limit]`.
    /// Returns whether `start` changed; the owner is only notified if it did.
    pub fn scroll_to(&self, target: i32) -> bool {
        let start = target.clamp(0, self.limit());
        let old = self.start.get();
        if start == old {
            return false;
        }

        self.start.set(start);
        let delta = start - old;
        trace!("{} extent scrolled by {} to {}", self.axis, delta, start);

        if let Some(owner) = self.owner.upgrade() {
            owner.extent_scrolled(self.axis, delta, start);
        }
        true
    }

    /// Map the content range onto a track of `track_length` cells beginning
    /// at `track_origin`.
    ///
    /// `total` must be non-zero.
    pub fn scrollbar_geometry(&self, track_origin: i32, track_length: i32) -> ScrollbarGeometry {
        let total = self.total();
        debug_assert!(total > 0, "scrollbar geometry needs a non-empty extent");
        let total = i64::from(total.max(1));
        let length = i64::from(track_length);

        let thumb_length = round_div(i64::from(self.viewport()) * length, total).max(1);
        let thumb_offset = round_div(i64::from(self.start()) * length, total);
        let thumb_start = track_origin + thumb_offset as i32;

        ScrollbarGeometry {
            track_start: track_origin,
            thumb_start,
            thumb_end: thumb_start + thumb_length as i32,
            track_end: track_origin + track_length,
        }
    }

    /// Content offset whose thumb would begin `cells` into a track of
    /// `track_length` cells. Not clamped.
    pub fn offset_for_track_cell(&self, cells: i32, track_length: i32) -> i32 {
        if track_length <= 0 {
            return 0;
        }
        round_div(
            i64::from(cells) * i64::from(self.total()),
            i64::from(track_length),
        ) as i32
    }

    fn clamp(&self) {
        let limit = self.limit();
        if self.start.get() > limit {
            self.start.set(limit);
        }
    }
}

/// `num / den` rounded half up. `den` must be positive.
fn round_div(num: i64, den: i64) -> i64 {
    (2 * num + den).div_euclid(2 * den)
}

/// Cell boundaries of a scrollbar: `[track_start, track_end)` is the track,
/// `[thumb_start, thumb_end)` the thumb inside it.
///
/// The decrement arrow sits just before the track and the increment arrow
/// at `track_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollbarGeometry {
    pub track_start: i32,
    pub thumb_start: i32,
    pub thumb_end: i32,
    pub track_end: i32,
}

/// What a cell along a scrollbar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarZone {
    DecrementArrow,
    TrackBefore,
    Thumb,
    TrackAfter,
    IncrementArrow,
}

impl ScrollbarGeometry {
    pub fn thumb_length(&self) -> i32 {
        self.thumb_end - self.thumb_start
    }

    /// The thumb as drawn, `[start, end)`. Rounding can push a short thumb
    /// past the track end near the limit; it is moved back inside the track
    /// so at least one cell stays visible.
    pub fn visible_thumb(&self) -> (i32, i32) {
        if self.thumb_end <= self.track_end {
            return (self.thumb_start, self.thumb_end);
        }
        let length = self
            .thumb_length()
            .min(self.track_end - self.track_start)
            .max(0);
        ((self.track_end - length).max(self.track_start), self.track_end)
    }

    /// Classify a position along the bar, arrows included, against the
    /// thumb as drawn.
    pub fn zone(&self, pos: i32) -> Option<BarZone> {
        let (thumb_start, thumb_end) = self.visible_thumb();
        if pos < self.track_start - 1 || pos > self.track_end {
            None
        } else if pos == self.track_start - 1 {
            Some(BarZone::DecrementArrow)
        } else if pos == self.track_end {
            Some(BarZone::IncrementArrow)
        } else if pos < thumb_start {
            Some(BarZone::TrackBefore)
        } else if pos < thumb_end {
            Some(BarZone::Thumb)
        } else {
            Some(BarZone::TrackAfter)
        }
    }
}
