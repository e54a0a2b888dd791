//! The scroll box container.
//!
//! A [`ScrollBox`] owns up to two [`Extent`]s, a viewport window inside its
//! own window, and at most one child. Layout, input and rendering live in
//! the submodules; this module holds the shared state, the public surface
//! and the reaction to extent changes.

mod events;
mod layout;
mod render;
mod state;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, trace, warn};
use tuiwin::WindowId;

pub use layout::{LayoutInput, framed_child_rect, scrollbar_visibility, track_for, viewport_rect};
pub use state::{DragState, Visibility};

use self::state::State;
use crate::child::ChildHandle;
use crate::config::ScrollBoxOptions;
use crate::error::ConfigError;
use crate::extent::{Axis, Extent, ExtentObserver};
use crate::host::Host;
use crate::keybinds::Keymap;
use crate::style::{ScrollBoxStyle, StyleSource};

/// Layout requests raised during a pass are replayed at most this often.
const MAX_LAYOUT_PASSES: usize = 4;

/// Everything a scroll box is built from.
#[derive(Debug, Clone)]
pub struct ScrollBoxConfig {
    pub options: ScrollBoxOptions,
    pub style: ScrollBoxStyle,
    pub keymap: Keymap,
}

impl Default for ScrollBoxConfig {
    fn default() -> Self {
        Self {
            options: ScrollBoxOptions::default(),
            style: ScrollBoxStyle::default(),
            keymap: Keymap::standard(),
        }
    }
}

impl ScrollBoxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: ScrollBoxOptions) -> Self {
        self.options = options;
        self
    }

    pub fn style(mut self, style: ScrollBoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Build from `(key, value)` option pairs and a style source, with the
    /// standard key bindings.
    pub fn from_pairs<'a, I>(pairs: I, style: &dyn StyleSource) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Ok(Self {
            options: ScrollBoxOptions::from_pairs(pairs)?,
            style: ScrollBoxStyle::resolve(style)?,
            keymap: Keymap::standard(),
        })
    }
}

/// A scrollable viewport onto a single child.
///
/// The host is shared with the rest of the application and must not be
/// borrowed while calling into the scroll box.
pub struct ScrollBox<H: Host + 'static> {
    inner: Rc<Inner<H>>,
}

pub(crate) struct Inner<H: Host + 'static> {
    host: Rc<RefCell<H>>,
    options: ScrollBoxOptions,
    style: ScrollBoxStyle,
    keymap: Keymap,
    vertical: Option<Rc<Extent>>,
    horizontal: Option<Rc<Extent>>,
    state: RefCell<State>,
    layout_busy: Cell<bool>,
    relayout: Cell<bool>,
}

impl<H: Host + 'static> ScrollBox<H> {
    /// A scroll box with the default style and key bindings.
    pub fn new(host: Rc<RefCell<H>>, options: ScrollBoxOptions) -> Self {
        Self::build(host, ScrollBoxConfig::new().options(options))
    }

    /// A scroll box from a full configuration. Fails if the keymap names an
    /// unknown action.
    pub fn with_config(host: Rc<RefCell<H>>, config: ScrollBoxConfig) -> Result<Self, ConfigError> {
        config.keymap.validate()?;
        Ok(Self::build(host, config))
    }

    fn build(host: Rc<RefCell<H>>, config: ScrollBoxConfig) -> Self {
        let ScrollBoxConfig {
            options,
            style,
            keymap,
        } = config;

        let inner = Rc::new_cyclic(|weak: &Weak<Inner<H>>| {
            let owner: Weak<dyn ExtentObserver> = weak.clone();
            let extent = |axis: Axis| {
                options
                    .mode(axis)
                    .is_enabled()
                    .then(|| Rc::new(Extent::new(axis, owner.clone())))
            };
            let vertical = extent(Axis::Vertical);
            let horizontal = extent(Axis::Horizontal);
            Inner {
                host,
                vertical,
                horizontal,
                options,
                style,
                keymap,
                state: RefCell::new(State::default()),
                layout_busy: Cell::new(false),
                relayout: Cell::new(false),
            }
        });

        debug!(
            "scroll box created: vertical {:?}, horizontal {:?}",
            inner.options.vertical, inner.options.horizontal
        );
        Self { inner }
    }

    pub fn options(&self) -> &ScrollBoxOptions {
        &self.inner.options
    }

    pub fn style(&self) -> &ScrollBoxStyle {
        &self.inner.style
    }

    pub fn keymap(&self) -> &Keymap {
        &self.inner.keymap
    }

    /// Give the scroll box its window, or take it away with `None`.
    ///
    /// Any sub-windows from the previous window are closed and the child is
    /// told it has no window until the next layout.
    pub fn set_window(&self, window: Option<WindowId>) {
        self.inner.set_window(window);
    }

    pub fn window(&self) -> Option<WindowId> {
        self.inner.state.borrow().window
    }

    /// Attach a child, returning the previous one.
    pub fn set_child(&self, child: Option<ChildHandle>) -> Option<ChildHandle> {
        self.inner.set_child(child)
    }

    /// Detach the child.
    pub fn take_child(&self) -> Option<ChildHandle> {
        self.inner.set_child(None)
    }

    pub fn child(&self) -> Option<ChildHandle> {
        self.inner.state.borrow().child.clone()
    }

    /// Lay out again, e.g. after the window was resized.
    pub fn reshape(&self) {
        self.inner.reshape();
    }

    /// The child's declared size changed.
    pub fn child_resized(&self) {
        trace!("child resized");
        self.inner.reshape();
    }

    /// Scroll by the given amounts. Axes without an extent are skipped.
    /// Returns whether anything moved.
    pub fn scroll(&self, down: Option<i32>, right: Option<i32>) -> bool {
        let moved_down = match (down, &self.inner.vertical) {
            (Some(delta), Some(extent)) => extent.scroll(delta),
            _ => false,
        };
        let moved_right = match (right, &self.inner.horizontal) {
            (Some(delta), Some(extent)) => extent.scroll(delta),
            _ => false,
        };
        moved_down || moved_right
    }

    /// Scroll so `top`/`left` are the first visible line/column.
    pub fn scroll_to(&self, top: Option<i32>, left: Option<i32>) -> bool {
        let moved_top = match (top, &self.inner.vertical) {
            (Some(target), Some(extent)) => extent.scroll_to(target),
            _ => false,
        };
        let moved_left = match (left, &self.inner.horizontal) {
            (Some(target), Some(extent)) => extent.scroll_to(target),
            _ => false,
        };
        moved_top || moved_left
    }

    pub fn vertical_extent(&self) -> Option<Rc<Extent>> {
        self.inner.vertical.clone()
    }

    pub fn horizontal_extent(&self) -> Option<Rc<Extent>> {
        self.inner.horizontal.clone()
    }

    pub fn extent(&self, axis: Axis) -> Option<Rc<Extent>> {
        self.inner.extent(axis).cloned()
    }

    /// Lines the scroll box wants: the child's plus room for a horizontal
    /// bar.
    pub fn requested_lines(&self) -> i32 {
        match self.inner.declared_size() {
            Some((lines, _)) => lines + i32::from(self.inner.horizontal.is_some()),
            None => 0,
        }
    }

    /// Columns the scroll box wants: the child's plus room for a vertical
    /// bar.
    pub fn requested_cols(&self) -> i32 {
        match self.inner.declared_size() {
            Some((_, cols)) => cols + i32::from(self.inner.vertical.is_some()),
            None => 0,
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.inner.state.borrow().drag
    }

    /// Scrollbars shown by the last layout pass.
    pub fn scrollbar_visibility(&self) -> Visibility {
        self.inner.state.borrow().visible
    }

    /// The content area window.
    pub fn viewport_window(&self) -> Option<WindowId> {
        self.inner.state.borrow().viewport
    }

    /// The window handed to the child.
    pub fn child_window(&self) -> Option<WindowId> {
        self.inner.state.borrow().child_window
    }

    /// Route an input event with positions relative to the scroll box's
    /// window. Returns whether the event was consumed.
    pub fn handle_event(&self, event: &tuiwin::Event) -> bool {
        self.inner.handle_event(event)
    }

    /// Draw the scrollbars into the scroll box's window.
    pub fn render(&self) {
        self.inner.render();
    }
}

impl<H: Host + 'static> Drop for ScrollBox<H> {
    fn drop(&mut self) {
        let (owned, child, was_assigned) = match self.inner.state.try_borrow_mut() {
            Ok(mut state) => {
                let was_assigned = state.assigned;
                (state.release_windows(), state.child.take(), was_assigned)
            }
            Err(_) => return,
        };
        self.inner.with_host(|host| {
            for window in owned {
                host.close_subregion(window);
            }
        });

        let Some(child) = child else {
            return;
        };
        if was_assigned && !child.assign_window(None) {
            trace!("child busy, window not withdrawn on drop");
        }
        if !child.receive_extents(None, None) {
            trace!("child busy, extents not withdrawn on drop");
        }
    }
}

impl<H: Host + 'static> Inner<H> {
    fn extent(&self, axis: Axis) -> Option<&Rc<Extent>> {
        match axis {
            Axis::Vertical => self.vertical.as_ref(),
            Axis::Horizontal => self.horizontal.as_ref(),
        }
    }

    /// Run `f` on the host unless something else is borrowing it.
    fn with_host<R>(&self, f: impl FnOnce(&mut H) -> R) -> Option<R> {
        match self.host.try_borrow_mut() {
            Ok(mut host) => Some(f(&mut host)),
            Err(_) => {
                warn!("host is busy, dropping scroll box operation");
                None
            }
        }
    }

    fn window_size(&self, window: WindowId) -> Option<(i32, i32)> {
        match self.host.try_borrow() {
            Ok(host) => host.window_size(window),
            Err(_) => {
                warn!("host is busy, cannot query window size");
                None
            }
        }
    }

    /// The child's size, or the last known one while the child is busy.
    fn declared_size(&self) -> Option<(i32, i32)> {
        let child = self.state.borrow().child.clone()?;
        match child.declared_size() {
            Some(size) => {
                self.state.borrow_mut().declared = size;
                Some(size)
            }
            None => Some(self.state.borrow().declared),
        }
    }

    fn set_window(&self, window: Option<WindowId>) {
        let (owned, child, was_assigned) = {
            let mut state = self.state.borrow_mut();
            let was_assigned = state.assigned;
            let owned = state.release_windows();
            state.window = window;
            (owned, state.child.clone(), was_assigned)
        };

        if !owned.is_empty() {
            self.with_host(|host| {
                for sub in &owned {
                    host.close_subregion(*sub);
                }
            });
        }
        if let (true, Some(child)) = (was_assigned, child) {
            if !child.assign_window(None) {
                trace!("child busy while withdrawing its window");
            }
        }

        match window {
            Some(window) => {
                debug!("scroll box window set to {:?}", window);
                self.reshape();
            }
            None => debug!("scroll box window removed"),
        }
    }

    fn set_child(&self, child: Option<ChildHandle>) -> Option<ChildHandle> {
        let (old, old_window, was_assigned) = {
            let mut state = self.state.borrow_mut();
            let old = state.child.take();
            let window = state.child_window.take();
            let was_assigned = std::mem::replace(&mut state.assigned, false);
            state.drag = DragState::Idle;
            let old_window = window.filter(|w| Some(*w) != state.viewport);
            (old, old_window, was_assigned)
        };

        if let Some(old) = &old {
            self.detach(old, old_window, was_assigned);
        }

        let Some(child) = child else {
            return old;
        };

        {
            let mut state = self.state.borrow_mut();
            state.declared = child.declared_size().unwrap_or_default();
            state.child = Some(child.clone());
        }
        debug!("attached {:?}", child);

        if child.supports_self_scrolling() {
            let was_busy = self.layout_busy.replace(true);
            if !child.receive_extents(self.vertical.clone(), self.horizontal.clone()) {
                warn!("self-scrolling child busy while attaching, extents not delivered");
            }
            self.layout_busy.set(was_busy);
            if was_busy {
                self.relayout.set(true);
                return old;
            }
        }
        self.reshape();
        old
    }

    fn detach(&self, child: &ChildHandle, window: Option<WindowId>, was_assigned: bool) {
        if let Some(window) = window {
            self.with_host(|host| host.close_subregion(window));
        }
        if !child.receive_extents(None, None) {
            trace!("detached child busy, extents not withdrawn");
        }
        if was_assigned && !child.assign_window(None) {
            trace!("detached child busy, window not withdrawn");
        }
        debug!("detached {:?}", child);
    }

    /// Lay out, replaying requests that arrive while a pass is running.
    fn reshape(&self) {
        if self.layout_busy.get() {
            trace!("layout already running, deferring");
            self.relayout.set(true);
            return;
        }

        self.layout_busy.set(true);
        let mut passes = 0;
        loop {
            self.relayout.set(false);
            self.layout_pass();
            passes += 1;
            if !self.relayout.get() {
                break;
            }
            if passes >= MAX_LAYOUT_PASSES {
                warn!("layout still unsettled after {} passes", passes);
                break;
            }
        }
        self.layout_busy.set(false);
    }
}

impl<H: Host + 'static> ExtentObserver for Inner<H> {
    fn extent_scrolled(&self, axis: Axis, delta: i32, start: i32) {
        let (window, child, child_window) = match self.state.try_borrow() {
            Ok(state) => (state.window, state.child.clone(), state.child_window),
            Err(_) => {
                trace!("{} scroll while state is busy", axis);
                return;
            }
        };

        match &child {
            Some(ChildHandle::Framed(_)) => {
                if let Some(child_window) = child_window {
                    let top = self.vertical.as_ref().map_or(0, |e| -e.start());
                    let left = self.horizontal.as_ref().map_or(0, |e| -e.start());
                    self.with_host(|host| host.reposition_subregion(child_window, top, left));
                }
            }
            Some(child @ ChildHandle::SelfScrolling(_)) => {
                if !child.notify_scrolled(delta, start, axis) {
                    trace!("child busy, {} scroll to {} not delivered", axis, start);
                }
            }
            None => {}
        }

        if let Some(window) = window {
            self.with_host(|host| host.request_redraw(window));
        }
    }

    fn extent_total_changed(&self, axis: Axis) {
        trace!("{} total changed", axis);
        self.reshape();
    }
}
