//! The embedded widget and the smart-scrolling contract.
//!
//! A child is attached either framed, where the scroll box gives it a window
//! as large as its content and slides that window around behind the
//! viewport, or self-scrolling, where the child gets the viewport itself plus
//! the extents and paints the visible part on its own.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tuiwin::WindowId;

use crate::extent::{Axis, Extent};

/// What a scroll box needs from any embedded widget.
pub trait Child {
    /// Lines the widget would like to have.
    fn declared_lines(&self) -> i32;

    /// Columns the widget would like to have.
    fn declared_cols(&self) -> i32;

    /// Give the widget its window, or take it away with `None`.
    fn assign_window(&mut self, window: Option<WindowId>);
}

/// A child that offsets its own content.
///
/// It is handed the viewport region and the scroll box's extents, declares
/// its content length with [`Extent::set_total`], and is told about every
/// scroll instead of having its window moved.
pub trait SelfScrollingChild: Child {
    /// Called once when attached (with the extents) and once when detached
    /// (with `None`s).
    fn receive_extents(&mut self, vertical: Option<Rc<Extent>>, horizontal: Option<Rc<Extent>>);

    /// `axis` moved by `delta` and now starts at `start`.
    fn notify_scrolled(&mut self, delta: i32, start: i32, axis: Axis);
}

/// An attached child, with its scrolling mode fixed at attachment.
#[derive(Clone)]
pub enum ChildHandle {
    Framed(Rc<RefCell<dyn Child>>),
    SelfScrolling(Rc<RefCell<dyn SelfScrollingChild>>),
}

impl fmt::Debug for ChildHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Framed(_) => f.write_str("ChildHandle::Framed"),
            Self::SelfScrolling(_) => f.write_str("ChildHandle::SelfScrolling"),
        }
    }
}

impl ChildHandle {
    pub fn framed<C: Child + 'static>(child: Rc<RefCell<C>>) -> Self {
        Self::Framed(child)
    }

    pub fn self_scrolling<C: SelfScrollingChild + 'static>(child: Rc<RefCell<C>>) -> Self {
        Self::SelfScrolling(child)
    }

    pub fn supports_self_scrolling(&self) -> bool {
        matches!(self, Self::SelfScrolling(_))
    }

    /// The child's declared `(lines, cols)`, or `None` if the child is
    /// mutably borrowed right now (it is calling into the scroll box).
    pub fn declared_size(&self) -> Option<(i32, i32)> {
        match self {
            Self::Framed(child) => child
                .try_borrow()
                .ok()
                .map(|c| (c.declared_lines(), c.declared_cols())),
            Self::SelfScrolling(child) => child
                .try_borrow()
                .ok()
                .map(|c| (c.declared_lines(), c.declared_cols())),
        }
    }

    /// Hand the child its window. Returns `false` if the child was busy.
    pub fn assign_window(&self, window: Option<WindowId>) -> bool {
        match self {
            Self::Framed(child) => match child.try_borrow_mut() {
                Ok(mut c) => {
                    c.assign_window(window);
                    true
                }
                Err(_) => false,
            },
            Self::SelfScrolling(child) => match child.try_borrow_mut() {
                Ok(mut c) => {
                    c.assign_window(window);
                    true
                }
                Err(_) => false,
            },
        }
    }

    /// Deliver (or withdraw) the extents. Framed children ignore this.
    pub fn receive_extents(&self, vertical: Option<Rc<Extent>>, horizontal: Option<Rc<Extent>>) -> bool {
        match self {
            Self::Framed(_) => true,
            Self::SelfScrolling(child) => match child.try_borrow_mut() {
                Ok(mut c) => {
                    c.receive_extents(vertical, horizontal);
                    true
                }
                Err(_) => false,
            },
        }
    }

    /// Tell a self-scrolling child about a scroll. Returns `false` if the
    /// child is framed or busy.
    pub fn notify_scrolled(&self, delta: i32, start: i32, axis: Axis) -> bool {
        match self {
            Self::Framed(_) => false,
            Self::SelfScrolling(child) => match child.try_borrow_mut() {
                Ok(mut c) => {
                    c.notify_scrolled(delta, start, axis);
                    true
                }
                Err(_) => false,
            },
        }
    }

    /// Whether both handles point at the same widget.
    pub fn ptr_eq(&self, other: &ChildHandle) -> bool {
        match (self, other) {
            (Self::Framed(a), Self::Framed(b)) => {
                std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
            }
            (Self::SelfScrolling(a), Self::SelfScrolling(b)) => {
                std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
            }
            _ => false,
        }
    }
}
