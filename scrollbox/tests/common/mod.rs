#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use scrollbox::{Axis, Child, ChildHandle, Extent, ScrollBox, ScrollBoxOptions, SelfScrollingChild};
use tuiwin::{Rect, WindowId, WindowTree};

/// A plain widget with a fixed declared size.
#[derive(Debug, Default)]
pub struct TextChild {
    pub lines: i32,
    pub cols: i32,
    pub window: Option<WindowId>,
    pub assignments: Vec<Option<WindowId>>,
}

impl TextChild {
    pub fn new(lines: i32, cols: i32) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            lines,
            cols,
            ..Default::default()
        }))
    }
}

impl Child for TextChild {
    fn declared_lines(&self) -> i32 {
        self.lines
    }

    fn declared_cols(&self) -> i32 {
        self.cols
    }

    fn assign_window(&mut self, window: Option<WindowId>) {
        self.window = window;
        self.assignments.push(window);
    }
}

/// A widget that scrolls its own rows and declares their count.
#[derive(Debug, Default)]
pub struct ListChild {
    pub rows: i32,
    pub cols: i32,
    pub window: Option<WindowId>,
    pub vertical: Option<Rc<Extent>>,
    pub horizontal: Option<Rc<Extent>>,
    pub received: Vec<bool>,
    pub scrolled: Vec<(i32, i32, Axis)>,
    /// Round every scroll up to a multiple of this, from inside the
    /// notification.
    pub snap: Option<i32>,
}

impl ListChild {
    pub fn new(rows: i32, cols: i32) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            rows,
            cols,
            ..Default::default()
        }))
    }

    /// Change the row count while the widget itself is borrowed.
    pub fn set_rows(&mut self, rows: i32) {
        self.rows = rows;
        if let Some(vertical) = &self.vertical {
            vertical.set_total(rows);
        }
    }
}

impl Child for ListChild {
    fn declared_lines(&self) -> i32 {
        1
    }

    fn declared_cols(&self) -> i32 {
        self.cols
    }

    fn assign_window(&mut self, window: Option<WindowId>) {
        self.window = window;
    }
}

impl SelfScrollingChild for ListChild {
    fn receive_extents(&mut self, vertical: Option<Rc<Extent>>, horizontal: Option<Rc<Extent>>) {
        self.received.push(vertical.is_some());
        if let Some(extent) = &vertical {
            extent.set_total(self.rows);
        }
        if let Some(extent) = &horizontal {
            extent.set_total(self.cols);
        }
        self.vertical = vertical;
        self.horizontal = horizontal;
    }

    fn notify_scrolled(&mut self, delta: i32, start: i32, axis: Axis) {
        self.scrolled.push((delta, start, axis));
        if let (Some(snap), Some(vertical)) = (self.snap, &self.vertical) {
            if start % snap != 0 {
                vertical.scroll_to(start + snap - start % snap);
            }
        }
    }
}

pub struct Fixture {
    pub tree: Rc<RefCell<WindowTree>>,
    pub window: WindowId,
    pub scroll_box: ScrollBox<WindowTree>,
}

impl Fixture {
    /// A scroll box filling a `lines` x `cols` window at the top left of a
    /// larger screen.
    pub fn new(lines: i32, cols: i32, options: ScrollBoxOptions) -> Self {
        let tree = Rc::new(RefCell::new(WindowTree::new(lines + 5, cols + 5)));
        let root = tree.borrow().root();
        let window = tree
            .borrow_mut()
            .make_sub(root, Rect::new(0, 0, lines, cols))
            .unwrap();
        let scroll_box = ScrollBox::new(Rc::clone(&tree), options);
        scroll_box.set_window(Some(window));
        Self {
            tree,
            window,
            scroll_box,
        }
    }

    pub fn framed(&self, lines: i32, cols: i32) -> Rc<RefCell<TextChild>> {
        let child = TextChild::new(lines, cols);
        self.scroll_box
            .set_child(Some(ChildHandle::framed(Rc::clone(&child))));
        child
    }

    pub fn self_scrolling(&self, rows: i32, cols: i32) -> Rc<RefCell<ListChild>> {
        let child = ListChild::new(rows, cols);
        self.scroll_box
            .set_child(Some(ChildHandle::self_scrolling(Rc::clone(&child))));
        child
    }

    pub fn geometry(&self, window: Option<WindowId>) -> Option<Rect> {
        self.tree.borrow().geometry(window?)
    }

    pub fn is_open(&self, window: WindowId) -> bool {
        self.tree.borrow().is_open(window)
    }

    pub fn start(&self, axis: Axis) -> i32 {
        self.scroll_box.extent(axis).map_or(0, |e| e.start())
    }

    /// Character and cell at a position of the scroll box's window.
    pub fn cell(&self, line: i32, col: i32) -> tuiwin::Cell {
        *self
            .tree
            .borrow()
            .buffer(self.window)
            .unwrap()
            .get(line, col)
            .unwrap()
    }
}

pub fn vertical_only() -> ScrollBoxOptions {
    ScrollBoxOptions::default()
}

pub fn on_demand_both() -> ScrollBoxOptions {
    use scrollbox::AxisMode;
    ScrollBoxOptions::new()
        .vertical(AxisMode::OnDemand)
        .horizontal(AxisMode::OnDemand)
}
