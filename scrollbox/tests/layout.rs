mod common;

use std::rc::Rc;

use common::{Fixture, TextChild, on_demand_both, vertical_only};
use scrollbox::{AxisMode, ChildHandle, ScrollBox, ScrollBoxOptions, Visibility};
use tuiwin::{Rect, WindowTree};

fn vertical_on_demand() -> ScrollBoxOptions {
    ScrollBoxOptions::new().vertical(AxisMode::OnDemand)
}

// ============================================================================
// Visibility and geometry
// ============================================================================

#[test]
fn test_tall_child_shows_vertical_bar_only() {
    let fx = Fixture::new(25, 80, vertical_on_demand());
    fx.framed(100, 20);

    assert_eq!(
        fx.scroll_box.scrollbar_visibility(),
        Visibility {
            vertical: true,
            horizontal: false,
        }
    );
    assert!(fx.scroll_box.horizontal_extent().is_none());
    assert_eq!(
        fx.geometry(fx.scroll_box.viewport_window()),
        Some(Rect::new(0, 0, 25, 79))
    );
    assert_eq!(
        fx.geometry(fx.scroll_box.child_window()),
        Some(Rect::new(0, 0, 100, 79))
    );

    let vertical = fx.scroll_box.vertical_extent().unwrap();
    assert_eq!(vertical.viewport(), 25);
    assert_eq!(vertical.total(), 100);
}

#[test]
fn test_short_child_hides_on_demand_bar() {
    let fx = Fixture::new(25, 80, vertical_on_demand());
    fx.framed(10, 20);

    assert_eq!(fx.scroll_box.scrollbar_visibility(), Visibility::default());
    assert_eq!(
        fx.geometry(fx.scroll_box.viewport_window()),
        Some(Rect::new(0, 0, 25, 80))
    );
}

#[test]
fn test_wide_content_on_disabled_axis_keeps_bar_hidden() {
    let fx = Fixture::new(25, 80, vertical_on_demand());
    fx.framed(25, 100);

    let visible = fx.scroll_box.scrollbar_visibility();
    let vertical = fx.scroll_box.vertical_extent().unwrap();
    assert!(!visible.vertical);
    assert_eq!(vertical.limit(), 0);
    assert_eq!(visible.vertical, vertical.limit() > 0);
    assert_eq!(
        fx.geometry(fx.scroll_box.viewport_window()),
        Some(Rect::new(0, 0, 25, 80))
    );
}

#[test]
fn test_enabled_bar_always_shown() {
    let fx = Fixture::new(25, 80, vertical_only());
    fx.framed(3, 3);
    assert!(fx.scroll_box.scrollbar_visibility().vertical);
}

#[test]
fn test_exact_fit_gets_both_bars_when_other_axis_overflows() {
    let fx = Fixture::new(25, 80, on_demand_both());
    fx.framed(25, 81);

    assert_eq!(
        fx.scroll_box.scrollbar_visibility(),
        Visibility {
            vertical: true,
            horizontal: true,
        }
    );
    assert_eq!(
        fx.geometry(fx.scroll_box.viewport_window()),
        Some(Rect::new(0, 0, 24, 79))
    );
}

#[test]
fn test_exact_fit_on_both_axes_needs_no_bars() {
    let fx = Fixture::new(25, 80, on_demand_both());
    fx.framed(25, 80);
    assert_eq!(fx.scroll_box.scrollbar_visibility(), Visibility::default());
}

#[test]
fn test_unscrolled_axis_covers_viewport_or_content() {
    let fx = Fixture::new(25, 80, vertical_only());
    fx.framed(10, 200);
    assert_eq!(
        fx.geometry(fx.scroll_box.child_window()),
        Some(Rect::new(0, 0, 25, 200))
    );
}

#[test]
fn test_requested_size() {
    let fx = Fixture::new(25, 80, vertical_on_demand());
    assert_eq!(fx.scroll_box.requested_lines(), 0);

    fx.framed(100, 20);
    assert_eq!(fx.scroll_box.requested_lines(), 100);
    assert_eq!(fx.scroll_box.requested_cols(), 21);

    let fx = Fixture::new(25, 80, on_demand_both());
    fx.framed(100, 20);
    assert_eq!(fx.scroll_box.requested_lines(), 101);
}

// ============================================================================
// Framed children follow the extents
// ============================================================================

#[test]
fn test_scrolling_moves_framed_child() {
    let fx = Fixture::new(25, 80, vertical_only());
    fx.framed(100, 20);

    assert!(fx.scroll_box.scroll(Some(10), None));
    assert_eq!(fx.geometry(fx.scroll_box.child_window()).unwrap().top, -10);

    assert!(fx.scroll_box.scroll_to(Some(25), None));
    assert_eq!(fx.start(scrollbox::Axis::Vertical), 25);

    assert!(fx.scroll_box.scroll_to(Some(-5), None));
    assert_eq!(fx.start(scrollbox::Axis::Vertical), 0);

    assert!(fx.scroll_box.scroll_to(Some(1000), None));
    assert_eq!(fx.start(scrollbox::Axis::Vertical), 75);
    assert_eq!(fx.geometry(fx.scroll_box.child_window()).unwrap().top, -75);

    // No horizontal extent: ignored.
    assert!(!fx.scroll_box.scroll(None, Some(4)));
}

#[test]
fn test_scroll_requests_redraw() {
    let fx = Fixture::new(25, 80, vertical_only());
    fx.framed(100, 20);
    fx.tree.borrow_mut().take_exposed();

    fx.scroll_box.scroll(Some(1), None);
    assert!(fx.tree.borrow().is_exposed(fx.window));
}

#[test]
fn test_resize_clamps_and_reuses_windows() {
    let fx = Fixture::new(25, 80, vertical_only());
    fx.framed(100, 20);
    let viewport = fx.scroll_box.viewport_window();
    let child_window = fx.scroll_box.child_window();
    fx.scroll_box.scroll_to(Some(75), None);

    fx.tree
        .borrow_mut()
        .change_geometry(fx.window, Rect::new(0, 0, 50, 80));
    fx.scroll_box.reshape();

    assert_eq!(fx.scroll_box.viewport_window(), viewport);
    assert_eq!(fx.scroll_box.child_window(), child_window);
    assert_eq!(fx.start(scrollbox::Axis::Vertical), 50);
    assert_eq!(fx.geometry(child_window), Some(Rect::new(-50, 0, 100, 79)));
}

#[test]
fn test_child_resized_relayouts() {
    let fx = Fixture::new(25, 80, vertical_on_demand());
    let child = fx.framed(100, 20);
    fx.scroll_box.scroll_to(Some(60), None);

    child.borrow_mut().lines = 10;
    fx.scroll_box.child_resized();

    assert!(!fx.scroll_box.scrollbar_visibility().vertical);
    assert_eq!(fx.start(scrollbox::Axis::Vertical), 0);
    assert_eq!(
        fx.geometry(fx.scroll_box.child_window()),
        Some(Rect::new(0, 0, 25, 80))
    );
}

// ============================================================================
// Window and child lifecycle
// ============================================================================

#[test]
fn test_no_window_means_no_layout() {
    let tree = Rc::new(std::cell::RefCell::new(WindowTree::new(25, 80)));
    let scroll_box = ScrollBox::new(Rc::clone(&tree), vertical_only());
    let child = TextChild::new(100, 20);
    scroll_box.set_child(Some(ChildHandle::framed(Rc::clone(&child))));

    assert_eq!(scroll_box.viewport_window(), None);
    assert!(child.borrow().assignments.is_empty());
    scroll_box.render();
}

#[test]
fn test_losing_window_closes_sub_windows() {
    let fx = Fixture::new(25, 80, vertical_only());
    let child = fx.framed(100, 20);
    let viewport = fx.scroll_box.viewport_window().unwrap();
    let child_window = fx.scroll_box.child_window().unwrap();
    assert_eq!(child.borrow().window, Some(child_window));

    fx.scroll_box.set_window(None);
    assert!(!fx.is_open(viewport));
    assert!(!fx.is_open(child_window));
    assert_eq!(child.borrow().window, None);
    assert_eq!(fx.scroll_box.viewport_window(), None);

    fx.scroll_box.set_window(Some(fx.window));
    let reassigned = child.borrow().window.unwrap();
    assert!(fx.is_open(reassigned));
    assert_eq!(child.borrow().assignments.len(), 3);
}

#[test]
fn test_replacing_child_closes_old_window() {
    let fx = Fixture::new(25, 80, vertical_only());
    let first = fx.framed(100, 20);
    let first_window = fx.scroll_box.child_window().unwrap();

    let second = TextChild::new(40, 20);
    let old = fx
        .scroll_box
        .set_child(Some(ChildHandle::framed(Rc::clone(&second))));

    assert!(old.unwrap().ptr_eq(&ChildHandle::framed(Rc::clone(&first))));
    assert!(!fx.is_open(first_window));
    assert_eq!(first.borrow().window, None);
    assert_eq!(second.borrow().window, fx.scroll_box.child_window());
    assert_eq!(fx.scroll_box.vertical_extent().unwrap().total(), 40);
}

#[test]
fn test_take_child() {
    let fx = Fixture::new(25, 80, vertical_only());
    let child = fx.framed(100, 20);
    let child_window = fx.scroll_box.child_window().unwrap();

    assert!(fx.scroll_box.take_child().is_some());
    assert!(fx.scroll_box.child().is_none());
    assert!(!fx.is_open(child_window));
    assert_eq!(child.borrow().window, None);
    assert!(fx.scroll_box.take_child().is_none());
}

#[test]
fn test_drop_closes_sub_windows() {
    let fx = Fixture::new(25, 80, vertical_only());
    fx.framed(100, 20);
    let viewport = fx.scroll_box.viewport_window().unwrap();

    let Fixture {
        tree, scroll_box, ..
    } = fx;
    drop(scroll_box);
    assert!(!tree.borrow().is_open(viewport));
}

#[test]
fn test_drop_withdraws_child_window() {
    let fx = Fixture::new(25, 80, vertical_only());
    let child = fx.framed(100, 20);
    assert!(child.borrow().window.is_some());

    drop(fx);
    assert_eq!(child.borrow().window, None);
    assert_eq!(child.borrow().assignments.last(), Some(&None));
}

#[test]
fn test_drop_withdraws_self_scrolling_extents() {
    let fx = Fixture::new(25, 80, vertical_only());
    let list = fx.self_scrolling(500, 40);
    assert!(list.borrow().vertical.is_some());

    drop(fx);
    let list = list.borrow();
    assert_eq!(list.window, None);
    assert!(list.vertical.is_none());
    assert_eq!(list.received.last(), Some(&false));
}
