mod common;

use common::{Fixture, on_demand_both};
use scrollbox::{Axis, AxisMode, ScrollBoxOptions, Visibility};
use tuiwin::{Event, Key, Modifiers, Rect, WheelDirection};

fn vertical_on_demand() -> ScrollBoxOptions {
    ScrollBoxOptions::new().vertical(AxisMode::OnDemand)
}

#[test]
fn test_child_gets_viewport_and_extents() {
    let fx = Fixture::new(25, 80, vertical_on_demand());
    let child = fx.self_scrolling(100, 20);

    let viewport = fx.scroll_box.viewport_window();
    assert!(viewport.is_some());
    assert_eq!(child.borrow().window, viewport);
    assert_eq!(fx.scroll_box.child_window(), viewport);
    assert_eq!(child.borrow().received, vec![true]);
    assert!(fx.scroll_box.child().unwrap().supports_self_scrolling());

    // The child's declared total drives the layout.
    assert!(fx.scroll_box.scrollbar_visibility().vertical);
    assert_eq!(fx.geometry(viewport), Some(Rect::new(0, 0, 25, 79)));
    let vertical = child.borrow().vertical.clone().unwrap();
    assert_eq!(vertical.total(), 100);
    assert_eq!(vertical.viewport(), 25);
}

#[test]
fn test_extents_are_shared() {
    let fx = Fixture::new(25, 80, vertical_on_demand());
    let child = fx.self_scrolling(100, 20);
    let held = child.borrow().vertical.clone().unwrap();

    fx.scroll_box.scroll(Some(4), None);
    assert_eq!(held.start(), 4);

    held.scroll_to(30);
    assert_eq!(fx.start(Axis::Vertical), 30);
}

#[test]
fn test_scroll_notifies_child_instead_of_moving_window() {
    let fx = Fixture::new(25, 80, vertical_on_demand());
    let child = fx.self_scrolling(100, 20);

    fx.scroll_box.scroll(Some(10), None);
    fx.scroll_box.scroll_to(Some(10), None);
    assert_eq!(child.borrow().scrolled, vec![(10, 10, Axis::Vertical)]);

    let key = Event::Key {
        key: Key::PageDown,
        modifiers: Modifiers::NONE,
    };
    assert!(fx.scroll_box.handle_event(&key));
    assert_eq!(child.borrow().scrolled.last(), Some(&(12, 22, Axis::Vertical)));
}

#[test]
fn test_child_window_never_offset() {
    let fx = Fixture::new(25, 80, on_demand_both());
    let child = fx.self_scrolling(100, 300);
    let viewport = fx.scroll_box.viewport_window();

    let wheel = Event::Wheel {
        direction: WheelDirection::Down,
        line: 3,
        col: 3,
        modifiers: Modifiers::NONE,
    };
    fx.scroll_box.handle_event(&wheel);
    fx.scroll_box.scroll(Some(40), Some(100));
    fx.scroll_box.scroll_to(Some(1000), Some(1000));

    let geometry = fx.geometry(viewport).unwrap();
    assert_eq!((geometry.top, geometry.left), (0, 0));
    assert_eq!(child.borrow().window, viewport);
    assert_eq!(
        child.borrow().scrolled.last(),
        Some(&(300 - 79 - 100, 300 - 79, Axis::Horizontal))
    );
}

#[test]
fn test_child_declaring_total_relayouts() {
    let fx = Fixture::new(25, 80, vertical_on_demand());
    let child = fx.self_scrolling(10, 20);
    assert_eq!(fx.scroll_box.scrollbar_visibility(), Visibility::default());

    child.borrow_mut().set_rows(200);
    assert!(fx.scroll_box.scrollbar_visibility().vertical);
    assert_eq!(fx.scroll_box.vertical_extent().unwrap().total(), 200);

    fx.scroll_box.scroll_to(Some(150), None);
    child.borrow_mut().set_rows(5);
    assert!(!fx.scroll_box.scrollbar_visibility().vertical);
    assert_eq!(fx.start(Axis::Vertical), 0);
}

#[test]
fn test_nested_scroll_from_notification() {
    let fx = Fixture::new(25, 80, vertical_on_demand());
    let child = fx.self_scrolling(100, 20);
    child.borrow_mut().snap = Some(10);

    fx.scroll_box.scroll(Some(3), None);
    assert_eq!(fx.start(Axis::Vertical), 10);
    assert_eq!(child.borrow().scrolled, vec![(3, 3, Axis::Vertical)]);
}

#[test]
fn test_detach_withdraws_extents() {
    let fx = Fixture::new(25, 80, vertical_on_demand());
    let child = fx.self_scrolling(100, 20);
    let viewport = fx.scroll_box.viewport_window().unwrap();

    assert!(fx.scroll_box.take_child().is_some());
    assert_eq!(child.borrow().received, vec![true, false]);
    assert!(child.borrow().vertical.is_none());
    assert_eq!(child.borrow().window, None);
    // The viewport belongs to the scroll box, not the child.
    assert!(fx.is_open(viewport));
}

#[test]
fn test_switching_to_framed_child() {
    let fx = Fixture::new(25, 80, vertical_on_demand());
    let list = fx.self_scrolling(100, 20);
    let viewport = fx.scroll_box.viewport_window();

    let text = fx.framed(40, 20);
    assert!(list.borrow().vertical.is_none());
    let framed_window = text.borrow().window;
    assert!(framed_window.is_some());
    assert_ne!(framed_window, viewport);
    assert_eq!(fx.scroll_box.vertical_extent().unwrap().total(), 40);
}
