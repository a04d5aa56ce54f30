// Navigation integration tests
// Selection and scroll invariants of ListBox under arbitrary input sequences

mod common;

use common::{items, list_with, numbered_items, wrapped_list_with};
use listbox::model::Item;
use listbox::widget::{cells, ListBox};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Up,
    Down,
    PageUp,
    PageDown,
    Center,
    Reset,
    SelectRow(u16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Up),
        4 => Just(Op::Down),
        1 => Just(Op::PageUp),
        1 => Just(Op::PageDown),
        1 => Just(Op::Center),
        1 => Just(Op::Reset),
        1 => (0u16..16).prop_map(Op::SelectRow),
    ]
}

fn step() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Up), Just(Op::Down)]
}

fn apply(list: &mut ListBox, op: &Op) {
    match op {
        Op::Up => list.up(),
        Op::Down => list.down(),
        Op::PageUp => list.page_up(),
        Op::PageDown => list.page_down(),
        Op::Center => list.center_selection(),
        Op::Reset => list.reset_selection(),
        Op::SelectRow(y) => list.select_at_row(*y),
    }
}

fn state(list: &ListBox) -> (usize, usize) {
    (list.selected(), list.lower_bound())
}

fn mixed_items(texts: &[String]) -> Vec<Item> {
    texts.iter().map(|t| Item::from(t.as_str())).collect()
}

proptest! {
    #[test]
    fn test_selection_stays_in_range(len in 1usize..40, height in 1u16..10, ops in prop::collection::vec(op(), 0..80)) {
        let mut list = list_with(numbered_items(len), 10, height);
        for op in &ops {
            apply(&mut list, op);
            prop_assert!(list.selected() < len);
        }
    }

    #[test]
    fn test_scroll_follows_selection(len in 1usize..40, height in 1u16..10, ops in prop::collection::vec(step(), 0..80)) {
        let mut list = list_with(numbered_items(len), 10, height);
        let height = height as usize;
        for op in &ops {
            apply(&mut list, op);
            prop_assert!(list.lower_bound() <= list.selected());
            prop_assert!(list.selected() < list.lower_bound() + height);
        }
    }

    #[test]
    fn test_page_down_is_repeated_down(len in 1usize..40, height in 1u16..10, ops in prop::collection::vec(op(), 0..40)) {
        let mut paged = list_with(numbered_items(len), 10, height);
        for op in &ops {
            apply(&mut paged, op);
        }
        let mut stepped = paged.clone();

        paged.page_down();
        for _ in 0..height {
            stepped.down();
        }
        prop_assert_eq!(state(&paged), state(&stepped));

        paged.page_up();
        for _ in 0..height {
            stepped.up();
        }
        prop_assert_eq!(state(&paged), state(&stepped));
    }

    #[test]
    fn test_center_is_idempotent(len in 0usize..40, height in 1u16..10, ops in prop::collection::vec(op(), 0..40)) {
        let mut list = list_with(numbered_items(len), 10, height);
        for op in &ops {
            apply(&mut list, op);
        }
        list.center_selection();
        let first = list.lower_bound();
        list.center_selection();
        prop_assert_eq!(list.lower_bound(), first);
    }

    #[test]
    fn test_center_keeps_selection_visible(len in 1usize..40, height in 1u16..10, ops in prop::collection::vec(step(), 0..60)) {
        let mut list = list_with(numbered_items(len), 10, height);
        for op in &ops {
            apply(&mut list, op);
        }
        list.center_selection();
        prop_assert!(list.lower_bound() <= list.selected());
        prop_assert!(list.selected() < list.lower_bound() + height as usize);
    }

    #[test]
    fn test_reset_restores_origin(len in 0usize..40, height in 1u16..10, ops in prop::collection::vec(op(), 0..60)) {
        let mut list = list_with(numbered_items(len), 10, height);
        for op in &ops {
            apply(&mut list, op);
        }
        list.reset_selection();
        prop_assert_eq!(state(&list), (0, 0));
        prop_assert_eq!(list.len(), len);
    }

    #[test]
    fn test_display_strings_round_trip(texts in prop::collection::vec("[a-z ]{0,12}", 0..30)) {
        let list = list_with(mixed_items(&texts), 10, 5);
        let strings = list.display_strings();
        prop_assert_eq!(strings.len(), texts.len());
        for (shown, text) in strings.iter().zip(&texts) {
            prop_assert_eq!(*shown, text.as_str());
        }
    }

    #[test]
    fn test_wrap_scroll_follows_selection(
        texts in prop::collection::vec("[a-z]{0,20}", 1..30),
        height in 1u16..8,
        ops in prop::collection::vec(step(), 0..60),
    ) {
        let width = 6u16;
        let mut list = wrapped_list_with(mixed_items(&texts), width, height);
        for op in &ops {
            apply(&mut list, op);
            let (selected, lower_bound) = state(&list);
            prop_assert!(lower_bound <= selected);
            let rows: usize = texts[lower_bound..=selected]
                .iter()
                .map(|t| cells::row_count(t, width))
                .sum();
            prop_assert!(lower_bound == selected || rows <= height as usize);
        }
    }
}

#[test]
fn test_down_three_times_scrolls_once() {
    let mut list = list_with(items(&["a", "b", "c", "d", "e"]), 8, 3);
    list.down();
    list.down();
    list.down();
    assert_eq!(state(&list), (3, 1));
}

#[test]
fn test_center_noop_when_list_fits() {
    let mut list = list_with(items(&["a", "b"]), 8, 5);
    list.down();
    list.center_selection();
    assert_eq!(list.lower_bound(), 0);
}

#[test]
fn test_page_down_clamps_at_bottom() {
    let mut list = list_with(numbered_items(5), 8, 3);
    list.page_down();
    list.page_down();
    list.page_down();
    assert_eq!(state(&list), (4, 2));
}

#[test]
fn test_height_read_fresh_after_resize() {
    let mut list = list_with(numbered_items(20), 8, 10);
    for _ in 0..5 {
        list.down();
    }
    assert_eq!(list.lower_bound(), 0);

    list.set_area(ratatui::layout::Rect::new(0, 0, 10, 5));
    list.down();
    assert_eq!(state(&list), (6, 1));
    list.page_down();
    assert_eq!(list.selected(), 9);
}

#[test]
#[should_panic]
fn test_current_on_empty_list_panics() {
    let list = list_with(Vec::new(), 8, 3);
    let _ = list.current();
}
