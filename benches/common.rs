// Shared benchmark helpers
// Functions here are used across different benchmark files
#![allow(dead_code)]

use listbox::model::Item;
use listbox::widget::{ListBox, Overflow};
use ratatui::layout::Rect;

/// Generate N items with varying text lengths
pub fn generate_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| {
            let text = format!("{:>8}  {}", i, "segment ".repeat(i % 12));
            Item::new(i.to_string(), text)
        })
        .collect()
}

/// List of `count` items in an 80x40 area
pub fn generate_list(count: usize, overflow: Overflow) -> ListBox {
    let mut list = ListBox::new().overflow(overflow);
    list.set_area(Rect::new(0, 0, 80, 40));
    list.set_items(generate_items(count));
    list
}
