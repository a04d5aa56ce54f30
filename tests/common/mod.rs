// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use listbox::model::Item;
use listbox::widget::{ListBox, Overflow};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use std::path::Path;

/// Items whose text is each given string
pub fn items(texts: &[&str]) -> Vec<Item> {
    texts.iter().map(|t| Item::from(*t)).collect()
}

/// `count` items named "item 0", "item 1", ...
pub fn numbered_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item::new(i.to_string(), format!("item {}", i)))
        .collect()
}

/// Bordered list at the origin whose content area is `width` x `height`
pub fn list_with(items: Vec<Item>, width: u16, height: u16) -> ListBox {
    let mut list = ListBox::new();
    list.set_area(Rect::new(0, 0, width + 2, height + 2));
    list.set_items(items);
    list
}

pub fn wrapped_list_with(items: Vec<Item>, width: u16, height: u16) -> ListBox {
    let mut list = ListBox::new().overflow(Overflow::Wrap);
    list.set_area(Rect::new(0, 0, width + 2, height + 2));
    list.set_items(items);
    list
}

/// Symbols of buffer row `y` between columns `from..to`
pub fn row_text(buf: &Buffer, y: u16, from: u16, to: u16) -> String {
    (from..to).map(|x| buf[(x, y)].symbol()).collect()
}

/// Write a file, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}
