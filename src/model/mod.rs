mod item;
mod entry;

pub use item::Item;
pub use entry::Entry;
