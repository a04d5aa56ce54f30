pub mod cells;
mod list_box;
mod overflow;
mod panel;
mod render;
mod theme;
mod viewport;

pub use list_box::ListBox;
pub use overflow::Overflow;
pub use panel::Panel;
pub use theme::Theme;
