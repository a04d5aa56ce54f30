use tracing::info;

use crate::input::Intent;
use crate::model::Item;
use crate::widget::{ListBox, Overflow, Theme};

/// Action to take after handling an intent
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Redraw,
    Quit,
    /// The user picked an item; carries its value
    Choose(String),
}

/// Application ViewModel: owns the list box and routes intents into it
pub struct AppViewModel {
    title: String,
    theme: Theme,
    list: ListBox,
}

impl AppViewModel {
    pub fn new(title: impl Into<String>, items: Vec<Item>, theme: &Theme, overflow: Overflow) -> Self {
        let mut list = ListBox::with_theme(theme).overflow(overflow);
        list.set_items(items);
        Self {
            title: title.into(),
            theme: *theme,
            list,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn list(&self) -> &ListBox {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListBox {
        &mut self.list
    }

    /// "n/total" position of the selection, or "0/0" when empty
    pub fn position(&self) -> String {
        if self.list.is_empty() {
            "0/0".to_string()
        } else {
            format!("{}/{}", self.list.selected() + 1, self.list.len())
        }
    }

    /// Replace the list contents, e.g. after reloading the source
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.list.set_items(items);
    }

    /// Handle a user intent and return the resulting action
    pub fn handle_intent(&mut self, intent: Intent) -> Action {
        match intent {
            Intent::Quit => Action::Quit,

            Intent::Choose => {
                if self.list.is_empty() {
                    return Action::Redraw;
                }
                let item = self.list.current();
                info!(value = %item.value, "item chosen");
                Action::Choose(item.value.clone())
            }

            Intent::MoveUp => {
                self.list.up();
                Action::Redraw
            }

            Intent::MoveDown => {
                self.list.down();
                Action::Redraw
            }

            Intent::PageUp => {
                self.list.page_up();
                Action::Redraw
            }

            Intent::PageDown => {
                self.list.page_down();
                Action::Redraw
            }

            Intent::SelectRow(row) => {
                let inner = self.list.inner_area();
                if row >= inner.top() && row < inner.bottom() {
                    self.list.select_at_row(row);
                }
                Action::Redraw
            }

            Intent::Center => {
                self.list.center_selection();
                Action::Redraw
            }

            Intent::Reset => {
                self.list.reset_selection();
                Action::Redraw
            }
        }
    }
}
