use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Block;
use tracing::{debug, trace};

use crate::model::Item;

use super::viewport::Viewport;
use super::{Overflow, Panel, Theme};

/// Scrollable single-selection list.
///
/// Holds the items, the selected index and the lower bound (first visible
/// item). Navigation only mutates that state; drawing happens separately in
/// [`ListBox::buffer`] or through the `Widget` impl. The viewport height is
/// re-read from the panel's inner area on every call, so resizing between
/// calls is fine.
#[derive(Debug, Clone)]
pub struct ListBox {
    panel: Panel,
    items: Vec<Item>,
    item_fg: Color,
    item_bg: Color,
    overflow: Overflow,
    selected: usize,
    lower_bound: usize,
}

impl Default for ListBox {
    fn default() -> Self {
        Self::new()
    }
}

impl ListBox {
    pub fn new() -> Self {
        Self::with_theme(&Theme::default())
    }

    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            panel: Panel::new(theme.block()),
            items: Vec::new(),
            item_fg: theme.item_fg,
            item_bg: theme.item_bg,
            overflow: Overflow::default(),
            selected: 0,
            lower_bound: 0,
        }
    }

    pub fn block(mut self, block: Block<'static>) -> Self {
        self.panel.set_block(block);
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Replace the items, pulling selection and scroll back into range
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        if self.items.is_empty() {
            self.selected = 0;
            self.lower_bound = 0;
        } else {
            self.selected = self.selected.min(self.items.len() - 1);
            let max_top = self.viewport().max_top(&self.items);
            self.lower_bound = self.lower_bound.min(max_top).min(self.selected);
        }
        debug!(
            len = self.items.len(),
            selected = self.selected,
            lower_bound = self.lower_bound,
            "items replaced"
        );
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn lower_bound(&self) -> usize {
        self.lower_bound
    }

    pub fn item_fg(&self) -> Color {
        self.item_fg
    }

    pub fn set_item_fg(&mut self, color: Color) {
        self.item_fg = color;
    }

    pub fn item_bg(&self) -> Color {
        self.item_bg
    }

    pub fn set_item_bg(&mut self, color: Color) {
        self.item_bg = color;
    }

    pub fn overflow_mode(&self) -> Overflow {
        self.overflow
    }

    pub fn set_overflow(&mut self, overflow: Overflow) {
        self.overflow = overflow;
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut Panel {
        &mut self.panel
    }

    /// Assign the outer area; normally called by the layout before each render
    pub fn set_area(&mut self, area: Rect) {
        self.panel.set_area(area);
    }

    pub fn inner_area(&self) -> Rect {
        self.panel.inner()
    }

    pub(crate) fn viewport(&self) -> Viewport {
        Viewport::new(self.panel.inner(), self.overflow)
    }

    /// Display text of every item, in order
    pub fn display_strings(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.text.as_str()).collect()
    }

    /// The selected item.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty. Use [`ListBox::selected_item`] when that
    /// can happen.
    pub fn current(&self) -> &Item {
        &self.items[self.selected]
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected)
    }

    pub fn up(&mut self) {
        if self.selected == 0 {
            return;
        }
        self.selected -= 1;
        if self.selected < self.lower_bound {
            match self.overflow {
                Overflow::Truncate => self.lower_bound -= 1,
                Overflow::Wrap => self.lower_bound = self.selected,
            }
        }
        trace!(selected = self.selected, lower_bound = self.lower_bound, "up");
    }

    pub fn down(&mut self) {
        if self.selected + 1 >= self.items.len() {
            return;
        }
        self.selected += 1;
        let viewport = self.viewport();
        match self.overflow {
            Overflow::Truncate => {
                if self.selected >= self.lower_bound + viewport.height {
                    self.lower_bound += 1;
                }
            }
            Overflow::Wrap => {
                while self.lower_bound < self.selected
                    && viewport.rows(&self.items[self.lower_bound..=self.selected]) > viewport.height
                {
                    self.lower_bound += 1;
                }
            }
        }
        trace!(selected = self.selected, lower_bound = self.lower_bound, "down");
    }

    pub fn page_up(&mut self) {
        for _ in 0..self.viewport().height {
            self.up();
        }
    }

    pub fn page_down(&mut self) {
        for _ in 0..self.viewport().height {
            self.down();
        }
    }

    /// Select the item drawn on absolute screen row `y`.
    ///
    /// Rows are counted from the top item as drawn, which can sit above a
    /// stale lower bound after the area grew. Rows above the content area
    /// select the first item, rows past the end select the last one. The
    /// scroll position is left alone.
    pub fn select_at_row(&mut self, y: u16) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        let offset = i64::from(y) - i64::from(self.inner_area().y);
        let viewport = self.viewport();
        let top = viewport.visible_top(&self.items, self.lower_bound);
        let index = match self.overflow {
            Overflow::Truncate => top as i64 + offset,
            Overflow::Wrap if offset >= 0 => viewport
                .item_at_row(&self.items, top, offset as usize)
                .map_or(last as i64, |index| index as i64),
            Overflow::Wrap => top as i64 + offset,
        };
        self.selected = index.clamp(0, last as i64) as usize;
        debug!(y, selected = self.selected, "select at row");
    }

    /// Scroll so the selected item sits in the middle of the viewport.
    ///
    /// Does nothing when the whole list already fits. Near the end the window
    /// stops at the last item, so the lower bound never exceeds `len - H`
    /// and the selection stays visible.
    pub fn center_selection(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let viewport = self.viewport();
        if viewport.rows(&self.items) < viewport.height {
            return;
        }
        let selected = self.selected.min(self.items.len() - 1);
        let budget = (viewport.height / 2)
            .min(viewport.height.saturating_sub(viewport.item_rows(&self.items[selected])));
        let mut top = selected;
        let mut above = 0;
        while top > 0 {
            let rows = viewport.item_rows(&self.items[top - 1]);
            if above + rows > budget {
                break;
            }
            above += rows;
            top -= 1;
        }
        self.lower_bound = top.min(viewport.max_top(&self.items));
        debug!(selected, lower_bound = self.lower_bound, "centered");
    }

    pub fn reset_selection(&mut self) {
        self.selected = 0;
        self.lower_bound = 0;
    }
}
