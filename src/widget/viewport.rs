use ratatui::layout::Rect;

use crate::model::Item;

use super::{cells, Overflow};

/// Row geometry of the list's content area.
///
/// In truncate mode every item is exactly one row tall, so all row counts
/// below degenerate to item counts.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Viewport {
    pub height: usize,
    pub width: u16,
    pub overflow: Overflow,
}

impl Viewport {
    pub fn new(inner: Rect, overflow: Overflow) -> Self {
        Self {
            height: inner.height as usize,
            width: inner.width,
            overflow,
        }
    }

    /// Rows one item occupies
    pub fn item_rows(&self, item: &Item) -> usize {
        match self.overflow {
            Overflow::Truncate => 1,
            Overflow::Wrap => cells::row_count(&item.text, self.width),
        }
    }

    /// Rows occupied by a run of items
    pub fn rows(&self, items: &[Item]) -> usize {
        match self.overflow {
            Overflow::Truncate => items.len(),
            Overflow::Wrap => items.iter().map(|item| self.item_rows(item)).sum(),
        }
    }

    /// Whether a run of items needs more rows than the viewport has
    pub fn overflows(&self, items: &[Item]) -> bool {
        let mut used = 0;
        for item in items {
            used += self.item_rows(item);
            if used > self.height {
                return true;
            }
        }
        false
    }

    /// Largest lower bound whose window still ends at the last item
    pub fn max_top(&self, items: &[Item]) -> usize {
        if items.is_empty() {
            return 0;
        }
        let mut top = items.len();
        let mut used = 0;
        while top > 0 {
            let rows = self.item_rows(&items[top - 1]);
            if used + rows > self.height {
                break;
            }
            used += rows;
            top -= 1;
        }
        top.min(items.len() - 1)
    }

    /// First item actually drawn for a requested lower bound
    pub fn visible_top(&self, items: &[Item], lower_bound: usize) -> usize {
        if !self.overflows(items) {
            0
        } else {
            lower_bound.min(self.max_top(items))
        }
    }

    /// Item drawn at `row` rows below `top`, if any
    pub fn item_at_row(&self, items: &[Item], top: usize, row: usize) -> Option<usize> {
        let mut used = 0;
        for (index, item) in items.iter().enumerate().skip(top) {
            used += self.item_rows(item);
            if row < used {
                return Some(index);
            }
        }
        None
    }
}
