use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use super::cells::{self, Cell};
use super::viewport::Viewport;
use super::{ListBox, Overflow};

const UP_INDICATOR: &str = "^";
const DOWN_INDICATOR: &str = "v";

impl ListBox {
    /// Snapshot of the list drawn over its current area
    pub fn buffer(&self) -> Buffer {
        let area = self.panel().area();
        let mut buf = Buffer::empty(area);
        self.draw(area, &mut buf);
        buf
    }

    fn item_style(&self, index: usize) -> Style {
        if index == self.selected() {
            Style::default()
                .fg(self.item_fg())
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(self.item_fg()).bg(self.item_bg())
        }
    }

    fn draw(&self, area: Rect, buf: &mut Buffer) {
        self.panel().render(area, buf);
        let inner = self.panel().inner_of(area);
        if inner.is_empty() {
            return;
        }

        let items = self.items();
        let viewport = Viewport::new(inner, self.overflow_mode());
        let top = viewport.visible_top(items, self.lower_bound());

        let mut row = 0usize;
        for (index, item) in items.iter().enumerate().skip(top) {
            if row >= viewport.height {
                break;
            }
            let cells = cells::build(&item.text, self.item_style(index));
            let lines = match self.overflow_mode() {
                Overflow::Truncate => vec![cells.as_slice()],
                Overflow::Wrap => cells::wrap(&cells, inner.width),
            };
            for line in lines.into_iter().take(viewport.height - row) {
                write_row(buf, inner.x, inner.y + row as u16, cells::trim(line, inner.width));
                row += 1;
            }
        }

        let indicator_x = inner.right() - 1;
        if top > 0 {
            set_indicator(buf, indicator_x, inner.top(), UP_INDICATOR);
        }
        if viewport.overflows(&items[top..]) {
            set_indicator(buf, indicator_x, inner.bottom() - 1, DOWN_INDICATOR);
        }
    }
}

/// Write cells left to right from `(x, y)`, blanking columns covered by wide glyphs
fn write_row(buf: &mut Buffer, x: u16, y: u16, cells: &[Cell]) {
    let mut x = x;
    for cell in cells {
        if let Some(target) = buf.cell_mut((x, y)) {
            target.set_symbol(&cell.symbol).set_style(cell.style);
        }
        for dx in 1..cell.width() {
            if let Some(covered) = buf.cell_mut((x + dx, y)) {
                covered.reset();
            }
        }
        x += cell.width();
    }
}

fn set_indicator(buf: &mut Buffer, x: u16, y: u16, symbol: &str) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol).set_style(Style::reset());
    }
}

impl Widget for &ListBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.draw(area, buf);
    }
}
