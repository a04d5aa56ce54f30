//! Text-to-cell rasterization.
//!
//! Turns a string plus a style into a sequence of width-aware cells, one per
//! displayed glyph. Zero-width characters (combining marks, joiners) ride along
//! in the symbol of the preceding cell; control characters are dropped.

use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;

/// One styled glyph destined for a buffer cell
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub symbol: String,
    pub style: Style,
    width: u16,
}

impl Cell {
    /// Number of terminal columns this glyph occupies
    pub fn width(&self) -> u16 {
        self.width
    }
}

/// Rasterize `text` into styled cells
pub fn build(text: &str, style: Style) -> Vec<Cell> {
    let mut cells: Vec<Cell> = Vec::with_capacity(text.len());
    for c in text.chars().filter(|c| !c.is_control()) {
        match c.width() {
            Some(0) => {
                if let Some(last) = cells.last_mut() {
                    last.symbol.push(c);
                }
            }
            Some(w) => cells.push(Cell {
                symbol: c.to_string(),
                style,
                width: w as u16,
            }),
            None => {}
        }
    }
    cells
}

/// Longest prefix of `cells` whose total width fits in `max_width`
pub fn trim(cells: &[Cell], max_width: u16) -> &[Cell] {
    let mut used = 0u16;
    for (i, cell) in cells.iter().enumerate() {
        used = used.saturating_add(cell.width);
        if used > max_width {
            return &cells[..i];
        }
    }
    cells
}

/// Total display width of a cell run
pub fn width(cells: &[Cell]) -> u16 {
    cells.iter().fold(0u16, |acc, c| acc.saturating_add(c.width))
}

/// Greedily break `cells` into rows of at most `width` columns.
///
/// A glyph that does not fit on the current row starts the next one; a glyph
/// wider than `width` gets a row of its own. Always yields at least one row.
pub fn wrap(cells: &[Cell], width: u16) -> Vec<&[Cell]> {
    if width == 0 {
        return vec![cells];
    }
    let mut rows = Vec::new();
    let mut start = 0;
    let mut used = 0u16;
    for (i, cell) in cells.iter().enumerate() {
        if used > 0 && used.saturating_add(cell.width) > width {
            rows.push(&cells[start..i]);
            start = i;
            used = 0;
        }
        used = used.saturating_add(cell.width);
    }
    rows.push(&cells[start..]);
    rows
}

/// Rows `text` occupies when wrapped at `width`
pub fn row_count(text: &str, width: u16) -> usize {
    if width == 0 {
        return 1;
    }
    let mut rows = 1;
    let mut used = 0u16;
    let widths = text
        .chars()
        .filter(|c| !c.is_control())
        .filter_map(|c| c.width())
        .filter(|w| *w > 0);
    for w in widths {
        let w = w as u16;
        if used > 0 && used.saturating_add(w) > width {
            rows += 1;
            used = 0;
        }
        used = used.saturating_add(w);
    }
    rows
}
