use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

/// Colours a list box is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub item_fg: Color,
    pub item_bg: Color,
    pub border_fg: Color,
    pub title_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            item_fg: Color::Reset,
            item_bg: Color::Reset,
            border_fg: Color::Reset,
            title_fg: Color::Reset,
        }
    }
}

impl Theme {
    /// Bordered block styled with this theme's border and title colours
    pub fn block(&self) -> Block<'static> {
        Block::bordered()
            .border_style(Style::default().fg(self.border_fg))
            .title_style(Style::default().fg(self.title_fg))
    }
}
