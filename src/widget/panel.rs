use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Widget};

/// Chrome around a widget: the block (border, title) and the area it occupies.
///
/// The area is assigned by the owner's layout before each render; everything
/// inside the border is the inner content rectangle.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    block: Block<'static>,
    area: Rect,
}

impl Panel {
    pub fn new(block: Block<'static>) -> Self {
        Self {
            block,
            area: Rect::default(),
        }
    }

    pub fn block(&self) -> &Block<'static> {
        &self.block
    }

    pub fn set_block(&mut self, block: Block<'static>) {
        self.block = block;
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Content rectangle inside the border of the current area
    pub fn inner(&self) -> Rect {
        self.block.inner(self.area)
    }

    /// Content rectangle the block would leave inside `area`
    pub fn inner_of(&self, area: Rect) -> Rect {
        self.block.inner(area)
    }

    /// Draw border and title into `buf` over `area`
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        self.block.clone().render(area, buf);
    }
}
