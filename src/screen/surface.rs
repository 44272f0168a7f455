use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

/// A retained rectangular drawing region.
///
/// Cell contents live in an off-screen [`Buffer`] addressed in absolute
/// terminal coordinates; the compositor blits visible surfaces into the frame
/// on commit. Writes touch only the retained buffer, so a hidden surface
/// keeps its contents and showing it again needs no re-render.
pub struct Surface {
    area: Rect,
    hidden: bool,
    buf: Buffer,
}

impl Surface {
    pub(crate) fn new(area: Rect) -> Self {
        Self {
            area,
            hidden: false,
            buf: Buffer::empty(area),
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Writes `text` at a row/column local to this surface, clipped at the
    /// right edge. Out-of-bounds rows are ignored.
    pub fn write_text(&mut self, row: u16, col: u16, text: &str, style: Style) {
        if row >= self.area.height || col >= self.area.width {
            return;
        }
        let max = (self.area.width - col) as usize;
        self.buf
            .set_stringn(self.area.x + col, self.area.y + row, text, max, style);
    }

    /// Applies a style patch to `len` cells starting at a local row/column
    /// without touching cell contents. Fields the patch leaves unset keep
    /// their current value, so an add/remove-modifier patch preserves colors.
    pub fn set_region_style(&mut self, row: u16, col: u16, len: u16, style: Style) {
        if row >= self.area.height || col >= self.area.width {
            return;
        }
        let len = len.min(self.area.width - col);
        let region = Rect::new(self.area.x + col, self.area.y + row, len, 1);
        self.buf.set_style(region, style);
    }

    /// Resets every cell to a space in the given style.
    pub fn fill(&mut self, style: Style) {
        for y in self.area.top()..self.area.bottom() {
            for x in self.area.left()..self.area.right() {
                if let Some(cell) = self.buf.cell_mut(Position::new(x, y)) {
                    cell.reset();
                    cell.set_style(style);
                }
            }
        }
    }

    /// Draws a plain box along the surface edge.
    pub fn draw_border(&mut self, style: Style) {
        Block::bordered()
            .border_style(style)
            .render(self.area, &mut self.buf);
    }

    /// Style of the cell at a local row/column.
    #[allow(dead_code)] // Used by unit and integration tests
    pub fn style_at(&self, row: u16, col: u16) -> Option<Style> {
        let pos = Position::new(self.area.x + col, self.area.y + row);
        self.buf.cell(pos).map(|cell| cell.style())
    }

    /// Symbol of the cell at a local row/column.
    #[allow(dead_code)] // Used by unit and integration tests
    pub fn symbol_at(&self, row: u16, col: u16) -> Option<&str> {
        let pos = Position::new(self.area.x + col, self.area.y + row);
        self.buf.cell(pos).map(|cell| cell.symbol())
    }

    pub(crate) fn buffer(&self) -> &Buffer {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};

    #[test]
    fn writes_are_clipped_at_the_right_edge() {
        let mut surface = Surface::new(Rect::new(0, 0, 3, 1));
        surface.write_text(0, 0, "abcdef", Style::default());
        assert_eq!(surface.symbol_at(0, 2), Some("c"));
        assert_eq!(surface.symbol_at(0, 3), None);
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut surface = Surface::new(Rect::new(0, 0, 3, 2));
        surface.write_text(5, 0, "x", Style::default());
        surface.set_region_style(0, 9, 1, Style::default());
        assert_eq!(surface.symbol_at(0, 0), Some(" "));
    }

    #[test]
    fn region_patch_keeps_text_and_colors() {
        let mut surface = Surface::new(Rect::new(0, 0, 5, 1));
        surface.write_text(0, 0, "abc", Style::default().fg(Color::Blue));
        surface.set_region_style(0, 0, 3, Style::new().add_modifier(Modifier::REVERSED));

        let style = surface.style_at(0, 0).unwrap();
        assert_eq!(surface.symbol_at(0, 0), Some("a"));
        assert_eq!(style.fg, Some(Color::Blue));
        assert!(style.add_modifier.contains(Modifier::REVERSED));

        surface.set_region_style(0, 0, 3, Style::new().remove_modifier(Modifier::REVERSED));
        let style = surface.style_at(0, 0).unwrap();
        assert!(!style.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(style.fg, Some(Color::Blue));
    }

    #[test]
    fn local_coordinates_offset_by_area_origin() {
        let mut surface = Surface::new(Rect::new(4, 2, 4, 2));
        surface.write_text(1, 1, "z", Style::default());
        assert_eq!(surface.symbol_at(1, 1), Some("z"));
        // The retained buffer stores the cell at the absolute position.
        assert_eq!(surface.buffer().cell(Position::new(5, 3)).unwrap().symbol(), "z");
    }
}
