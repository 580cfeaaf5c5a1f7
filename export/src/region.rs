use ratatui::buffer::Buffer;
use ratatui::buffer::Cell;
use ratatui::layout::Rect;

/// Owned snapshot of the rendered summary panel.
///
/// The view renders the panel into a buffer of its own, at full size and
/// never shown, and hands that over. Coordinates are relative to the
/// snapshot's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRegion {
    buffer: Buffer,
}

impl ExportRegion {
    /// Take a whole rendered buffer as the region.
    pub fn from_buffer(buffer: Buffer) -> Self {
        let area = *buffer.area();
        if area.x == 0 && area.y == 0 {
            return Self { buffer };
        }
        let mut rebased = Buffer::empty(Rect::new(0, 0, area.width, area.height));
        for y in 0..area.height {
            for x in 0..area.width {
                rebased[(x, y)] = buffer[(area.x + x, area.y + y)].clone();
            }
        }
        Self { buffer: rebased }
    }

    pub fn width(&self) -> u16 {
        self.buffer.area().width
    }

    pub fn height(&self) -> u16 {
        self.buffer.area().height
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn cell(&self, x: u16, y: u16) -> &Cell {
        &self.buffer[(x, y)]
    }

    /// Text content row by row with trailing blanks trimmed.
    pub fn text(&self) -> String {
        let mut lines = Vec::with_capacity(usize::from(self.height()));
        for y in 0..self.height() {
            let row: String = (0..self.width())
                .map(|x| self.cell(x, y).symbol())
                .collect();
            lines.push(row.trim_end().to_string());
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;
    use ratatui::style::Style;

    #[test]
    fn whole_buffer_becomes_the_region() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 2));
        buf.set_string(0, 0, "Nivå 5", Style::default().fg(Color::Blue));

        let region = ExportRegion::from_buffer(buf);

        assert_eq!(region.width(), 6);
        assert_eq!(region.height(), 2);
        assert_eq!(region.text(), "Nivå 5\n");
        assert_eq!(region.cell(0, 0).fg, Color::Blue);
    }

    #[test]
    fn offset_buffer_is_rebased_to_origin() {
        let mut buf = Buffer::empty(Rect::new(3, 5, 4, 2));
        buf.set_string(3, 6, "Åby", Style::default());

        let region = ExportRegion::from_buffer(buf);

        assert_eq!((region.width(), region.height()), (4, 2));
        assert_eq!(region.text(), "\nÅby");
    }

    #[test]
    fn zero_sized_buffer_is_empty() {
        let region = ExportRegion::from_buffer(Buffer::empty(Rect::new(0, 0, 0, 3)));
        assert!(region.is_empty());
    }
}
