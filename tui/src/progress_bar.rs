use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

pub(crate) const FILLED: char = '█';
pub(crate) const TRACK: char = '░';
const QUARTER_MARK: char = '│';

/// Number of cells out of `width` covered by `ratio`, clamped to `0..=1`.
pub(crate) fn filled_cells(ratio: f64, width: u16) -> u16 {
    (ratio.clamp(0.0, 1.0) * f64::from(width)).round() as u16
}

pub(crate) fn bar_line(ratio: f64, width: u16, fill: Color, track: Color) -> Line<'static> {
    let filled = filled_cells(ratio, width);
    Line::from(vec![
        Span::styled(
            FILLED.to_string().repeat(usize::from(filled)),
            Style::default().fg(fill),
        ),
        Span::styled(
            TRACK.to_string().repeat(usize::from(width - filled)),
            Style::default().fg(track),
        ),
    ])
}

/// Columns of the three markers splitting a bar of `width` into quarters.
pub(crate) fn quarter_marks(width: u16) -> [u16; 3] {
    [width / 4, width / 2, width * 3 / 4]
}

/// A line with a tick under each quarter boundary of a bar of `width`.
pub(crate) fn quarter_marker_line(width: u16, color: Color) -> Line<'static> {
    let marks = quarter_marks(width);
    let text: String = (0..width)
        .map(|x| if marks.contains(&x) { QUARTER_MARK } else { ' ' })
        .collect();
    Line::styled(text, Style::default().fg(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn filled_cells_scale_with_ratio() {
        assert_eq!(filled_cells(0.0, 20), 0);
        assert_eq!(filled_cells(0.5, 20), 10);
        assert_eq!(filled_cells(1.0, 20), 20);
        assert_eq!(filled_cells(5.0 / 11.0, 22), 10);
        assert_eq!(filled_cells(1.7, 8), 8);
        assert_eq!(filled_cells(-0.2, 8), 0);
    }

    #[test]
    fn bar_line_has_requested_width() {
        let line = bar_line(0.1875, 16, Color::Green, Color::Gray);
        assert_eq!(line.width(), 16);
        assert_eq!(line.spans[0].content, "███");
    }

    #[test]
    fn quarter_marks_split_bar() {
        assert_eq!(quarter_marks(16), [4, 8, 12]);
        let line = quarter_marker_line(8, Color::Gray);
        assert_eq!(line.spans[0].content, "  │ │ │ ");
    }
}
