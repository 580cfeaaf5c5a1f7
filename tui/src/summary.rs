//! The summary panel: the part of the overview that gets exported.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use resan_core::AssessmentState;
use resan_core::CategoryId;
use resan_core::LevelSelection;
use resan_core::Role;
use resan_core::progress::category_progress;
use resan_core::progress::is_started;
use resan_core::progress::overall_role_ratio;
use resan_export::ExportRegion;

use crate::colors;
use crate::progress_bar::bar_line;

pub(crate) const LABEL_PLACEHOLDER: &str = "Skolans namn - fyll i högst upp";
pub(crate) const CAPTION: &str = "Biblioteksresan Status";
pub(crate) const NOT_STARTED: &str = "Ej påbörjad";
pub(crate) const ATTRIBUTION: &str = "Baserat på David Loertschers taxonomier för skolbibliotek";

/// Preferred panel width, wide enough for the attribution line.
pub const SUMMARY_WIDTH: u16 = 64;

/// Rows needed to draw the panel without clipping.
pub const SUMMARY_HEIGHT: u16 = {
    let header = 3;
    let roles = 2 * Role::ALL.len() as u16;
    let categories = 2 * CategoryId::ALL.len() as u16;
    let gaps_and_footer = 3;
    let border = 2;
    header + roles + categories + gaps_and_footer + border
};

pub(crate) fn level_text(selection: LevelSelection) -> String {
    match selection {
        LevelSelection::Unstarted => NOT_STARTED.to_string(),
        LevelSelection::Level(level) => format!("Nivå {level}"),
    }
}

pub(crate) struct SummaryWidget<'a> {
    state: &'a AssessmentState,
}

impl<'a> SummaryWidget<'a> {
    pub(crate) fn new(state: &'a AssessmentState) -> Self {
        Self { state }
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let body = Style::default().fg(colors::SLATE_900);
        let muted = Style::default().fg(colors::SLATE_500);

        let label = self.state.identity();
        let title = if label.is_empty() {
            Line::styled(LABEL_PLACEHOLDER, Style::default().fg(colors::SLATE_400))
        } else {
            Line::styled(
                label.to_string(),
                Style::default()
                    .fg(colors::INDIGO)
                    .add_modifier(Modifier::BOLD),
            )
        };

        let mut lines = vec![title, Line::styled(CAPTION, muted), Line::default()];

        for role in Role::ALL {
            let selection = self.state.selection(role);
            let value_style = if selection.is_started() {
                body.add_modifier(Modifier::BOLD)
            } else {
                muted
            };
            lines.push(spread(
                Span::styled(role.title(), body),
                Span::styled(level_text(selection), value_style),
                width,
            ));
            lines.push(bar_line(
                overall_role_ratio(self.state, role),
                width,
                colors::INDIGO,
                colors::SLATE_200,
            ));
        }
        lines.push(Line::default());

        for category in CategoryId::ALL {
            let progress = category_progress(self.state, category);
            let started = is_started(self.state, category);
            let style = if started { body } else { muted };
            let mut title = spread(
                Span::styled(category.category().title, style),
                Span::styled(format!("{progress:.0}%"), style),
                width,
            );
            let mut bar = bar_line(progress / 100.0, width, colors::EMERALD, colors::SLATE_200);
            if !started {
                title = title.patch_style(Modifier::DIM);
                bar = bar.patch_style(Modifier::DIM);
            }
            lines.push(title);
            lines.push(bar);
        }
        lines.push(Line::default());
        lines.push(Line::styled(ATTRIBUTION, Style::default().fg(colors::SLATE_400)).centered());
        lines
    }
}

impl Widget for SummaryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::SLATE_200))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(colors::WHITE).fg(colors::SLATE_900));
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.lines(inner.width)).render(inner, buf);
    }
}

/// Render the panel at full size into a buffer of its own, independent of
/// how much of it fits on the terminal.
pub(crate) fn export_region(state: &AssessmentState) -> ExportRegion {
    let area = Rect::new(0, 0, SUMMARY_WIDTH, SUMMARY_HEIGHT);
    let mut buf = Buffer::empty(area);
    SummaryWidget::new(state).render(area, &mut buf);
    ExportRegion::from_buffer(buf)
}

/// `left` and `right` on one line, pushed to opposite edges of `width`.
fn spread(left: Span<'static>, right: Span<'static>, width: u16) -> Line<'static> {
    let gap = usize::from(width)
        .saturating_sub(left.width() + right.width())
        .max(1);
    Line::from(vec![left, Span::raw(" ".repeat(gap)), right])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use pretty_assertions::assert_eq;

    fn render(state: &AssessmentState) -> Buffer {
        let area = Rect::new(0, 0, SUMMARY_WIDTH, SUMMARY_HEIGHT);
        let mut buf = Buffer::empty(area);
        SummaryWidget::new(state).render(area, &mut buf);
        buf
    }

    #[test]
    fn empty_session_shows_placeholder_and_unstarted_roles() {
        let text = buffer_text(&render(&AssessmentState::new()));
        assert!(text.contains(LABEL_PLACEHOLDER), "{text}");
        assert!(text.contains(CAPTION));
        assert_eq!(text.matches(NOT_STARTED).count(), 3);
        assert!(text.contains(ATTRIBUTION));
    }

    #[test]
    fn selected_levels_and_progress_are_listed() {
        let mut state = AssessmentState::with_identity("Exempel skola");
        state.select_level(Role::Librarian, 5);
        for index in [0, 3, 7] {
            state.toggle_item(CategoryId::Mik, index);
        }
        let text = buffer_text(&render(&state));
        assert!(text.contains("Exempel skola"));
        assert!(!text.contains(LABEL_PLACEHOLDER));
        assert!(text.contains("Nivå 5"));
        assert_eq!(text.matches(NOT_STARTED).count(), 2);
        assert!(text.contains("19%"), "{text}");
    }

    #[test]
    fn role_bar_is_proportional_to_own_scale() {
        let mut state = AssessmentState::new();
        state.select_level(Role::Teacher, 8);
        let buf = render(&state);
        let text = buffer_text(&buf);
        let bar_row = text
            .lines()
            .skip_while(|line| !line.contains(Role::Teacher.title()))
            .nth(1)
            .unwrap_or_default()
            .to_string();
        assert!(!bar_row.contains('░'), "{bar_row}");
        assert!(bar_row.contains('█'));
    }

    #[test]
    fn untouched_category_is_dimmed() {
        let buf = render(&AssessmentState::new());
        let text = buffer_text(&buf);
        let row = text
            .lines()
            .position(|line| line.contains(CategoryId::Culture.category().title))
            .unwrap() as u16;
        let cell = &buf[(3, row)];
        assert!(cell.modifier.contains(Modifier::DIM));
    }

    #[test]
    fn export_region_is_the_full_panel() {
        let state = AssessmentState::with_identity("Åby");
        let region = export_region(&state);
        assert_eq!((region.width(), region.height()), (SUMMARY_WIDTH, SUMMARY_HEIGHT));
        assert_eq!(region.text(), buffer_text(&render(&state)));
        assert!(region.text().contains(ATTRIBUTION));
    }

    #[test]
    fn panel_fits_its_content() {
        let state = AssessmentState::new();
        let lines = SummaryWidget::new(&state).lines(SUMMARY_WIDTH - 4);
        assert_eq!(lines.len() as u16 + 2, SUMMARY_HEIGHT);
    }
}
