use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::text::Text;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Paragraph;
use ratatui::widgets::StatefulWidget;
use ratatui::widgets::Widget;
use resan_core::AssessmentState;
use resan_core::Role;
use resan_core::progress::is_current;
use resan_core::progress::is_reached;

use crate::colors;
use crate::summary::level_text;

pub(crate) const PROMPT: &str = "Välj den nivå som bäst beskriver er idag.";
pub(crate) const CURRENT_MARK: &str = "●";
pub(crate) const REACHED_MARK: &str = "✓";

/// Draw `role`'s scale with the cursor on `cursor` (an index into
/// `role.levels()`).
pub(crate) fn render(
    area: Rect,
    buf: &mut Buffer,
    state: &AssessmentState,
    role: Role,
    cursor: usize,
) {
    let [header, list_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

    Paragraph::new(vec![
        Line::styled(
            role.title(),
            Style::default()
                .fg(colors::INDIGO)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(PROMPT, Style::default().fg(colors::SLATE_500)),
        Line::from(vec![
            Span::styled("Vald nivå: ", Style::default().fg(colors::SLATE_500)),
            Span::raw(level_text(state.selection(role))),
        ]),
    ])
    .render(header, buf);

    let items: Vec<ListItem> = role
        .levels()
        .iter()
        .map(|level| {
            let (mark, style) = if is_current(state, role, level.level) {
                (
                    CURRENT_MARK,
                    Style::default()
                        .fg(colors::INDIGO)
                        .add_modifier(Modifier::BOLD),
                )
            } else if is_reached(state, role, level.level) {
                (REACHED_MARK, Style::default().fg(colors::EMERALD))
            } else {
                (" ", Style::default())
            };
            ListItem::new(Text::from(vec![
                Line::styled(format!("{mark} Nivå {}: {}", level.level, level.title), style),
                Line::styled(
                    format!("    {}", level.description),
                    Style::default().fg(colors::SLATE_500),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_symbol("▸ ")
        .highlight_style(Style::default().bg(colors::SLATE_100));
    let mut list_state = ListState::default().with_selected(Some(cursor));
    StatefulWidget::render(list, list_area, buf, &mut list_state);
}
