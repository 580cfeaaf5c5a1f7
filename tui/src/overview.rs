//! Start screen: header with the school name field, the menu of roles and
//! categories, and the summary panel.

use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use resan_core::AssessmentState;
use resan_core::CategoryId;
use resan_core::Role;
use resan_core::progress::checked_count;
use resan_core::progress::is_complete;
use resan_core::progress::overall_role_ratio;
use resan_core::taxonomy::CHECKLIST_LEN;
use tui_input::Input;

use crate::colors;
use crate::progress_bar::bar_line;
use crate::summary::LABEL_PLACEHOLDER;
use crate::summary::SUMMARY_HEIGHT;
use crate::summary::SUMMARY_WIDTH;
use crate::summary::SummaryWidget;
use crate::summary::level_text;

pub(crate) const TITLE: &str = "Biblioteksresan";
pub(crate) const SUBTITLE: &str = "Hur långt har vi kommit?";
const NAME_PREFIX: &str = "Skola: ";
const MENU_BAR_WIDTH: u16 = 16;
const HEADER_HEIGHT: u16 = 4;

/// Side-by-side layout needs room for the menu next to the panel.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = SUMMARY_WIDTH + 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuEntry {
    Role(Role),
    Category(CategoryId),
}

pub(crate) const MENU: [MenuEntry; 7] = [
    MenuEntry::Role(Role::Librarian),
    MenuEntry::Role(Role::Teacher),
    MenuEntry::Role(Role::Principal),
    MenuEntry::Category(CategoryId::Mik),
    MenuEntry::Category(CategoryId::Reading),
    MenuEntry::Category(CategoryId::Culture),
    MenuEntry::Category(CategoryId::Democracy),
];

/// Draw the overview. Whatever part of the summary panel fits is shown; the
/// export renders its own full-size copy.
pub(crate) fn render(
    area: Rect,
    buf: &mut Buffer,
    state: &AssessmentState,
    cursor: usize,
    name_input: Option<&Input>,
) {
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);
    render_header(header, buf, state, name_input);

    let (menu, panel) = if body.width >= SIDE_BY_SIDE_MIN_WIDTH {
        let [menu, _, panel] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(SUMMARY_WIDTH),
        ])
        .areas(body);
        (menu, panel)
    } else {
        let menu_height = MENU.len() as u16 + 2;
        let [menu, panel] =
            Layout::vertical([Constraint::Length(menu_height), Constraint::Min(0)]).areas(body);
        (menu, panel)
    };
    render_menu(menu, buf, state, cursor);

    let summary = Rect {
        width: panel.width.min(SUMMARY_WIDTH),
        height: panel.height.min(SUMMARY_HEIGHT),
        ..panel
    };
    SummaryWidget::new(state).render(summary, buf);
}

fn render_header(area: Rect, buf: &mut Buffer, state: &AssessmentState, input: Option<&Input>) {
    let name_line = match input {
        Some(input) => editing_line(input),
        None if state.identity().is_empty() => Line::from(vec![
            Span::styled(NAME_PREFIX, Style::default().fg(colors::SLATE_500)),
            Span::styled(LABEL_PLACEHOLDER, Style::default().fg(colors::SLATE_400)),
        ]),
        None => Line::from(vec![
            Span::styled(NAME_PREFIX, Style::default().fg(colors::SLATE_500)),
            Span::raw(state.identity().to_string()),
        ]),
    };
    Paragraph::new(vec![
        Line::styled(
            TITLE,
            Style::default()
                .fg(colors::INDIGO)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(SUBTITLE, Style::default().fg(colors::SLATE_500)),
        name_line,
    ])
    .render(area, buf);
}

/// The name field while it is being edited, with a block cursor.
fn editing_line(input: &Input) -> Line<'static> {
    let value = input.value();
    let split = value
        .char_indices()
        .nth(input.cursor())
        .map_or(value.len(), |(idx, _)| idx);
    let (before, rest) = value.split_at(split);
    let mut rest_chars = rest.chars();
    let under_cursor = rest_chars.next().map_or(" ".to_string(), String::from);
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
    Line::from(vec![
        Span::styled(NAME_PREFIX, Style::default().fg(colors::INDIGO)),
        Span::raw(before.to_string()),
        Span::styled(under_cursor, cursor_style),
        Span::raw(rest_chars.as_str().to_string()),
    ])
}

fn render_menu(area: Rect, buf: &mut Buffer, state: &AssessmentState, cursor: usize) {
    let mut lines = Vec::with_capacity(MENU.len() + 1);
    for (idx, entry) in MENU.iter().enumerate() {
        if idx == Role::ALL.len() {
            lines.push(Line::default());
        }
        let selected = idx == cursor;
        let marker = if selected { "▸ " } else { "  " };
        let mut line = match *entry {
            MenuEntry::Role(role) => role_row(state, role, marker),
            MenuEntry::Category(category) => category_row(state, category, marker),
        };
        if selected {
            line = line.patch_style(Style::default().bg(colors::SLATE_100));
        }
        lines.push(line);
    }
    Paragraph::new(lines).render(area, buf);
}

fn role_row(state: &AssessmentState, role: Role, marker: &'static str) -> Line<'static> {
    let mut line = Line::from(vec![
        Span::styled(marker, Style::default().fg(colors::INDIGO)),
        Span::styled(
            format!("{:<26}", role.title()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    line.extend(
        bar_line(
            overall_role_ratio(state, role),
            MENU_BAR_WIDTH,
            colors::INDIGO,
            colors::SLATE_200,
        )
        .spans,
    );
    line.push_span(Span::styled(
        format!(" {}", level_text(state.selection(role))),
        Style::default().fg(colors::SLATE_500),
    ));
    line
}

fn category_row(
    state: &AssessmentState,
    category: CategoryId,
    marker: &'static str,
) -> Line<'static> {
    let count = checked_count(state, category);
    let mut line = Line::from(vec![
        Span::styled(marker, Style::default().fg(colors::INDIGO)),
        Span::raw(format!("{:<26}", category.category().title)),
    ]);
    line.extend(
        bar_line(
            count as f64 / CHECKLIST_LEN as f64,
            MENU_BAR_WIDTH,
            colors::EMERALD,
            colors::SLATE_200,
        )
        .spans,
    );
    line.push_span(Span::styled(
        format!(" {count}/{CHECKLIST_LEN}"),
        Style::default().fg(colors::SLATE_500),
    ));
    if is_complete(state, category) {
        line.push_span(Span::styled(" ✓", Style::default().fg(colors::EMERALD)));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::ATTRIBUTION;
    use crate::test_support::buffer_text;
    use pretty_assertions::assert_eq;

    fn render_to_text(width: u16, height: u16, state: &AssessmentState) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        render(area, &mut buf, state, 0, None);
        buffer_text(&buf)
    }

    /// Row and column of the panel's top-left corner.
    fn panel_origin(text: &str) -> (usize, usize) {
        text.lines()
            .enumerate()
            .find_map(|(row, line)| line.find('╭').map(|col| (row, line[..col].chars().count())))
            .unwrap()
    }

    #[test]
    fn header_and_menu_are_shown() {
        let text = render_to_text(80, 40, &AssessmentState::new());
        assert!(text.contains(TITLE));
        assert!(text.contains(SUBTITLE));
        for role in Role::ALL {
            assert!(text.contains(role.title()), "missing {role}");
        }
        for category in CategoryId::ALL {
            assert!(text.contains(category.category().title));
        }
        assert!(text.contains("▸ Bibliotekariens roll"));
    }

    #[test]
    fn summary_sits_below_menu_on_narrow_terminals() {
        let text = render_to_text(80, 40, &AssessmentState::new());
        let menu_height = MENU.len() + 2;
        assert_eq!(panel_origin(&text), (usize::from(HEADER_HEIGHT) + menu_height, 0));
        assert!(text.contains(ATTRIBUTION), "{text}");
    }

    #[test]
    fn summary_sits_beside_menu_on_wide_terminals() {
        let text = render_to_text(140, 30, &AssessmentState::new());
        let width = usize::from(SUMMARY_WIDTH);
        assert_eq!(panel_origin(&text), (usize::from(HEADER_HEIGHT), 140 - width));
    }

    #[test]
    fn completed_category_gets_a_mark() {
        let mut state = AssessmentState::new();
        for index in 0..CHECKLIST_LEN {
            state.toggle_item(CategoryId::Reading, index);
        }
        let text = render_to_text(140, 30, &state);
        let row = text
            .lines()
            .find(|line| line.contains(CategoryId::Reading.category().title))
            .unwrap_or_default();
        assert!(row.contains("16/16 ✓"), "{row}");
    }

    #[test]
    fn editing_shows_cursor_after_value() {
        let input = Input::new("Åby".to_string());
        let line = editing_line(&input);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Skola: Åby ");
    }
}
