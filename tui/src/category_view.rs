use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use ratatui::widgets::Wrap;
use resan_core::AssessmentState;
use resan_core::CategoryId;
use resan_core::progress::category_progress;
use resan_core::progress::checked_count;
use resan_core::progress::completed_quarters;
use resan_core::taxonomy::CHECKLIST_LEN;

use crate::colors;
use crate::progress_bar::bar_line;
use crate::progress_bar::quarter_marker_line;

pub(crate) const PROGRESS_LABEL: &str = "Framsteg (fjärdedelar)";

/// Items per grid row; the board is square.
pub(crate) const GRID_COLUMNS: usize = 4;

const BAR_MAX_WIDTH: u16 = 48;

pub(crate) fn render(
    area: Rect,
    buf: &mut Buffer,
    state: &AssessmentState,
    category: CategoryId,
    cursor: usize,
) {
    let board = category.category();
    let [title, prompt, progress, grid] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .areas(area);

    Line::styled(
        board.title,
        Style::default()
            .fg(colors::INDIGO)
            .add_modifier(Modifier::BOLD),
    )
    .render(title, buf);
    Paragraph::new(board.prompt)
        .style(Style::default().fg(colors::SLATE_500))
        .wrap(Wrap { trim: true })
        .render(prompt, buf);

    let bar_width = progress.width.min(BAR_MAX_WIDTH);
    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(PROGRESS_LABEL, Style::default().fg(colors::SLATE_500)),
            Span::raw(format!(
                "  {}/{CHECKLIST_LEN}  ({}/4)",
                checked_count(state, category),
                completed_quarters(state, category)
            )),
        ]),
        bar_line(
            category_progress(state, category) / 100.0,
            bar_width,
            colors::EMERALD,
            colors::SLATE_200,
        ),
        quarter_marker_line(bar_width, colors::SLATE_400),
    ])
    .render(progress, buf);

    render_grid(grid, buf, state, category, cursor);
}

fn render_grid(
    area: Rect,
    buf: &mut Buffer,
    state: &AssessmentState,
    category: CategoryId,
    cursor: usize,
) {
    let items = &category.category().items;
    let rows = Layout::vertical([Constraint::Ratio(1, 4); 4]).split(area);
    for (row_idx, row) in rows.iter().enumerate() {
        let cells = Layout::horizontal([Constraint::Ratio(1, 4); GRID_COLUMNS]).split(*row);
        for (col_idx, cell) in cells.iter().enumerate() {
            let index = row_idx * GRID_COLUMNS + col_idx;
            let checked = state.is_checked(category, index);
            let focused = index == cursor;

            let (text_style, mark) = if checked {
                (
                    Style::default()
                        .bg(colors::EMERALD)
                        .fg(colors::WHITE)
                        .add_modifier(Modifier::BOLD),
                    "✓ ",
                )
            } else {
                (Style::default().fg(colors::SLATE_900), "")
            };
            let border_style = if focused {
                Style::default().fg(colors::INDIGO)
            } else {
                Style::default().fg(colors::SLATE_200)
            };
            let block = Block::bordered()
                .border_type(if focused {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(border_style)
                .style(text_style);
            Paragraph::new(format!("{mark}{}", items[index]))
                .wrap(Wrap { trim: true })
                .block(block)
                .render(*cell, buf);
        }
    }
}

/// Move the grid cursor by `(dx, dy)` cells, staying on the board.
pub(crate) fn move_cursor(cursor: usize, dx: isize, dy: isize) -> usize {
    let columns = GRID_COLUMNS as isize;
    let rows = (CHECKLIST_LEN / GRID_COLUMNS) as isize;
    let col = (cursor as isize % columns + dx).clamp(0, columns - 1);
    let row = (cursor as isize / columns + dy).clamp(0, rows - 1);
    (row * columns + col) as usize
}
