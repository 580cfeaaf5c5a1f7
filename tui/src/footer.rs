//! Status line and key hints at the bottom of every screen.

use crossterm::event::KeyCode;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

use crate::colors;
use crate::key_hint;
use crate::key_hint::KeyBinding;

pub(crate) const FOOTER_HEIGHT: u16 = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum FooterMode {
    Overview,
    Role,
    Category,
    EditingName,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct FooterProps<'a> {
    pub(crate) mode: FooterMode,
    pub(crate) status: Option<&'a str>,
}

struct Hint {
    key: KeyBinding,
    label: &'static str,
}

const fn hint(key: KeyBinding, label: &'static str) -> Hint {
    Hint { key, label }
}

const OVERVIEW_HINTS: &[Hint] = &[
    hint(key_hint::plain(KeyCode::Enter), " öppna"),
    hint(key_hint::plain(KeyCode::Char('n')), " skolans namn"),
    hint(key_hint::plain(KeyCode::Char('e')), " exportera PDF"),
    hint(key_hint::plain(KeyCode::Char('q')), " avsluta"),
];

const ROLE_HINTS: &[Hint] = &[
    hint(key_hint::plain(KeyCode::Enter), " välj nivå"),
    hint(key_hint::plain(KeyCode::Esc), " tillbaka"),
    hint(key_hint::plain(KeyCode::Char('q')), " avsluta"),
];

const CATEGORY_HINTS: &[Hint] = &[
    hint(key_hint::plain(KeyCode::Char(' ')), " markera"),
    hint(key_hint::plain(KeyCode::Esc), " tillbaka"),
    hint(key_hint::plain(KeyCode::Char('q')), " avsluta"),
];

const EDITING_HINTS: &[Hint] = &[
    hint(key_hint::plain(KeyCode::Enter), " klar"),
    hint(key_hint::ctrl(KeyCode::Char('c')), " avsluta"),
];

pub(crate) fn render_footer(area: Rect, buf: &mut Buffer, props: FooterProps<'_>) {
    let status = match props.status {
        Some(text) => Line::styled(text.to_string(), Style::default().fg(colors::INDIGO)),
        None => Line::default(),
    };
    Paragraph::new(vec![status, hints_line(props.mode)]).render(area, buf);
}

fn hints_line(mode: FooterMode) -> Line<'static> {
    let hints = match mode {
        FooterMode::Overview => OVERVIEW_HINTS,
        FooterMode::Role => ROLE_HINTS,
        FooterMode::Category => CATEGORY_HINTS,
        FooterMode::EditingName => EDITING_HINTS,
    };
    let mut spans: Vec<Span<'static>> = Vec::with_capacity(hints.len() * 3);
    for (idx, hint) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(" · ".dim());
        }
        spans.push(hint.key.into());
        spans.push(hint.label.dim());
    }
    Line::from(spans)
}
