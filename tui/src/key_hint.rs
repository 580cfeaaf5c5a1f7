//! Key bindings and how they are shown in hint lines.

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Span;

const CTRL_PREFIX: &str = "ctrl + ";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct KeyBinding {
    key: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyBinding {
    pub(crate) const fn new(key: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { key, modifiers }
    }

    /// True for a press or repeat of exactly this key and modifier set.
    pub(crate) fn is_press(self, event: KeyEvent) -> bool {
        self.key == event.code
            && self.modifiers == event.modifiers
            && matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

pub(crate) const fn plain(key: KeyCode) -> KeyBinding {
    KeyBinding::new(key, KeyModifiers::NONE)
}

pub(crate) const fn ctrl(key: KeyCode) -> KeyBinding {
    KeyBinding::new(key, KeyModifiers::CONTROL)
}

/// Ctrl or Alt chords never insert text into the name field.
pub(crate) fn has_ctrl_or_alt(mods: KeyModifiers) -> bool {
    mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

impl From<KeyBinding> for Span<'static> {
    fn from(binding: KeyBinding) -> Self {
        let prefix = if binding.modifiers.contains(KeyModifiers::CONTROL) {
            CTRL_PREFIX
        } else {
            ""
        };
        let key = match binding.key {
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Char(' ') => "space".to_string(),
            other => format!("{other}").to_ascii_lowercase(),
        };
        Span::styled(format!("{prefix}{key}"), key_hint_style())
    }
}

fn key_hint_style() -> Style {
    Style::default().bold()
}
