use crossterm::event::KeyEvent;
use resan_core::CategoryId;
use resan_core::Role;

use crate::app::ExportOutcome;

/// Everything the UI loop reacts to. Terminal input, widget intents and
/// background results all arrive through the same channel.
#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    /// Bracketed paste from the terminal.
    Paste(String),

    /// Terminal was resized or needs a repaint.
    Redraw,

    SelectLevel { role: Role, level: u8 },

    ToggleItem { category: CategoryId, index: usize },

    ExportRequested,

    /// A background export has ended.
    ExportFinished(ExportOutcome),

    Quit,
}
