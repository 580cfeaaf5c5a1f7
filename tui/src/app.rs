use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::mpsc::channel;
use std::time::Duration;
use std::time::Instant;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use resan_core::AssessmentState;
use resan_core::CategoryId;
use resan_core::Role;
use resan_export::Exporter;
use tokio::runtime::Handle;
use tracing::error;
use tracing::info;
use tui_input::Input;
use tui_input::InputRequest;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::category_view;
use crate::footer::FOOTER_HEIGHT;
use crate::footer::FooterMode;
use crate::footer::FooterProps;
use crate::footer::render_footer;
use crate::key_hint;
use crate::key_hint::has_ctrl_or_alt;
use crate::overview;
use crate::overview::MENU;
use crate::overview::MenuEntry;
use crate::role_view;
use crate::summary;

const QUIT: key_hint::KeyBinding = key_hint::ctrl(KeyCode::Char('c'));

/// Which screen is showing. Cursor positions live next to it in [`App`]
/// and are never written back to the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Overview,
    Role(Role),
    Category(CategoryId),
}

/// How the last export ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(PathBuf),
    /// Export was requested away from the overview.
    NothingToExport,
    Failed(String),
}

impl ExportOutcome {
    fn status_text(&self) -> String {
        match self {
            ExportOutcome::Written(path) => format!("Exporterade {}", path.display()),
            ExportOutcome::NothingToExport => {
                "Inget att exportera: gå till översikten först".to_string()
            }
            ExportOutcome::Failed(reason) => format!("Exporten misslyckades: {reason}"),
        }
    }
}

pub struct App {
    state: AssessmentState,
    screen: Screen,
    menu_cursor: usize,
    level_cursor: usize,
    item_cursor: usize,
    name_input: Option<Input>,
    status: Option<String>,

    exporter: Exporter,
    runtime: Handle,
    export_in_flight: bool,
    last_export: Option<ExportOutcome>,

    app_event_tx: AppEventSender,
    app_event_rx: Receiver<AppEvent>,
    should_quit: bool,
}

impl App {
    /// `runtime` runs the exports; the UI loop itself stays on the calling
    /// thread.
    pub fn new(state: AssessmentState, exporter: Exporter, runtime: Handle) -> Self {
        let (tx, rx) = channel();
        Self {
            state,
            screen: Screen::Overview,
            menu_cursor: 0,
            level_cursor: 0,
            item_cursor: 0,
            name_input: None,
            status: None,
            exporter,
            runtime,
            export_in_flight: false,
            last_export: None,
            app_event_tx: AppEventSender::new(tx),
            app_event_rx: rx,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_exporting(&self) -> bool {
        self.export_in_flight
    }

    pub fn last_export(&self) -> Option<&ExportOutcome> {
        self.last_export.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn event_sender(&self) -> AppEventSender {
        self.app_event_tx.clone()
    }

    /// Draw until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            let event = self.app_event_rx.recv()?;
            self.handle_event(event);
            self.drain_events();
        }
        Ok(())
    }

    /// Handle one key press and whatever it triggers.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_event(AppEvent::Key(key));
        self.drain_events();
    }

    /// Block until the running export reports back or `timeout` passes.
    pub fn wait_for_export(&mut self, timeout: Duration) -> Option<&ExportOutcome> {
        let deadline = Instant::now() + timeout;
        while self.export_in_flight {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.app_event_rx.recv_timeout(remaining) {
                Ok(event) => self.handle_event(event),
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return None,
            }
        }
        self.last_export.as_ref()
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.app_event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let [main, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
                .areas(frame.area());
        let buf = frame.buffer_mut();

        let mode = match self.screen {
            Screen::Overview => {
                overview::render(
                    main,
                    buf,
                    &self.state,
                    self.menu_cursor,
                    self.name_input.as_ref(),
                );
                FooterMode::Overview
            }
            Screen::Role(role) => {
                role_view::render(main, buf, &self.state, role, self.level_cursor);
                FooterMode::Role
            }
            Screen::Category(category) => {
                category_view::render(main, buf, &self.state, category, self.item_cursor);
                FooterMode::Category
            }
        };
        let mode = if self.name_input.is_some() {
            FooterMode::EditingName
        } else {
            mode
        };
        render_footer(
            footer,
            buf,
            FooterProps {
                mode,
                status: self.status.as_deref(),
            },
        );
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Paste(text) => self.on_paste(&text),
            AppEvent::Redraw => {}
            AppEvent::SelectLevel { role, level } => self.state.select_level(role, level),
            AppEvent::ToggleItem { category, index } => self.state.toggle_item(category, index),
            AppEvent::ExportRequested => self.start_export(),
            AppEvent::ExportFinished(outcome) => self.finish_export(outcome),
            AppEvent::Quit => self.should_quit = true,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if QUIT.is_press(key) {
            self.app_event_tx.send(AppEvent::Quit);
            return;
        }
        if self.name_input.is_some() {
            self.on_name_key(key);
            return;
        }
        if has_ctrl_or_alt(key.modifiers) {
            return;
        }
        match key.code {
            KeyCode::Char('q') => {
                self.app_event_tx.send(AppEvent::Quit);
                return;
            }
            KeyCode::Char('e') => {
                self.app_event_tx.send(AppEvent::ExportRequested);
                return;
            }
            _ => {}
        }
        match self.screen {
            Screen::Overview => self.on_overview_key(key),
            Screen::Role(role) => self.on_role_key(role, key),
            Screen::Category(category) => self.on_category_key(category, key),
        }
    }

    fn on_overview_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.menu_cursor = self.menu_cursor.saturating_sub(1),
            KeyCode::Down => self.menu_cursor = (self.menu_cursor + 1).min(MENU.len() - 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.open_menu_entry(),
            KeyCode::Char('n') => {
                self.name_input = Some(Input::new(self.state.identity().to_string()));
            }
            _ => {}
        }
    }

    fn open_menu_entry(&mut self) {
        let Some(entry) = MENU.get(self.menu_cursor) else {
            return;
        };
        match *entry {
            MenuEntry::Role(role) => {
                self.level_cursor = usize::from(self.state.selected_level(role).saturating_sub(1));
                self.screen = Screen::Role(role);
            }
            MenuEntry::Category(category) => {
                self.item_cursor = 0;
                self.screen = Screen::Category(category);
            }
        }
    }

    fn on_role_key(&mut self, role: Role, key: KeyEvent) {
        let levels = role.levels();
        match key.code {
            KeyCode::Up => self.level_cursor = self.level_cursor.saturating_sub(1),
            KeyCode::Down => {
                self.level_cursor = (self.level_cursor + 1).min(levels.len().saturating_sub(1));
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(level) = levels.get(self.level_cursor) {
                    self.app_event_tx.send(AppEvent::SelectLevel {
                        role,
                        level: level.level,
                    });
                }
            }
            KeyCode::Esc | KeyCode::Backspace => self.screen = Screen::Overview,
            _ => {}
        }
    }

    fn on_category_key(&mut self, category: CategoryId, key: KeyEvent) {
        let (dx, dy) = match key.code {
            KeyCode::Left => (-1, 0),
            KeyCode::Right => (1, 0),
            KeyCode::Up => (0, -1),
            KeyCode::Down => (0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.app_event_tx.send(AppEvent::ToggleItem {
                    category,
                    index: self.item_cursor,
                });
                return;
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.screen = Screen::Overview;
                return;
            }
            _ => return,
        };
        self.item_cursor = category_view::move_cursor(self.item_cursor, dx, dy);
    }

    fn on_name_key(&mut self, key: KeyEvent) {
        let Some(input) = self.name_input.as_mut() else {
            return;
        };
        let request = match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.name_input = None;
                return;
            }
            KeyCode::Char(c) if !has_ctrl_or_alt(key.modifiers) => InputRequest::InsertChar(c),
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            _ => return,
        };
        if input.handle(request).is_some() {
            self.state.set_identity(input.value());
        }
    }

    /// Pasted text goes into the name field when it is open. Line breaks are
    /// dropped so a trailing newline does not close the field.
    fn on_paste(&mut self, text: &str) {
        let Some(input) = self.name_input.as_mut() else {
            return;
        };
        let mut changed = false;
        for c in text.chars().filter(|c| !c.is_control()) {
            changed |= input.handle(InputRequest::InsertChar(c)).is_some();
        }
        if changed {
            self.state.set_identity(input.value());
        }
    }

    fn start_export(&mut self) {
        if self.export_in_flight {
            info!("export requested while another is running; ignoring");
            self.status = Some("En export pågår redan".to_string());
            return;
        }
        self.export_in_flight = true;
        self.status = Some("Exporterar…".to_string());

        // The summary is only mounted on the overview. It is rendered from
        // the state as it is now, not from the last frame.
        let region = match self.screen {
            Screen::Overview => Some(summary::export_region(&self.state)),
            Screen::Role(_) | Screen::Category(_) => None,
        };
        let label = self.state.identity().to_string();
        let exporter = self.exporter.clone();
        let tx = self.app_event_tx.clone();
        self.runtime.spawn(async move {
            let outcome = match exporter.export(region, &label).await {
                Ok(Some(document)) => ExportOutcome::Written(document.path),
                Ok(None) => ExportOutcome::NothingToExport,
                Err(err) => {
                    error!("export failed: {err}");
                    ExportOutcome::Failed(err.to_string())
                }
            };
            tx.send(AppEvent::ExportFinished(outcome));
        });
    }

    fn finish_export(&mut self, outcome: ExportOutcome) {
        self.export_in_flight = false;
        self.status = Some(outcome.status_text());
        self.last_export = Some(outcome);
    }
}
