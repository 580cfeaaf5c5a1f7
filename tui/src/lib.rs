//! Terminal front end for the school library self-assessment.

#![deny(clippy::print_stdout, clippy::print_stderr)]

mod app;
mod app_event;
mod app_event_sender;
mod category_view;
mod cli;
mod colors;
mod footer;
mod key_hint;
mod logging;
mod overview;
mod progress_bar;
mod role_view;
mod summary;
#[cfg(test)]
mod test_support;
mod tui;

use anyhow::Context;
use crossterm::event::Event;
use resan_core::AssessmentState;
use resan_export::Exporter;
use tracing::error;
use tracing::info;

pub use app::App;
pub use app::ExportOutcome;
pub use app::Screen;
pub use cli::Cli;
pub use summary::SUMMARY_HEIGHT;
pub use summary::SUMMARY_WIDTH;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;

pub fn run_main(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config().context("loading configuration")?;
    let _log_guard = logging::init(&config.log_dir)?;
    info!(
        home = %config.home.display(),
        export_dir = %config.export_dir.display(),
        "starting biblioteksresan"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("resan-export")
        .build()
        .context("starting async runtime")?;

    let state = AssessmentState::with_identity(config.school_name.unwrap_or_default());
    let mut app = App::new(
        state,
        Exporter::new(config.export_dir),
        runtime.handle().clone(),
    );

    let mut terminal = tui::init().context("initializing terminal")?;
    spawn_input_thread(app.event_sender());
    let result = app.run(&mut terminal);
    tui::restore().context("restoring terminal")?;

    info!("exiting");
    result
}

/// Forward terminal input to the app channel until the terminal closes.
fn spawn_input_thread(app_event_tx: AppEventSender) {
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(Event::Key(key)) => app_event_tx.send(AppEvent::Key(key)),
                Ok(Event::Paste(text)) => app_event_tx.send(AppEvent::Paste(text)),
                Ok(Event::Resize(..)) => app_event_tx.send(AppEvent::Redraw),
                Ok(_) => {}
                Err(e) => {
                    error!("failed to read terminal event: {e}");
                    break;
                }
            }
        }
    });
}
