//! Root of the `resan-core` library.
//!
//! Holds everything about a self-assessment session that is independent of
//! how it is shown: the static taxonomies, the in-memory selection state, the
//! values derived from it, and the layered configuration.

// Prevent accidental direct writes to stdout/stderr in library code. All
// user-visible output must go through the TUI or the tracing stack.
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod config;
pub mod progress;
pub mod state;
pub mod taxonomy;

pub use config::ConfigError;
pub use config::ConfigLoader;
pub use config::ResanConfig;
pub use state::AssessmentState;
pub use state::LevelSelection;
pub use taxonomy::CATEGORY_COUNT;
pub use taxonomy::CHECKLIST_LEN;
pub use taxonomy::CategoryId;
pub use taxonomy::MaturityLevel;
pub use taxonomy::PracticeCategory;
pub use taxonomy::Role;
