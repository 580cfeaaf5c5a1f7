use std::path::PathBuf;

use thiserror::Error;

/// Failures of an export run. Any of these aborts the run before a file
/// appears under its final name.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The region has no cells to draw.
    #[error("export region is empty ({width}x{height} cells)")]
    EmptyRegion { width: u16, height: u16 },

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("PDF packaging failed: {0}")]
    Package(#[from] lopdf::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A blocking export step panicked or was cancelled by the runtime.
    #[error("export task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
