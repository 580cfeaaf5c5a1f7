//! Export of the summary region as a single-page PDF.
//!
//! The pipeline runs strictly in order:
//!
//! 1. [`raster::rasterize`] turns an [`ExportRegion`] snapshot into a bitmap
//!    at a fixed 2× supersampling factor,
//! 2. [`encode::encode_jpeg`] encodes it at maximum quality,
//! 3. [`package::package_pdf`] wraps it in a page sized to the bitmap,
//! 4. [`deliver::deliver`] writes the file atomically.
//!
//! [`Exporter`] drives the four steps and awaits the two blocking ones.

#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod deliver;
pub mod encode;
mod error;
mod glyph;
pub mod package;
mod palette;
mod pipeline;
pub mod raster;
mod region;

pub use deliver::export_file_name;
pub use error::ExportError;
pub use palette::Palette;
pub use pipeline::ExportedDocument;
pub use pipeline::Exporter;
pub use region::ExportRegion;
