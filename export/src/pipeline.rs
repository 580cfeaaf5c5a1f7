use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;
use tracing::info;

use crate::ExportError;
use crate::ExportRegion;
use crate::Palette;
use crate::deliver::deliver;
use crate::deliver::export_file_name;
use crate::encode::encode_jpeg;
use crate::package::package_pdf;
use crate::raster::rasterize;

/// A finished export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub path: PathBuf,
    /// Page size in PDF units, equal to the bitmap's pixel size.
    pub width: u32,
    pub height: u32,
    pub size_bytes: usize,
}

/// Runs raster, encode, package and deliver in that order.
#[derive(Debug, Clone)]
pub struct Exporter {
    export_dir: PathBuf,
    palette: Palette,
}

impl Exporter {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
            palette: Palette::default(),
        }
    }

    /// Export `region` as `biblioteksresan-<label>.pdf`.
    ///
    /// With no region mounted this is a no-op returning `Ok(None)`. Any
    /// failing step aborts the run and no file is left under the final name.
    pub async fn export(
        &self,
        region: Option<ExportRegion>,
        label: &str,
    ) -> Result<Option<ExportedDocument>, ExportError> {
        let Some(region) = region else {
            debug!("no summary region mounted; nothing to export");
            return Ok(None);
        };
        let started = Instant::now();
        let palette = self.palette;
        let cells = (region.width(), region.height());

        let bitmap = tokio::task::spawn_blocking(move || rasterize(&region, palette)).await??;
        let (width, height) = bitmap.dimensions();
        let jpeg = tokio::task::spawn_blocking(move || encode_jpeg(&bitmap)).await??;
        let pdf = package_pdf(jpeg)?;

        let file_name = export_file_name(label);
        let path = deliver(&self.export_dir, &file_name, &pdf)?;
        info!(
            path = %path.display(),
            cells = ?cells,
            width,
            height,
            bytes = pdf.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "exported summary"
        );
        Ok(Some(ExportedDocument {
            path,
            width,
            height,
            size_bytes: pdf.len(),
        }))
    }
}
