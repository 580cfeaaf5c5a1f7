use std::path::Path;
use std::path::PathBuf;

use crate::ExportError;

pub const EXPORT_PREFIX: &str = "biblioteksresan";

/// Used when the identity label is empty.
pub const FALLBACK_LABEL: &str = "skola";

/// `biblioteksresan-<label>.pdf`, with `skola` standing in for an empty
/// label. Whitespace and letters are kept as typed; only characters that
/// cannot appear in a file name are replaced with `_`.
pub fn export_file_name(label: &str) -> String {
    let label = if label.is_empty() { FALLBACK_LABEL } else { label };
    let safe: String = label
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
        .collect();
    format!("{EXPORT_PREFIX}-{safe}.pdf")
}

/// Write `bytes` to `dir/file_name` atomically: a temporary sibling is
/// written first and renamed into place, so a reader never sees a partial
/// document. An existing file of the same name is replaced.
pub fn deliver(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(file_name);
    let tmp_path = dir.join(format!(".{file_name}.tmp"));

    std::fs::write(&tmp_path, bytes).map_err(|source| ExportError::Write {
        path: tmp_path.clone(),
        source,
    })?;
    if let Err(source) = std::fs::rename(&tmp_path, &path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(ExportError::Write { path, source });
    }
    Ok(path)
}
