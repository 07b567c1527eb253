//! Whole-file read and write-after-compute helpers.
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Replace `path` with `text` via a temp file in the same directory.
///
/// The target is only renamed over once the temp file holds the full text, so
/// an interrupted run leaves the original file intact. Symlinks are resolved
/// first so the linked file is rewritten and the link itself survives.
/// Existing permissions are carried over to the new file.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    let resolved =
        fs::canonicalize(path).with_context(|| format!("resolve {}", path.display()))?;
    let dir = resolved.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&resolved)
        .with_context(|| format!("stat {}", resolved.display()))?
        .permissions();

    let mut temp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    temp.write_all(text.as_bytes())
        .with_context(|| format!("write temp file for {}", path.display()))?;
    temp.as_file()
        .sync_all()
        .with_context(|| format!("sync temp file for {}", path.display()))?;
    temp.as_file()
        .set_permissions(permissions)
        .with_context(|| format!("copy permissions to {}", path.display()))?;
    temp.persist(&resolved)
        .with_context(|| format!("replace {}", resolved.display()))?;
    tracing::debug!(
        path = %path.display(),
        resolved = %resolved.display(),
        bytes = text.len(),
        "wrote document"
    );
    Ok(())
}
