use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ExportError, Result};

/// Write `bytes` to `path` through a temporary file in the same directory.
///
/// The target only appears once its full contents are on disk; on failure
/// the temporary file is removed and any existing target is left alone.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|err| ExportError::io(dir, err))?;

    let mut file = NamedTempFile::new_in(dir).map_err(|err| ExportError::io(dir, err))?;
    file.write_all(bytes)
        .and_then(|()| file.as_file().sync_all())
        .map_err(|err| ExportError::io(file.path(), err))?;
    file.persist(path)
        .map_err(|err| ExportError::io(path, err.error))?;
    Ok(())
}
