//! Byte storage for bitmap files.
//!
//! The edit operations never touch the filesystem themselves; a [`Storage`]
//! reads the buffer in and writes the result back out.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{EditError, Result};

/// Whole-file byte reads and writes.
pub trait Storage {
    /// Read the entire file at `path`.
    ///
    /// Fails with [`EditError::NotFound`], [`EditError::PermissionDenied`]
    /// or [`EditError::Io`].
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replace the file at `path` with `bytes`.
    ///
    /// Fails with [`EditError::Io`].
    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()>;
}

/// [`Storage`] over the local filesystem.
///
/// Writes create missing parent directories.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        check_path(path)?;
        let bytes = std::fs::read(path).map_err(|e| read_error(path, e))?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(bytes)
    }

    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        check_path(path)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        std::fs::write(path, bytes).map_err(|e| io_error(path, e))?;
        log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

fn check_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(EditError::InvalidInput {
            name: "path",
            value: String::new(),
            expected: "a non-empty path",
        });
    }
    Ok(())
}

/// Map a read failure onto the storage error kinds.
pub(crate) fn read_error(path: &Path, err: std::io::Error) -> EditError {
    match err.kind() {
        ErrorKind::NotFound => EditError::NotFound {
            path: PathBuf::from(path),
        },
        ErrorKind::PermissionDenied => EditError::PermissionDenied {
            path: PathBuf::from(path),
        },
        _ => io_error(path, err),
    }
}

pub(crate) fn io_error(path: &Path, source: std::io::Error) -> EditError {
    EditError::Io {
        path: PathBuf::from(path),
        source,
    }
}
