//! The "last selected file" record.
//!
//! A one-line text file holding the path of the bitmap later commands
//! operate on. A missing or blank record means nothing is selected.

use std::path::{Path, PathBuf};

use crate::error::{EditError, Result};
use crate::storage::{io_error, read_error};

/// Handle on a session record file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    record: PathBuf,
}

impl Session {
    /// Session backed by the record file at `record`.
    pub fn new(record: impl Into<PathBuf>) -> Self {
        Self {
            record: record.into(),
        }
    }

    /// Location of the record file.
    pub fn record_path(&self) -> &Path {
        &self.record
    }

    /// The selected path, if any.
    pub fn load(&self) -> Result<Option<PathBuf>> {
        let text = match std::fs::read_to_string(&self.record) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(read_error(&self.record, e)),
        };
        let line = text.trim();
        if line.is_empty() {
            return Ok(None);
        }
        Ok(Some(PathBuf::from(line)))
    }

    /// Remember `path` as the selected file.
    ///
    /// The file must exist; otherwise [`EditError::NotFound`] and the
    /// previous selection is kept.
    pub fn select(&self, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(EditError::NotFound {
                path: path.to_path_buf(),
            });
        }
        self.store(&path.to_string_lossy())?;
        log::info!("selected {}", path.display());
        Ok(())
    }

    /// Forget the selection.
    pub fn reset(&self) -> Result<()> {
        self.store("")?;
        log::info!("selection cleared");
        Ok(())
    }

    fn store(&self, line: &str) -> Result<()> {
        if let Some(parent) = self.record.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        std::fs::write(&self.record, line).map_err(|e| io_error(&self.record, e))
    }
}
