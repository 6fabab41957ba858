//! Folder layout for inputs, outputs and the session record.
//!
//! Everything lives under one base directory:
//!
//! ```text
//! <base>/images/          inputs, selected by file name
//! <base>/edited_images/   outputs
//! <base>/data/imagepath.txt   session record
//! ```

use std::path::{Path, PathBuf};

use crate::error::{EditError, Result};
use crate::session::Session;
use crate::storage::io_error;

/// Folder holding input bitmaps.
pub const INPUT_DIR: &str = "images";
/// Folder receiving edited bitmaps.
pub const OUTPUT_DIR: &str = "edited_images";
/// Folder holding the session record.
pub const RECORD_DIR: &str = "data";
/// Session record file name.
pub const RECORD_FILE: &str = "imagepath.txt";

/// Resolved folder layout rooted at a base directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workspace {
    base: PathBuf,
}

impl Workspace {
    /// Workspace rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Workspace rooted next to the running executable.
    pub fn beside_executable() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|e| io_error(Path::new("<current exe>"), e))?;
        let base = exe.parent().map(Path::to_path_buf).unwrap_or_default();
        log::debug!("workspace base: {}", base.display());
        Ok(Self::new(base))
    }

    /// Base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path of input `name`.
    pub fn input_path(&self, name: &str) -> Result<PathBuf> {
        self.resolve(INPUT_DIR, name)
    }

    /// Path of output `name`.
    pub fn output_path(&self, name: &str) -> Result<PathBuf> {
        self.resolve(OUTPUT_DIR, name)
    }

    /// Path of the session record.
    pub fn record_path(&self) -> PathBuf {
        self.base.join(RECORD_DIR).join(RECORD_FILE)
    }

    /// Session backed by this workspace's record.
    pub fn session(&self) -> Session {
        Session::new(self.record_path())
    }

    fn resolve(&self, folder: &str, name: &str) -> Result<PathBuf> {
        if name.is_empty() {
            return Err(EditError::InvalidInput {
                name: "file name",
                value: String::new(),
                expected: "a non-empty file name",
            });
        }
        Ok(self.base.join(folder).join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let ws = Workspace::new("/srv/edit");
        assert_eq!(ws.base(), Path::new("/srv/edit"));
        assert_eq!(
            ws.input_path("cat.bmp").unwrap(),
            Path::new("/srv/edit/images/cat.bmp")
        );
        assert_eq!(
            ws.output_path("cat_grid.bmp").unwrap(),
            Path::new("/srv/edit/edited_images/cat_grid.bmp")
        );
        assert_eq!(ws.record_path(), Path::new("/srv/edit/data/imagepath.txt"));
        assert_eq!(ws.session().record_path(), ws.record_path());
    }

    #[test]
    fn empty_name_rejected() {
        let ws = Workspace::new("base");
        assert!(matches!(
            ws.input_path(""),
            Err(EditError::InvalidInput { name: "file name", .. })
        ));
        assert!(matches!(
            ws.output_path(""),
            Err(EditError::InvalidInput { .. })
        ));
    }

    #[test]
    fn beside_executable_has_base() {
        let ws = Workspace::beside_executable().unwrap();
        assert!(ws.base().is_dir());
    }
}
