//! Writes an [`ExportResult`] to a filesystem port.
//!
//! The export engine itself performs no I/O; callers that want files on
//! disk hand the finished result to a `ProjectWriter`.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::ExportResult,
    error::PagesmithResult,
};

pub struct ProjectWriter {
    filesystem: Box<dyn Filesystem>,
    overwrite: bool,
}

impl ProjectWriter {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            overwrite: false,
        }
    }

    /// Allow writing into an existing directory.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Write every file under `root`, rolling back on failure.
    #[instrument(skip_all, fields(root = %root.display(), files = result.files.len()))]
    pub fn write(&self, result: &ExportResult, root: &Path) -> PagesmithResult<()> {
        let existed = self.filesystem.exists(root);
        if existed && !self.overwrite {
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        match self.write_all(result, root) {
            Ok(()) => {
                info!("Successfully wrote all files");
                Ok(())
            }
            Err(e) => {
                // Never delete a directory the caller already had.
                if !existed {
                    warn!("Write failed, attempting rollback");
                    self.rollback(root);
                }
                Err(e)
            }
        }
    }

    fn write_all(&self, result: &ExportResult, root: &Path) -> PagesmithResult<()> {
        self.filesystem.create_dir_all(root)?;

        for file in &result.files {
            let path = root.join(file.path.as_path());
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &file.content)?;
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
