use crate::domain::objects::location::SourceLocation;
use anyhow::Context;
use std::cell::RefCell;
use std::path::PathBuf;

/// Scratch-file store for difftool runs. Every file it writes is tracked and
/// removed exactly once: through `cleanup` at the end of the run, or through
/// the drop sweep if the host shuts down before that cleanup executes.
pub struct ScratchStore {
    dir: PathBuf,
    tracked: RefCell<Vec<PathBuf>>,
}

impl ScratchStore {
    pub fn new() -> Self {
        Self::in_dir(std::env::temp_dir())
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        ScratchStore {
            dir: dir.into(),
            tracked: RefCell::new(Vec::new()),
        }
    }

    /// Snapshots `content` into `{prefix}{base}_{token}{ext}` inside the
    /// scratch directory and tracks the path for cleanup. The millisecond
    /// token keeps names unique within a run while the base name and
    /// extension keep the external tool's side labels meaningful.
    pub async fn stage(
        &self,
        content: &str,
        origin: &SourceLocation,
        prefix: &str,
    ) -> anyhow::Result<PathBuf> {
        let token = chrono::Utc::now().timestamp_millis();
        let file_name = format!(
            "{prefix}{}_{token}{}",
            origin.base_name(),
            origin.extension()
        );
        let path = self.dir.join(file_name);

        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("failed to stage scratch file {}", path.display()))?;
        self.tracked.borrow_mut().push(path.clone());

        Ok(path)
    }

    pub fn tracked_paths(&self) -> Vec<PathBuf> {
        self.tracked.borrow().clone()
    }

    /// Best-effort removal of every tracked path. A failure on one path is
    /// logged and does not stop the sweep. Calling this again with nothing
    /// staged is a no-op.
    pub async fn cleanup(&self) {
        let paths = self.tracked.borrow_mut().split_off(0);

        for path in paths {
            if let Err(error) = tokio::fs::remove_file(&path).await {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "failed to remove scratch file"
                );
            }
        }
    }
}

impl Default for ScratchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScratchStore {
    // Shutdown sweep for runs whose deferred cleanup never executed.
    fn drop(&mut self) {
        for path in self.tracked.get_mut().drain(..) {
            if let Err(error) = std::fs::remove_file(&path) {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "failed to remove scratch file at shutdown"
                );
            }
        }
    }
}
