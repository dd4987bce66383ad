use crate::domain::areas::difftool::BENIGN_FAILURE_SIGNATURE;
use crate::domain::areas::launcher::{Launcher, RunState};
use crate::domain::objects::comparison::ComparisonView;
use crate::domain::objects::content_source::ContentSource;
use crate::domain::objects::outcome::ToolOutcome;
use anyhow::bail;
use std::io::Write;

impl Launcher {
    /// Opens the configured external diff tool on the two sides of the
    /// currently active comparison view.
    ///
    /// Runs are single-flight: scratch files of two overlapping runs would
    /// share the naming scheme, and one run's cleanup could delete files the
    /// other still has open, so a second invocation is rejected outright
    /// until the first run's files are fully gone.
    pub async fn open_difftool(&self) -> anyhow::Result<()> {
        if self.state() == RunState::Running {
            writeln!(self.writer(), "A difftool session is already in progress")?;
            return Ok(());
        }

        let Some(tab) = self.editor().active_diff_tab() else {
            writeln!(self.writer(), "No diff view is currently active")?;
            return Ok(());
        };
        let Some(view) = ComparisonView::classify(&tab) else {
            writeln!(self.writer(), "The active tab is not comparing two files")?;
            return Ok(());
        };

        self.set_state(RunState::Running);
        let result = self.stage_and_invoke(&view).await;

        // The tool can report exit before the OS has released its handles on
        // the scratch files; deleting right away races that release, so the
        // sweep waits out the grace period first. The running flag drops only
        // after the sweep, so a follow-up run cannot collide with leftovers.
        tokio::time::sleep(self.difftool().cleanup_delay()).await;
        self.scratch().cleanup().await;
        self.set_state(RunState::Idle);

        result
    }

    async fn stage_and_invoke(&self, view: &ComparisonView) -> anyhow::Result<()> {
        let (original, modified) = view.sides();

        let original_text = ContentSource::new(original).read_text(self.editor()).await;
        let modified_text = ContentSource::new(modified).read_text(self.editor()).await;

        let original_path = self
            .scratch()
            .stage(&original_text, original, "original_")
            .await?;
        let modified_path = self
            .scratch()
            .stage(&modified_text, modified, "modified_")
            .await?;

        let Some(root) = self.scm().repository_roots().into_iter().next() else {
            bail!("no repository found to run the diff tool in");
        };

        match self
            .difftool()
            .run(&original_path, &modified_path, &root)
            .await
        {
            ToolOutcome::Success | ToolOutcome::UserCancelled => Ok(()),
            ToolOutcome::Failed(reason) if reason.contains(BENIGN_FAILURE_SIGNATURE) => {
                // The facility already reported this one to the user itself.
                tracing::debug!(%reason, "diff tool failure suppressed");
                Ok(())
            }
            ToolOutcome::Failed(reason) => bail!("{reason}"),
        }
    }
}
