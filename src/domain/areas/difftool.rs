use crate::domain::objects::outcome::ToolOutcome;
use std::path::{Component, Path};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// The facility's own message when the configured tool crashes mid-run. The
/// facility has already told the user at that point, so this signature is
/// suppressed instead of surfaced a second time.
pub const BENIGN_FAILURE_SIGNATURE: &str = "external diff died";

/// Invocation of the tool-chain's difftool facility. The facility resolves
/// the user's configured comparison program on its own; this side only
/// supplies two relative paths and a working directory.
pub struct Difftool {
    program: String,
    leading_args: Vec<String>,
    cleanup_delay: Duration,
}

impl Difftool {
    pub fn new() -> Self {
        Difftool {
            program: "git".to_string(),
            leading_args: vec![
                "difftool".to_string(),
                "--no-prompt".to_string(),
                "--no-index".to_string(),
            ],
            cleanup_delay: Duration::from_millis(1000),
        }
    }

    /// Substitute launcher for the facility, used when the host hands over
    /// an explicit tool invocation.
    pub fn with_command(program: impl Into<String>, leading_args: Vec<String>) -> Self {
        Difftool {
            program: program.into(),
            leading_args,
            cleanup_delay: Duration::from_millis(1000),
        }
    }

    /// Grace period between the tool reporting exit and scratch cleanup.
    /// The tool can report exit before the OS has released its handles on
    /// the scratch files; how long that takes depends on the platform, so
    /// the delay is a tunable rather than a constant.
    pub fn cleanup_delay(&self) -> Duration {
        self.cleanup_delay
    }

    pub fn set_cleanup_delay(&mut self, delay: Duration) {
        self.cleanup_delay = delay;
    }

    /// `path` relative to `root` with forward-slash separators on every
    /// platform, keeping the spawned command line portable. Scratch files
    /// live outside the root, so paths that are not under it are reached by
    /// walking up from the root with `..` components.
    pub fn relative_to(path: &Path, root: &Path) -> String {
        let mut root_components = root.components().peekable();
        let mut path_components = path.components().peekable();

        while let (Some(ahead), Some(behind)) = (root_components.peek(), path_components.peek()) {
            if ahead != behind {
                break;
            }
            root_components.next();
            path_components.next();
        }

        let mut parts = root_components
            .map(|_| "..".to_string())
            .collect::<Vec<_>>();
        parts.extend(path_components.map(|component| match component {
            Component::RootDir => String::new(),
            component => component.as_os_str().to_string_lossy().into_owned(),
        }));

        parts.join("/")
    }

    /// Launches the facility on the two paths and classifies the result.
    /// Launch failures come back as `Failed` rather than an error so the
    /// caller decides what to surface.
    pub async fn run(&self, path_a: &Path, path_b: &Path, root: &Path) -> ToolOutcome {
        let rel_a = Self::relative_to(path_a, root);
        let rel_b = Self::relative_to(path_b, root);

        tracing::debug!(
            tool = %self.program,
            a = %rel_a,
            b = %rel_b,
            root = %root.display(),
            "launching diff tool"
        );

        let child = Command::new(&self.program)
            .args(&self.leading_args)
            .arg(&rel_a)
            .arg(&rel_b)
            .current_dir(root)
            .stderr(Stdio::piped())
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(error) => {
                return ToolOutcome::Failed(format!("failed to launch diff tool: {error}"));
            }
        };

        // Child::wait settles exactly once, whichever of the OS completion
        // and exit signals arrives first.
        match child.wait_with_output().await {
            Ok(output) => {
                ToolOutcome::classify(output.status, &String::from_utf8_lossy(&output.stderr))
            }
            Err(error) => ToolOutcome::Failed(format!("failed to wait for diff tool: {error}")),
        }
    }
}

impl Default for Difftool {
    fn default() -> Self {
        Self::new()
    }
}
