use std::process::ExitStatus;

/// Classification of one external-tool invocation.
///
/// Exit code 1 is the user dismissing the tool mid-comparison, which
/// interactive comparison programs report as a matter of course; it is a
/// normal terminal outcome, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    Success,
    UserCancelled,
    Failed(String),
}

impl ToolOutcome {
    pub fn classify(status: ExitStatus, stderr: &str) -> Self {
        match status.code() {
            Some(0) => ToolOutcome::Success,
            Some(1) => ToolOutcome::UserCancelled,
            Some(code) => {
                let stderr = stderr.trim();
                if stderr.is_empty() {
                    ToolOutcome::Failed(format!("diff tool exited with code {code}"))
                } else {
                    ToolOutcome::Failed(format!("diff tool exited with code {code}: {stderr}"))
                }
            }
            None => ToolOutcome::Failed("diff tool was terminated by a signal".to_string()),
        }
    }
}
