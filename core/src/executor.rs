//! Bounded execution of allow-listed external networking commands.
//!
//! Commands are spawned as argument vectors, never through a shell, so
//! metacharacter injection is ruled out by construction. The binary is
//! chosen from [`CommandName`] only; user input never selects it. Every
//! argument is re-filtered through [`sanitize::sanitize_command_args`]
//! immediately before the spawn, even though callers only hand over
//! validated domain values. A command that outlives its deadline is killed
//! and reported as a timeout.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use netswitch_common::error::SwitchError;
use netswitch_common::sanitize;
use tokio::process::Command;
use tracing::{debug, warn};

/// The only binaries this tool is allowed to spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandName {
    Netsh,
    Ipconfig,
    Ping,
}

impl CommandName {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::Netsh => "netsh",
            CommandName::Ipconfig => "ipconfig",
            CommandName::Ping => "ping",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure,
    Timeout,
}

/// Captured result of one external invocation. Callers branch on `status`
/// and never assume success.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub status: CommandStatus,
    pub stdout: String,
    pub stderr: String,
    /// Sanitized diagnostic for failure outcomes.
    pub error: Option<String>,
}

impl CommandOutcome {
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            status: CommandStatus::Success,
            stdout,
            stderr,
            error: None,
        }
    }

    pub fn failure(stdout: String, stderr: String) -> Self {
        let detail = sanitize::sanitize_text(&stderr, 200);
        Self {
            status: CommandStatus::Failure,
            stdout,
            stderr,
            error: Some(detail),
        }
    }

    pub fn spawn_error(detail: &str) -> Self {
        Self {
            status: CommandStatus::Failure,
            stdout: String::new(),
            stderr: String::new(),
            error: Some(sanitize::sanitize_text(detail, 200)),
        }
    }

    pub fn timeout() -> Self {
        Self {
            status: CommandStatus::Timeout,
            stdout: String::new(),
            stderr: String::new(),
            error: None,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.status == CommandStatus::Success
    }

    pub fn timed_out(&self) -> bool {
        self.status == CommandStatus::Timeout
    }

    /// Lifts the outcome into the error taxonomy, keeping the successful
    /// capture when there is one.
    pub fn into_result(self, command: CommandName, timeout: Duration) -> Result<Self, SwitchError> {
        match self.status {
            CommandStatus::Success => Ok(self),
            CommandStatus::Timeout => Err(SwitchError::Timeout {
                command: command.as_str().to_string(),
                seconds: timeout.as_secs(),
            }),
            CommandStatus::Failure => Err(SwitchError::CommandFailure {
                command: command.as_str().to_string(),
                detail: self.error.unwrap_or_else(|| "command failed".to_string()),
            }),
        }
    }
}

/// Seam between the DNS core and the operating system. [`SystemRunner`]
/// implements it in production; tests substitute scripted mocks.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: CommandName, args: &[String], timeout: Duration)
        -> CommandOutcome;
}

/// Runs commands through `tokio::process` with a hard deadline. Dropping the
/// in-flight future on timeout kills the child (`kill_on_drop`).
#[derive(Debug, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(
        &self,
        command: CommandName,
        args: &[String],
        timeout: Duration,
    ) -> CommandOutcome {
        let args = sanitize::sanitize_command_args(args);
        debug!("spawning `{}` with args {:?}", command.as_str(), args);

        let captured = Command::new(command.as_str())
            .args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        match tokio::time::timeout(timeout, captured).await {
            Ok(Ok(output)) => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                if output.status.success() {
                    CommandOutcome::success(stdout, stderr)
                } else {
                    warn!("`{}` exited with {}", command.as_str(), output.status);
                    CommandOutcome::failure(stdout, stderr)
                }
            }
            Ok(Err(err)) => {
                warn!("failed to spawn `{}`: {}", command.as_str(), err);
                CommandOutcome::spawn_error(&err.to_string())
            }
            Err(_) => {
                warn!(
                    "`{}` exceeded its {}s deadline, killed",
                    command.as_str(),
                    timeout.as_secs()
                );
                CommandOutcome::timeout()
            }
        }
    }
}
