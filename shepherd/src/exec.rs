//! Process-execution boundary.
//!
//! The backend only needs "run this argument vector, give me captured
//! stdout and an exit status". Keeping that behind a trait keeps backend
//! logic testable with scripted fake executors.

use std::path::Path;
use std::process::Command;

use shepherd_shared::{ShepherdError, ShepherdResult};

/// Captured result of one tool invocation.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: i32,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Best available diagnostic text, preferring stderr.
    pub fn diagnostic(&self) -> &str {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            stderr
        } else {
            self.stdout.trim()
        }
    }
}

/// Executes the cluster management tool with a prepared argument vector.
pub trait CommandExecutor {
    fn run(&self, binary: &Path, args: &[String]) -> ShepherdResult<ExecOutput>;
}

/// Executor backed by `std::process::Command`.
///
/// Blocking; timeout policy, if any, belongs to the caller's environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn run(&self, binary: &Path, args: &[String]) -> ShepherdResult<ExecOutput> {
        tracing::debug!("running {} {}", binary.display(), args.join(" "));

        let output = Command::new(binary).args(args).output().map_err(|e| {
            ShepherdError::Invocation(format!("failed to run {}: {}", binary.display(), e))
        })?;

        Ok(ExecOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            status: output.status.code().unwrap_or(-1),
        })
    }
}
