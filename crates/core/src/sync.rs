//! Shapes for the external `sync-vault` command: how it is parsed from
//! configuration and how its captured output is reported.

use serde::{Deserialize, Serialize};

/// Default indexing command, run from the project root.
pub const DEFAULT_SYNC_COMMAND: &str = "npm run sync-vault";

/// A program and its arguments, split shell-style from a single string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl SyncCommand {
    /// Split a command line such as `npm run sync-vault` or
    /// `sh -c "node lib/librarian.js"`.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = shlex::split(line)
            .ok_or_else(|| format!("Unbalanced quotes in sync command: {line}"))?
            .into_iter();

        let program = words
            .next()
            .ok_or_else(|| "Sync command is empty".to_string())?;

        Ok(Self {
            program,
            args: words.collect(),
        })
    }
}

impl std::fmt::Display for SyncCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Outcome of a completed sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Whether the command exited with status zero.
    pub success: bool,
    /// Captured standard output.
    pub output: String,
    /// Captured standard error.
    pub error: String,
    /// Exit code, `None` when the process was terminated by a signal.
    #[serde(rename = "exitCode")]
    pub exit_code: Option<i32>,
}

impl SyncReport {
    /// Build a report from raw process output. Invalid UTF-8 is replaced.
    pub fn from_output(exit_code: Option<i32>, stdout: &[u8], stderr: &[u8]) -> Self {
        Self {
            success: exit_code == Some(0),
            output: String::from_utf8_lossy(stdout).into_owned(),
            error: String::from_utf8_lossy(stderr).into_owned(),
            exit_code,
        }
    }
}
