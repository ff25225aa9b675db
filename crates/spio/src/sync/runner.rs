use crate::config::Config;
use crate::prelude::*;
use spio_core::sync::SyncReport;
use std::process::Stdio;

/// Run the sync command in the project root and wait for it.
///
/// A non-zero exit is still `Ok`; only spawn failures and timeouts are
/// errors. The child is killed when the timeout elapses.
pub async fn run_sync(config: &Config) -> Result<SyncReport, Error> {
    let command = &config.sync_command;

    let mut process = tokio::process::Command::new(&command.program);
    process
        .args(&command.args)
        .current_dir(&config.project_root)
        .stdin(Stdio::null())
        .kill_on_drop(true);

    let output = tokio::time::timeout(config.sync_timeout, process.output())
        .await
        .map_err(|_| Error::SyncTimeout(config.sync_timeout))?
        .map_err(|e| Error::SyncSpawn(format!("{command}: {e}")))?;

    Ok(SyncReport::from_output(
        output.status.code(),
        &output.stdout,
        &output.stderr,
    ))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::testing;
    use spio_core::sync::SyncCommand;
    use std::time::Duration;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_captures_stdout_and_stderr() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = testing::config(temp_dir.path());
        config.sync_command =
            SyncCommand::parse(r#"sh -c "echo indexed 2 files; echo note >&2""#).unwrap();

        let report = run_sync(&config).await.unwrap();

        assert!(report.success);
        assert_eq!(report.exit_code, Some(0));
        assert_eq!(report.output, "indexed 2 files\n");
        assert_eq!(report.error, "note\n");
    }

    #[tokio::test]
    async fn test_runs_in_project_root() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = testing::config(temp_dir.path());
        config.sync_command = SyncCommand::parse("pwd").unwrap();

        let report = run_sync(&config).await.unwrap();

        let expected = std::fs::canonicalize(temp_dir.path()).unwrap();
        let actual = std::fs::canonicalize(report.output.trim()).unwrap();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_reported_not_raised() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = testing::config(temp_dir.path());
        config.sync_command = SyncCommand::parse(r#"sh -c "echo broken >&2; exit 3""#).unwrap();

        let report = run_sync(&config).await.unwrap();

        assert!(!report.success);
        assert_eq!(report.exit_code, Some(3));
        assert_eq!(report.error, "broken\n");
    }

    #[tokio::test]
    async fn test_timeout() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = testing::config(temp_dir.path());
        config.sync_command = SyncCommand::parse("sleep 5").unwrap();
        config.sync_timeout = Duration::from_millis(100);

        let result = run_sync(&config).await;
        assert!(matches!(result, Err(Error::SyncTimeout(_))));
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = testing::config(temp_dir.path());
        config.sync_command = SyncCommand::parse("spio-no-such-binary --sync").unwrap();

        let result = run_sync(&config).await;
        assert!(matches!(result, Err(Error::SyncSpawn(_))));
    }
}
