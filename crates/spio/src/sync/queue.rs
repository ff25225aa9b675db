use crate::config::Config;
use crate::prelude::*;
use spio_core::sync::SyncReport;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// A request to re-index the vault.
#[derive(Debug, Clone)]
pub struct SyncJob {
    /// What caused the sync, for logging (usually the new filename).
    pub trigger: String,
}

impl SyncJob {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
        }
    }
}

/// Handle used by request handlers to schedule a sync without waiting on it.
#[derive(Debug, Clone)]
pub struct SyncQueue {
    sender: async_channel::Sender<SyncJob>,
}

/// The background task draining a [`SyncQueue`].
#[derive(Debug)]
pub struct SyncWorker {
    handle: JoinHandle<()>,
}

impl SyncQueue {
    /// Start a worker on the current runtime and return its queue.
    pub fn spawn(config: Arc<Config>) -> (SyncQueue, SyncWorker) {
        let (sender, receiver) = async_channel::unbounded();
        let handle = tokio::spawn(work(config, receiver));

        (SyncQueue { sender }, SyncWorker { handle })
    }

    /// Schedule a sync. Never blocks and never fails the caller.
    pub fn enqueue(&self, job: SyncJob) {
        if let Err(err) = self.sender.try_send(job) {
            log::warn!(
                "Sync worker is not running, dropping sync for {}",
                err.into_inner().trigger
            );
        }
    }

    /// Stop accepting jobs. The worker exits once the backlog is drained.
    pub fn close(&self) {
        self.sender.close();
    }
}

impl SyncWorker {
    /// Wait for the worker to finish. Call [`SyncQueue::close`] first.
    pub async fn join(self) {
        if let Err(e) = self.handle.await {
            log::error!("Sync worker crashed: {e}");
        }
    }
}

async fn work(config: Arc<Config>, receiver: async_channel::Receiver<SyncJob>) {
    while let Ok(job) = receiver.recv().await {
        // One run indexes every file written so far, so queued jobs collapse
        // into this one.
        let mut triggers = vec![job.trigger];
        while let Ok(next) = receiver.try_recv() {
            triggers.push(next.trigger);
        }

        log::info!("Running sync-vault for {}", triggers.join(", "));
        log_outcome(&super::run_sync(&config).await);
    }

    log::debug!("Sync worker stopped");
}

fn log_outcome(result: &Result<SyncReport, Error>) {
    match result {
        Ok(report) if report.success => {
            log::info!("Sync vault completed: {}", report.output.trim())
        }
        Ok(report) => log::warn!("Sync vault warning: {}", report.error.trim()),
        Err(Error::SyncTimeout(timeout)) => log::warn!("Sync vault timed out after {timeout:?}"),
        Err(e) => log::error!("Sync vault error: {e}"),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::testing;
    use spio_core::sync::SyncCommand;
    use tempfile::TempDir;

    fn counting_config(dir: &std::path::Path) -> Arc<Config> {
        Arc::new(testing::counting_config(dir))
    }

    #[tokio::test]
    async fn test_enqueued_job_runs_command() {
        let temp_dir = TempDir::new().unwrap();
        let (queue, worker) = SyncQueue::spawn(counting_config(temp_dir.path()));

        queue.enqueue(SyncJob::new("button_20240101_000000.tsx"));
        queue.close();
        worker.join().await;

        let runs = std::fs::read_to_string(temp_dir.path().join("runs.log")).unwrap();
        assert!(runs.lines().count() >= 1);
    }

    #[tokio::test]
    async fn test_backlog_is_drained_before_exit() {
        let temp_dir = TempDir::new().unwrap();
        let (queue, worker) = SyncQueue::spawn(counting_config(temp_dir.path()));

        for i in 0..5 {
            queue.enqueue(SyncJob::new(format!("file_{i}.tsx")));
        }
        queue.close();
        worker.join().await;

        // Jobs may collapse, but at least one run happens and none exceed the count.
        let runs = std::fs::read_to_string(temp_dir.path().join("runs.log")).unwrap();
        let count = runs.lines().count();
        assert!((1..=5).contains(&count));
    }

    #[tokio::test]
    async fn test_enqueue_after_close_does_not_panic() {
        let temp_dir = TempDir::new().unwrap();
        let (queue, worker) = SyncQueue::spawn(counting_config(temp_dir.path()));

        queue.close();
        queue.enqueue(SyncJob::new("late.tsx"));
        worker.join().await;

        assert!(!temp_dir.path().join("runs.log").exists());
    }

    #[tokio::test]
    async fn test_failing_command_does_not_stop_worker() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = testing::config(temp_dir.path());
        config.sync_command = SyncCommand::parse("spio-no-such-binary").unwrap();
        let (queue, worker) = SyncQueue::spawn(Arc::new(config));

        queue.enqueue(SyncJob::new("a.tsx"));
        queue.enqueue(SyncJob::new("b.tsx"));
        queue.close();
        worker.join().await;
    }
}
