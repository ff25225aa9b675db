//! Fixtures shared by unit tests.

use crate::config::Config;
use crate::model::ModelClient;
use crate::prelude::*;
use crate::state::AppState;
use crate::sync::{SyncQueue, SyncWorker};
use async_trait::async_trait;
use spio_core::sync::SyncCommand;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const API_KEY: &str = "test-key";

/// Config rooted in a temporary directory: the vault is `<dir>/vault` and the
/// sync command is a no-op run from `<dir>`.
pub fn config(dir: &Path) -> Config {
    Config {
        api_key: API_KEY.to_string(),
        ai_api_url: "http://127.0.0.1:9/api/generate".to_string(),
        ai_model: "test-model".to_string(),
        vault_path: "vault".to_string(),
        vault_dir: dir.join("vault"),
        project_root: dir.to_path_buf(),
        sync_command: SyncCommand::parse("true").unwrap(),
        model_timeout: Duration::from_secs(5),
        sync_timeout: Duration::from_secs(5),
        temperature: 0.7,
        max_tokens: 2048,
    }
}

/// Like [`config`], but each sync run appends a line to `<dir>/runs.log`.
pub fn counting_config(dir: &Path) -> Config {
    let mut config = config(dir);
    config.sync_command = SyncCommand::parse(r#"sh -c "echo run >> runs.log""#).unwrap();
    config
}

/// Number of sync runs recorded by a [`counting_config`] command.
pub fn sync_runs(dir: &Path) -> usize {
    std::fs::read_to_string(dir.join("runs.log"))
        .map(|runs| runs.lines().count())
        .unwrap_or(0)
}

type Reply = dyn Fn(&str) -> Result<String, Error> + Send + Sync;

/// Model double that records every request it receives.
pub struct StubModel {
    reply: Box<Reply>,
    calls: Mutex<Vec<String>>,
}

impl StubModel {
    pub fn replying(text: &str) -> Arc<Self> {
        let text = text.to_string();
        Self::with(move |_| Ok(text.clone()))
    }

    pub fn failing(message: &str) -> Arc<Self> {
        let message = message.to_string();
        Self::with(move |_| Err(Error::Model(message.clone())))
    }

    pub fn with(
        reply: impl Fn(&str) -> Result<String, Error> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            reply: Box::new(reply),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for StubModel {
    async fn complete(&self, request: &str) -> Result<String, Error> {
        self.calls.lock().unwrap().push(request.to_string());
        (self.reply)(request)
    }
}

pub fn state(dir: &Path, model: Arc<StubModel>) -> (Arc<AppState>, SyncWorker) {
    state_with(config(dir), model)
}

pub fn state_with(config: Config, model: Arc<StubModel>) -> (Arc<AppState>, SyncWorker) {
    let config = Arc::new(config);
    let (queue, worker) = SyncQueue::spawn(config.clone());
    (Arc::new(AppState::new(config, model, queue)), worker)
}
