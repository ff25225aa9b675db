use crate::prelude::*;
use spio_core::paths::resolve_relative;
use spio_core::sync::{SyncCommand, DEFAULT_SYNC_COMMAND};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_KEY: &str = "spio-secret-key-2024";
pub const DEFAULT_AI_API_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_AI_MODEL: &str = "qwen2.5-coder:7b";
pub const DEFAULT_VAULT_PATH: &str = "../vault/raw-experiments";

const MODEL_TIMEOUT: Duration = Duration::from_secs(60);
const SYNC_TIMEOUT: Duration = Duration::from_secs(30);
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2048;

/// Settings shared by every subcommand. Each flag falls back to an
/// environment variable, then to a default.
#[derive(Debug, Clone, clap::Args)]
pub struct ConfigArgs {
    /// Shared secret expected as `Authorization: Bearer <key>`
    #[clap(
        long,
        env = "SPIO_API_KEY",
        global = true,
        default_value = DEFAULT_API_KEY,
        hide_default_value = true,
        hide_env_values = true
    )]
    pub api_key: String,

    /// Generate endpoint of the local model server
    #[clap(long, env = "AI_API_URL", global = true, default_value = DEFAULT_AI_API_URL)]
    pub ai_api_url: String,

    /// Model identifier sent with every request
    #[clap(long, env = "AI_MODEL", global = true, default_value = DEFAULT_AI_MODEL)]
    pub ai_model: String,

    /// Vault directory, relative to the service directory
    #[clap(long, env = "VAULT_PATH", global = true, default_value = DEFAULT_VAULT_PATH)]
    pub vault_path: String,

    /// Directory relative paths are resolved against (defaults to the current directory)
    #[clap(long, env = "SPIO_SERVICE_DIR", global = true)]
    pub service_dir: Option<PathBuf>,

    /// Directory the sync command runs in, relative to the service directory
    #[clap(long, env = "SPIO_PROJECT_ROOT", global = true, default_value = "..")]
    pub project_root: PathBuf,

    /// Command that indexes new vault files
    #[clap(long, env = "SPIO_SYNC_COMMAND", global = true, default_value = DEFAULT_SYNC_COMMAND)]
    pub sync_command: String,
}

/// Resolved configuration, built once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub ai_api_url: String,
    pub ai_model: String,
    /// The vault path as configured, reported by `/health`.
    pub vault_path: String,
    /// Absolute vault directory files are written to.
    pub vault_dir: PathBuf,
    pub project_root: PathBuf,
    pub sync_command: SyncCommand,
    pub model_timeout: Duration,
    pub sync_timeout: Duration,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Config {
    pub fn from_args(args: &ConfigArgs) -> Result<Self, Error> {
        let cwd = std::env::current_dir()
            .map_err(|e| Error::Config(format!("cannot read current directory: {e}")))?;
        let service_dir = match &args.service_dir {
            Some(dir) => resolve_relative(&cwd, dir),
            None => cwd,
        };

        Self::resolve(args, &service_dir)
    }

    fn resolve(args: &ConfigArgs, service_dir: &Path) -> Result<Self, Error> {
        if args.api_key.trim().is_empty() {
            return Err(Error::Config("API key must not be empty".to_string()));
        }

        Ok(Self {
            api_key: args.api_key.clone(),
            ai_api_url: args.ai_api_url.clone(),
            ai_model: args.ai_model.clone(),
            vault_path: args.vault_path.clone(),
            vault_dir: resolve_relative(service_dir, Path::new(&args.vault_path)),
            project_root: resolve_relative(service_dir, &args.project_root),
            sync_command: SyncCommand::parse(&args.sync_command).map_err(Error::Config)?,
            model_timeout: MODEL_TIMEOUT,
            sync_timeout: SYNC_TIMEOUT,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        })
    }
}
