use crate::config::Config;
use crate::model::OllamaClient;
use crate::pipeline;
use crate::prelude::{eprintln, println, *};
use crate::state::AppState;
use crate::sync::SyncQueue;
use spio_core::codegen::Language;
use std::sync::Arc;

#[derive(Debug, clap::Parser)]
#[command(name = "generate")]
#[command(about = "Generate a single file from a prompt and save it to the vault")]
pub struct App {
    /// What to build, e.g. "a pricing card with three tiers"
    prompt: String,

    /// Target language (tsx, ts, js, jsx, md)
    #[arg(short, long, default_value = "tsx")]
    language: String,

    /// Output the full result envelope as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = Arc::new(Config::from_args(&global.config)?);
    let language = Language::from_tag(&app.language);

    if global.verbose {
        eprintln!("Model endpoint: {}", config.ai_api_url);
        eprintln!("Model: {}", config.ai_model);
        eprintln!("Vault: {}", config.vault_dir.display());
        eprintln!();
    }

    let model = Arc::new(OllamaClient::new(&config)?);
    let (queue, worker) = SyncQueue::spawn(config.clone());
    let state = AppState::new(config, model, queue.clone());

    let outcome = pipeline::generate(&state, &app.prompt, language).await;

    // Wait for the queued sync so its log lines land before we exit.
    queue.close();
    worker.join().await;

    if app.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&pipeline::generation_result(outcome))?
        );
        return Ok(());
    }

    let artifact = outcome?;
    println!("{}", artifact.filepath.display());

    Ok(())
}
