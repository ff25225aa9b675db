mod queue;
mod runner;

pub use queue::{SyncJob, SyncQueue, SyncWorker};
pub use runner::run_sync;

use crate::config::Config;
use crate::prelude::{eprintln, println, *};

#[derive(Debug, clap::Parser)]
#[command(name = "sync")]
#[command(about = "Run the sync-vault command once and report its output")]
pub struct App {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = Config::from_args(&global.config)?;

    if global.verbose {
        eprintln!("Sync command: {}", config.sync_command);
        eprintln!("Project root: {}", config.project_root.display());
        eprintln!();
    }

    let report = run_sync(&config).await?;

    if app.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        anstream::print!("{}", report.output);
        anstream::eprint!("{}", report.error);
    }

    if !report.success {
        return Err(eyre!(
            "sync-vault exited with status {}",
            report
                .exit_code
                .map_or_else(|| "unknown".to_string(), |code| code.to_string())
        ));
    }

    Ok(())
}
