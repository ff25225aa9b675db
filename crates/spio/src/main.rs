use crate::prelude::*;
use clap::Parser;

mod config;
mod error;
mod generate;
mod model;
mod pipeline;
mod prelude;
mod server;
mod state;
mod sync;
mod vault;

#[cfg(test)]
mod testing;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Turn prompts into React components and file them in the SPIO vault"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    #[clap(flatten)]
    config: crate::config::ConfigArgs,

    /// Whether to display additional information.
    #[clap(long, env = "SPIO_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the generate, chat and sync HTTP API
    Serve(crate::server::App),

    /// Generate a single file from a prompt and save it to the vault
    Generate(crate::generate::App),

    /// Run the sync-vault command and print its output
    Sync(crate::sync::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(sub_app) => crate::server::run(sub_app, app.global).await,
        SubCommands::Generate(sub_app) => crate::generate::run(sub_app, app.global).await,
        SubCommands::Sync(sub_app) => crate::sync::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
