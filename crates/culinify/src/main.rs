//! Culinify command-line entry point.

use anyhow::Result;
use clap::{Parser, Subcommand};
use culinify_config::CulinifyConfig;
use log::info;
use std::path::PathBuf;

/// Recipe generation and history pipeline.
#[derive(Debug, Parser)]
#[command(name = "culinify", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the gateway server.
    Serve {
        /// Optional JSON5 config file; env vars override it.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    culinify::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config } => {
            let config = CulinifyConfig::load(config.as_deref())?;
            info!("starting culinify server");
            culinify_server::serve(config).await
        }
    }
}
