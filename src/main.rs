mod align;
mod cli;
mod config;
mod derive;
mod deserialise;
mod download;
mod epw;
mod error;
mod grid;
mod logging;
mod parquet;
mod pipeline;
mod reading;
mod units;

use std::process;

use anyhow::Result;
use clap::Parser;
use cli::{command, Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Fetch(args) => {
            for summary in command::fetch(args, config.fetch).await? {
                println!(
                    "{}: {} saved, {} failed, {} files on disk",
                    summary.category, summary.saved, summary.failed, summary.on_disk
                );
            }
        }
        Commands::Locate(args) => println!("{}", command::locate(args, &config.synth)?),
        Commands::Synth(args) => {
            let filename = command::synth(args, config.synth)?;
            println!("File saved to `{}`", filename);
        }
    }

    Ok(())
}
