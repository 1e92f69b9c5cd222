// CLI-specific lint overrides
#![allow(clippy::print_stdout, reason = "CLI tools print to stdout")]
#![allow(clippy::print_stderr, reason = "CLI tools print to stderr")]

mod cli;
mod output;

use clap::Parser;
use cli::Cli;
use color_eyre::eyre::Result;
use rebase_ops::{ops, RunConfig};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Network resolution happens before any secrets or network access.
    let config = RunConfig::new(&cli.network, cli.secrets.into())?;

    if !cli.json {
        println!("Running {} on {}", cli.task, config.network.selector());
        if let Some(banner) = output::rebase_banner(&cli.task, &cli.args) {
            println!("{}", banner);
        }
    }

    let outcome = ops::run(&config, &cli.task, &cli.args).await?;
    output::print_outcome(&outcome, cli.json);

    Ok(())
}
