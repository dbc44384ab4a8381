use clap::Parser;
use smarthome_advisor::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Plan(args) => cli::ask::plan(args).await,
        Command::Compat(args) => cli::ask::compat(args).await,
        Command::Troubleshoot(args) => cli::ask::troubleshoot(args).await,
        Command::CacheClear(args) => cli::ask::cache_clear(args).await,
    }
}
