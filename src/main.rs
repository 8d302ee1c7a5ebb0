use clap::Parser;
use crop_rag_router::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ask(args) => cli::ask::run(args).await,
        Command::Search(args) => cli::search::run(args).await,
    }
}
