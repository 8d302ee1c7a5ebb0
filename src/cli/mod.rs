//! CLI module for the crop RAG router
//!
//! Provides subcommands:
//! - `ask`: route a question and print the answer
//! - `search`: run retrieval only and print the assembled context

pub mod ask;
pub mod search;

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Crop RAG Router - answers questions, grounding crop questions in indexed documents
#[derive(Parser)]
#[command(name = "crop-rag-router")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Route a question and answer it
    Ask(QueryArgs),

    /// Show the context retrieval would inject for a question
    Search(QueryArgs),
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// The question, words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Override the number of sections kept by coarse search
    #[arg(long)]
    pub top_k_sections: Option<usize>,

    /// Override the number of chunks kept by fine search
    #[arg(long)]
    pub top_k_chunks: Option<usize>,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,
}

impl QueryArgs {
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }

    fn apply(&self, config: &mut AppConfig) {
        if let Some(k) = self.top_k_sections {
            config.retrieval.top_k_sections = k;
        }
        if let Some(k) = self.top_k_chunks {
            config.retrieval.top_k_chunks = k;
        }
    }
}

/// Load `.env` and configuration, apply flag overrides, install logging
fn bootstrap(args: &QueryArgs) -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load()?;
    args.apply(&mut config);
    logging::init_logging(&config.logging);

    Ok(config)
}
