//! Search command - runs retrieval only, no chat model involved

use super::{bootstrap, QueryArgs};
use crate::domain::RetrievalOutcome;

pub async fn run(args: QueryArgs) -> anyhow::Result<()> {
    let config = bootstrap(&args)?;
    let agent = crate::create_agent(&config).await?;

    let outcome = agent.retrieval().retrieve(&args.query_text()).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", render(&outcome));
    }

    Ok(())
}

fn render(outcome: &RetrievalOutcome) -> String {
    if outcome.is_empty() {
        return "No supporting context found".to_string();
    }

    format!(
        "Sections: {}\n\n{}",
        outcome.section_ids().join(", "),
        outcome.prompt()
    )
}
