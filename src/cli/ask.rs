//! Ask command - routes a question and prints the answer

use super::{bootstrap, QueryArgs};
use crate::domain::{AgentResponse, RetrievalOutcome};

pub async fn run(args: QueryArgs) -> anyhow::Result<()> {
    let config = bootstrap(&args)?;
    let agent = crate::create_agent(&config).await?;

    let response = agent.run(&args.query_text()).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render(&response));
    }

    Ok(())
}

fn render(response: &AgentResponse) -> String {
    let mut out = format!("{}\n", response.answer.trim_end());

    match &response.retrieval {
        Some(RetrievalOutcome::Context { chunks, .. }) => {
            out.push_str("\nSources:\n");
            for scored in chunks {
                let meta = &scored.record.metadata;
                out.push_str(&format!(
                    "  - {} / {} ({:.3})\n",
                    meta.source_document_id, meta.section_id, scored.score
                ));
            }
        }
        Some(RetrievalOutcome::Empty { .. }) => {
            out.push_str("\n(no supporting context found)\n");
        }
        None => {}
    }

    out
}
