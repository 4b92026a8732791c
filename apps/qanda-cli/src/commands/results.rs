use qanda_client::store::CredentialStore;
use qanda_client::{EventGateway, EventId, Session};

use super::require_creator_code;

pub async fn cmd_results<G: EventGateway, S: CredentialStore>(
    gateway: &G,
    session: &mut Session<S>,
    event: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_id = EventId::from(event);
    let creator_code = require_creator_code(session, &event_id)?;

    let results = gateway.results(&event_id, &creator_code).await?;

    if results.is_empty() {
        println!("No submissions yet.");
        return Ok(());
    }

    println!("Results:\n");
    for result in results {
        println!(
            "  {}  {}/{}",
            result.username, result.correct_answers, result.total_questions
        );
        for detail in &result.answers {
            let mark = if detail.selected_option == detail.correct_option {
                "✓"
            } else {
                "✗"
            };
            let selected = detail
                .options
                .get(detail.selected_option)
                .map(String::as_str)
                .unwrap_or("?");
            println!("    {mark} {} ({selected})", detail.question_text);
        }
        println!();
    }

    Ok(())
}
