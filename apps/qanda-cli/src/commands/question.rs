use qanda_client::store::CredentialStore;
use qanda_client::types::AddQuestionRequest;
use qanda_client::{EventGateway, EventId, QuestionId, Session};

use super::{print_event_overview, require_creator_code};

pub async fn cmd_question_add<G: EventGateway, S: CredentialStore>(
    gateway: &G,
    session: &mut Session<S>,
    event: &str,
    text: &str,
    options: Vec<String>,
    correct: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_id = EventId::from(event);

    let added = gateway
        .add_question(
            &event_id,
            &AddQuestionRequest {
                text: text.to_string(),
                options,
                correct_answer: correct,
            },
        )
        .await?;

    println!("✓ Question added (ID: {})\n", added.question_id);

    let event = session.refresh_event_snapshot(gateway, &event_id).await?;
    print_event_overview(event, true);

    Ok(())
}

pub async fn cmd_question_delete<G: EventGateway, S: CredentialStore>(
    gateway: &G,
    session: &mut Session<S>,
    event: &str,
    question_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_id = EventId::from(event);
    let creator_code = require_creator_code(session, &event_id)?;

    gateway
        .delete_question(&event_id, &QuestionId::from(question_id), &creator_code)
        .await?;

    println!("✓ Question '{question_id}' deleted\n");

    let event = session.refresh_event_snapshot(gateway, &event_id).await?;
    print_event_overview(event, true);

    Ok(())
}
