use qanda_client::store::CredentialStore;
use qanda_client::types::{Answer, SubmitAnswersRequest};
use qanda_client::{EventCredentials, EventGateway, EventId, QuestionId, Session};

/// Parse `<question-id>=<option-index>` pairs from the command line.
fn parse_answers(raw: &[String]) -> Result<Vec<Answer>, Box<dyn std::error::Error>> {
    raw.iter()
        .map(|entry| {
            let (question_id, selected) = entry.split_once('=').ok_or_else(|| {
                format!("invalid answer '{entry}', expected <question-id>=<option-index>")
            })?;
            let selected_option: usize = selected
                .parse()
                .map_err(|_| format!("invalid option index in '{entry}'"))?;
            Ok(Answer {
                question_id: QuestionId::from(question_id),
                selected_option,
            })
        })
        .collect()
}

/// Resolve the participant username for an event: the per-event join record
/// wins, then the global stored username.
fn participant_username<S: CredentialStore>(
    session: &mut Session<S>,
    event_id: &EventId,
) -> Result<String, Box<dyn std::error::Error>> {
    session.hydrate();
    if let Some(EventCredentials::Participant { username, .. }) =
        session.stored_event_credentials(event_id)
    {
        return Ok(username);
    }
    session
        .username()
        .map(str::to_owned)
        .ok_or_else(|| "no username stored; run 'qanda join' first".into())
}

pub async fn cmd_answers_submit<G: EventGateway, S: CredentialStore>(
    gateway: &G,
    session: &mut Session<S>,
    event: &str,
    raw_answers: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let event_id = EventId::from(event);
    let username = participant_username(session, &event_id)?;

    // One submission per participant; whether the server would overwrite or
    // reject a resubmission is its own business.
    let status = gateway.submission_status(&event_id, &username).await?;
    if status.submitted {
        println!("You have already submitted answers for this event:");
        for answer in &status.answers {
            println!("  {}: option {}", answer.question_id, answer.selected_option);
        }
        return Ok(());
    }

    let answers = parse_answers(raw_answers)?;
    gateway
        .submit_answers(
            &event_id,
            &SubmitAnswersRequest {
                username: username.clone(),
                answers,
            },
        )
        .await?;

    println!("✓ Answers submitted!");

    if session.stored_event_credentials(&event_id).is_some() {
        session.refresh_event_snapshot(gateway, &event_id).await?;
    }

    Ok(())
}

pub async fn cmd_answers_status<G: EventGateway, S: CredentialStore>(
    gateway: &G,
    session: &mut Session<S>,
    event: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_id = EventId::from(event);
    let username = participant_username(session, &event_id)?;

    let status = gateway.submission_status(&event_id, &username).await?;

    if status.submitted {
        println!("Submitted. Your answers:");
        for answer in &status.answers {
            println!("  {}: option {}", answer.question_id, answer.selected_option);
        }
    } else {
        println!("Not submitted yet.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_answer_pairs() {
        let answers =
            parse_answers(&["q-1=0".to_string(), "q-2=2".to_string()]).unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].question_id, QuestionId::from("q-1"));
        assert_eq!(answers[1].selected_option, 2);
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(parse_answers(&["q-1".to_string()]).is_err());
        assert!(parse_answers(&["q-1=x".to_string()]).is_err());
    }
}
