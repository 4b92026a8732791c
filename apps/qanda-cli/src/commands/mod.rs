pub mod answers;
pub mod event;
pub mod invite;
pub mod join;
pub mod question;
pub mod results;
pub mod status;

pub use answers::{cmd_answers_status, cmd_answers_submit};
pub use event::{cmd_access, cmd_create, cmd_types};
pub use invite::{cmd_invite_add, cmd_invite_delete, cmd_invite_list};
pub use join::cmd_join;
pub use question::{cmd_question_add, cmd_question_delete};
pub use results::cmd_results;
pub use status::{cmd_logout, cmd_status};

use qanda_client::store::CredentialStore;
use qanda_client::types::Event;
use qanda_client::{EventCredentials, EventId, Session};

/// Resolve the stored creator code for an event, refusing participants.
pub(crate) fn require_creator_code<S: CredentialStore>(
    session: &Session<S>,
    event_id: &EventId,
) -> Result<String, Box<dyn std::error::Error>> {
    match session.stored_event_credentials(event_id) {
        Some(EventCredentials::Creator { creator_code, .. }) => Ok(creator_code),
        _ => Err(format!(
            "no stored creator code for event '{event_id}'; run 'qanda access' first"
        )
        .into()),
    }
}

/// Print the event header and its questions. `show_answers` marks the
/// correct option and is reserved for creators.
pub(crate) fn print_event_overview(event: &Event, show_answers: bool) {
    println!("Event: {} (ID: {})", event.name, event.id);
    println!("Type:    {}", event.event_type);
    println!("Creator: {}", event.creator_username);
    println!();

    if event.questions.is_empty() {
        println!("No questions yet.");
        return;
    }

    println!("Questions:");
    for question in &event.questions {
        println!("  {}  {}", question.id, question.text);
        for (index, option) in question.options.iter().enumerate() {
            let marker = if show_answers && index == question.correct_answer {
                " *"
            } else {
                "  "
            };
            println!("    [{index}]{marker} {option}");
        }
    }
}

pub(crate) fn print_invites(event: &Event) {
    if event.invites.is_empty() {
        println!("No invites yet.");
    } else {
        println!("Invites:");
        for invite in &event.invites {
            println!("  {}  {}", invite.username, invite.invite_code);
        }
    }
}
