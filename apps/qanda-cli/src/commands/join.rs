use qanda_client::store::CredentialStore;
use qanda_client::types::JoinEventRequest;
use qanda_client::{EventGateway, Session};

use super::print_event_overview;

pub async fn cmd_join<G: EventGateway, S: CredentialStore>(
    gateway: &G,
    session: &mut Session<S>,
    event_name: &str,
    invite_code: &str,
    username: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let event = gateway
        .join_event(&JoinEventRequest {
            event_name: event_name.to_string(),
            invite_code: invite_code.to_string(),
            username: username.to_string(),
        })
        .await?;

    session.set_username(Some(username))?;
    session.remember_joined_event(&event.id, event_name, invite_code, username)?;

    println!("✓ Joined event!\n");
    print_event_overview(&event, false);
    println!(
        "\nSubmit answers with: qanda answers submit --event {} <question-id>=<option-index>",
        event.id
    );

    session.set_event_snapshot(Some(event));

    Ok(())
}
