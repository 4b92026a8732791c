use qanda_client::store::CredentialStore;
use qanda_client::types::InviteUserRequest;
use qanda_client::{EventGateway, EventId, Session};

use super::{print_invites, require_creator_code};

pub async fn cmd_invite_add<G: EventGateway, S: CredentialStore>(
    gateway: &G,
    session: &mut Session<S>,
    event: &str,
    username: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_id = EventId::from(event);

    let invite = gateway
        .invite_user(
            &event_id,
            &InviteUserRequest {
                username: username.to_string(),
            },
        )
        .await?;

    println!("✓ Invite created!\n");
    println!("Username:    {username}");
    println!("Invite code: {}", invite.invite_code);
    println!("Invite URL:  {}", invite.invite_url);
    if !invite.message.is_empty() {
        println!("\n{}", invite.message);
    }

    session.refresh_event_snapshot(gateway, &event_id).await?;

    Ok(())
}

pub async fn cmd_invite_delete<G: EventGateway, S: CredentialStore>(
    gateway: &G,
    session: &mut Session<S>,
    event: &str,
    invite_code: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_id = EventId::from(event);
    let creator_code = require_creator_code(session, &event_id)?;

    gateway
        .delete_invite(&event_id, invite_code, &creator_code)
        .await?;

    println!("✓ Invite '{invite_code}' revoked\n");

    let event = session.refresh_event_snapshot(gateway, &event_id).await?;
    print_invites(event);

    Ok(())
}

pub async fn cmd_invite_list<G: EventGateway, S: CredentialStore>(
    gateway: &G,
    session: &mut Session<S>,
    event: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_id = EventId::from(event);

    let event = session.refresh_event_snapshot(gateway, &event_id).await?;
    print_invites(event);

    Ok(())
}
