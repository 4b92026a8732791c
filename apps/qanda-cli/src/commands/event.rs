use qanda_client::store::CredentialStore;
use qanda_client::types::{CreateEventRequest, CreatorAccessRequest};
use qanda_client::{EventGateway, Session};

use super::{print_event_overview, print_invites};

pub async fn cmd_types<G: EventGateway>(gateway: &G) -> Result<(), Box<dyn std::error::Error>> {
    let types = gateway.list_event_types().await?;

    if types.is_empty() {
        println!("The server offers no event types.");
    } else {
        println!("Event types:");
        for event_type in types {
            println!("  {event_type}");
        }
    }

    Ok(())
}

pub async fn cmd_create<G: EventGateway, S: CredentialStore>(
    gateway: &G,
    session: &mut Session<S>,
    name: &str,
    event_type: &str,
    username: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let created = gateway
        .create_event(&CreateEventRequest {
            name: name.to_string(),
            event_type: event_type.to_string(),
            creator_username: username.to_string(),
        })
        .await?;

    session.set_username(Some(username))?;
    session.set_creator_code(Some(&created.creator_code))?;
    session.remember_creator_event(&created.event_id, name, &created.creator_code)?;

    println!("✓ Event created!\n");
    println!("Name:         {name}");
    println!("Event ID:     {}", created.event_id);
    println!("Creator code: {}", created.creator_code);
    println!("\nKeep the creator code safe; it is the only way back into the dashboard.");
    println!("Invite participants with: qanda invite add --event {} <username>", created.event_id);

    Ok(())
}

pub async fn cmd_access<G: EventGateway, S: CredentialStore>(
    gateway: &G,
    session: &mut Session<S>,
    event_name: &str,
    code: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    session.hydrate();
    let creator_code = match code {
        Some(code) => code.to_string(),
        None => session
            .creator_code()
            .map(str::to_owned)
            .ok_or("no stored creator code; pass --code")?,
    };

    let event = gateway
        .creator_access(&CreatorAccessRequest {
            event_name: event_name.to_string(),
            creator_code: creator_code.clone(),
        })
        .await?;

    session.set_creator_code(Some(&creator_code))?;
    session.remember_creator_event(&event.id, &event.name, &creator_code)?;

    println!("✓ Access granted!\n");
    print_event_overview(&event, true);
    println!();
    print_invites(&event);

    session.set_event_snapshot(Some(event));

    Ok(())
}
