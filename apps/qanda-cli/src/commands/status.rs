use qanda_client::store::CredentialStore;
use qanda_client::{resolve_route, EventGateway, Route, Session};

pub async fn cmd_status<G: EventGateway, S: CredentialStore>(
    gateway: &G,
    session: &mut Session<S>,
    route: &str,
    event_name: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let route = Route::parse(route);
    let resolution = resolve_route(&route, event_name, session, gateway).await?;

    println!("Screen: {}", resolution.view);
    if let Some(message) = resolution.message {
        println!("Note:   {message}");
    }
    if let Some(event) = session.event_snapshot() {
        println!("Event:  {} (ID: {})", event.name, event.id);
    }

    Ok(())
}

pub fn cmd_logout<S: CredentialStore>(
    session: &mut Session<S>,
) -> Result<(), Box<dyn std::error::Error>> {
    session.clear()?;
    println!("✓ Logged out");
    Ok(())
}
