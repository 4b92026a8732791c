//! View resolution: which screen the front end shows for the current
//! session and route.
//!
//! One canonical transition table lives in [`ViewFlow`]; the async
//! [`resolve_route`] driver walks it for a cold start, performing hydration
//! and the required event fetch along the way. Rendering itself is the
//! caller's job.

use tracing::debug;

use crate::error::ClientError;
use crate::gateway::EventGateway;
use crate::session::Session;
use crate::store::CredentialStore;
use crate::types::EventId;

/// A parsed navigation target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    CreateEvent,
    AccessEvent,
    JoinEvent,
    Dashboard,
    Event(EventId),
    Unknown(String),
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        match trimmed {
            "" | "/" => Route::Landing,
            "/create-event" => Route::CreateEvent,
            "/access-event" => Route::AccessEvent,
            "/join-event" => Route::JoinEvent,
            "/dashboard" => Route::Dashboard,
            other => match other.strip_prefix("/event/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Route::Event(EventId(id.to_owned()))
                }
                _ => Route::Unknown(path.to_owned()),
            },
        }
    }
}

/// The screens/modes the front end can be in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Anonymous,
    HydratingCredentials,
    AwaitingEventFetch,
    CreatorDashboard,
    ParticipantView,
    NotFound,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            View::Anonymous => "anonymous",
            View::HydratingCredentials => "hydrating-credentials",
            View::AwaitingEventFetch => "awaiting-event-fetch",
            View::CreatorDashboard => "creator-dashboard",
            View::ParticipantView => "participant-view",
            View::NotFound => "not-found",
        };
        f.write_str(name)
    }
}

/// The view state machine. Transitions that don't apply to the current
/// state are no-ops, so the machine is total.
#[derive(Clone, Debug, Default)]
pub struct ViewFlow {
    view: View,
}

impl Default for View {
    fn default() -> Self {
        View::Anonymous
    }
}

impl ViewFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// An event fetch is required exactly while awaiting it.
    pub fn requires_event_fetch(&self) -> bool {
        self.view == View::AwaitingEventFetch
    }

    /// App start: begin credential hydration.
    pub fn begin_hydration(&mut self) {
        if self.view == View::Anonymous {
            self.view = View::HydratingCredentials;
        }
    }

    /// Hydration finished. Both an identity and a credential (the global
    /// creator code, or a stored per-event record) must be present to move
    /// on to the event fetch; anything less falls back to anonymous.
    pub fn credentials_hydrated(&mut self, username_present: bool, credential_present: bool) {
        if self.view == View::HydratingCredentials {
            self.view = if username_present && credential_present {
                View::AwaitingEventFetch
            } else {
                View::Anonymous
            };
        }
    }

    /// The awaited fetch succeeded; land on the screen for the resolved
    /// role.
    pub fn fetch_succeeded(&mut self, creator: bool) {
        if self.view == View::AwaitingEventFetch {
            self.view = if creator {
                View::CreatorDashboard
            } else {
                View::ParticipantView
            };
        }
    }

    /// The awaited fetch failed; the caller surfaces the error.
    pub fn fetch_failed(&mut self) {
        if self.view == View::AwaitingEventFetch {
            self.view = View::Anonymous;
        }
    }

    /// A create/access/join form completed successfully from the landing
    /// screens.
    pub fn form_completed(&mut self, creator_code_obtained: bool) {
        if self.view == View::Anonymous {
            self.view = if creator_code_obtained {
                View::CreatorDashboard
            } else {
                View::ParticipantView
            };
        }
    }

    /// Navigation to an unknown route lands on not-found from any state.
    pub fn route_changed(&mut self, route: &Route) {
        if matches!(route, Route::Unknown(_)) {
            self.view = View::NotFound;
        }
    }

    /// Logout returns to anonymous; the caller clears the session.
    pub fn logout(&mut self) {
        if matches!(self.view, View::CreatorDashboard | View::ParticipantView) {
            self.view = View::Anonymous;
        }
    }
}

/// Outcome of resolving a route: the screen to show plus an optional
/// user-facing message explaining a downgrade (stale session, failed fetch,
/// missing join record).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub view: View,
    pub message: Option<String>,
}

impl Resolution {
    fn ok(view: View) -> Self {
        Self {
            view,
            message: None,
        }
    }

    fn with_message(view: View, message: impl Into<String>) -> Self {
        Self {
            view,
            message: Some(message.into()),
        }
    }
}

/// Resolve a cold start against `route`.
///
/// `event_name` carries the navigation hint the dashboard needs for its
/// creator-access call (the URL itself only names event ids). Store
/// failures propagate; everything else is folded into the resolution.
pub async fn resolve_route<S: CredentialStore, G: EventGateway + ?Sized>(
    route: &Route,
    event_name: Option<&str>,
    session: &mut Session<S>,
    gateway: &G,
) -> Result<Resolution, ClientError> {
    let mut flow = ViewFlow::new();

    match route {
        Route::Landing | Route::CreateEvent | Route::AccessEvent | Route::JoinEvent => {
            // Forms prefill from stored identity but stay anonymous.
            session.hydrate();
            Ok(Resolution::ok(View::Anonymous))
        }

        Route::Dashboard => {
            flow.begin_hydration();
            session.hydrate();
            flow.credentials_hydrated(
                session.username().is_some(),
                session.creator_code().is_some(),
            );
            if !flow.requires_event_fetch() {
                return Ok(Resolution::ok(flow.view().clone()));
            }

            let Some(event_name) = event_name else {
                flow.fetch_failed();
                return Ok(Resolution::with_message(
                    flow.view().clone(),
                    "no event selected",
                ));
            };

            match session.resume(gateway, event_name).await {
                Ok(Some(event)) => {
                    debug!(event_id = %event.id, "resumed creator session");
                    flow.fetch_succeeded(true);
                    Ok(Resolution::ok(flow.view().clone()))
                }
                // Unreachable once credentials were seen above, but the
                // machine stays total.
                Ok(None) => {
                    flow.fetch_failed();
                    Ok(Resolution::ok(flow.view().clone()))
                }
                Err(ClientError::StaleSession(message)) => {
                    flow.fetch_failed();
                    Ok(Resolution::with_message(flow.view().clone(), message))
                }
                Err(err) => Err(err),
            }
        }

        Route::Event(event_id) => {
            flow.begin_hydration();
            session.hydrate();

            let Some(credentials) = session.stored_event_credentials(event_id) else {
                flow.credentials_hydrated(session.username().is_some(), false);
                return Ok(Resolution::with_message(
                    flow.view().clone(),
                    "you need to join this event first",
                ));
            };

            flow.credentials_hydrated(true, true);
            let creator = credentials.is_creator();
            match session.refresh_event_snapshot(gateway, event_id).await {
                Ok(_) => {
                    flow.fetch_succeeded(creator);
                    Ok(Resolution::ok(flow.view().clone()))
                }
                Err(err @ ClientError::Store(_)) => Err(err),
                Err(err) => {
                    flow.fetch_failed();
                    Ok(Resolution::with_message(flow.view().clone(), err.to_string()))
                }
            }
        }

        Route::Unknown(_) => {
            flow.route_changed(route);
            Ok(Resolution::ok(flow.view().clone()))
        }
    }
}
