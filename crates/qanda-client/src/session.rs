//! In-memory session state with durably mirrored identity.
//!
//! The holder keeps three fields: the active username, the active creator
//! code, and the last-fetched event snapshot. Only the first two are
//! mirrored into the credential store; the snapshot always comes from a
//! fresh fetch. A single thread of control updates the session, so there is
//! no locking; when two mutation flows race, each ends with a refetch and
//! the last refetch to complete wins, even if it observed older server
//! state.

use tracing::debug;

use crate::error::ClientError;
use crate::gateway::EventGateway;
use crate::store::{keys, CredentialStore};
use crate::types::{CreatorAccessRequest, Event, EventId, JoinEventRequest};

/// How the active party is known to one event, resolved from the per-event
/// durable keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventCredentials {
    Creator {
        event_name: String,
        creator_code: String,
    },
    Participant {
        event_name: String,
        invite_code: String,
        username: String,
    },
}

impl EventCredentials {
    pub fn is_creator(&self) -> bool {
        matches!(self, EventCredentials::Creator { .. })
    }
}

pub struct Session<S: CredentialStore> {
    store: S,
    username: Option<String>,
    creator_code: Option<String>,
    event_snapshot: Option<Event>,
}

impl<S: CredentialStore> Session<S> {
    /// A fresh, empty session over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            username: None,
            creator_code: None,
            event_snapshot: None,
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn creator_code(&self) -> Option<&str> {
        self.creator_code.as_deref()
    }

    pub fn event_snapshot(&self) -> Option<&Event> {
        self.event_snapshot.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-populate identity from the durable keys.
    ///
    /// The event snapshot is deliberately not hydrated: the only durable
    /// client state is identity, never content.
    pub fn hydrate(&mut self) {
        self.username = self.store.get(keys::USERNAME);
        self.creator_code = self.store.get(keys::CREATOR_CODE);
        debug!(
            username = self.username.as_deref().unwrap_or("-"),
            has_creator_code = self.creator_code.is_some(),
            "hydrated session from credential store"
        );
    }

    /// Update the username and mirror it to storage (write when `Some`,
    /// remove when `None`).
    pub fn set_username(&mut self, username: Option<&str>) -> Result<(), ClientError> {
        match username {
            Some(value) => self.store.set(keys::USERNAME, value)?,
            None => self.store.remove(keys::USERNAME)?,
        }
        self.username = username.map(str::to_owned);
        Ok(())
    }

    /// Update the creator code and mirror it to storage.
    ///
    /// A stored code is only meaningful once an access call against a
    /// concrete event name has succeeded; the holder does not verify that
    /// pairing itself.
    pub fn set_creator_code(&mut self, creator_code: Option<&str>) -> Result<(), ClientError> {
        match creator_code {
            Some(value) => self.store.set(keys::CREATOR_CODE, value)?,
            None => self.store.remove(keys::CREATOR_CODE)?,
        }
        self.creator_code = creator_code.map(str::to_owned);
        Ok(())
    }

    /// Replace the in-memory snapshot. Never persisted.
    pub fn set_event_snapshot(&mut self, event: Option<Event>) {
        self.event_snapshot = event;
    }

    /// Reset to the empty state and drop the durable identity keys.
    /// Idempotent.
    pub fn clear(&mut self) -> Result<(), ClientError> {
        self.username = None;
        self.creator_code = None;
        self.event_snapshot = None;
        self.store.remove(keys::USERNAME)?;
        self.store.remove(keys::CREATOR_CODE)?;
        Ok(())
    }

    /// Persist the per-event creator keys after a successful create or
    /// access, so the dashboard can be reopened by event id later.
    pub fn remember_creator_event(
        &mut self,
        id: &EventId,
        name: &str,
        creator_code: &str,
    ) -> Result<(), ClientError> {
        self.store.set(&keys::event_name(id), name)?;
        self.store.set(&keys::creator_code(id), creator_code)?;
        Ok(())
    }

    /// Persist the per-event join keys after a successful join.
    pub fn remember_joined_event(
        &mut self,
        id: &EventId,
        name: &str,
        invite_code: &str,
        username: &str,
    ) -> Result<(), ClientError> {
        self.store.set(&keys::join_event_name(id), name)?;
        self.store.set(&keys::join_invite_code(id), invite_code)?;
        self.store.set(&keys::join_username(id), username)?;
        Ok(())
    }

    /// Resolve the stored identity for one event. Creator credentials win
    /// when both a creator code and a join record exist for the same id.
    pub fn stored_event_credentials(&self, id: &EventId) -> Option<EventCredentials> {
        if let (Some(event_name), Some(creator_code)) = (
            self.store.get(&keys::event_name(id)),
            self.store.get(&keys::creator_code(id)),
        ) {
            return Some(EventCredentials::Creator {
                event_name,
                creator_code,
            });
        }

        if let (Some(event_name), Some(invite_code), Some(username)) = (
            self.store.get(&keys::join_event_name(id)),
            self.store.get(&keys::join_invite_code(id)),
            self.store.get(&keys::join_username(id)),
        ) {
            return Some(EventCredentials::Participant {
                event_name,
                invite_code,
                username,
            });
        }

        None
    }

    /// Mandatory refetch after every mutation.
    ///
    /// Replaces the snapshot with whatever the server returns right now.
    /// On failure the previous snapshot is left untouched.
    pub async fn refresh_event_snapshot<G: EventGateway + ?Sized>(
        &mut self,
        gateway: &G,
        event_id: &EventId,
    ) -> Result<&Event, ClientError> {
        let credentials = self.stored_event_credentials(event_id).ok_or_else(|| {
            ClientError::StaleSession(format!("no stored credentials for event {event_id}"))
        })?;

        let event = match credentials {
            EventCredentials::Creator {
                event_name,
                creator_code,
            } => {
                gateway
                    .creator_access(&CreatorAccessRequest {
                        event_name,
                        creator_code,
                    })
                    .await?
            }
            EventCredentials::Participant {
                event_name,
                invite_code,
                username,
            } => {
                gateway
                    .join_event(&JoinEventRequest {
                        event_name,
                        invite_code,
                        username,
                    })
                    .await?
            }
        };

        debug!(event_id = %event.id, "refreshed event snapshot");
        Ok(&*self.event_snapshot.insert(event))
    }

    /// Hydration driver: load the durable identity and re-validate it with
    /// a creator access against `event_name`.
    ///
    /// Returns `Ok(None)` when no credentials are stored (the caller stays
    /// anonymous). A failed access clears the whole session and surfaces
    /// [`ClientError::StaleSession`].
    pub async fn resume<G: EventGateway + ?Sized>(
        &mut self,
        gateway: &G,
        event_name: &str,
    ) -> Result<Option<&Event>, ClientError> {
        self.hydrate();

        let Some(creator_code) = self.creator_code.clone() else {
            return Ok(None);
        };
        if self.username.is_none() {
            return Ok(None);
        }

        match gateway
            .creator_access(&CreatorAccessRequest {
                event_name: event_name.to_owned(),
                creator_code,
            })
            .await
        {
            Ok(event) => Ok(Some(&*self.event_snapshot.insert(event))),
            Err(err) => {
                let message = err.to_string();
                self.clear()?;
                Err(ClientError::StaleSession(message))
            }
        }
    }
}
