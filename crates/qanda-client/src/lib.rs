//! Client-side session model for the qanda event Q&A service.
//!
//! The server owns all event content; the only durable client state is
//! *identity* (usernames and opaque codes), kept in the [`store`] key-value
//! store. [`session::Session`] holds the in-memory state for the active
//! event, [`gateway::EventGateway`] maps operations onto the REST surface,
//! and [`view`] decides which screen a front end should show.

pub mod error;
pub mod gateway;
pub mod session;
pub mod store;
pub mod types;
pub mod view;

pub use error::{ClientError, ValidationError};
pub use gateway::{EventGateway, HttpEventGateway};
pub use session::{EventCredentials, Session};
pub use store::{CredentialStore, FileStore, MemoryStore, StoreError};
pub use types::{Event, EventId, Question, QuestionId};
pub use view::{resolve_route, Resolution, Route, View, ViewFlow};
