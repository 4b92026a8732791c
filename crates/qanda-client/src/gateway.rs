//! Stateless request/response mapping onto the qanda REST surface.
//!
//! The [`EventGateway`] trait abstracts the transport so session and view
//! logic can be unit tested without a server. Every call is single-shot: no
//! retry, no backoff; failures surface as [`ClientError`] with the message
//! from the server's error envelope when one is present.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, ValidationError};
use crate::types::{
    AddQuestionRequest, AddQuestionResponse, CreateEventRequest, CreateEventResponse,
    CreatorAccessRequest, ErrorResponse, Event, EventId, EventResponse, InviteUserRequest,
    InviteUserResponse, JoinEventRequest, QuestionId, ResultsResponse, SubmissionStatus,
    SubmitAnswersRequest, UserResult,
};

#[cfg(test)]
use mockall::automock;

/// Common prefix for every endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// Bounds on the option list of a question.
pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 6;

/// Operations against the remote event service.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EventGateway: Send + Sync {
    async fn list_event_types(&self) -> Result<Vec<String>, ClientError>;

    async fn create_event(
        &self,
        request: &CreateEventRequest,
    ) -> Result<CreateEventResponse, ClientError>;

    async fn creator_access(&self, request: &CreatorAccessRequest) -> Result<Event, ClientError>;

    async fn join_event(&self, request: &JoinEventRequest) -> Result<Event, ClientError>;

    async fn add_question(
        &self,
        event_id: &EventId,
        request: &AddQuestionRequest,
    ) -> Result<AddQuestionResponse, ClientError>;

    async fn delete_question(
        &self,
        event_id: &EventId,
        question_id: &QuestionId,
        creator_code: &str,
    ) -> Result<(), ClientError>;

    async fn invite_user(
        &self,
        event_id: &EventId,
        request: &InviteUserRequest,
    ) -> Result<InviteUserResponse, ClientError>;

    async fn delete_invite(
        &self,
        event_id: &EventId,
        invite_code: &str,
        creator_code: &str,
    ) -> Result<(), ClientError>;

    async fn submit_answers(
        &self,
        event_id: &EventId,
        request: &SubmitAnswersRequest,
    ) -> Result<(), ClientError>;

    async fn submission_status(
        &self,
        event_id: &EventId,
        username: &str,
    ) -> Result<SubmissionStatus, ClientError>;

    async fn results(
        &self,
        event_id: &EventId,
        creator_code: &str,
    ) -> Result<Vec<UserResult>, ClientError>;
}

// ───────────────────────────── Client-side validation ─────────────────────────────
//
// Each check runs before the corresponding request is built, so invalid
// input never reaches the wire.

pub fn validate_create_event(request: &CreateEventRequest) -> Result<(), ValidationError> {
    if request.name.trim().is_empty() {
        return Err(ValidationError::EmptyEventName);
    }
    if request.event_type.trim().is_empty() {
        return Err(ValidationError::EmptyEventType);
    }
    if request.creator_username.trim().is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    Ok(())
}

pub fn validate_creator_access(request: &CreatorAccessRequest) -> Result<(), ValidationError> {
    if request.event_name.trim().is_empty() {
        return Err(ValidationError::EmptyEventName);
    }
    if request.creator_code.trim().is_empty() {
        return Err(ValidationError::EmptyCreatorCode);
    }
    Ok(())
}

pub fn validate_join(request: &JoinEventRequest) -> Result<(), ValidationError> {
    if request.event_name.trim().is_empty() {
        return Err(ValidationError::EmptyEventName);
    }
    if request.invite_code.trim().is_empty() {
        return Err(ValidationError::EmptyInviteCode);
    }
    if request.username.trim().is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    Ok(())
}

pub fn validate_question(request: &AddQuestionRequest) -> Result<(), ValidationError> {
    if request.text.trim().is_empty() {
        return Err(ValidationError::EmptyQuestionText);
    }
    let count = request.options.len();
    if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
        return Err(ValidationError::OptionCount {
            min: MIN_OPTIONS,
            max: MAX_OPTIONS,
            got: count,
        });
    }
    if let Some(index) = request.options.iter().position(|o| o.trim().is_empty()) {
        return Err(ValidationError::EmptyOption(index));
    }
    if request.correct_answer >= count {
        return Err(ValidationError::CorrectAnswerOutOfBounds {
            index: request.correct_answer,
            options: count,
        });
    }
    Ok(())
}

pub fn validate_invite(request: &InviteUserRequest) -> Result<(), ValidationError> {
    if request.username.trim().is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    Ok(())
}

pub fn validate_answers(request: &SubmitAnswersRequest) -> Result<(), ValidationError> {
    if request.username.trim().is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    if request.answers.is_empty() {
        return Err(ValidationError::NoAnswers);
    }
    Ok(())
}

// ───────────────────────────── HTTP implementation ─────────────────────────────

/// Production gateway over reqwest.
pub struct HttpEventGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpEventGateway {
    /// `server` is the bare origin, e.g. `http://127.0.0.1:8080`.
    pub fn new(server: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}{}", server.trim_end_matches('/'), API_PREFIX),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| ClientError::Transport(format!("malformed response body: {err}")))
    } else {
        Err(error_from(status, response).await)
    }
}

async fn expect_no_content(response: Response) -> Result<(), ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(error_from(status, response).await)
    }
}

async fn error_from(status: StatusCode, response: Response) -> ClientError {
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) if !body.error.is_empty() => body.error,
        _ => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    ClientError::Request {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl EventGateway for HttpEventGateway {
    async fn list_event_types(&self) -> Result<Vec<String>, ClientError> {
        let response = self.http.get(self.url("/event-types")).send().await?;
        decode(response).await
    }

    async fn create_event(
        &self,
        request: &CreateEventRequest,
    ) -> Result<CreateEventResponse, ClientError> {
        validate_create_event(request)?;
        debug!(name = %request.name, "creating event");
        let response = self
            .http
            .post(self.url("/events"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn creator_access(&self, request: &CreatorAccessRequest) -> Result<Event, ClientError> {
        validate_creator_access(request)?;
        debug!(event_name = %request.event_name, "creator access");
        let response = self
            .http
            .post(self.url("/creator-access"))
            .json(request)
            .send()
            .await?;
        let body: EventResponse = decode(response).await?;
        Ok(body.event)
    }

    async fn join_event(&self, request: &JoinEventRequest) -> Result<Event, ClientError> {
        validate_join(request)?;
        debug!(event_name = %request.event_name, username = %request.username, "joining event");
        let response = self
            .http
            .post(self.url("/join-event"))
            .json(request)
            .send()
            .await?;
        let body: EventResponse = decode(response).await?;
        Ok(body.event)
    }

    async fn add_question(
        &self,
        event_id: &EventId,
        request: &AddQuestionRequest,
    ) -> Result<AddQuestionResponse, ClientError> {
        validate_question(request)?;
        let response = self
            .http
            .post(self.url(&format!("/events/{event_id}/questions")))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_question(
        &self,
        event_id: &EventId,
        question_id: &QuestionId,
        creator_code: &str,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/events/{event_id}/questions/{question_id}")))
            .query(&[("creator_code", creator_code)])
            .send()
            .await?;
        expect_no_content(response).await
    }

    async fn invite_user(
        &self,
        event_id: &EventId,
        request: &InviteUserRequest,
    ) -> Result<InviteUserResponse, ClientError> {
        validate_invite(request)?;
        let response = self
            .http
            .post(self.url(&format!("/events/{event_id}/invite")))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_invite(
        &self,
        event_id: &EventId,
        invite_code: &str,
        creator_code: &str,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/events/{event_id}/invite/{invite_code}")))
            .query(&[("creator_code", creator_code)])
            .send()
            .await?;
        expect_no_content(response).await
    }

    async fn submit_answers(
        &self,
        event_id: &EventId,
        request: &SubmitAnswersRequest,
    ) -> Result<(), ClientError> {
        validate_answers(request)?;
        debug!(event_id = %event_id, username = %request.username, "submitting answers");
        let response = self
            .http
            .post(self.url(&format!("/events/{event_id}/submit-answers")))
            .json(request)
            .send()
            .await?;
        expect_no_content(response).await
    }

    async fn submission_status(
        &self,
        event_id: &EventId,
        username: &str,
    ) -> Result<SubmissionStatus, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/events/{event_id}/submission-status")))
            .query(&[("username", username)])
            .send()
            .await?;
        decode(response).await
    }

    async fn results(
        &self,
        event_id: &EventId,
        creator_code: &str,
    ) -> Result<Vec<UserResult>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/events/{event_id}/results")))
            .query(&[("creator_code", creator_code)])
            .send()
            .await?;
        let body: ResultsResponse = decode(response).await?;
        Ok(body.results)
    }
}
