//! Wire data model for the qanda REST surface.
//!
//! Everything here is owned by the remote system; the client deserializes,
//! displays, and throws away. Identifiers get newtypes so event and question
//! ids can't be mixed up in call sites that take both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        EventId(id.to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        QuestionId(id.to_owned())
    }
}

/// A full event as returned by creator access or join.
///
/// `creator_code` is populated only at creation time and on creator access;
/// the server never echoes it to participants.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub creator_username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub invites: Vec<Invite>,
    #[serde(default)]
    pub user_answers: Vec<UserAnswer>,
}

/// A multiple-choice question. `correct_answer` is a zero-based index into
/// `options`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub event_id: EventId,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Invite {
    pub event_id: EventId,
    pub username: String,
    pub invite_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// One selected option for one question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: QuestionId,
    pub selected_option: usize,
}

/// A participant's full submission. One record per (event, username);
/// resubmission semantics are server-defined.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserAnswer {
    pub id: i64,
    pub event_id: EventId,
    pub username: String,
    pub answers: Vec<Answer>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Per-question detail inside a scored result row.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserAnswerDetails {
    pub question_id: QuestionId,
    pub question_text: String,
    pub options: Vec<String>,
    pub selected_option: usize,
    pub correct_option: usize,
}

/// One participant's scored submission.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserResult {
    pub username: String,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub answers: Vec<UserAnswerDetails>,
}

// ───────────────────────────── Request / response bodies ─────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub creator_username: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateEventResponse {
    pub event_id: EventId,
    pub creator_code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatorAccessRequest {
    pub event_name: String,
    pub creator_code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JoinEventRequest {
    pub event_name: String,
    pub invite_code: String,
    pub username: String,
}

/// Envelope for creator-access and join responses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventResponse {
    pub event: Event,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddQuestionRequest {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddQuestionResponse {
    pub event_id: EventId,
    pub question_id: QuestionId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InviteUserRequest {
    pub username: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InviteUserResponse {
    pub event_id: EventId,
    pub invite_code: String,
    pub invite_url: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmitAnswersRequest {
    pub username: String,
    pub answers: Vec<Answer>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionStatus {
    pub submitted: bool,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub results: Vec<UserResult>,
}

/// Error envelope sent with every non-2xx response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
