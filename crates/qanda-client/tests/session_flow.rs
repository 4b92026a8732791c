//! Full session flow against a scripted server: create, author, invite,
//! join, submit, score, and resume across a simulated restart.

use qanda_client::types::{
    AddQuestionRequest, Answer, CreateEventRequest, InviteUserRequest, JoinEventRequest,
    QuestionId, SubmitAnswersRequest,
};
use qanda_client::{
    resolve_route, EventGateway, FileStore, HttpEventGateway, Route, Session, View,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn question_body() -> serde_json::Value {
    serde_json::json!({
        "id": "q-1",
        "event_id": "evt-1",
        "text": "Which day is the all-hands?",
        "options": ["Monday", "Friday"],
        "correct_answer": 1,
        "created_at": "2024-05-01T10:05:00Z",
        "updated_at": "2024-05-01T10:05:00Z"
    })
}

fn event_body(with_creator_code: bool) -> serde_json::Value {
    let mut event = serde_json::json!({
        "id": "evt-1",
        "name": "All Hands",
        "type": "quiz",
        "creator_username": "alice",
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:05:00Z",
        "questions": [question_body()],
        "invites": [{
            "event_id": "evt-1",
            "username": "bob",
            "invite_code": "inv-1",
            "created_at": "2024-05-01T10:06:00Z",
            "updated_at": "2024-05-01T10:06:00Z"
        }],
        "user_answers": []
    });
    if with_creator_code {
        event["creator_code"] = serde_json::json!("cc-1");
    }
    serde_json::json!({ "event": event })
}

async fn mount_fixture(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "event_id": "evt-1",
            "creator_code": "cc-1"
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/creator-access"))
        .and(body_json(serde_json::json!({
            "event_name": "All Hands",
            "creator_code": "cc-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(event_body(true)))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/events/evt-1/questions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "event_id": "evt-1",
            "question_id": "q-1"
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/events/evt-1/invite"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "event_id": "evt-1",
            "invite_code": "inv-1",
            "invite_url": "http://example.com/join/inv-1",
            "message": "Invite created"
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/join-event"))
        .and(body_json(serde_json::json!({
            "event_name": "All Hands",
            "invite_code": "inv-1",
            "username": "bob"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(event_body(false)))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/events/evt-1/submit-answers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"message": "Answers recorded"})),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/events/evt-1/submission-status"))
        .and(query_param("username", "bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "submitted": true,
            "answers": [{"question_id": "q-1", "selected_option": 1}]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/events/evt-1/results"))
        .and(query_param("creator_code", "cc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{
                "username": "bob",
                "total_questions": 1,
                "correct_answers": 1,
                "answers": [{
                    "question_id": "q-1",
                    "question_text": "Which day is the all-hands?",
                    "options": ["Monday", "Friday"],
                    "selected_option": 1,
                    "correct_option": 1
                }]
            }]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn creator_and_participant_flow() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    mount_fixture(&server).await;

    let dir = tempfile::tempdir()?;
    let creator_store = dir.path().join("creator.json");
    let participant_store = dir.path().join("participant.json");
    let gateway = HttpEventGateway::new(&server.uri());

    // Creator sets up the event.
    let mut creator = Session::new(FileStore::open_at(&creator_store)?);
    let created = gateway
        .create_event(&CreateEventRequest {
            name: "All Hands".to_string(),
            event_type: "quiz".to_string(),
            creator_username: "alice".to_string(),
        })
        .await?;
    creator.set_username(Some("alice"))?;
    creator.set_creator_code(Some(&created.creator_code))?;
    creator.remember_creator_event(&created.event_id, "All Hands", &created.creator_code)?;

    let added = gateway
        .add_question(
            &created.event_id,
            &AddQuestionRequest {
                text: "Which day is the all-hands?".to_string(),
                options: vec!["Monday".to_string(), "Friday".to_string()],
                correct_answer: 1,
            },
        )
        .await?;
    assert_eq!(added.event_id, created.event_id);

    let snapshot = creator
        .refresh_event_snapshot(&gateway, &created.event_id)
        .await?;
    assert_eq!(snapshot.questions.len(), 1);
    assert_eq!(snapshot.creator_code.as_deref(), Some("cc-1"));
    let question = &snapshot.questions[0];
    assert_eq!(question.options[question.correct_answer], "Friday");

    let invite = gateway
        .invite_user(
            &created.event_id,
            &InviteUserRequest {
                username: "bob".to_string(),
            },
        )
        .await?;
    assert_eq!(invite.invite_code, "inv-1");
    drop(creator);

    // Process restart: identity hydrates from disk, content is re-fetched.
    let mut restarted = Session::new(FileStore::open_at(&creator_store)?);
    let resolution = resolve_route(
        &Route::parse("/dashboard"),
        Some("All Hands"),
        &mut restarted,
        &gateway,
    )
    .await?;
    assert_eq!(resolution.view, View::CreatorDashboard);
    assert_eq!(restarted.event_snapshot().unwrap().id, created.event_id);

    // Participant joins on their own store. The fetched event must not
    // carry the creator code.
    let mut participant = Session::new(FileStore::open_at(&participant_store)?);
    let event = gateway
        .join_event(&JoinEventRequest {
            event_name: "All Hands".to_string(),
            invite_code: "inv-1".to_string(),
            username: "bob".to_string(),
        })
        .await?;
    assert!(event.creator_code.is_none());
    participant.set_username(Some("bob"))?;
    participant.remember_joined_event(&event.id, "All Hands", "inv-1", "bob")?;
    participant.set_event_snapshot(Some(event));

    gateway
        .submit_answers(
            &created.event_id,
            &SubmitAnswersRequest {
                username: "bob".to_string(),
                answers: vec![Answer {
                    question_id: QuestionId::from("q-1"),
                    selected_option: 1,
                }],
            },
        )
        .await?;

    let status = gateway
        .submission_status(&created.event_id, "bob")
        .await?;
    assert!(status.submitted);

    // Participant restart resolves the event route from the join record.
    let mut participant = Session::new(FileStore::open_at(&participant_store)?);
    let resolution = resolve_route(
        &Route::parse(&format!("/event/{}", created.event_id)),
        None,
        &mut participant,
        &gateway,
    )
    .await?;
    assert_eq!(resolution.view, View::ParticipantView);

    let results = gateway.results(&created.event_id, "cc-1").await?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].username, "bob");
    assert_eq!(results[0].correct_answers, 1);

    Ok(())
}
