//! Create-then-list round trips for notes, flashcards, and questions.
//!
//! Drives the full router against the in-memory store; no live database.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use studykit_api::{router, AppState};
use studykit_db::MemoryDocumentStore;

fn test_app() -> axum::Router {
    router(AppState::with_store(Arc::new(MemoryDocumentStore::new())))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_note_returns_string_id() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/api/notes",
            json!({"title": "Ownership", "content": "Every value has one owner."}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());
}

#[tokio::test]
async fn test_created_note_appears_in_unfiltered_list() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/notes",
            json!({"title": "Borrowing", "content": "Shared xor mutable.", "topic": "rust"}),
        ))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = app.oneshot(get("/api/notes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let notes = body_json(response).await;
    let notes = notes.as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["_id"], json!(id));
    assert_eq!(notes[0]["title"], json!("Borrowing"));
    assert_eq!(notes[0]["topic"], json!("rust"));
}

#[tokio::test]
async fn test_list_notes_filtered_by_topic() {
    let app = test_app();

    for (title, topic) in [("a", "rust"), ("b", "sql"), ("c", "rust")] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/notes",
                json!({"title": title, "content": "x", "topic": topic}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get("/api/notes?topic=rust")).await.unwrap();
    let notes = body_json(response).await;
    let titles: Vec<&str> = notes
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["a", "c"]);
}

#[tokio::test]
async fn test_topic_filter_with_zero_matches_returns_empty_list() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/notes",
            json!({"title": "a", "content": "x", "topic": "rust"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get("/api/notes?topic=biology")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let notes = body_json(response).await;
    assert_eq!(notes.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_empty_topic_param_is_treated_as_no_filter() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/notes",
            json!({"title": "a", "content": "x", "topic": "rust"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get("/api/notes?topic=")).await.unwrap();
    let notes = body_json(response).await;
    assert_eq!(notes.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_note_without_topic_lists_null_topic() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/notes",
            json!({"title": "a", "content": "x"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get("/api/notes")).await.unwrap();
    let notes = body_json(response).await;
    assert!(notes.as_array().unwrap()[0]["topic"].is_null());
}

#[tokio::test]
async fn test_note_with_empty_title_rejected() {
    let app = test_app();

    let response = app
        .oneshot(post_json("/api/notes", json!({"title": "", "content": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn test_flashcard_roundtrip_with_tag_filter() {
    let app = test_app();

    for (front, tag) in [("owner", "rust"), ("join", "sql")] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/flashcards",
                json!({"front": front, "back": "definition", "tag": tag}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.clone().oneshot(get("/api/flashcards?tag=sql")).await.unwrap();
    let cards = body_json(response).await;
    let cards = cards.as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["front"], json!("join"));
    assert!(cards[0]["_id"].as_str().is_some());

    let response = app.oneshot(get("/api/flashcards")).await.unwrap();
    let all = body_json(response).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_flashcard_with_empty_back_rejected() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/api/flashcards",
            json!({"front": "x", "back": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_question_roundtrip() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/questions",
            json!({
                "question": "Which keyword moves a value?",
                "options": ["borrow", "move", "copy"],
                "answer_index": 1,
                "tag": "rust",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = app.oneshot(get("/api/questions?tag=rust")).await.unwrap();
    let questions = body_json(response).await;
    let questions = questions.as_array().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0]["_id"], json!(id));
    assert_eq!(questions[0]["answer_index"], json!(1));
    assert_eq!(questions[0]["options"].as_array().unwrap().len(), 3);
}
