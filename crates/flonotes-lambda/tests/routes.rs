use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use futures::future::BoxFuture;
use serde_json::{json, Value};
use tower::ServiceExt;

use flonotes_bedrock::error::BedrockError;
use flonotes_bedrock::generate::NoteGenerator;
use flonotes_core::models::note::GeneratedNote;
use flonotes_core::models::session::SessionInput;
use flonotes_core::models::token_count::TokenUsage;
use flonotes_core::store::UnimplementedNoteStore;
use flonotes_lambda::router;
use flonotes_lambda::state::AppState;

enum Behavior {
    Reply(&'static str),
    Fail,
    Stall,
}

struct FakeGenerator {
    behavior: Behavior,
    prompts: Mutex<Vec<String>>,
}

impl NoteGenerator for FakeGenerator {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> BoxFuture<'a, Result<GeneratedNote, BedrockError>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Box::pin(async move {
            match self.behavior {
                Behavior::Reply(text) => Ok(GeneratedNote {
                    id: uuid::Uuid::new_v4(),
                    narrative: text.to_string(),
                    model_id: "fake-model".to_string(),
                    usage: TokenUsage::default(),
                    created_at: jiff::Timestamp::now(),
                }),
                Behavior::Fail => Err(BedrockError::Invocation("service unavailable".to_string())),
                Behavior::Stall => std::future::pending().await,
            }
        })
    }
}

fn app_with(behavior: Behavior) -> (axum::Router, Arc<FakeGenerator>) {
    let generator = Arc::new(FakeGenerator {
        behavior,
        prompts: Mutex::new(Vec::new()),
    });
    let state = AppState {
        generator: generator.clone(),
        store: Arc::new(UnimplementedNoteStore),
        generation_timeout: Some(Duration::from_millis(50)),
    };
    (router(state), generator)
}

async fn call(app: axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn default_session_json() -> Value {
    serde_json::to_value(SessionInput::default()).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = app_with(Behavior::Reply("unused"));
    let (status, body) = call(app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn catalog_lists_form_vocabulary() {
    let (app, _) = app_with(Behavior::Reply("unused"));
    let (status, body) = call(app, "GET", "/catalog", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["moods"].as_array().unwrap().len(), 13);
    assert_eq!(body["peerInteractions"][4], "Boundaries Issues");
    assert_eq!(body["staffInteractions"][5], "Seeking");
    assert_eq!(body["activities"][0], "Group Therapy");
    assert_eq!(
        body["behaviors"][1],
        json!({ "key": "followingRules", "label": "following Rules" })
    );
    assert_eq!(body["health"][0]["label"], "medications taken");
    assert_eq!(body["copingSkills"][0]["label"], "deep Breathing");
}

#[tokio::test]
async fn default_session_round_trips_through_prompt_route() {
    let (app, _) = app_with(Behavior::Reply("unused"));
    let (status, session) = call(app.clone(), "GET", "/session/default", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(app, "POST", "/prompt", Some(session)).await;
    assert_eq!(status, StatusCode::OK);
    let prompt = body["prompt"].as_str().unwrap();
    assert!(prompt.contains("Mood: Stable (Intensity: moderate)."));
    assert_eq!(body["annotated"]["mood"]["intensityDescriptor"], "moderate");
}

#[tokio::test]
async fn prompt_route_accepts_session_without_unused_fields() {
    let (app, _) = app_with(Behavior::Reply("unused"));
    let mut session = default_session_json();
    session["mood"] = json!({ "primary": "Stable", "intensity": 5, "hasSecondary": false });
    session["incidents"] = json!({ "occurred": false });

    let (status, body) = call(app, "POST", "/prompt", Some(session)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["annotated"]["mood"]["secondary"], "Anxious");
    assert_eq!(body["annotated"]["incidents"]["effectiveness"], 5);
    assert!(!body["prompt"].as_str().unwrap().contains("Incident:"));
}

#[tokio::test]
async fn prompt_route_rejects_out_of_range_scores() {
    let (app, _) = app_with(Behavior::Reply("unused"));
    let mut session = default_session_json();
    session["mood"]["intensity"] = json!(11);

    let (status, body) = call(app, "POST", "/prompt", Some(session)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("mood.intensity"));
}

#[tokio::test]
async fn prompt_route_rejects_unknown_labels() {
    let (app, _) = app_with(Behavior::Reply("unused"));
    let mut session = default_session_json();
    session["social"]["staff"] = json!("Friendly");

    let (status, body) = call(app, "POST", "/prompt", Some(session)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn generate_note_returns_narrative() {
    let (app, generator) = app_with(Behavior::Reply("Client engaged well in group."));
    let (status, body) = call(
        app,
        "POST",
        "/api/generateNote",
        Some(json!({ "prompt": "Mood: Stable (Intensity: moderate)." })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "generatedNote": "Client engaged well in group." }));
    assert_eq!(
        generator.prompts.lock().unwrap().as_slice(),
        ["Mood: Stable (Intensity: moderate)."]
    );
}

#[tokio::test]
async fn generate_note_rejects_blank_prompt() {
    let (app, generator) = app_with(Behavior::Reply("unused"));
    let (status, body) = call(app, "POST", "/api/generateNote", Some(json!({ "prompt": "  " }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "prompt must not be empty");
    assert!(generator.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn generation_failure_is_reported_as_bad_gateway() {
    let (app, _) = app_with(Behavior::Fail);
    let (status, body) = call(app, "POST", "/api/generateNote", Some(json!({ "prompt": "x" }))).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "model invocation failed: service unavailable");
}

#[tokio::test]
async fn stalled_generation_times_out() {
    let (app, _) = app_with(Behavior::Stall);
    let (status, body) = call(app, "POST", "/api/generateNote", Some(json!({ "prompt": "x" }))).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert!(body["error"].as_str().unwrap().contains("timed out"));
}

#[tokio::test]
async fn demo_generate_compiles_and_generates() {
    let (app, generator) = app_with(Behavior::Reply("Narrative."));
    let mut session = default_session_json();
    session["behaviors"]["cooperative"] = json!(true);

    let (status, body) = call(app, "POST", "/demo/generate", Some(session)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["generatedNote"], "Narrative.");

    let prompt = body["prompt"].as_str().unwrap();
    assert!(prompt.contains("Observed Behaviors: cooperative."));
    assert_eq!(generator.prompts.lock().unwrap().as_slice(), [prompt]);
}

#[tokio::test]
async fn save_note_is_not_implemented() {
    let (app, _) = app_with(Behavior::Reply("unused"));
    let (status, body) = call(app, "POST", "/notes", Some(json!({ "narrative": "Narrative." }))).await;

    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body["error"], "saving notes is not implemented");
}
