//! Axum gateway for taskforge: single-task and transcript extraction over HTTP.
//!
//! The gateway is glue: body validation, CORS, and the uniform
//! `{success, data|error}` envelope. All extraction and due-date policy lives
//! in taskforge-core. The completion API key stays here in the backend; the
//! frontend never sees it.

#[allow(dead_code)]
mod due_field;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskforge_core::{
    CompletionBridge, CoreConfig, ExtractError, ParseOutcome, TaskExtractor, TaskRecord,
};

#[derive(Clone)]
struct AppState {
    /// `None` when no completion API key is configured; extraction routes then
    /// answer with the uniform failure envelope instead of panicking.
    extractor: Option<Arc<TaskExtractor>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParseTaskBody {
    #[serde(default)]
    task_text: Option<String>,
}

#[derive(Deserialize)]
struct ParseTranscriptBody {
    #[serde(default)]
    transcript: Option<String>,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn parse_task(
    State(state): State<AppState>,
    Json(body): Json<ParseTaskBody>,
) -> (StatusCode, Json<ParseOutcome<TaskRecord>>) {
    let Some(task_text) = body.task_text.filter(|t| !t.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ParseOutcome::fail("Task text is required")),
        );
    };

    let Some(extractor) = state.extractor.as_ref() else {
        let err = ExtractError::MissingApiKey;
        tracing::error!(%err, "cannot parse task");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ParseOutcome::fail("Failed to parse task")),
        );
    };

    let outcome = extractor.parse_task(&task_text).await;
    let status = if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(outcome))
}

async fn parse_transcript(
    State(state): State<AppState>,
    Json(body): Json<ParseTranscriptBody>,
) -> (StatusCode, Json<ParseOutcome<Vec<TaskRecord>>>) {
    let Some(transcript) = body.transcript.filter(|t| !t.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ParseOutcome::fail("Transcript text is required")),
        );
    };

    let Some(extractor) = state.extractor.as_ref() else {
        let err = ExtractError::MissingApiKey;
        tracing::error!(%err, "cannot parse transcript");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ParseOutcome::fail("Failed to parse transcript")),
        );
    };

    let outcome = extractor.parse_transcript(&transcript).await;
    let status = if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(outcome))
}

fn build_app(state: AppState) -> Router {
    // The UI runs on its own dev port; keep CORS permissive like the original
    // deployment.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/parse", post(parse_task))
        .route("/api/parse-transcript", post(parse_transcript))
        .layer(cors)
        .with_state(state)
}

/// All interfaces: the UI may be served from another host than the gateway.
fn listen_addr(port: u16) -> std::net::SocketAddr {
    std::net::SocketAddr::from(([0, 0, 0, 0], port))
}

#[tokio::main]
async fn main() {
    // Load .env first: the completion API key must come from the backend
    // environment, never from a client.
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[taskforge-gateway] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CoreConfig::from_env();

    let extractor = CompletionBridge::from_env().map(|bridge| {
        let bridge = match config.model.as_deref() {
            Some(model) => bridge.with_model(model),
            None => bridge,
        };
        Arc::new(TaskExtractor::new(bridge))
    });
    if extractor.is_none() {
        tracing::warn!(
            "OPENROUTER_API_KEY not set; /api/parse and /api/parse-transcript will return failure envelopes"
        );
    }

    let app = build_app(AppState { extractor });

    let addr = listen_addr(config.port);
    tracing::info!("taskforge gateway listening on {}", addr);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", e);
    }
}
