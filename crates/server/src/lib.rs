//! # dinkbot-server
//!
//! A thin HTTP surface over the [`dinkbot`] library: one chat endpoint plus
//! the usual banner and health routes. All answering logic lives in the
//! library; the server only wires configuration into a shared `CoachClient`.

pub mod config;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use dinkbot::{providers::ai::openrouter::OpenRouterProvider, CoachClient, CoachClientBuilder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// The shared application state: one `CoachClient` for all requests.
///
/// The client is immutable after startup, so concurrent requests need no
/// coordination.
#[derive(Clone)]
pub struct AppState {
    pub coach: Arc<CoachClient>,
}

/// Builds the shared application state from the configuration.
pub fn build_app_state(config: &config::Config) -> anyhow::Result<AppState> {
    let mut builder = CoachClientBuilder::new();

    match config
        .openrouter_api_key
        .as_deref()
        .filter(|key| !key.is_empty())
    {
        Some(key) => {
            let provider = OpenRouterProvider::new(
                config.openrouter_api_base.clone(),
                key.to_string(),
                config.openrouter_model.clone(),
            )?;
            builder = builder.ai_provider(Box::new(provider));
            info!(model = %config.openrouter_model, "model enrichment enabled");
        }
        None => {
            info!("OPENROUTER_API_KEY is not set, serving knowledge base answers only");
        }
    }

    Ok(AppState {
        coach: Arc::new(builder.build()),
    })
}

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/chat", post(chat_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}

/// The root handler.
async fn root() -> &'static str {
    "dinkbot server is running."
}

/// The health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// The request body for the `/chat` endpoint.
#[derive(Deserialize)]
struct ChatRequest {
    question: String,
}

/// The response body for the `/chat` endpoint.
#[derive(Serialize)]
struct ChatResponse {
    answer: String,
}

/// The handler for the `/chat` endpoint.
///
/// Infallible by design: `CoachClient::answer` always produces displayable
/// text, so the only error path left is a malformed request body, which axum
/// rejects before this handler runs.
async fn chat_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    info!("Received chat question: '{}'", payload.question);

    let answer = app_state.coach.answer(&payload.question).await;

    Json(ChatResponse { answer })
}

/// The main entry point for running the server.
pub async fn run(listener: tokio::net::TcpListener, config: config::Config) -> anyhow::Result<()> {
    let app_state = build_app_state(&config)?;
    let app = create_router(app_state);

    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinkbot::{router, KnowledgeBase};
    use serde_json::json;
    use tokio::net::TcpListener;

    /// Spawns the server in KB-only mode on a random port.
    async fn spawn_app() -> String {
        let config = config::Config {
            port: 0,
            openrouter_api_key: None,
            openrouter_api_base: "https://openrouter.ai/api/v1".to_string(),
            openrouter_model: "openrouter/auto".to_string(),
        };

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{port}");

        tokio::spawn(async move {
            if let Err(e) = run(listener, config).await {
                eprintln!("Server error: {e}");
            }
        });

        address
    }

    #[tokio::test]
    async fn health_check_works() {
        let address = spawn_app().await;
        let client = reqwest::Client::new();

        let response = client
            .get(format!("{address}/health"))
            .send()
            .await
            .expect("Failed to execute request.");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "OK");
    }

    #[tokio::test]
    async fn chat_returns_the_kb_answer_in_kb_only_mode() {
        let address = spawn_app().await;
        let client = reqwest::Client::new();

        let response = client
            .post(format!("{address}/chat"))
            .json(&json!({ "question": "What is the kitchen rule?" }))
            .send()
            .await
            .expect("Failed to execute request.");

        assert!(response.status().is_success());

        let body: serde_json::Value = response.json().await.expect("response should be JSON");
        let kb = KnowledgeBase::curated();
        assert_eq!(
            body["answer"].as_str().unwrap(),
            router::route(&kb, "What is the kitchen rule?")
        );
    }

    #[tokio::test]
    async fn malformed_request_body_is_rejected() {
        let address = spawn_app().await;
        let client = reqwest::Client::new();

        let response = client
            .post(format!("{address}/chat"))
            .json(&json!({ "not_a_question": true }))
            .send()
            .await
            .expect("Failed to execute request.");

        assert!(response.status().is_client_error());
    }
}
