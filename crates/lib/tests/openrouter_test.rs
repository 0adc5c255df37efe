//! # OpenRouter Provider Tests
//!
//! Wire-level tests against a mock HTTP server. The important behaviors are
//! the explicit `choices` check (an error payload can arrive with a 200
//! status) and the auth/attribution headers on every request.

use dinkbot::providers::ai::{openrouter::OpenRouterProvider, AiProvider};
use dinkbot::ComposeError;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> OpenRouterProvider {
    OpenRouterProvider::new(
        server.uri(),
        "test-key".to_string(),
        "openrouter/auto".to_string(),
    )
    .expect("provider should build")
}

#[tokio::test]
async fn successful_response_returns_the_message_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(header("X-Title", "Pickleball FAQ Coach"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Happy to help! Games go to 11."}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let answer = provider
        .generate("system persona", "user question")
        .await
        .expect("generate should succeed");

    assert_eq!(answer, "Happy to help! Games go to 11.");
}

#[tokio::test]
async fn request_carries_model_and_generation_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "model": "openrouter/auto",
            "max_tokens": 220,
            "messages": [
                {"role": "system", "content": "system persona"},
                {"role": "user", "content": "user question"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "ok"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    provider
        .generate("system persona", "user question")
        .await
        .expect("generate should succeed");
}

#[tokio::test]
async fn error_payload_without_choices_is_an_error_even_with_ok_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"code": 402, "message": "Insufficient credits"}
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .generate("system", "user")
        .await
        .expect_err("a payload without choices must be an error");

    match err {
        ComposeError::AiApi(detail) => {
            assert!(detail.contains("402"));
            assert!(detail.contains("Insufficient credits"));
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .generate("system", "user")
        .await
        .expect_err("a 5xx must be an error");

    assert!(matches!(err, ComposeError::AiApi(_)));
}

#[tokio::test]
async fn empty_api_key_is_rejected_at_construction() {
    let result = OpenRouterProvider::new(
        "https://openrouter.ai/api/v1".to_string(),
        String::new(),
        "openrouter/auto".to_string(),
    );

    assert!(matches!(result, Err(ComposeError::MissingApiKey)));
}
