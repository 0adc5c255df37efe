use crate::{errors::ComposeError, providers::ai::AiProvider};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One bounded network call per invocation; there is no retry path.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Attribution headers required by OpenRouter's app-ranking conventions.
const HTTP_REFERER: &str = "https://pickleball-chatbot.local";
const X_TITLE: &str = "Pickleball FAQ Coach";

const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: i32 = 220;

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    message: String,
}

// --- OpenRouter Provider implementation ---

/// A provider for the OpenRouter chat completions API.
///
/// The wire format is OpenAI-compatible: a role-tagged message list in,
/// `choices[0].message.content` out. OpenRouter can return an error payload
/// with a 200 status, so success is determined by the presence of `choices`,
/// never by the HTTP status alone.
#[derive(Clone, Debug)]
pub struct OpenRouterProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenRouterProvider {
    /// Creates a new `OpenRouterProvider`.
    ///
    /// `api_base` is the versioned API root (e.g. `https://openrouter.ai/api/v1`);
    /// the chat completions path is appended here. An empty API key is
    /// rejected up front rather than failing on the first call.
    pub fn new(api_base: String, api_key: String, model: String) -> Result<Self, ComposeError> {
        if api_key.is_empty() {
            return Err(ComposeError::MissingApiKey);
        }
        let client = ReqwestClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ComposeError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url: format!("{}/chat/completions", api_base.trim_end_matches('/')),
            api_key,
            model,
        })
    }
}

#[async_trait]
impl AiProvider for OpenRouterProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ComposeError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", HTTP_REFERER)
            .header("X-Title", X_TITLE)
            .json(&request_body)
            .send()
            .await
            .map_err(ComposeError::AiRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ComposeError::AiApi(error_text));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(ComposeError::AiDeserialization)?;

        match chat_response.choices.first() {
            Some(choice) => Ok(choice.message.content.clone()),
            None => {
                let detail = match chat_response.error {
                    Some(err) => {
                        let code = err
                            .code
                            .map(|c| c.to_string())
                            .unwrap_or_else(|| "no code".to_string());
                        format!("code {code}: {}", err.message)
                    }
                    None => "response contained no choices".to_string(),
                };
                Err(ComposeError::AiApi(detail))
            }
        }
    }
}
