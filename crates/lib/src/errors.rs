use thiserror::Error;

/// Custom error types for the composer boundary.
///
/// None of these reach the end user: the caller maps every failure back to
/// the knowledge base answer. They exist so that the fallback decision is an
/// explicit, testable branch instead of a swallowed exception.
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the model API: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize the model API response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("Model API returned an error: {0}")]
    AiApi(String),
    #[error("API key is missing")]
    MissingApiKey,
}
