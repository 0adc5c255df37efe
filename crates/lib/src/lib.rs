//! # dinkbot
//!
//! A rule-based pickleball FAQ answerer: a deterministic keyword router over a
//! static knowledge base, optionally enriched through a hosted chat model.
//! The router always runs and always produces an answer; the model call is
//! best-effort and every failure falls back to the router's output, so
//! [`CoachClient::answer`] never fails.

pub mod errors;
pub mod greeting;
pub mod kb;
pub mod prompts;
pub mod providers;
pub mod router;
pub mod types;

pub use errors::ComposeError;
pub use kb::KnowledgeBase;
pub use types::{CoachClient, CoachClientBuilder};

use tracing::{debug, warn};

impl CoachClient {
    /// Answers a free-text question, always returning displayable text.
    ///
    /// Control flow: greeting short-circuit, then the keyword router, then
    /// (when a provider is configured) one best-effort model call with the
    /// router's output as grounding context. A missing provider is the
    /// designed KB-only mode; a failed model call falls back to the router's
    /// output with no error surfaced to the caller.
    pub async fn answer(&self, question: &str) -> String {
        if greeting::is_greeting(question) {
            debug!("greeting short-circuit, skipping KB and model");
            return greeting::GREETING_REPLY.to_string();
        }

        let kb_answer = router::route(&self.kb, question);

        let Some(provider) = &self.ai_provider else {
            return kb_answer;
        };

        let result = if is_off_topic(question) {
            // No KB context here: the persona's whole job is to decline.
            provider
                .generate(prompts::OFF_TOPIC_SYSTEM_PROMPT, question)
                .await
        } else {
            let user_prompt = prompts::COACH_USER_PROMPT_TEMPLATE
                .replace("{question}", question)
                .replace("{kb_info}", &kb_answer);
            provider
                .generate(prompts::COACH_SYSTEM_PROMPT, &user_prompt)
                .await
        };

        match result {
            Ok(text) => text,
            Err(e) => {
                warn!("model call failed, falling back to the knowledge base answer: {e}");
                kb_answer
            }
        }
    }
}

/// Whether a question mentions nothing pickleball-related at all.
fn is_off_topic(question: &str) -> bool {
    let q = question.to_lowercase();
    !q.contains("pickle") && !q.contains("paddle") && !q.contains("court")
}
