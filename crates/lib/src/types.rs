use crate::kb::KnowledgeBase;
use crate::providers::ai::AiProvider;
use std::fmt;

/// A client that answers pickleball questions.
///
/// Holds the immutable knowledge base and, optionally, an AI provider for the
/// enrichment step. Construction happens once at process start; the client is
/// cheap to clone and safe to share between concurrent requests because every
/// call is independent.
#[derive(Clone)]
pub struct CoachClient {
    pub(crate) kb: KnowledgeBase,
    pub(crate) ai_provider: Option<Box<dyn AiProvider>>,
}

impl fmt::Debug for CoachClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoachClient")
            .field("ai_provider", &self.ai_provider)
            .finish_non_exhaustive()
    }
}

/// A builder for creating `CoachClient` instances.
///
/// The AI provider is deliberately optional: leaving it unset is the designed
/// KB-only mode, not an error, so `build` cannot fail.
#[derive(Default)]
pub struct CoachClientBuilder {
    kb: Option<KnowledgeBase>,
    ai_provider: Option<Box<dyn AiProvider>>,
}

impl CoachClientBuilder {
    /// Creates a new `CoachClientBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the built-in knowledge base.
    pub fn knowledge_base(mut self, kb: KnowledgeBase) -> Self {
        self.kb = Some(kb);
        self
    }

    /// Sets the AI provider used for answer enrichment.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Builds the `CoachClient`.
    pub fn build(self) -> CoachClient {
        CoachClient {
            kb: self.kb.unwrap_or_default(),
            ai_provider: self.ai_provider,
        }
    }
}
