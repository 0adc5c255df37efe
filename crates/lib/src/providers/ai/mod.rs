pub mod openrouter;

use crate::errors::ComposeError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a hosted text-generation capability.
///
/// This is the seam between the deterministic knowledge base pipeline and the
/// network: the composer sends a fixed persona plus the user's question
/// through it, and any `Err` it returns is mapped back to the knowledge base
/// answer at the call site. Test code substitutes recording or failing
/// implementations here.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, ComposeError>;
}

dyn_clone::clone_trait_object!(AiProvider);
