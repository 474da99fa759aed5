use std::sync::Arc;

use log::{debug, info, warn};

use crate::model::{GenerationRequest, GenerationResult};
use crate::prompt::build_prompt;
use crate::providers::LlmProvider;

/// Prefix of every failure message produced at the client boundary.
pub const ERROR_PREFIX: &str = "Error creating recipe: ";

/// Turns a request into exactly one provider call.
#[derive(Clone)]
pub struct RecipeGenerator {
    provider: Arc<dyn LlmProvider>,
}

impl RecipeGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        RecipeGenerator { provider }
    }

    /// Generated text on success, or `"Error creating recipe: {cause}"`.
    ///
    /// Success and failure share one string channel; callers tell them
    /// apart with [`crate::classify`].
    pub async fn recipe_generation(&self, request: &GenerationRequest) -> String {
        match self.call(request).await {
            Ok(text) => text,
            Err(message) => message,
        }
    }

    /// Same call, with the outcome kept in an explicit result instead of
    /// being folded into the text.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        match self.call(request).await {
            Ok(text) => GenerationResult::Success { text },
            Err(message) => GenerationResult::Failure { message },
        }
    }

    async fn call(&self, request: &GenerationRequest) -> Result<String, String> {
        info!(
            "Generating recipe post about '{}' (~{} words) with {}",
            request.topic(),
            request.word_count().get(),
            self.provider.provider_name()
        );
        let prompt = build_prompt(request.topic(), request.word_count());
        debug!("Prompt: {}", prompt);

        // Convert error to string immediately to avoid Send issues
        self.provider.generate(&prompt).await.map_err(|e| {
            let message = format!("{}{}", ERROR_PREFIX, e);
            warn!("{}", message);
            message
        })
    }
}
