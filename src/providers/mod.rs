mod google;

pub use google::GoogleProvider;

use async_trait::async_trait;
use std::error::Error;

/// A remote text-generation service
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Send one prompt and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String, Box<dyn Error + Send + Sync>>;
}
