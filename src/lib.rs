//! Flavor Fusion: AI-driven recipe blogging.
//!
//! A topic and a target word count go in; a templated prompt is sent to
//! Google Gemini; the returned post is classified and rendered with a
//! Markdown download, or shown as an error.

pub mod classify;
pub mod config;
pub mod download;
pub mod error;
pub mod generator;
pub mod jokes;
pub mod model;
pub mod presenter;
pub mod prompt;
pub mod providers;
pub mod web;

use std::sync::Arc;

pub use classify::classify;
pub use config::AppConfig;
pub use download::{recipe_file_name, DownloadArtifact};
pub use error::FlavorError;
pub use generator::{RecipeGenerator, ERROR_PREFIX};
pub use model::{GenerationRequest, GenerationResult, WordCount};
pub use presenter::{InputSnapshot, Presenter, SessionState, View, ViewSink};
pub use prompt::build_prompt;
pub use providers::{GoogleProvider, LlmProvider};
pub use web::{build_app, AppState};

/// Wires the Gemini provider and the web state from one loaded config.
pub fn app_state_from_config(config: &AppConfig) -> Result<AppState, FlavorError> {
    let provider = GoogleProvider::new(&config.provider, &config.generation)?;
    Ok(AppState {
        model: provider.model().to_string(),
        generator: RecipeGenerator::new(Arc::new(provider)),
        bounds: config.word_count,
    })
}

/// One-shot generation without the UI, using the parity string channel.
///
/// # Example
/// ```no_run
/// # use flavor_fusion::{generate_recipe_post, AppConfig};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AppConfig::load()?;
/// let post = generate_recipe_post(&config, "Banana Bread", 300).await?;
/// println!("{}", post);
/// # Ok(())
/// # }
/// ```
pub async fn generate_recipe_post(
    config: &AppConfig,
    topic: &str,
    word_count: i64,
) -> Result<String, FlavorError> {
    let request = GenerationRequest::new(topic, WordCount::clamped(word_count, &config.word_count))?;
    let state = app_state_from_config(config)?;
    Ok(state.generator.recipe_generation(&request).await)
}
