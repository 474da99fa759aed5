mod handlers;
mod models;
pub mod pages;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use log::info;

use crate::config::{ServerConfig, WordCountBounds};
use crate::error::FlavorError;
use crate::generator::RecipeGenerator;

pub use models::{ErrorResponse, GenerateForm, RecipeRequest, RecipeResponse};

/// Immutable state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub generator: RecipeGenerator,
    pub bounds: WordCountBounds,
    /// Model name shown under "Model Settings"
    pub model: String,
}

pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate))
        .route("/api/recipes", post(handlers::create_recipe))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .with_state(state)
}

pub async fn run_server(app: Router, config: &ServerConfig) -> Result<(), FlavorError> {
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Flavor Fusion listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
