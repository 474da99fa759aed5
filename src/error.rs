use thiserror::Error;

/// Errors that can occur while configuring or running Flavor Fusion
#[derive(Error, Debug)]
pub enum FlavorError {
    /// A generation was requested without a topic
    #[error("Recipe topic cannot be empty")]
    EmptyTopic,

    /// No API key in config or environment
    #[error("{0} not found in config or environment")]
    MissingApiKey(&'static str),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Binding or serving the web UI failed
    #[error("Server error: {0}")]
    ServerError(#[from] std::io::Error),
}
