use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration, built once at startup
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Remote generation provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Sampling parameters sent with every request
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Limits of the word-count slider
    #[serde(default)]
    pub word_count: WordCountBounds,
    /// Web UI listen address
    #[serde(default)]
    pub server: ServerConfig,
}

/// Configuration for the Google Gemini provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Model identifier (e.g., "gemini-flash-latest")
    #[serde(default = "default_model")]
    pub model: String,
    /// API key for authentication (can also be set via GOOGLE_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the API (for proxies and tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

/// Fixed sampling configuration for the remote model
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Nucleus sampling probability
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    /// Top-k sampling cutoff
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Response format requested from the model
    #[serde(default = "default_response_mime_type")]
    pub response_mime_type: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: default_top_k(),
            max_output_tokens: default_max_output_tokens(),
            response_mime_type: default_response_mime_type(),
        }
    }
}

/// Bounds of the word-count input
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct WordCountBounds {
    #[serde(default = "default_min_words")]
    pub min: u32,
    #[serde(default = "default_max_words")]
    pub max: u32,
    #[serde(default = "default_word_step")]
    pub step: u32,
    #[serde(default = "default_words")]
    pub default: u32,
}

impl Default for WordCountBounds {
    fn default() -> Self {
        Self {
            min: default_min_words(),
            max: default_max_words(),
            step: default_word_step(),
            default: default_words(),
        }
    }
}

/// Listen address of the web UI
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// Default value functions
fn default_model() -> String {
    "gemini-flash-latest".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_temperature() -> f32 {
    0.75
}

fn default_top_p() -> f32 {
    0.95
}

fn default_top_k() -> u32 {
    64
}

fn default_max_output_tokens() -> u32 {
    8192
}

fn default_response_mime_type() -> String {
    "text/plain".to_string()
}

fn default_min_words() -> u32 {
    100
}

fn default_max_words() -> u32 {
    2000
}

fn default_word_step() -> u32 {
    50
}

fn default_words() -> u32 {
    500
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FLAVOR_FUSION__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FLAVOR_FUSION__PROVIDER__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the source priority.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: FLAVOR_FUSION__SERVER__PORT
        .add_source(
            Environment::with_prefix("FLAVOR_FUSION")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
