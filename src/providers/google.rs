use crate::config::{GenerationConfig, ProviderConfig};
use crate::error::FlavorError;
use crate::providers::LlmProvider;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::error::Error;

pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    generation: GenerationConfig,
}

impl GoogleProvider {
    /// Create a new Google Gemini provider from configuration
    pub fn new(
        config: &ProviderConfig,
        generation: &GenerationConfig,
    ) -> Result<Self, FlavorError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .ok_or(FlavorError::MissingApiKey("GOOGLE_API_KEY"))?;

        Ok(GoogleProvider {
            client: Client::new(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            generation: generation.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "contents": [{
                "parts": [{
                    "text": prompt
                }]
            }],
            "generationConfig": {
                "temperature": self.generation.temperature,
                "topP": self.generation.top_p,
                "topK": self.generation.top_k,
                "maxOutputTokens": self.generation.max_output_tokens,
                "responseMimeType": self.generation.response_mime_type
            }
        })
    }
}

#[async_trait]
impl LlmProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(&self, prompt: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
        // Key goes in a header so transport errors never echo it back in the URL
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let raw_body = response.text().await?;
        let response_body: Value = serde_json::from_str(&raw_body).map_err(|e| {
            format!(
                "Google Gemini API returned {} with an unreadable body: {}",
                status, e
            )
        })?;
        debug!("Google Gemini response: {:?}", response_body);

        // Check for API error response
        if let Some(error) = response_body.get("error") {
            let error_code = error["code"].as_i64().unwrap_or(0);
            let error_message = error["message"].as_str().unwrap_or("Unknown error");
            return Err(format!(
                "Google Gemini API error ({}): {}",
                error_code, error_message
            )
            .into());
        }

        if !status.is_success() {
            return Err(format!("Google Gemini API returned {}", status).into());
        }

        extract_text(&response_body)
    }
}

/// Joins the text of every part of the first candidate.
fn extract_text(response_body: &Value) -> Result<String, Box<dyn Error + Send + Sync>> {
    let candidate = &response_body["candidates"][0];
    if candidate.is_null() {
        if let Some(reason) = response_body["promptFeedback"]["blockReason"].as_str() {
            return Err(format!("Prompt was blocked by Google Gemini: {}", reason).into());
        }
    }

    let parts = candidate["content"]["parts"].as_array().ok_or_else(|| {
        let finish_reason = candidate["finishReason"].as_str().unwrap_or("unknown");
        format!(
            "Failed to extract content from Google Gemini response (finish reason: {})",
            finish_reason
        )
    })?;

    Ok(parts
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect())
}
