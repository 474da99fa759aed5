use serde::Serialize;

use crate::config::WordCountBounds;
use crate::error::FlavorError;

/// Target length of a generated post, always inside the configured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCount(u32);

impl WordCount {
    /// Clamps `raw` into `bounds`. Accepts signed input so form values like
    /// `-5` clamp instead of failing.
    pub fn clamped(raw: i64, bounds: &WordCountBounds) -> Self {
        let (min, max) = (bounds.min.min(bounds.max), bounds.max.max(bounds.min));
        let value = raw.clamp(i64::from(min), i64::from(max));
        WordCount(value as u32)
    }

    /// The slider default, clamped like any other value.
    pub fn default_for(bounds: &WordCountBounds) -> Self {
        Self::clamped(i64::from(bounds.default), bounds)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// One user request: a topic and a target length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    topic: String,
    word_count: WordCount,
}

impl GenerationRequest {
    /// Builds a request. Only the empty string is rejected; the topic is
    /// otherwise kept verbatim, whitespace included, for the prompt and the
    /// download file name.
    pub fn new(topic: &str, word_count: WordCount) -> Result<Self, FlavorError> {
        if topic.is_empty() {
            return Err(FlavorError::EmptyTopic);
        }
        Ok(GenerationRequest {
            topic: topic.to_string(),
            word_count,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn word_count(&self) -> WordCount {
        self.word_count
    }
}

/// Outcome of one generation, consumed by the presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationResult {
    Success { text: String },
    Failure { message: String },
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success { .. })
    }
}
