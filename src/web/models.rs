use serde::{Deserialize, Serialize};

use crate::config::WordCountBounds;
use crate::download::DownloadArtifact;
use crate::presenter::InputSnapshot;

/// Body of the HTML form posted by the "Generate Recipe" button.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub word_count: Option<String>,
}

impl GenerateForm {
    /// Unparseable word counts fall back to the slider default.
    pub fn into_snapshot(self, bounds: &WordCountBounds) -> InputSnapshot {
        let word_count = self
            .word_count
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or_else(|| i64::from(bounds.default));
        InputSnapshot {
            topic: self.topic,
            word_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    pub topic: String,
    #[serde(default)]
    pub word_count: Option<i64>,
}

impl RecipeRequest {
    pub fn into_snapshot(self, bounds: &WordCountBounds) -> InputSnapshot {
        InputSnapshot {
            topic: self.topic,
            word_count: self.word_count.unwrap_or_else(|| i64::from(bounds.default)),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecipeResponse {
    Success {
        #[serde(flatten)]
        download: DownloadArtifact,
    },
    Failure {
        message: String,
    },
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
