use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

pub const MARKDOWN_MIME: &str = "text/markdown";

/// A generated post offered to the user as a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

impl DownloadArtifact {
    pub fn for_recipe(topic: &str, content: impl Into<String>) -> Self {
        DownloadArtifact {
            file_name: recipe_file_name(topic),
            mime_type: MARKDOWN_MIME,
            content: content.into(),
        }
    }

    /// `data:` URL usable as the `href` of a download link.
    pub fn data_url(&self) -> String {
        format!(
            "data:{};charset=utf-8;base64,{}",
            self.mime_type,
            STANDARD.encode(self.content.as_bytes())
        )
    }
}

/// "Vegan Chocolate Cake" -> "vegan_chocolate_cake_recipe.md"
pub fn recipe_file_name(topic: &str) -> String {
    format!("{}_recipe.md", topic.replace(' ', "_").to_lowercase())
}
