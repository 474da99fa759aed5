use crate::model::GenerationResult;

/// Substring that marks a generation as failed.
///
/// Any text containing it is treated as an error, including successful posts
/// that merely mention the word (e.g. "zero margin for Error"). Probably not
/// intended, but kept so the UI behaves the same for the same model output.
pub const ERROR_MARKER: &str = "Error";

/// Classifies the text returned by [`crate::RecipeGenerator::recipe_generation`].
pub fn classify(text: &str) -> GenerationResult {
    if text.is_empty() || text.contains(ERROR_MARKER) {
        GenerationResult::Failure {
            message: text.to_string(),
        }
    } else {
        GenerationResult::Success {
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_prefix_is_failure() {
        assert_eq!(
            classify("Error creating recipe: timeout"),
            GenerationResult::Failure {
                message: "Error creating recipe: timeout".to_string()
            }
        );
    }

    #[test]
    fn test_recipe_is_success() {
        let text = "# Spicy Tofu\n\nIngredients...";
        assert_eq!(
            classify(text),
            GenerationResult::Success {
                text: text.to_string()
            }
        );
    }

    #[test]
    fn test_recipe_mentioning_error_is_misclassified() {
        let result = classify("This dish has zero margin for Error in seasoning.");
        assert!(!result.is_success());
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert!(classify("No room for error here.").is_success());
    }

    #[test]
    fn test_empty_text_is_failure() {
        assert_eq!(
            classify(""),
            GenerationResult::Failure {
                message: String::new()
            }
        );
    }
}
