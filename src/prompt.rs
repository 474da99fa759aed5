use crate::model::WordCount;

/// The instruction template sent to the model for every recipe post.
///
/// The prompt is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
///
/// Contains `{{TOPIC}}` and `{{WORD_COUNT}}` placeholders that are filled in
/// by [`build_prompt`].
pub const RECIPE_BLOG_PROMPT: &str = include_str!("prompt.txt");

/// Fills the template with a topic and target length.
pub fn build_prompt(topic: &str, word_count: WordCount) -> String {
    // Word count first so a topic that contains a placeholder is left as-is.
    RECIPE_BLOG_PROMPT
        .replace("{{WORD_COUNT}}", &word_count.get().to_string())
        .replace("{{TOPIC}}", topic)
}
