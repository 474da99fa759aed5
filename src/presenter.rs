//! The "Generate" workflow: validate input, show a joke, call the model,
//! then render either the post with its download or an error notice.

use log::warn;

use crate::classify::classify;
use crate::config::WordCountBounds;
use crate::download::DownloadArtifact;
use crate::generator::RecipeGenerator;
use crate::jokes::random_joke;
use crate::model::{GenerationRequest, GenerationResult, WordCount};

pub const EMPTY_TOPIC_WARNING: &str = "Please enter a recipe topic first.";
pub const SUCCESS_NOTICE: &str = "Recipe generated successfully!";

/// Raw values read from the input widgets when "Generate" is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSnapshot {
    pub topic: String,
    pub word_count: i64,
}

/// What the UI should display, in the order it is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Warning {
        message: &'static str,
    },
    Pending {
        joke: &'static str,
    },
    /// Removes the joke shown by `Pending`.
    ClearPending,
    Success {
        content: String,
        notice: &'static str,
        download: DownloadArtifact,
    },
    Failure {
        message: String,
    },
}

/// Receives views as the workflow progresses.
pub trait ViewSink {
    fn show(&mut self, view: View);
}

impl ViewSink for Vec<View> {
    fn show(&mut self, view: View) {
        self.push(view);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Pending,
    Resolved(GenerationResult),
}

/// One user session. Each trigger runs to completion before returning.
pub struct Presenter {
    generator: RecipeGenerator,
    bounds: WordCountBounds,
    state: SessionState,
}

impl Presenter {
    pub fn new(generator: RecipeGenerator, bounds: WordCountBounds) -> Self {
        Presenter {
            generator,
            bounds,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Handles one press of "Generate".
    pub async fn trigger<S: ViewSink + ?Sized>(
        &mut self,
        input: &InputSnapshot,
        sink: &mut S,
    ) -> &SessionState {
        let word_count = WordCount::clamped(input.word_count, &self.bounds);
        let request = match GenerationRequest::new(&input.topic, word_count) {
            Ok(request) => request,
            Err(_) => {
                warn!("Generate pressed without a topic");
                sink.show(View::Warning {
                    message: EMPTY_TOPIC_WARNING,
                });
                self.state = SessionState::Idle;
                return &self.state;
            }
        };

        self.state = SessionState::Pending;
        sink.show(View::Pending {
            joke: random_joke(),
        });

        let text = self.generator.recipe_generation(&request).await;
        sink.show(View::ClearPending);

        let result = classify(&text);
        match &result {
            GenerationResult::Success { text } => sink.show(View::Success {
                content: text.clone(),
                notice: SUCCESS_NOTICE,
                download: DownloadArtifact::for_recipe(request.topic(), text.as_str()),
            }),
            GenerationResult::Failure { message } => sink.show(View::Failure {
                message: message.clone(),
            }),
        }

        self.state = SessionState::Resolved(result);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jokes::JOKES;
    use crate::providers::LlmProvider;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingProvider {
        reply: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LlmProvider for CountingProvider {
        fn provider_name(&self) -> &str {
            "counting"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.to_string())
        }
    }

    fn presenter(reply: &'static str) -> (Presenter, Arc<CountingProvider>) {
        let provider = Arc::new(CountingProvider {
            reply,
            calls: AtomicUsize::new(0),
        });
        let presenter = Presenter::new(
            RecipeGenerator::new(provider.clone()),
            WordCountBounds::default(),
        );
        (presenter, provider)
    }

    fn input(topic: &str, word_count: i64) -> InputSnapshot {
        InputSnapshot {
            topic: topic.to_string(),
            word_count,
        }
    }

    #[tokio::test]
    async fn test_starts_idle() {
        let (presenter, _) = presenter("# Toast");
        assert_eq!(presenter.state(), &SessionState::Idle);
    }

    #[tokio::test]
    async fn test_empty_topic_never_calls_provider() {
        let (mut presenter, provider) = presenter("# Toast");
        let mut views: Vec<View> = Vec::new();

        let state = presenter.trigger(&input("", 500), &mut views).await;

        assert_eq!(state, &SessionState::Idle);
        assert_eq!(
            views,
            vec![View::Warning {
                message: EMPTY_TOPIC_WARNING
            }]
        );
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_success_path() {
        let (mut presenter, provider) = presenter("# Banana Bread\n\nMash the bananas.");
        let mut views: Vec<View> = Vec::new();

        presenter
            .trigger(&input("Banana Bread", 300), &mut views)
            .await;

        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(views.len(), 3);
        assert!(matches!(views[0], View::Pending { .. }));
        assert_eq!(views[1], View::ClearPending);
        match &views[2] {
            View::Success {
                content,
                notice,
                download,
            } => {
                assert_eq!(content, "# Banana Bread\n\nMash the bananas.");
                assert_eq!(*notice, SUCCESS_NOTICE);
                assert_eq!(download.file_name, "banana_bread_recipe.md");
                assert_eq!(download.mime_type, "text/markdown");
                assert_eq!(download.content, *content);
            }
            other => panic!("expected success view, got {other:?}"),
        }
        assert!(matches!(
            presenter.state(),
            SessionState::Resolved(GenerationResult::Success { .. })
        ));
    }

    #[tokio::test]
    async fn test_text_with_error_word_renders_failure() {
        let reply = "This dish has zero margin for Error in seasoning.";
        let (mut presenter, _) = presenter(reply);
        let mut views: Vec<View> = Vec::new();

        presenter.trigger(&input("Curry", 500), &mut views).await;

        assert_eq!(
            views.last(),
            Some(&View::Failure {
                message: reply.to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_pending_jokes_come_from_list() {
        let (mut presenter, _) = presenter("# Toast");
        let mut seen = HashSet::new();

        for _ in 0..500 {
            let mut views: Vec<View> = Vec::new();
            presenter.trigger(&input("Toast", 100), &mut views).await;
            match views.first() {
                Some(View::Pending { joke }) => {
                    assert!(JOKES.contains(joke));
                    seen.insert(*joke);
                }
                other => panic!("expected pending view, got {other:?}"),
            }
        }

        assert_eq!(seen.len(), JOKES.len());
    }

    #[tokio::test]
    async fn test_out_of_range_word_count_is_clamped() {
        struct PromptCapture(std::sync::Mutex<String>);

        #[async_trait]
        impl LlmProvider for PromptCapture {
            fn provider_name(&self) -> &str {
                "capture"
            }

            async fn generate(
                &self,
                prompt: &str,
            ) -> Result<String, Box<dyn Error + Send + Sync>> {
                *self.0.lock().unwrap() = prompt.to_string();
                Ok("# Soup".to_string())
            }
        }

        let provider = Arc::new(PromptCapture(std::sync::Mutex::new(String::new())));
        let mut presenter = Presenter::new(
            RecipeGenerator::new(provider.clone()),
            WordCountBounds::default(),
        );

        presenter.trigger(&input("Soup", 5000), &mut Vec::<View>::new()).await;
        assert!(provider.0.lock().unwrap().contains("approximately 2000 words"));

        presenter.trigger(&input("Soup", 3), &mut Vec::<View>::new()).await;
        assert!(provider.0.lock().unwrap().contains("approximately 100 words"));
    }
}
