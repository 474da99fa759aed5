use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use log::{debug, info};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::presenter::{Presenter, SessionState, View, ViewSink};

use super::models::{ErrorResponse, GenerateForm, RecipeRequest, RecipeResponse};
use super::pages;
use super::AppState;

type Chunk = Result<String, Infallible>;

/// Forwards rendered views to the streamed response body.
struct HtmlSink {
    tx: mpsc::UnboundedSender<Chunk>,
}

impl HtmlSink {
    fn send(&self, html: impl Into<String>) {
        // The browser may have gone away; the workflow still runs to the end.
        if self.tx.send(Ok(html.into())).is_err() {
            debug!("Client disconnected before the page finished");
        }
    }
}

impl ViewSink for HtmlSink {
    fn show(&mut self, view: View) {
        self.send(pages::render_view(&view));
    }
}

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut page = pages::page_head(
        &state.bounds,
        &state.model,
        "",
        i64::from(state.bounds.default),
    );
    page.push_str(pages::idle_panel());
    page.push_str(pages::page_tail());
    Html(page)
}

/// Streams the page: head and joke first, the result once the model answers.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Form(form): Form<GenerateForm>,
) -> Response {
    let input = form.into_snapshot(&state.bounds);
    info!("Generate requested for topic '{}'", input.topic);

    let (tx, rx) = mpsc::unbounded_channel::<Chunk>();
    let mut sink = HtmlSink { tx };
    sink.send(pages::page_head(
        &state.bounds,
        &state.model,
        &input.topic,
        input.word_count,
    ));

    tokio::spawn(async move {
        let mut presenter = Presenter::new(state.generator.clone(), state.bounds);
        presenter.trigger(&input, &mut sink).await;
        sink.send(pages::page_tail());
    });

    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        Body::from_stream(UnboundedReceiverStream::new(rx)),
    )
        .into_response()
}

/// JSON variant of the generate workflow.
pub async fn create_recipe(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RecipeRequest>,
) -> Response {
    let input = payload.into_snapshot(&state.bounds);
    let mut presenter = Presenter::new(state.generator.clone(), state.bounds);
    let mut views: Vec<View> = Vec::new();

    if *presenter.trigger(&input, &mut views).await == SessionState::Idle {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Field \"topic\" must be a non-empty string".to_string(),
            }),
        )
            .into_response();
    }

    match views.pop() {
        Some(View::Success { download, .. }) => (
            StatusCode::OK,
            Json(RecipeResponse::Success { download }),
        )
            .into_response(),
        Some(View::Failure { message }) => (
            StatusCode::BAD_GATEWAY,
            Json(RecipeResponse::Failure { message }),
        )
            .into_response(),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Unexpected final view: {:?}", other),
            }),
        )
            .into_response(),
    }
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
