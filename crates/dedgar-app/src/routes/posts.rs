use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use dedgar_types::PostSummary;

use crate::{error::AppError, state::AppState};

pub async fn posts_handler(State(state): State<Arc<AppState>>) -> Json<Vec<PostSummary>> {
    Json(state.posts().await.summaries())
}

pub async fn post_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let catalog = state.posts().await;
    let body = tokio::task::spawn_blocking(move || catalog.read(&name)).await??;

    Ok(Html(body))
}
