use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use dedgar_types::Episode;

use crate::{error::AppError, state::AppState};

fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
        && !segment.contains("..")
}

pub async fn watch_handler(
    State(state): State<Arc<AppState>>,
    Path((show, season, episode)): Path<(String, String, String)>,
) -> Result<Json<Episode>, AppError> {
    if ![&show, &season, &episode].iter().all(|s| is_plain_segment(s)) {
        return Err(AppError::NotFound("404 Video not found".to_string()));
    }

    let file = PathBuf::from(&state.config.server.static_dir)
        .join("vid")
        .join(&show)
        .join(&season)
        .join(format!("{episode}.mp4"));

    let available = tokio::fs::metadata(&file)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    if !available {
        return Err(AppError::NotFound("404 Video not found".to_string()));
    }

    let source = format!("/vid/{show}/{season}/{episode}.mp4");
    Ok(Json(Episode {
        show,
        season,
        episode,
        source,
    }))
}
