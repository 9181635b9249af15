use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use dedgar_core::{list_category, resolve_neighbors};
use dedgar_lang_japanese::{level_selection, normalize_key};
use dedgar_types::{Flashcard, KanjiList, LevelSelection};

use crate::{error::AppError, state::AppState};

pub async fn selection_handler() -> Json<LevelSelection> {
    Json(level_selection())
}

pub async fn level_handler(
    State(state): State<Arc<AppState>>,
    Path((selection, level)): Path<(String, String)>,
) -> Result<Json<KanjiList>, AppError> {
    let list = state
        .with_db(move |db| list_category(db, &selection, &level))
        .await??;

    Ok(Json(list))
}

pub async fn flashcard_handler(
    State(state): State<Arc<AppState>>,
    Path((selection, level, kanji)): Path<(String, String, String)>,
) -> Result<Json<Flashcard>, AppError> {
    let key = normalize_key(&kanji);

    let card = state
        .with_db(move |db| resolve_neighbors(db, &selection, &level, &key))
        .await??;

    Ok(Json(card))
}
