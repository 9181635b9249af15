use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::State,
    response::Html,
    routing::{MethodRouter, get},
};

use crate::{error::AppError, state::AppState};

/// GET route serving `<pages_dir>/<name>.html`
pub fn page(name: &'static str) -> MethodRouter<Arc<AppState>> {
    get(move |State(state): State<Arc<AppState>>| async move { render_page(&state, name).await })
}

async fn render_page(state: &AppState, name: &str) -> Result<Html<String>, AppError> {
    let path = Path::new(&state.config.server.pages_dir).join(format!("{name}.html"));

    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Ok(Html(body)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::NotFound(format!("404 Page {name} not found")))
        }
        Err(e) => Err(AppError::Internal(format!("reading {}: {e}", path.display()))),
    }
}
