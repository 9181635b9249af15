use std::sync::Arc;

use axum::extract::{Path, State};

use crate::state::AppState;

/// ACME http-01 challenge: token followed by the account thumbprint
pub async fn cert_handler(
    State(state): State<Arc<AppState>>,
    Path(response): Path<String>,
) -> String {
    format!("{response}.{}", state.config.server.cert_account)
}
