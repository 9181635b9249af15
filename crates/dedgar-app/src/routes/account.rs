use std::sync::Arc;

use axum::{
    Form, Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use dedgar_store::UserRecord;
use dedgar_types::{Credentials, UserView};

use crate::{
    error::AppError,
    session::{expired_cookie, session_cookie, session_id},
    state::AppState,
};

async fn start_session(state: &AppState, user: UserRecord) -> Response {
    let id = state.sessions.create(&user).await;
    let cookie = session_cookie(&state.config.auth.cookie_name, &id, state.sessions.ttl());

    (
        [(SET_COOKIE, cookie)],
        Json(UserView {
            id: user.id,
            name: user.name,
        }),
    )
        .into_response()
}

pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    Form(credentials): Form<Credentials>,
) -> Result<Response, AppError> {
    let name = credentials.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }

    let min_len = state.config.auth.min_password_len;
    if credentials.password.chars().count() < min_len {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {min_len} characters"
        )));
    }

    let password = credentials.password;
    let user = state
        .with_db(move |db| db.create_user(&name, &password))
        .await??;

    Ok(start_session(&state, user).await)
}

pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Form(credentials): Form<Credentials>,
) -> Result<Response, AppError> {
    let Credentials { name, password } = credentials;
    let name = name.trim().to_string();

    let user = state
        .with_db(move |db| db.verify_user(&name, &password))
        .await??
        .ok_or(AppError::Unauthorized("Invalid name or password"))?;

    tracing::info!("{} logged in", user.name);
    Ok(start_session(&state, user).await)
}

pub async fn logout_handler(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let cookie_name = &state.config.auth.cookie_name;

    if let Some(id) = session_id(&headers, cookie_name) {
        state.sessions.remove(&id).await;
    }

    (StatusCode::NO_CONTENT, [(SET_COOKIE, expired_cookie(cookie_name))]).into_response()
}

pub async fn me_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<UserView>, AppError> {
    let id = session_id(&headers, &state.config.auth.cookie_name)
        .ok_or(AppError::Unauthorized("Not logged in"))?;
    let session = state
        .sessions
        .get(&id)
        .await
        .ok_or(AppError::Unauthorized("Not logged in"))?;

    Ok(Json(UserView {
        id: session.user_id,
        name: session.name,
    }))
}
