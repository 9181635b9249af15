use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dedgar_core::{FlashcardError, StoreError};
use dedgar_posts::PostError;
use dedgar_store::DbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(&'static str),

    #[error(transparent)]
    Flashcard(#[from] FlashcardError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Database(#[from] DbError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("worker task failed: {err}"))
    }
}

impl From<PostError> for AppError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::NotFound(_) => AppError::NotFound("404 Post not found".to_string()),
            PostError::Io(e) => AppError::Internal(format!("reading post: {e}")),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Flashcard(FlashcardError::CategoryNotFound { .. })
            | AppError::Flashcard(FlashcardError::KeyNotInCategory { .. }) => StatusCode::NOT_FOUND,
            AppError::Flashcard(FlashcardError::DataAccess(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(DbError::UserExists(_)) => StatusCode::CONFLICT,
            AppError::Store(_) | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::debug!("{status}: {self}");
        }

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flashcard_misses_are_not_found_but_store_failures_are_not() {
        let empty = AppError::from(FlashcardError::CategoryNotFound {
            kind: "grade".to_string(),
            value: "99".to_string(),
        });
        let missing = AppError::from(FlashcardError::KeyNotInCategory {
            key: "雨".to_string(),
            kind: "jlpt".to_string(),
            value: "N5".to_string(),
        });
        let failed = AppError::from(FlashcardError::DataAccess(StoreError::Unavailable(
            "down".to_string(),
        )));

        assert_eq!(empty.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_ne!(empty.to_string(), missing.to_string());
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unknown_post_is_not_found() {
        let err = AppError::from(PostError::NotFound("draft".to_string()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_user_is_conflict() {
        let err = AppError::from(DbError::UserExists("shinobu".to_string()));
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }
}
