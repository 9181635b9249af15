use dedgar_core::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Database lock poisoned")]
    Poisoned,

    #[error("User {0} already exists")]
    UserExists(String),

    #[error("Line {line}: {reason}")]
    Import { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Poisoned => StoreError::Unavailable(err.to_string()),
            DbError::Sqlite(rusqlite::Error::FromSqlConversionFailure(..))
            | DbError::Sqlite(rusqlite::Error::InvalidColumnType(..)) => {
                StoreError::Malformed(err.to_string())
            }
            DbError::Sqlite(rusqlite::Error::SqliteFailure(ref e, _))
                if matches!(
                    e.code,
                    rusqlite::ErrorCode::CannotOpen
                        | rusqlite::ErrorCode::DatabaseBusy
                        | rusqlite::ErrorCode::DatabaseLocked
                ) =>
            {
                StoreError::Unavailable(err.to_string())
            }
            other => StoreError::Query(other.to_string()),
        }
    }
}
