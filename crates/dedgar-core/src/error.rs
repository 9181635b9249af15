/// Failure reported by a record store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Malformed row: {0}")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FlashcardError {
    #[error("No kanji found for {kind} {value}")]
    CategoryNotFound { kind: String, value: String },

    #[error("{key} is not part of {kind} {value}")]
    KeyNotInCategory {
        key: String,
        kind: String,
        value: String,
    },

    #[error("Data access failure: {0}")]
    DataAccess(#[from] StoreError),
}
