//! # SQLite
//!
//! Backing store for the kanji flashcards and site accounts.
//!
//! ## Tables
//!
//! - `info`: one row per kanji. `kanj` is deliberately not unique; a glyph
//!   listed twice shows up twice in a category scan.
//! - `users`: account name, salted password hash, creation time.
//!
//! Category scans are ordered by `rowid`, so retrieval order is insertion
//! order.
mod db;
mod error;
mod import;
mod kanji;
mod users;

pub use db::Database;
pub use error::DbError;
pub use users::UserRecord;
