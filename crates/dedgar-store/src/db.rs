use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use rusqlite::Connection;

use crate::error::DbError;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS info (
    kanj TEXT NOT NULL,
    von TEXT NOT NULL DEFAULT '',
    vkun TEXT NOT NULL DEFAULT '',
    transl TEXT NOT NULL DEFAULT '',
    roma TEXT NOT NULL DEFAULT '',
    rememb TEXT NOT NULL DEFAULT '',
    jlpt TEXT NOT NULL DEFAULT '',
    school TEXT NOT NULL DEFAULT ''
);
CREATE INDEX IF NOT EXISTS idx_info_kanj ON info(kanj);
CREATE INDEX IF NOT EXISTS idx_info_jlpt ON info(jlpt);
CREATE INDEX IF NOT EXISTS idx_info_school ON info(school);

CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    salt TEXT NOT NULL,
    created_at INTEGER NOT NULL
);
"#;

/// SQLite database behind a single mutex-guarded connection
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: &Path, busy_timeout: Duration) -> Result<Self, DbError> {
        tracing::info!("Opening database at {}", path.display());
        let conn = Connection::open(path)?;
        conn.busy_timeout(busy_timeout)?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self, DbError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, DbError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub(crate) fn conn(&self) -> Result<MutexGuard<'_, Connection>, DbError> {
        self.conn.lock().map_err(|_| DbError::Poisoned)
    }
}
