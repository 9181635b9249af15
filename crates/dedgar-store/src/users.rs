use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{ErrorCode, OptionalExtension, params};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::db::Database;
use crate::error::DbError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

impl Database {
    pub fn create_user(&self, name: &str, password: &str) -> Result<UserRecord, DbError> {
        let salt = Uuid::new_v4().simple().to_string();
        let hash = hash_password(&salt, password);

        let conn = self.conn()?;
        let inserted = conn.execute(
            "INSERT INTO users (name, password_hash, salt, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![name, hash, salt, now_secs()],
        );

        match inserted {
            Ok(_) => {
                tracing::info!("Registered user {name}");
                Ok(UserRecord {
                    id: conn.last_insert_rowid(),
                    name: name.to_string(),
                })
            }
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                Err(DbError::UserExists(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// The account matching `name` when `password` is correct
    pub fn verify_user(&self, name: &str, password: &str) -> Result<Option<UserRecord>, DbError> {
        let conn = self.conn()?;
        let row: Option<(i64, String, String)> = conn
            .query_row(
                "SELECT id, password_hash, salt FROM users WHERE name = ?1",
                [name],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .optional()?;

        Ok(row.and_then(|(id, hash, salt)| {
            (hash_password(&salt, password) == hash).then(|| UserRecord {
                id,
                name: name.to_string(),
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_user_can_log_in() {
        let db = Database::open_in_memory().unwrap();
        let user = db.create_user("shinobu", "correct horse").unwrap();

        let verified = db.verify_user("shinobu", "correct horse").unwrap();
        assert_eq!(verified, Some(user));
    }

    #[test]
    fn wrong_password_or_name_is_rejected() {
        let db = Database::open_in_memory().unwrap();
        db.create_user("shinobu", "correct horse").unwrap();

        assert_eq!(db.verify_user("shinobu", "battery staple").unwrap(), None);
        assert_eq!(db.verify_user("araragi", "correct horse").unwrap(), None);
    }

    #[test]
    fn duplicate_name_is_reported() {
        let db = Database::open_in_memory().unwrap();
        db.create_user("shinobu", "one password").unwrap();

        let err = db.create_user("shinobu", "two password").unwrap_err();
        assert!(matches!(err, DbError::UserExists(name) if name == "shinobu"));
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        assert_ne!(hash_password("a", "pw"), hash_password("b", "pw"));
        assert_eq!(hash_password("a", "pw"), hash_password("a", "pw"));
    }
}
