use dedgar_core::{CategoryKind, KanjiStore, StoreError};
use dedgar_lang_japanese::normalize_key;
use dedgar_types::KanjiRecord;
use rusqlite::{Row, params};

use crate::db::Database;
use crate::error::DbError;

const SELECT_COLUMNS: &str = "SELECT kanj, von, vkun, transl, roma, rememb, jlpt, school FROM info";

fn category_column(kind: CategoryKind) -> &'static str {
    match kind {
        CategoryKind::Grade => "school",
        CategoryKind::Jlpt => "jlpt",
    }
}

fn row_to_record(row: &Row) -> rusqlite::Result<KanjiRecord> {
    Ok(KanjiRecord {
        kanji: row.get(0)?,
        on_reading: row.get(1)?,
        kun_reading: row.get(2)?,
        translation: row.get(3)?,
        romaji: row.get(4)?,
        mnemonic: row.get(5)?,
        jlpt: row.get(6)?,
        grade: row.get(7)?,
    })
}

impl Database {
    /// Insert one row. The kanji is stored NFKC-normalized, the same form
    /// flashcard lookups search for.
    pub fn insert_record(&self, record: &KanjiRecord) -> Result<(), DbError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO info (kanj, von, vkun, transl, roma, rememb, jlpt, school) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                normalize_key(&record.kanji),
                record.on_reading,
                record.kun_reading,
                record.translation,
                record.romaji,
                record.mnemonic,
                record.jlpt,
                record.grade,
            ],
        )?;
        Ok(())
    }

    pub fn kanji_count(&self) -> Result<usize, DbError> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM info", [], |r| r.get(0))?;
        Ok(count as usize)
    }

    fn category(&self, kind: CategoryKind, value: &str) -> Result<Vec<KanjiRecord>, DbError> {
        let conn = self.conn()?;
        let sql = format!(
            "{SELECT_COLUMNS} WHERE {} = ?1 ORDER BY rowid",
            category_column(kind)
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([value], row_to_record)?;

        let records = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        tracing::debug!("{kind} {value}: {} records", records.len());
        Ok(records)
    }

    fn single(&self, key: &str) -> Result<Option<KanjiRecord>, DbError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE kanj = ?1 ORDER BY rowid LIMIT 1"))?;
        let mut rows = stmt.query_map([key], row_to_record)?;

        rows.next().transpose().map_err(DbError::from)
    }
}

impl KanjiStore for Database {
    fn query_by_category(
        &self,
        kind: CategoryKind,
        value: &str,
    ) -> Result<Vec<KanjiRecord>, StoreError> {
        self.category(kind, value).map_err(StoreError::from)
    }

    fn query_by_key(&self, key: &str) -> Result<Option<KanjiRecord>, StoreError> {
        self.single(key).map_err(StoreError::from)
    }
}
