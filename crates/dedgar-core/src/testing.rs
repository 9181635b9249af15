use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use dedgar_types::KanjiRecord;

use crate::category::CategoryKind;
use crate::error::StoreError;
use crate::store::KanjiStore;

pub fn record(kanji: &str, jlpt: &str, grade: &str) -> KanjiRecord {
    KanjiRecord {
        kanji: kanji.to_string(),
        translation: format!("meaning of {kanji}"),
        jlpt: jlpt.to_string(),
        grade: grade.to_string(),
        ..Default::default()
    }
}

/// In-memory store that counts queries and can be told to fail
#[derive(Default)]
pub struct MemoryStore {
    records: Vec<KanjiRecord>,
    hidden: HashSet<String>,
    fail: bool,
    category_queries: AtomicUsize,
    key_queries: AtomicUsize,
}

impl MemoryStore {
    pub fn new(records: Vec<KanjiRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    /// Keys that stay in their category but vanish from single lookups
    pub fn without_key_rows(mut self, keys: &[&str]) -> Self {
        self.hidden = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn category_queries(&self) -> usize {
        self.category_queries.load(Ordering::SeqCst)
    }

    pub fn key_queries(&self) -> usize {
        self.key_queries.load(Ordering::SeqCst)
    }
}

impl KanjiStore for MemoryStore {
    fn query_by_category(
        &self,
        kind: CategoryKind,
        value: &str,
    ) -> Result<Vec<KanjiRecord>, StoreError> {
        self.category_queries.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StoreError::Unavailable("memory store offline".to_string()));
        }

        Ok(self
            .records
            .iter()
            .filter(|r| match kind {
                CategoryKind::Grade => r.grade == value,
                CategoryKind::Jlpt => r.jlpt == value,
            })
            .cloned()
            .collect())
    }

    fn query_by_key(&self, key: &str) -> Result<Option<KanjiRecord>, StoreError> {
        self.key_queries.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StoreError::Unavailable("memory store offline".to_string()));
        }
        if self.hidden.contains(key) {
            return Ok(None);
        }

        Ok(self.records.iter().find(|r| r.kanji == key).cloned())
    }
}
