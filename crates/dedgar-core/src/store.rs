use std::sync::Arc;

use dedgar_types::KanjiRecord;

use crate::category::CategoryKind;
use crate::error::StoreError;

/// Read access to the kanji table
pub trait KanjiStore: Send + Sync {
    /// Every record in one category. Order is defined by the store.
    fn query_by_category(
        &self,
        kind: CategoryKind,
        value: &str,
    ) -> Result<Vec<KanjiRecord>, StoreError>;

    /// Single record by its glyph
    fn query_by_key(&self, key: &str) -> Result<Option<KanjiRecord>, StoreError>;
}

impl<S: KanjiStore + ?Sized> KanjiStore for Arc<S> {
    fn query_by_category(
        &self,
        kind: CategoryKind,
        value: &str,
    ) -> Result<Vec<KanjiRecord>, StoreError> {
        (**self).query_by_category(kind, value)
    }

    fn query_by_key(&self, key: &str) -> Result<Option<KanjiRecord>, StoreError> {
        (**self).query_by_key(key)
    }
}
