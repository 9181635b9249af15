use dedgar_types::{Flashcard, KanjiList, KanjiRecord};

use crate::category::CategoryKind;
use crate::error::{FlashcardError, StoreError};
use crate::index::{CategoryIndex, IndexMiss};
use crate::store::KanjiStore;

/// Records for a raw selector. Unknown selectors are an empty category.
fn fetch_category<S>(store: &S, selection: &str, level: &str) -> Result<Vec<KanjiRecord>, StoreError>
where
    S: KanjiStore + ?Sized,
{
    match CategoryKind::parse(selection) {
        Some(kind) => store.query_by_category(kind, level),
        None => {
            tracing::debug!("Unknown category selector {selection:?}");
            Ok(Vec::new())
        }
    }
}

/// Every kanji of a category in retrieval order
pub fn list_category<S>(store: &S, selection: &str, level: &str) -> Result<KanjiList, StoreError>
where
    S: KanjiStore + ?Sized,
{
    let records = fetch_category(store, selection, level)?;

    Ok(KanjiList {
        entry: CategoryIndex::from_records(&records).into_keys(),
        selection: selection.to_string(),
        level: level.to_string(),
    })
}

/// Look up `target` together with its wrap-around neighbours inside the
/// `(selection, level)` category.
///
/// Issues one category scan and one single-record lookup. A target that is
/// in the category but has no row of its own still resolves, with
/// `record: None`.
pub fn resolve_neighbors<S>(
    store: &S,
    selection: &str,
    level: &str,
    target: &str,
) -> Result<Flashcard, FlashcardError>
where
    S: KanjiStore + ?Sized,
{
    let records = fetch_category(store, selection, level)?;
    let index = CategoryIndex::from_records(&records);

    let neighbors = index.neighbors(target).map_err(|miss| match miss {
        IndexMiss::Empty => FlashcardError::CategoryNotFound {
            kind: selection.to_string(),
            value: level.to_string(),
        },
        IndexMiss::Missing => FlashcardError::KeyNotInCategory {
            key: target.to_string(),
            kind: selection.to_string(),
            value: level.to_string(),
        },
    })?;

    let record = store.query_by_key(target)?;
    if record.is_none() {
        tracing::warn!("{target} is listed in {selection} {level} but has no row of its own");
    }

    Ok(Flashcard {
        record,
        previous: neighbors.previous.to_string(),
        next: neighbors.next.to_string(),
        selection: selection.to_string(),
        level: level.to_string(),
    })
}
