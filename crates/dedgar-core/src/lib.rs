pub mod category;
pub mod error;
pub mod flashcard;
pub mod index;
pub mod store;

pub use category::CategoryKind;
pub use error::{FlashcardError, StoreError};
pub use flashcard::{list_category, resolve_neighbors};
pub use index::{CategoryIndex, IndexMiss, Neighbors};
pub use store::KanjiStore;

#[cfg(test)]
pub(crate) mod testing;
