use std::collections::HashMap;

use dedgar_types::KanjiRecord;

/// Ordered bidirectional index over the keys of one category.
///
/// `keys` keeps retrieval order. `positions` maps each key to its position;
/// when a key occurs more than once the later position wins, so
/// `keys[positions[k]] == k` holds for every indexed key.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    keys: Vec<String>,
    positions: HashMap<String, usize>,
}

/// Previous and next keys around a target, wrapping at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors<'a> {
    pub position: usize,
    pub previous: &'a str,
    pub next: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexMiss {
    /// The category has no records
    Empty,
    /// The category has records but not this key
    Missing,
}

impl CategoryIndex {
    pub fn build<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut positions = HashMap::with_capacity(keys.len());

        for (position, key) in keys.iter().enumerate() {
            positions.insert(key.clone(), position);
        }

        Self { keys, positions }
    }

    pub fn from_records(records: &[KanjiRecord]) -> Self {
        Self::build(records.iter().map(|r| r.kanji.clone()))
    }

    /// Number of records the index was built from
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    pub fn key_at(&self, position: usize) -> Option<&str> {
        self.keys.get(position).map(String::as_str)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn into_keys(self) -> Vec<String> {
        self.keys
    }

    pub fn neighbors(&self, key: &str) -> Result<Neighbors<'_>, IndexMiss> {
        let n = self.keys.len();
        if n == 0 {
            return Err(IndexMiss::Empty);
        }

        let position = self.position(key).ok_or(IndexMiss::Missing)?;

        let previous = if position == 0 { n - 1 } else { position - 1 };
        let next = if position + 1 == n { 0 } else { position + 1 };

        Ok(Neighbors {
            position,
            previous: &self.keys[previous],
            next: &self.keys[next],
        })
    }
}
