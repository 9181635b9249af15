use serde::{Deserialize, Serialize};

/// One row of the kanji table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiRecord {
    pub kanji: String,
    pub on_reading: String,
    pub kun_reading: String,
    pub translation: String,
    pub romaji: String,
    pub mnemonic: String,
    pub jlpt: String,
    pub grade: String,
}

/// Flashcard view: the requested record plus its neighbours in category order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// None when the single-record lookup found nothing
    pub record: Option<KanjiRecord>,
    pub previous: String,
    pub next: String,
    pub selection: String,
    pub level: String,
}

/// Every key of one category, in retrieval order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiList {
    pub entry: Vec<String>,
    pub selection: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSelection {
    pub grade: Vec<LevelOption>,
    pub jlpt: Vec<LevelOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub name: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub show: String,
    pub season: String,
    pub episode: String,
    pub source: String,
}
