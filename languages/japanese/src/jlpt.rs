#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JlptLevel {
    N5, // Beginner (~100 kanji)
    N4, // Elementary (~300 kanji)
    N3, // Intermediate (~650 kanji)
    N2, // Upper intermediate (~1000 kanji)
    N1, // Advanced (~2000 kanji)
}

impl JlptLevel {
    /// Easiest first
    pub const ALL: [JlptLevel; 5] = [
        JlptLevel::N5,
        JlptLevel::N4,
        JlptLevel::N3,
        JlptLevel::N2,
        JlptLevel::N1,
    ];

    /// Value stored in the `jlpt` column
    pub fn as_str(&self) -> &'static str {
        match self {
            JlptLevel::N5 => "N5",
            JlptLevel::N4 => "N4",
            JlptLevel::N3 => "N3",
            JlptLevel::N2 => "N2",
            JlptLevel::N1 => "N1",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            JlptLevel::N5 => "N5 (Beginner)",
            JlptLevel::N4 => "N4 (Elementary)",
            JlptLevel::N3 => "N3 (Intermediate)",
            JlptLevel::N2 => "N2 (Upper Intermediate)",
            JlptLevel::N1 => "N1 (Advanced)",
        }
    }
}
