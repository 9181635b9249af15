/// School grade as recorded in KANJIDIC: 1-6 are the elementary grades,
/// 8 the rest of the jōyō list, 9 and 10 the jinmeiyō kanji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SchoolGrade(u8);

impl SchoolGrade {
    pub const ALL: [SchoolGrade; 9] = [
        SchoolGrade(1),
        SchoolGrade(2),
        SchoolGrade(3),
        SchoolGrade(4),
        SchoolGrade(5),
        SchoolGrade(6),
        SchoolGrade(8),
        SchoolGrade(9),
        SchoolGrade(10),
    ];

    /// Value stored in the `school` column
    pub fn value(&self) -> String {
        self.0.to_string()
    }

    pub fn description(&self) -> String {
        match self.0 {
            1..=6 => format!("Grade {}", self.0),
            8 => "Secondary school".to_string(),
            _ => "Jinmeiyō (names)".to_string(),
        }
    }
}
