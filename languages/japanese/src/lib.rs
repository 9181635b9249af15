pub mod grade;
pub mod jlpt;
pub mod normalize;

use dedgar_types::{LevelOption, LevelSelection};

pub use grade::SchoolGrade;
pub use jlpt::JlptLevel;
pub use normalize::normalize_key;

/// Options shown on the kanji level selection page
pub fn level_selection() -> LevelSelection {
    LevelSelection {
        grade: SchoolGrade::ALL
            .iter()
            .map(|g| LevelOption {
                value: g.value(),
                label: g.description(),
            })
            .collect(),
        jlpt: JlptLevel::ALL
            .iter()
            .map(|l| LevelOption {
                value: l.as_str().to_string(),
                label: l.description().to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_lists_every_level() {
        let selection = level_selection();

        assert_eq!(selection.grade.len(), SchoolGrade::ALL.len());
        assert_eq!(selection.jlpt.len(), 5);
        assert_eq!(selection.jlpt[0].value, "N5");
        assert_eq!(selection.grade[2].value, "3");
    }
}
