use std::fmt;

/// Which column a category filters on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    /// Japanese school grade the kanji is taught in
    Grade,
    /// JLPT level (N5..N1)
    Jlpt,
}

impl CategoryKind {
    /// Parse the selector used in URLs. Unknown selectors are `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "grade" => Some(CategoryKind::Grade),
            "jlpt" => Some(CategoryKind::Jlpt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Grade => "grade",
            CategoryKind::Jlpt => "jlpt",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_selectors_only() {
        assert_eq!(CategoryKind::parse("grade"), Some(CategoryKind::Grade));
        assert_eq!(CategoryKind::parse("jlpt"), Some(CategoryKind::Jlpt));
        assert_eq!(CategoryKind::parse("JLPT"), None);
        assert_eq!(CategoryKind::parse("school"), None);
        assert_eq!(CategoryKind::parse(""), None);
    }

    #[test]
    fn round_trips_through_display() {
        for kind in [CategoryKind::Grade, CategoryKind::Jlpt] {
            assert_eq!(CategoryKind::parse(&kind.to_string()), Some(kind));
        }
    }
}
