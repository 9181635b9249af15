use unicode_normalization::UnicodeNormalization;

/// Canonical form of a kanji key taken from a URL.
///
/// Trims surrounding whitespace and applies NFKC, which folds CJK
/// compatibility ideographs onto their unified code points.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().nfkc().collect()
}
