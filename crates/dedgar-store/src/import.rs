use std::fs;
use std::path::Path;

use dedgar_lang_japanese::normalize_key;
use rusqlite::params;

use crate::db::Database;
use crate::error::DbError;

const COLUMNS: usize = 8;

impl Database {
    /// Load kanji rows from a TSV file.
    ///
    /// Columns: kanji, on reading, kun reading, translation, romaji,
    /// mnemonic, JLPT level, school grade. Blank lines and `#` comments are
    /// skipped. Kanji are stored NFKC-normalized. The whole file is imported
    /// in one transaction.
    pub fn import_tsv(&self, path: &Path) -> Result<usize, DbError> {
        tracing::info!("Importing kanji from {}", path.display());
        let content = fs::read_to_string(path)?;
        let imported = self.import_lines(&content)?;
        tracing::info!("Imported {imported} kanji rows");
        Ok(imported)
    }

    pub(crate) fn import_lines(&self, content: &str) -> Result<usize, DbError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        let mut imported = 0;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO info (kanj, von, vkun, transl, roma, rememb, jlpt, school) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;

            for (i, line) in content.lines().enumerate() {
                let line = line.trim_end_matches('\r');
                if line.trim().is_empty() || line.starts_with('#') {
                    continue;
                }

                let parts: Vec<&str> = line.split('\t').collect();
                if parts.len() != COLUMNS {
                    return Err(DbError::Import {
                        line: i + 1,
                        reason: format!("expected {COLUMNS} columns, found {}", parts.len()),
                    });
                }
                if parts[0].trim().is_empty() {
                    return Err(DbError::Import {
                        line: i + 1,
                        reason: "empty kanji column".to_string(),
                    });
                }

                stmt.execute(params![
                    normalize_key(parts[0]),
                    parts[1],
                    parts[2],
                    parts[3],
                    parts[4],
                    parts[5],
                    parts[6].trim(),
                    parts[7].trim(),
                ])?;
                imported += 1;
            }
        }

        tx.commit()?;
        Ok(imported)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use dedgar_core::{CategoryKind, KanjiStore};

    use super::*;

    #[test]
    fn imports_rows_and_skips_comments() {
        let db = Database::open_in_memory().unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# kanji\ton\tkun\ttransl\troma\trememb\tjlpt\tschool").unwrap();
        writeln!(file, "山\tサン\tやま\tmountain\tsan\tthree peaks\tN5\t1").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "川\tセン\tかわ\triver\tsen\tflowing lines\tN5\t1").unwrap();

        let imported = db.import_tsv(file.path()).unwrap();
        assert_eq!(imported, 2);

        let n5 = db.query_by_category(CategoryKind::Jlpt, "N5").unwrap();
        assert_eq!(n5.len(), 2);
        assert_eq!(n5[0].translation, "mountain");
        assert_eq!(n5[1].mnemonic, "flowing lines");
    }

    #[test]
    fn compatibility_ideographs_are_stored_normalized() {
        let db = Database::open_in_memory().unwrap();
        db.import_lines("\u{F900}\tガイ\tあに\thow\tgai\t\tN2\t8\n").unwrap();

        let n2 = db.query_by_category(CategoryKind::Jlpt, "N2").unwrap();
        assert_eq!(n2[0].kanji, "\u{8C48}");
        assert!(db.query_by_key("\u{8C48}").unwrap().is_some());
    }

    #[test]
    fn short_line_aborts_whole_import() {
        let db = Database::open_in_memory().unwrap();
        let content = "山\tサン\tやま\tmountain\tsan\t\tN5\t1\n川\tセン\n";

        let err = db.import_lines(content).unwrap_err();
        assert!(matches!(err, DbError::Import { line: 2, .. }));
        assert_eq!(db.kanji_count().unwrap(), 0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let db = Database::open_in_memory().unwrap();

        let err = db.import_tsv(Path::new("/nonexistent/kanji.tsv")).unwrap_err();
        assert!(matches!(err, DbError::Io(_)));
    }
}
