//! Blog posts are flat HTML files under one directory. A post named `foo`
//! lives in `foo.html`, with an optional summary next to it in
//! `foo_summary`.
//!
//! The catalog is an immutable snapshot. Reloading builds a new one.
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use dedgar_types::PostSummary;
use walkdir::WalkDir;

pub const NO_SUMMARY: &str = "No summary";

#[derive(Debug, Clone)]
pub struct Post {
    pub name: String,
    pub path: PathBuf,
    pub summary: String,
}

#[derive(Debug, Clone, Default)]
pub struct PostCatalog {
    posts: BTreeMap<String, Post>,
}

#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("Post {0} not found")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PostCatalog {
    /// Walk `dir` for files ending in `extension`
    pub fn load(dir: &Path, extension: &str) -> Self {
        let mut posts = BTreeMap::new();

        if !dir.is_dir() {
            tracing::warn!("Posts directory {} missing, serving no posts", dir.display());
            return Self { posts };
        }

        for entry in WalkDir::new(dir).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable post entry: {e}");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            let Some(name) = file_name.strip_suffix(extension) else {
                continue;
            };
            if name.is_empty() {
                continue;
            }

            let path = entry.path().to_path_buf();
            let summary = find_summary(&path.with_file_name(format!("{name}_summary")));

            posts.insert(
                name.to_string(),
                Post {
                    name: name.to_string(),
                    path,
                    summary,
                },
            );
        }

        tracing::info!("Loaded {} posts from {}", posts.len(), dir.display());
        Self { posts }
    }

    pub fn get(&self, name: &str) -> Option<&Post> {
        self.posts.get(name)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Every post with its summary, ordered by name
    pub fn summaries(&self) -> Vec<PostSummary> {
        self.posts
            .values()
            .map(|p| PostSummary {
                name: p.name.clone(),
                summary: p.summary.clone(),
            })
            .collect()
    }

    /// Read the HTML body of a post
    pub fn read(&self, name: &str) -> Result<String, PostError> {
        let post = self
            .get(name)
            .ok_or_else(|| PostError::NotFound(name.to_string()))?;
        Ok(fs::read_to_string(&post.path)?)
    }
}

/// Summary file contents with line breaks dropped
fn find_summary(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content.lines().collect(),
        Err(_) => NO_SUMMARY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn loads_posts_with_and_without_summaries() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "rust-notes.html", "<p>rust</p>");
        write(dir.path(), "rust-notes_summary", "Notes on\nRust");
        write(dir.path(), "kanji.html", "<p>kanji</p>");
        write(dir.path(), "draft.txt", "ignored");

        let catalog = PostCatalog::load(dir.path(), ".html");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("rust-notes").unwrap().summary, "Notes onRust");
        assert_eq!(catalog.get("kanji").unwrap().summary, NO_SUMMARY);
        assert!(catalog.get("draft").is_none());
    }

    #[test]
    fn walks_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("2019");
        fs::create_dir(&nested).unwrap();
        write(&nested, "old.html", "<p>old</p>");
        write(&nested, "old_summary", "From the archive");

        let catalog = PostCatalog::load(dir.path(), ".html");

        assert_eq!(catalog.get("old").unwrap().summary, "From the archive");
        assert_eq!(catalog.read("old").unwrap(), "<p>old</p>");
    }

    #[test]
    fn summaries_are_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "zeta.html", "");
        write(dir.path(), "alpha.html", "");

        let names: Vec<String> = PostCatalog::load(dir.path(), ".html")
            .summaries()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn missing_directory_is_empty_catalog() {
        let catalog = PostCatalog::load(Path::new("/nonexistent/posts"), ".html");
        assert!(catalog.is_empty());
    }

    #[test]
    fn reading_unknown_post_fails() {
        let catalog = PostCatalog::default();
        assert!(matches!(catalog.read("nope"), Err(PostError::NotFound(_))));
    }
}
