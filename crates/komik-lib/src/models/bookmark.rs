use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Bookmark {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub added_at: Option<DateTime<Utc>>,
}

/// Bookmarked manga, most recently added first. At most one entry per slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Bookmarks(Vec<Bookmark>);

impl Bookmarks {
    /// Reads a stored collection, starting over when the stored value is unreadable
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Self>(json) {
            Ok(mut bookmarks) => {
                bookmarks.dedup();
                bookmarks
            }
            Err(e) => {
                warn!("ignoring unreadable bookmarks: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.0.iter().any(|bookmark| bookmark.slug == slug)
    }

    /// Adds the manga when absent and removes it when present.
    /// Returns whether the manga is bookmarked afterwards.
    pub fn toggle(&mut self, slug: &str, title: &str, now: DateTime<Utc>) -> bool {
        if self.contains(slug) {
            self.0.retain(|bookmark| bookmark.slug != slug);
            false
        } else {
            self.0.insert(
                0,
                Bookmark {
                    slug: slug.to_string(),
                    title: title.to_string(),
                    added_at: Some(now),
                },
            );
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn dedup(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.0.retain(|bookmark| seen.insert(bookmark.slug.clone()));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut bookmarks = Bookmarks::default();
        let now = Utc::now();

        assert!(bookmarks.toggle("one-piece", "One Piece", now));
        assert!(bookmarks.contains("one-piece"));
        assert_eq!(bookmarks.len(), 1);

        assert!(!bookmarks.toggle("one-piece", "One Piece", now));
        assert!(!bookmarks.contains("one-piece"));
        assert!(bookmarks.is_empty());
    }

    #[test]
    fn test_newest_first() {
        let mut bookmarks = Bookmarks::default();
        let now = Utc::now();
        bookmarks.toggle("one-piece", "One Piece", now);
        bookmarks.toggle("kingdom", "Kingdom", now);

        let slugs: Vec<&str> = bookmarks.iter().map(|b| b.slug.as_str()).collect();
        assert_eq!(slugs, vec!["kingdom", "one-piece"]);
    }

    #[test]
    fn test_from_json_survives_garbage() {
        assert!(Bookmarks::from_json("not json").is_empty());
        assert!(Bookmarks::from_json("{}").is_empty());
    }

    #[test]
    fn test_stored_collection_is_restored() {
        let mut bookmarks = Bookmarks::default();
        bookmarks.toggle("kingdom", "Kingdom", Utc::now());
        let json = bookmarks.to_json().unwrap();

        let restored = Bookmarks::from_json(&json);
        assert_eq!(restored, bookmarks);

        let duplicated = Bookmarks::from_json(
            r#"[{"slug": "kingdom", "title": "Kingdom"}, {"slug": "kingdom", "title": "Kingdom"}]"#,
        );
        assert_eq!(duplicated.len(), 1);
    }
}
