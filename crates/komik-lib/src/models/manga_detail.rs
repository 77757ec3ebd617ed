use serde::Deserialize;

use super::{Chapter, lenient};
use crate::error::Error;

/// Shown for author, status and release date when the source has none
pub static UNKNOWN: &str = "Unknown";
/// Shown when the source does not say what kind of work it is
pub static DEFAULT_TYPE: &str = "Manga";

/// Optional metadata block of a detail record
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MetaInfo {
    #[serde(default, deserialize_with = "lenient::text")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub released: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_chapter: Option<u64>,
}

/// A detail record exactly as the endpoint serves it, nothing validated yet
#[derive(Debug, Default, Deserialize)]
pub struct RawMangaDetail {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub synopsis: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub genre: Vec<String>,
    #[serde(default)]
    pub chapters: Option<Vec<Chapter>>,
    #[serde(default)]
    pub meta_info: Option<MetaInfo>,
}

/// A validated manga detail record. The title is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MangaDetail {
    pub title: String,
    pub thumbnail: String,
    pub synopsis: String,
    pub genre: Vec<String>,
    pub chapters: Vec<Chapter>,
    pub meta_info: MetaInfo,
}

impl TryFrom<RawMangaDetail> for MangaDetail {
    type Error = Error;

    fn try_from(raw: RawMangaDetail) -> Result<Self, Self::Error> {
        let title = raw.title.ok_or(Error::MissingTitle)?;

        Ok(Self {
            title,
            thumbnail: raw.thumbnail.unwrap_or_default(),
            synopsis: raw.synopsis.unwrap_or_default(),
            genre: raw.genre,
            chapters: raw.chapters.unwrap_or_default(),
            meta_info: raw.meta_info.unwrap_or_default(),
        })
    }
}

impl MangaDetail {
    pub fn author(&self) -> &str {
        self.meta_info.author.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn status(&self) -> &str {
        self.meta_info.status.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn kind(&self) -> &str {
        self.meta_info.kind.as_deref().unwrap_or(DEFAULT_TYPE)
    }

    pub fn released(&self) -> &str {
        self.meta_info.released.as_deref().unwrap_or(UNKNOWN)
    }

    /// Declared chapter total, falling back to the number of listed chapters
    pub fn total_chapters(&self) -> u64 {
        self.meta_info
            .total_chapter
            .filter(|total| *total > 0)
            .unwrap_or(self.chapters.len() as u64)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(json: &str) -> Result<MangaDetail, Error> {
        let raw: RawMangaDetail = serde_json::from_str(json)?;
        MangaDetail::try_from(raw)
    }

    #[test]
    fn test_fallbacks_without_meta_info() {
        let manga = parse(r#"{"title": "Solo Leveling"}"#).unwrap();

        assert_eq!(manga.author(), "Unknown");
        assert_eq!(manga.status(), "Unknown");
        assert_eq!(manga.released(), "Unknown");
        assert_eq!(manga.kind(), "Manga");
        assert!(manga.genre.is_empty());
        assert!(manga.chapters.is_empty());
        assert_eq!(manga.total_chapters(), 0);
    }

    #[test]
    fn test_null_collections_are_empty() {
        let manga = parse(r#"{"title": "Blue Lock", "genre": null, "chapters": null, "meta_info": null}"#)
            .unwrap();

        assert!(manga.genre.is_empty());
        assert!(manga.chapters.is_empty());
        assert_eq!(manga.meta_info, MetaInfo::default());
    }

    #[test]
    fn test_meta_info_values() {
        let manga = parse(
            r#"{
                "title": "Kingdom",
                "meta_info": {
                    "author": "Hara Yasuhisa",
                    "status": "Ongoing",
                    "type": "Manhwa",
                    "released": 2006,
                    "total_chapter": "812"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(manga.author(), "Hara Yasuhisa");
        assert_eq!(manga.status(), "Ongoing");
        assert_eq!(manga.kind(), "Manhwa");
        assert_eq!(manga.released(), "2006");
        assert_eq!(manga.total_chapters(), 812);
    }

    #[test]
    fn test_blank_meta_values_fall_back() {
        let manga = parse(r#"{"title": "Kingdom", "meta_info": {"author": "  ", "type": ""}}"#).unwrap();

        assert_eq!(manga.author(), "Unknown");
        assert_eq!(manga.kind(), "Manga");
    }

    #[test]
    fn test_non_text_meta_values_fall_back() {
        let manga = parse(
            r#"{"title": "Kingdom", "meta_info": {"author": true, "status": {"id": 1}, "released": ["2006"], "total_chapter": false}}"#,
        )
        .unwrap();

        assert_eq!(manga.author(), "Unknown");
        assert_eq!(manga.status(), "Unknown");
        assert_eq!(manga.released(), "Unknown");
        assert_eq!(manga.total_chapters(), 0);
    }

    #[test]
    fn test_total_chapters_counts_list_when_undeclared() {
        let manga = parse(
            r#"{"title": "Kingdom", "chapters": [{"title": "2"}, {"title": "1"}], "meta_info": {"total_chapter": 0}}"#,
        )
        .unwrap();

        assert_eq!(manga.total_chapters(), 2);
    }

    #[test]
    fn test_missing_or_empty_title_is_rejected() {
        assert_eq!(parse("{}"), Err(Error::MissingTitle));
        assert_eq!(parse(r#"{"title": ""}"#), Err(Error::MissingTitle));
        assert_eq!(parse(r#"{"title": "   "}"#), Err(Error::MissingTitle));
    }
}
