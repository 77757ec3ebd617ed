use serde::Deserialize;

use super::lenient;
use crate::route::Route;

/// One entry of a manga's chapter list
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Chapter {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: Option<String>,
}

impl Chapter {
    /// Display label. Lists are newest first, so an untitled chapter at
    /// `position` is numbered from the end.
    pub fn label(&self, position: usize, total: usize) -> String {
        match self.title.as_ref() {
            Some(title) => title.clone(),
            None => format!("Chapter {}", total.saturating_sub(position)),
        }
    }

    /// Reader route for this chapter, if it can be linked at all
    pub fn route(&self, manga_slug: &str) -> Option<Route> {
        self.slug.as_ref().map(|slug| Route::Chapter {
            manga: manga_slug.to_string(),
            chapter: slug.clone(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_label_falls_back_to_number() {
        let chapters: Vec<Chapter> =
            serde_json::from_str(r#"[{"title": "Chapter 3"}, {}, {"slug": "ch-1"}]"#).unwrap();

        assert_eq!(chapters[0].label(0, 3), "Chapter 3");
        assert_eq!(chapters[1].label(1, 3), "Chapter 2");
        assert_eq!(chapters[2].label(2, 3), "Chapter 1");
    }

    #[test]
    fn test_route_requires_slug() {
        let chapter = Chapter {
            slug: Some("chapter 1100".to_string()),
            ..Default::default()
        };

        assert_eq!(
            chapter.route("one piece").map(|route| route.url()).as_deref(),
            Some("/manga/one%20piece/chapter/chapter%201100")
        );
        assert_eq!(Chapter::default().route("one-piece"), None);
    }
}
