//! Client side routes and the paths they map to. Slugs are percent-encoded
//! on the way out and decoded on the way in.

use crate::HOME_PATH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Detail page; `None` when the url has no slug segment
    Manga(Option<String>),
    Chapter {
        manga: String,
        chapter: String,
    },
    NotFound,
}

fn decode(segment: &str) -> Option<String> {
    urlencoding::decode(segment).ok().map(|s| s.into_owned())
}

impl Route {
    pub fn from_pathname(pathname: &str) -> Self {
        let mut paths = pathname.split('/').collect::<Vec<_>>();
        paths.retain(|path| !path.is_empty());

        let route = match paths.as_slice() {
            [] => Some(Route::Home),
            ["manga"] => Some(Route::Manga(None)),
            ["manga", slug] => decode(slug).map(|slug| Route::Manga(Some(slug))),
            ["manga", manga, "chapter", chapter] => decode(manga)
                .zip(decode(chapter))
                .map(|(manga, chapter)| Route::Chapter { manga, chapter }),
            _ => None,
        };

        route.unwrap_or(Route::NotFound)
    }

    pub fn url(&self) -> String {
        match self {
            Route::Home => HOME_PATH.to_string(),
            Route::Manga(Some(slug)) => format!("/manga/{}", urlencoding::encode(slug)),
            Route::Manga(None) => "/manga".to_string(),
            Route::Chapter { manga, chapter } => format!(
                "/manga/{}/chapter/{}",
                urlencoding::encode(manga),
                urlencoding::encode(chapter)
            ),
            Route::NotFound => "/notfound".to_string(),
        }
    }
}
