use std::rc::Rc;

use dominator::{html, link, Dom};
use futures_signals::signal::SignalExt;

use crate::{
    common::{route, snackbar, Route},
    home::Home,
    manga::MangaPage,
};

pub struct App;

impl App {
    pub fn new() -> Rc<Self> {
        Rc::new(App)
    }

    /// Chapters are linked from the detail page but read elsewhere
    fn render_chapter(manga: String, chapter: String) -> Dom {
        html!("div", {
            .class("main")
            .children(&mut [
                html!("p", {
                    .text(&format!("Chapter {} cannot be read here yet", chapter))
                }),
                link!(Route::Manga(Some(manga)).url(), {
                    .text("Back to manga")
                }),
            ])
        })
    }

    pub fn render(_app: Rc<Self>) -> Dom {
        html!("div", {
            .child_signal(route::signal().map(|route| {
                debug!("route: {:?}", route);
                match route {
                    Route::Home => Some(Home::render(Home::new())),
                    Route::Manga(slug) => Some(MangaPage::render(MangaPage::new(slug))),
                    Route::Chapter { manga, chapter } => Some(Self::render_chapter(manga, chapter)),
                    Route::NotFound => Some(
                        html!("div", {
                            .class("main")
                            .text("not found")
                        }),
                    ),
                }
            }))
            .children(&mut [
                snackbar::render(),
            ])
        })
    }
}
