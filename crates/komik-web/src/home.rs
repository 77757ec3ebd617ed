use std::rc::Rc;

use dominator::{html, link, Dom};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use komik_lib::models::Bookmark;

use crate::{
    common::{load_bookmarks, Route},
    utils::document,
};

/// Landing page listing bookmarked manga
pub struct Home {
    bookmarks: MutableVec<Bookmark>,
}

impl Home {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            bookmarks: MutableVec::new(),
        })
    }

    fn load(&self) {
        let bookmarks = load_bookmarks();
        self.bookmarks
            .lock_mut()
            .replace_cloned(bookmarks.iter().cloned().collect());
    }

    fn render_bookmark(bookmark: &Bookmark) -> Dom {
        let title = if bookmark.title.is_empty() {
            bookmark.slug.clone()
        } else {
            bookmark.title.clone()
        };

        link!(Route::Manga(Some(bookmark.slug.clone())).url(), {
            .class("list-item")
            .style("display", "block")
            .style("padding", "0.5rem")
            .children(&mut [
                html!("span", {
                    .class("title")
                    .text(&title)
                }),
            ])
        })
    }

    pub fn render(home: Rc<Self>) -> Dom {
        home.load();
        document().set_title("Komik");

        html!("div", {
            .class("main")
            .children(&mut [
                html!("h1", {
                    .class("title")
                    .text("Bookmarks")
                }),
                html!("div", {
                    .class("list")
                    .children_signal_vec(home.bookmarks.signal_vec_cloned().map(|bookmark| Self::render_bookmark(&bookmark)))
                }),
                html!("p", {
                    .visible_signal(home.bookmarks.signal_vec_cloned().is_empty())
                    .text("No bookmarks yet")
                }),
            ])
        })
    }
}
