use std::rc::Rc;

use chrono::Utc;
use dominator::{clone, html, Dom};
use futures_signals::signal::{Mutable, SignalExt};
use komik_lib::models::Bookmarks;

use crate::{
    common::{events, icons, snackbar},
    utils::local_storage,
};

const KEY: &str = "bookmarks";

pub fn load_bookmarks() -> Bookmarks {
    match local_storage().get_item(KEY) {
        Ok(Some(json)) => Bookmarks::from_json(&json),
        Ok(None) => Bookmarks::default(),
        Err(e) => {
            warn!("error reading bookmarks: {:?}", e);
            Bookmarks::default()
        }
    }
}

fn save_bookmarks(bookmarks: &Bookmarks) {
    let json = match bookmarks.to_json() {
        Ok(json) => json,
        Err(e) => {
            error!("error encoding bookmarks: {}", e);
            return;
        }
    };

    if let Err(e) = local_storage().set_item(KEY, &json) {
        warn!("error saving bookmarks: {:?}", e);
        snackbar::show("Bookmark could not be saved".to_string());
    }
}

pub struct BookmarkButton {
    slug: String,
    title: String,
    bookmarked: Mutable<bool>,
}

impl BookmarkButton {
    pub fn new(slug: String, title: String) -> Rc<Self> {
        let bookmarked = load_bookmarks().contains(&slug);

        Rc::new(Self {
            slug,
            title,
            bookmarked: Mutable::new(bookmarked),
        })
    }

    fn toggle(&self) {
        // re-read so changes made in other tabs are kept
        let mut bookmarks = load_bookmarks();
        let bookmarked = bookmarks.toggle(&self.slug, &self.title, Utc::now());
        save_bookmarks(&bookmarks);

        self.bookmarked.set_neq(bookmarked);
    }

    pub fn render(button: Rc<Self>) -> Dom {
        html!("button", {
            .class("action-button")
            .style("display", "flex")
            .style("align-items", "center")
            .style("padding", "0.5rem")
            .style_important_signal("background-color", button.bookmarked.signal().map(|x| x.then(|| "var(--primary-color)")))
            .style_important_signal("color", button.bookmarked.signal().map(|x| x.then(|| "white")))
            .child_signal(button.bookmarked.signal().map(|x| Some(icons::bookmark(x))))
            .children(&mut [
                html!("span", {
                    .style("margin-left", "0.5rem")
                    .text_signal(button.bookmarked.signal().map(|x| if x { "Bookmarked" } else { "Bookmark" }))
                })
            ])
            .event(clone!(button => move |_: events::Click| {
                button.toggle();
            }))
        })
    }
}
