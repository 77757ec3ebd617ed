use std::rc::Rc;

use dominator::{clone, html, Dom};
use futures_signals::signal::{Mutable, SignalExt};
use gloo_timers::future::TimeoutFuture;

use crate::{common::events, utils::AsyncLoader};

/// Messages hide themselves after this many milliseconds
const DISMISS_AFTER: u32 = 4_000;

thread_local! {
    static SNACKBAR: std::cell::RefCell<Rc<Snackbar>> = std::cell::RefCell::new(Snackbar::new());
}

pub fn show(message: String) {
    SNACKBAR.with(|s| Snackbar::show(s.borrow().clone(), message));
}

pub fn render() -> Dom {
    SNACKBAR.with(|s| Snackbar::render(s.borrow().clone()))
}

pub struct Snackbar {
    message: Mutable<Option<String>>,
    timer: AsyncLoader,
}

impl Snackbar {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            message: Mutable::new(None),
            timer: AsyncLoader::new(),
        })
    }

    pub fn show(snackbar: Rc<Self>, message: String) {
        snackbar.message.set(Some(message));
        snackbar.timer.load(clone!(snackbar => async move {
            TimeoutFuture::new(DISMISS_AFTER).await;
            snackbar.message.set(None);
        }));
    }

    pub fn render(snackbar: Rc<Self>) -> Dom {
        html!("div", {
            .class("snackbar")
            .visible_signal(snackbar.message.signal_cloned().map(|message| message.is_some()))
            .children(&mut [
                html!("div", {
                    .child_signal(snackbar.message.signal_cloned().map(|message| message.map(|msg| html!("span", {
                            .text(msg.as_str())
                        })
                    )))
                    .children(&mut [
                        html!("button", {
                            .event(clone!(snackbar => move |_: events::Click| {
                                snackbar.timer.cancel();
                                snackbar.message.set(None);
                            }))
                            .text("Dismiss")
                        })
                    ])
                })
            ])
        })
    }
}
