use std::rc::Rc;

use dominator::{clone, html, with_node, Dom};
use futures_signals::signal::SignalExt;
use komik_lib::{
    detail::{Action, DetailView, HEADLINE, ViewState},
    models::MangaDetail,
};
use web_sys::HtmlImageElement;

use crate::{
    common::{BookmarkButton, ChapterList, CommentSection, events, icons, skeleton},
    query::HttpDetailSource,
    utils::{AsyncLoader, Router, document},
};

pub struct MangaPage {
    view: DetailView<HttpDetailSource, Router>,
    loader: AsyncLoader,
}

impl MangaPage {
    pub fn new(slug: Option<String>) -> Rc<Self> {
        Rc::new(Self {
            view: DetailView::new(slug, HttpDetailSource, Router),
            loader: AsyncLoader::new(),
        })
    }

    fn fetch_detail(page: Rc<Self>) {
        let Some(slug) = page.view.slug() else {
            warn!("manga route without slug");
            return;
        };

        page.loader.load(clone!(page => async move {
            page.view.load_detail(&slug).await;
        }));
    }

    fn retry(page: Rc<Self>) {
        page.loader.load(clone!(page => async move {
            page.view.retry().await;
        }));
    }

    fn render_action(page: Rc<Self>, action: Action) -> Dom {
        match action {
            Action::GoHome => html!("button", {
                .class("action-button")
                .style("display", "flex")
                .style("align-items", "center")
                .style("padding", "0.5rem")
                .children(&mut [
                    icons::chevron_left(),
                    html!("span", {
                        .style("margin-left", "0.5rem")
                        .text("Back to Home")
                    }),
                ])
                .event(clone!(page => move |_: events::Click| {
                    page.view.navigate_home();
                }))
            }),
            Action::Retry => html!("button", {
                .class("action-button")
                .style("display", "flex")
                .style("align-items", "center")
                .style("padding", "0.5rem")
                .style("margin-left", "0.5rem")
                .children(&mut [
                    icons::refresh(),
                    html!("span", {
                        .style("margin-left", "0.5rem")
                        .text("Try Again")
                    }),
                ])
                .event(clone!(page => move |_: events::Click| {
                    Self::retry(page.clone());
                }))
            }),
        }
    }

    fn render_actions(page: Rc<Self>, actions: &[Action]) -> Dom {
        html!("div", {
            .style("display", "flex")
            .children(&mut actions.iter().map(|action| Self::render_action(page.clone(), *action)).collect::<Vec<_>>())
        })
    }

    fn render_skeleton() -> Dom {
        html!("div", {
            .class("manga-detail")
            .children(&mut [
                skeleton::block("10rem", "2.5rem"),
                html!("div", {
                    .class("manga-detail-grid")
                    .children(&mut [
                        html!("div", {
                            .class("manga-detail-side")
                            .children(&mut [
                                skeleton::block("100%", "24rem"),
                                skeleton::block("100%", "10rem"),
                                html!("div", {
                                    .style("display", "flex")
                                    .style("flex-wrap", "wrap")
                                    .style("gap", "0.5rem")
                                    .children(&mut [
                                        skeleton::block("5rem", "1.5rem"),
                                        skeleton::block("5rem", "1.5rem"),
                                        skeleton::block("5rem", "1.5rem"),
                                        skeleton::block("5rem", "1.5rem"),
                                    ])
                                }),
                            ])
                        }),
                        html!("div", {
                            .class("manga-detail-main")
                            .children(&mut [
                                skeleton::block("75%", "2.5rem"),
                                skeleton::block("10rem", "1.5rem"),
                                skeleton::block("100%", "10rem"),
                                skeleton::block("100%", "24rem"),
                            ])
                        }),
                    ])
                }),
            ])
        })
    }

    fn render_message(page: Rc<Self>, message: Option<&str>, actions: &[Action]) -> Dom {
        html!("div", {
            .class("manga-detail-message")
            .style("display", "flex")
            .style("flex-direction", "column")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("text-align", "center")
            .style("min-height", "60vh")
            .children(&mut [
                html!("h1", {
                    .class("error")
                    .text(HEADLINE)
                }),
            ])
            .apply_if(message.is_some(), |dom| dom.child(html!("p", {
                .style("margin-bottom", "1.5rem")
                .text(message.unwrap_or_default())
            })))
            .child(Self::render_actions(page, actions))
        })
    }

    fn render_meta_row(label: &str, value: &str) -> [Dom; 2] {
        [
            html!("span", {
                .class("meta-label")
                .text(&format!("{}:", label))
            }),
            html!("span", {
                .class("meta-value")
                .text(value)
            }),
        ]
    }

    fn render_side(manga: &MangaDetail) -> Dom {
        let mut meta = vec![];
        meta.extend(Self::render_meta_row("Author", manga.author()));
        meta.extend(Self::render_meta_row("Status", manga.status()));
        meta.extend(Self::render_meta_row("Type", manga.kind()));
        meta.extend(Self::render_meta_row("Released", manga.released()));

        html!("div", {
            .class("manga-detail-side")
            .apply_if(!manga.thumbnail.is_empty(), |dom| dom.child(html!("img" => HtmlImageElement, {
                .class("cover")
                .style("width", "100%")
                .style("height", "auto")
                .style("border-radius", "0.5rem")
                .attr("src", &manga.thumbnail)
                .attr("alt", &manga.title)
                .with_node!(img => {
                    .event(move |_: events::Error| {
                        let _ = img.style().set_property("visibility", "hidden");
                    })
                })
            })))
            .children(&mut [
                html!("div", {
                    .class("card")
                    .style("display", "grid")
                    .style("grid-template-columns", "1fr 1fr")
                    .style("gap", "0.5rem")
                    .style("padding", "1rem")
                    .style("margin-bottom", "1rem")
                    .children(&mut meta)
                }),
                html!("div", {
                    .style("display", "flex")
                    .style("flex-wrap", "wrap")
                    .children(&mut manga.genre.iter().map(|genre| html!("span", {
                        .class("chip")
                        .text(genre)
                    })).collect::<Vec<_>>())
                }),
            ])
        })
    }

    fn render_loaded(page: Rc<Self>, manga: Rc<MangaDetail>) -> Dom {
        let slug = page.view.slug().unwrap_or_default();
        document().set_title(&manga.title);

        html!("div", {
            .class("manga-detail")
            .children(&mut [
                html!("div", {
                    .class("topbar")
                    .style("display", "flex")
                    .style("justify-content", "space-between")
                    .style("align-items", "center")
                    .children(&mut [
                        Self::render_actions(page.clone(), ViewState::Loaded(manga.clone()).actions()),
                        BookmarkButton::render(BookmarkButton::new(slug.clone(), manga.title.clone())),
                    ])
                }),
                html!("div", {
                    .class("manga-detail-grid")
                    .children(&mut [
                        Self::render_side(&manga),
                        html!("div", {
                            .class("manga-detail-main")
                            .children(&mut [
                                html!("h1", {
                                    .class("title")
                                    .text(&manga.title)
                                }),
                                html!("div", {
                                    .attr("id", "description")
                                    .children(&mut [
                                        html!("span", {
                                            .class("header")
                                            .text("Synopsis")
                                        }),
                                        html!("p", {
                                            .style("white-space", "pre-wrap")
                                            .text(&manga.synopsis)
                                        }),
                                    ])
                                }),
                                ChapterList::render(ChapterList::new(slug.clone(), manga.chapters.clone(), manga.total_chapters())),
                            ])
                        }),
                    ])
                }),
                CommentSection::render(CommentSection::new(slug)),
            ])
        })
    }

    pub fn render(page: Rc<Self>) -> Dom {
        Self::fetch_detail(page.clone());

        html!("div", {
            .class("manga-page")
            .after_removed(clone!(page => move |_| page.loader.cancel()))
            .child_signal(page.view.signal().map(clone!(page => move |state| {
                let actions = state.actions();
                Some(match state {
                    ViewState::Loading => Self::render_skeleton(),
                    ViewState::Error(message) => Self::render_message(page.clone(), Some(&message), actions),
                    ViewState::Empty => Self::render_message(page.clone(), None, actions),
                    ViewState::Loaded(manga) => Self::render_loaded(page.clone(), manga),
                })
            })))
        })
    }
}
