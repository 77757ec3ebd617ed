use std::rc::Rc;

use dominator::{clone, html, link, Dom};
use futures_signals::{
    signal::{self, Mutable, SignalExt},
    signal_vec::{self, SignalVecExt},
};
use komik_lib::{
    models::Chapter,
    pagination::{CHAPTERS_PER_PAGE, Pagination},
};

use crate::common::{events, icons};

pub struct ChapterList {
    slug: String,
    chapters: Vec<Chapter>,
    total: u64,
    pagination: Pagination,
    page: Mutable<usize>,
}

impl ChapterList {
    pub fn new(slug: String, chapters: Vec<Chapter>, total: u64) -> Rc<Self> {
        let pagination = Pagination::new(chapters.len(), CHAPTERS_PER_PAGE);

        Rc::new(Self {
            slug,
            chapters,
            total,
            pagination,
            page: Mutable::new(0),
        })
    }

    fn go_to_page(&self, page: usize) {
        self.page.set_neq(self.pagination.clamp(page));
    }

    fn render_chapter(list: &Self, position: usize) -> Dom {
        let chapter = &list.chapters[position];
        let label = chapter.label(position, list.chapters.len());

        let children = &mut [
            html!("span", {
                .style("font-weight", "500")
                .text(&label)
            }),
            html!("span", {
                .style("font-size", "smaller")
                .text(chapter.date.as_deref().unwrap_or_default())
            }),
        ];

        html!("li", {
            .class("list-item")
            .child(match chapter.route(&list.slug) {
                Some(route) => link!(route.url(), {
                    .class("chapter-item")
                    .children(children)
                }),
                None => html!("div", {
                    .class("chapter-item")
                    .children(children)
                }),
            })
        })
    }

    fn render_page(list: Rc<Self>, page: usize) -> Dom {
        html!("ul", {
            .class("list")
            .children_signal_vec(signal_vec::always(list.pagination.range(page).collect::<Vec<_>>())
                .map(clone!(list => move |position| Self::render_chapter(&list, position))))
        })
    }

    fn render_pagination(list: Rc<Self>) -> Dom {
        let pages = list.pagination.page_count();

        html!("div", {
            .class("pagination")
            .visible_signal(signal::always(pages > 1))
            .style("display", "flex")
            .style("justify-content", "space-between")
            .style("align-items", "center")
            .children(&mut [
                html!("button", {
                    .attr_signal("disabled", list.page.signal().map(clone!(list => move |page| (!list.pagination.has_previous(page)).then(|| ""))))
                    .child(icons::chevron_left())
                    .event(clone!(list => move |_: events::Click| {
                        let page = list.page.get();
                        list.go_to_page(page.saturating_sub(1));
                    }))
                }),
                html!("span", {
                    .text_signal(list.page.signal().map(move |page| format!("{} / {}", page + 1, pages)))
                }),
                html!("button", {
                    .attr_signal("disabled", list.page.signal().map(clone!(list => move |page| (!list.pagination.has_next(page)).then(|| ""))))
                    .child(icons::chevron_right())
                    .event(clone!(list => move |_: events::Click| {
                        let page = list.page.get();
                        list.go_to_page(page + 1);
                    }))
                }),
            ])
        })
    }

    pub fn render(list: Rc<Self>) -> Dom {
        html!("div", {
            .class("chapter-list")
            .attr("id", "chapters")
            .children(&mut [
                html!("div", {
                    .style("display", "flex")
                    .style("justify-content", "space-between")
                    .style("align-items", "center")
                    .children(&mut [
                        html!("span", {
                            .class("header")
                            .text("Chapters")
                        }),
                        html!("span", {
                            .class("chip")
                            .text(&format!("{} Chapters", list.total))
                        }),
                    ])
                }),
            ])
            .child(if list.chapters.is_empty() {
                html!("p", {
                    .text("No chapters yet")
                })
            } else {
                html!("div", {
                    .child_signal(list.page.signal().map(clone!(list => move |page| Some(Self::render_page(list.clone(), page)))))
                })
            })
            .child(Self::render_pagination(list.clone()))
        })
    }
}
