use std::rc::Rc;

use dominator::{clone, html, with_node, Dom};
use futures_signals::{
    signal::{Mutable, SignalExt},
    signal_vec::{MutableVec, SignalVecExt},
};
use komik_lib::models::{Comment, MAX_COMMENT_LEN, NewComment};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::{
    common::{events, snackbar},
    query,
    utils::AsyncLoader,
};

/// Comments of one manga, fetched and posted independently of the detail page
pub struct CommentSection {
    slug: String,
    comments: MutableVec<Comment>,
    author: Mutable<String>,
    content: Mutable<String>,
    loader: AsyncLoader,
}

impl CommentSection {
    pub fn new(slug: String) -> Rc<Self> {
        Rc::new(Self {
            slug,
            comments: MutableVec::new(),
            author: Mutable::new(String::new()),
            content: Mutable::new(String::new()),
            loader: AsyncLoader::new(),
        })
    }

    fn fetch_comments(section: Rc<Self>) {
        section.loader.load(clone!(section => async move {
            match query::fetch_comments(&section.slug).await {
                Ok(comments) => {
                    section.comments.lock_mut().replace_cloned(comments);
                }
                Err(e) => {
                    error!("error fetching comments: {}", e);
                    snackbar::show("Failed to load comments".to_string());
                }
            }
        }));
    }

    fn post_comment(section: Rc<Self>) {
        let author = section.author.get_cloned();
        let content = section.content.get_cloned();

        let comment = match NewComment::new(&author, &content) {
            Ok(comment) => comment,
            Err(e) => {
                snackbar::show(e.to_string());
                return;
            }
        };

        section.loader.load(clone!(section => async move {
            match query::post_comment(&section.slug, &comment).await {
                Ok(()) => {
                    section.content.set(String::new());
                    Self::fetch_comments(section.clone());
                }
                Err(e) => {
                    error!("error posting comment: {}", e);
                    snackbar::show("Failed to send comment".to_string());
                }
            }
        }));
    }

    fn render_form(section: Rc<Self>) -> Dom {
        html!("div", {
            .class("comment-form")
            .style("display", "flex")
            .style("flex-direction", "column")
            .children(&mut [
                html!("input" => HtmlInputElement, {
                    .attr("type", "text")
                    .attr("placeholder", "Name (optional)")
                    .with_node!(input => {
                        .event(clone!(section => move |_: events::Input| {
                            section.author.set_neq(input.value());
                        }))
                    })
                }),
                html!("textarea" => HtmlTextAreaElement, {
                    .attr("placeholder", "Write a comment")
                    .attr("maxlength", &MAX_COMMENT_LEN.to_string())
                    .with_node!(textarea => {
                        .future(section.content.signal_cloned().for_each(clone!(textarea => move |content| {
                            if textarea.value() != content {
                                textarea.set_value(&content);
                            }

                            async {}
                        })))
                        .event(clone!(section => move |_: events::Input| {
                            section.content.set_neq(textarea.value());
                        }))
                    })
                }),
                html!("button", {
                    .attr_signal("disabled", section.loader.is_loading().map(|x| x.then(|| "")))
                    .text("Send")
                    .event(clone!(section => move |_: events::Click| {
                        Self::post_comment(section.clone());
                    }))
                }),
            ])
        })
    }

    fn render_comment(comment: &Comment) -> Dom {
        html!("li", {
            .class("list-item")
            .style("display", "flex")
            .style("flex-direction", "column")
            .children(&mut [
                html!("div", {
                    .children(&mut [
                        html!("span", {
                            .style("font-weight", "500")
                            .style("margin-right", "0.5rem")
                            .text(comment.author())
                        }),
                        html!("span", {
                            .style("font-size", "smaller")
                            .text(&comment.created_at.map(|at| at.date_naive().to_string()).unwrap_or_default())
                        }),
                    ])
                }),
                html!("p", {
                    .style("white-space", "pre-wrap")
                    .text(comment.content())
                }),
            ])
        })
    }

    pub fn render(section: Rc<Self>) -> Dom {
        Self::fetch_comments(section.clone());

        html!("div", {
            .class("comment-section")
            .attr("id", "comments")
            .after_removed(clone!(section => move |_| section.loader.cancel()))
            .children(&mut [
                html!("span", {
                    .class("header")
                    .text("Comments")
                }),
                Self::render_form(section.clone()),
                html!("ul", {
                    .class("list")
                    .children_signal_vec(section.comments.signal_vec_cloned().map(|comment| Self::render_comment(&comment)))
                }),
            ])
            .child_signal(section.comments.signal_vec_cloned().is_empty().map(|empty| empty.then(|| html!("p", {
                .text("No comments yet")
            }))))
        })
    }
}
