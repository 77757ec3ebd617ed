use dominator::{html, Dom};

/// A grey placeholder box standing in for content that has not arrived yet
pub fn block(width: &str, height: &str) -> Dom {
    html!("div", {
        .class("skeleton")
        .style("width", width)
        .style("height", height)
        .style("border-radius", "0.375rem")
        .style("margin-bottom", "0.5rem")
    })
}
