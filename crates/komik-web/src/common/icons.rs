use dominator::{svg, Dom};

fn outline(d: &str) -> Dom {
    svg!("svg", {
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("fill", "none")
        .attr("viewBox", "0 0 24 24")
        .attr("stroke", "currentColor")
        .class("icon")
        .children(&mut [
            svg!("path", {
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round")
                .attr("stroke-width", "2")
                .attr("d", d)
            })
        ])
    })
}

pub fn chevron_left() -> Dom {
    outline("M15 19l-7-7 7-7")
}

pub fn chevron_right() -> Dom {
    outline("M9 5l7 7-7 7")
}

pub fn refresh() -> Dom {
    outline("M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15")
}

pub fn bookmark(filled: bool) -> Dom {
    if filled {
        svg!("svg", {
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("fill", "currentColor")
            .attr("viewBox", "0 0 20 20")
            .class("icon")
            .children(&mut [
                svg!("path", {
                    .attr("d", "M5 4a2 2 0 012-2h6a2 2 0 012 2v14l-5-2.5L5 18V4z")
                })
            ])
        })
    } else {
        outline("M5 5a2 2 0 012-2h10a2 2 0 012 2v16l-7-3.5L5 21V5z")
    }
}
