use dominator::{Dom, html};

use crate::constants::{EMPTY_IMAGE, TAG_DIV, TAG_IMG, TAG_SPAN};
use crate::state::PAGE;
use crate::utils::static_path;

fn css_class(label: &str) -> String {
    format!("empty-state__{label}")
}

pub fn empty_state(message: &str) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_IMG, {
                .class(css_class("image"))
                .attr("src", &static_path(&PAGE.static_url, EMPTY_IMAGE))
                .attr("alt", "")
            }),
            html!(TAG_SPAN, {
                .class(css_class("message"))
                .text(message)
            }),
        ])
    })
}
