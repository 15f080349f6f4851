use dominator::{Dom, html};

use shared::routes::Route;

use crate::constants::{PROP_HREF, TAG_DIV, TAG_LINK, TAG_SPAN};
use crate::elements::empty_state::empty_state;

fn css_class(label: &str) -> String {
    format!("not-found__{label}")
}

pub fn not_found_page() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            empty_state("Oops! The page you are looking for does not exist."),
            html!(TAG_DIV, {
                .class(css_class("link"))
                .children([
                    html!(TAG_SPAN, {
                        .text("Go back to the dashboard: ")
                    }),
                    html!(TAG_LINK, {
                        .attr(PROP_HREF, &Route::Dashboard.path())
                        .text("Click Here!")
                    }),
                ])
            }),
        ])
    })
}
