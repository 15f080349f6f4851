use dominator::{Dom, html};

use shared::routes::Route;

use crate::constants::{LABEL_BACK, LOGO_IMAGE, PROP_HREF, TAG_DIV, TAG_IMG, TAG_LINK};
use crate::elements::button::{button, ButtonVariant, Icon};
use crate::state::{PAGE, ROUTE};
use crate::utils::{location_assign, static_path};

fn css_class(label: &str) -> String {
    format!("app-header__{label}")
}

pub fn app_header() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(html!(TAG_LINK, {
            .class(css_class("logo"))
            .attr(PROP_HREF, &Route::Dashboard.path())
            .child(html!(TAG_IMG, {
                .attr("src", &static_path(&PAGE.static_url, LOGO_IMAGE))
                .attr("alt", "Pebblo")
            }))
        }))
    })
}

/// "Back" link for pages that have a parent page.
pub fn back_button() -> Option<Dom> {
    ROUTE.back().map(|route| {
        html!(TAG_DIV, {
            .class(css_class("back"))
            .child(button(LABEL_BACK, ButtonVariant::Text, Some(Icon::Back), move || location_assign(&route.path())))
        })
    })
}
