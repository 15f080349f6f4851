use dominator::{Dom, html};

use shared::routes::Route;

use crate::constants::TAG_DIV;
use crate::dialog::dialogs::dialogs;
use crate::elements::app_header::{app_header, back_button};
use crate::pages::{app_details, not_found, overview, retrieval_app_details, safe_retrieval};
use crate::state::ROUTE;
use crate::utils::set_title;

fn css_class(label: &str) -> String {
    format!("app-root__{label}")
}

pub fn app_root() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(app_header())
        .children(back_button())
        .child(html!(TAG_DIV, {
            .class(css_class("card"))
            .child(page(*ROUTE))
        }))
        .child_signal(dialogs())
    })
}

fn page(route: Route) -> Dom {
    match route {
        Route::Dashboard => {
            set_title("Pebblo");
            overview::overview_page()
        }
        Route::AppDetails => app_details::app_details_page(),
        Route::SafeRetrieval => {
            set_title("Pebblo Safe Retrieval");
            safe_retrieval::safe_retrieval_page()
        }
        Route::SafeRetrievalApp => retrieval_app_details::retrieval_app_details_page(),
        Route::NotFound => {
            set_title("Page Not Found");
            not_found::not_found_page()
        }
    }
}
