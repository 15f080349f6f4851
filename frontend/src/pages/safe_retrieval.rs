use dominator::{Dom, html};

use shared::routes::Route;
use shared::table::{
    ACTIVE_USERS_COLUMNS, ACTIVE_USERS_SEARCH, NamedRetrievals, RETRIEVAL_APPS_COLUMNS, RETRIEVAL_APPS_SEARCH,
    RETRIEVALS_COLUMNS, RETRIEVALS_SEARCH, sort_rows, SortOrder,
};
use shared::types::{DashboardData, RetrievalAppListDetails};

use crate::constants::TAG_DIV;
use crate::elements::applications_list::{applications_list, ListConfig};
use crate::elements::tabs::{Tab, tabs};
use crate::state::app_data;

fn css_class(label: &str) -> String {
    format!("safe-retrieval__{label}")
}

pub fn safe_retrieval_page() -> Dom {
    let data = app_data::<DashboardData>().retrieval_apps;

    let apps = data.app_list;
    let retrievals = data.retrievals;
    let mut users = NamedRetrievals::from_users(&data.active_users);
    sort_rows(&mut users, "retrievals", SortOrder::Desc);

    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(tabs(vec![
            Tab::new("Applications", apps.len() as u64, move || {
                let config = ListConfig::<RetrievalAppListDetails>::new("Applications", RETRIEVAL_APPS_COLUMNS, RETRIEVAL_APPS_SEARCH)
                    .link(Route::SafeRetrievalApp);
                applications_list(config, apps.clone())
            }),
            Tab::new("Retrievals", retrievals.len() as u64, move || {
                applications_list(ListConfig::new("Retrievals", RETRIEVALS_COLUMNS, RETRIEVALS_SEARCH), retrievals.clone())
            }),
            Tab::new("Active Users", users.len() as u64, move || {
                applications_list(ListConfig::new("Active Users", ACTIVE_USERS_COLUMNS, ACTIVE_USERS_SEARCH), users.clone())
            }),
        ]))
    })
}
