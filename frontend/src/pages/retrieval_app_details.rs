use dominator::{Dom, events, html};
use futures_signals::signal::{Mutable, SignalExt};

use shared::routes::Route;
use shared::table::{
    ACTIVE_USERS_COLUMNS, ACTIVE_USERS_SEARCH, filter_rows, NAMED_COUNT_COLUMNS, NAMED_COUNT_SEARCH, NamedRetrievals,
    NO_DATA_FOUND, RETRIEVALS_SEARCH, sort_rows, SortOrder,
};
use shared::types::{RetrievalAppDetails, RetrievalData};
use shared::utils::format_date;

use crate::constants::{LABEL_SEARCH, PROP_PLACEHOLDER, PROP_TYPE, TAG_DIV, TAG_INPUT, TAG_SPAN};
use crate::elements::applications_list::{applications_list, ListConfig};
use crate::elements::key_value::key_value;
use crate::elements::tabs::{Tab, tabs};
use crate::elements::tooltip::tooltip;
use crate::elements::view_more::view_more;
use crate::pages::{delete_app_button, instance_details, page_title};
use crate::state::app_data;
use crate::utils::{input_value, set_title};

fn css_class(label: &str) -> String {
    format!("retrieval-app__{label}")
}

fn by_activity(mut rows: Vec<NamedRetrievals>) -> Vec<NamedRetrievals> {
    sort_rows(&mut rows, "retrievals", SortOrder::Desc);
    rows
}

pub fn retrieval_app_details_page() -> Dom {
    let details = app_data::<RetrievalAppDetails>();
    set_title(&format!("{} | Pebblo Safe Retrieval", details.name));

    let retrievals = details.retrievals.clone();
    let users = by_activity(NamedRetrievals::from_users(&details.active_users));
    let documents = by_activity(NamedRetrievals::from_grouped(&details.documents));
    let vector_dbs = by_activity(NamedRetrievals::from_grouped(&details.vector_dbs));

    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("header"))
                .children([
                    page_title(&details.name, details.description.as_deref()),
                    delete_app_button(&details.name, Route::SafeRetrieval),
                ])
            }),
            instance_details(&details.instance_details, &details.framework),
            tabs(vec![
                Tab::new("Retrievals", retrievals.len() as u64, move || retrieval_list(retrievals.clone())),
                Tab::new("Active Users", users.len() as u64, move || {
                    applications_list(ListConfig::new("Active Users", ACTIVE_USERS_COLUMNS, ACTIVE_USERS_SEARCH), users.clone())
                }),
                Tab::new("Documents", documents.len() as u64, move || {
                    applications_list(ListConfig::new("Documents", NAMED_COUNT_COLUMNS, NAMED_COUNT_SEARCH), documents.clone())
                }),
                Tab::new("Vector DBs", vector_dbs.len() as u64, move || {
                    applications_list(ListConfig::new("Vector DBs", NAMED_COUNT_COLUMNS, NAMED_COUNT_SEARCH), vector_dbs.clone())
                }),
            ]),
        ])
    })
}

/// Prompt cards with their retrieved context, filtered on each keystroke.
fn retrieval_list(retrievals: Vec<RetrievalData>) -> Dom {
    let visible = Mutable::new(retrievals.clone());

    html!(TAG_DIV, {
        .class(css_class("retrievals"))
        .child(html!(TAG_INPUT, {
            .class(css_class("search"))
            .attr(PROP_TYPE, "search")
            .attr(PROP_PLACEHOLDER, LABEL_SEARCH)
            .event({
                let visible = visible.clone();
                move |e: events::KeyUp| visible.set(filter_rows(&retrievals, RETRIEVALS_SEARCH, &input_value(e.target())))
            })
        }))
        .child_signal(visible.signal_cloned().map(|rows| {
            Some(if rows.is_empty() {
                html!(TAG_DIV, {
                    .class(css_class("no-data"))
                    .text(NO_DATA_FOUND)
                })
            } else {
                html!(TAG_DIV, {
                    .class(css_class("list"))
                    .children(rows.iter().map(retrieval_card))
                })
            })
        }))
    })
}

fn retrieval_card(retrieval: &RetrievalData) -> Dom {
    let sources = retrieval.context.iter().map(|c| c.retrieved_from.clone()).collect::<Vec<_>>();
    let prompt = retrieval.prompt.data.clone().unwrap_or_default();
    let response = retrieval.response.data.clone().unwrap_or_default();

    html!(TAG_DIV, {
        .class(css_class("card"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("meta"))
                .children([
                    html!(TAG_SPAN, {
                        .class(css_class("user"))
                        .text(&retrieval.user)
                    }),
                    html!(TAG_SPAN, {
                        .class(css_class("time"))
                        .text(&format_date(&retrieval.prompt_time, true))
                    }),
                ])
            }),
            key_value("Prompt", &prompt),
            key_value("Response", &response),
            html!(TAG_DIV, {
                .class(css_class("context"))
                .children([
                    tooltip("Documents the answer was retrieved from", html!(TAG_SPAN, {
                        .text("Retrieved From")
                    })),
                    view_more("Retrieved From", sources),
                ])
            }),
            key_value("Linked Groups", &retrieval.linked_groups.join(", ")),
        ])
    })
}
