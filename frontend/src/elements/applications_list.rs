use dominator::{Dom, events, html};
use futures_signals::signal::Mutable;

use shared::routes::Route;
use shared::table::{Column, filter_sorted, TableRow};

use crate::constants::{LABEL_SEARCH, PROP_PLACEHOLDER, PROP_TYPE, TAG_DIV, TAG_INPUT, TAG_SPAN};
use crate::elements::table::{RowActions, SortState, table_with_actions};
use crate::utils::input_value;

fn css_class(label: &str) -> String {
    format!("applications-list__{label}")
}

pub struct ListConfig<T: 'static> {
    pub title: &'static str,
    pub columns: &'static [Column],
    pub search: &'static [&'static str],
    pub link: Option<Route>,
    pub actions: Option<RowActions<T>>,
}

impl<T: 'static> ListConfig<T> {
    pub fn new(title: &'static str, columns: &'static [Column], search: &'static [&'static str]) -> Self {
        Self { title, columns, search, link: None, actions: None }
    }

    pub fn link(mut self, route: Route) -> Self {
        self.link = Some(route);
        self
    }

    pub fn actions(mut self, actions: RowActions<T>) -> Self {
        self.actions = Some(actions);
        self
    }
}

/// Title, search box and table; every keystroke re-filters the rows and keeps the header sort.
pub fn applications_list<T>(config: ListConfig<T>, rows: Vec<T>) -> Dom
    where T: TableRow + Clone + 'static
{
    let visible = Mutable::new(rows.clone());
    let sort: SortState = Mutable::new(None);
    let search = config.search;

    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(html!(TAG_DIV, {
            .class(css_class("header"))
            .children([
                html!(TAG_SPAN, {
                    .class(css_class("title"))
                    .text(config.title)
                }),
                html!(TAG_INPUT, {
                    .class(css_class("search"))
                    .attr(PROP_TYPE, "search")
                    .attr(PROP_PLACEHOLDER, LABEL_SEARCH)
                    .event({
                        let visible = visible.clone();
                        let sort = sort.clone();
                        move |e: events::KeyUp| {
                            visible.set(filter_sorted(&rows, search, &input_value(e.target()), sort.get()));
                        }
                    })
                }),
            ])
        }))
        .child(table_with_actions(config.columns, visible, sort, config.link, config.actions))
    })
}
