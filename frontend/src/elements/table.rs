use dominator::{Dom, events, html};
use futures_signals::signal::{Mutable, SignalExt};

use shared::routes::Route;
use shared::table::{Column, display_cell, NO_DATA_FOUND, sort_rows, SortOrder, TableRow};

use crate::constants::{PROP_COLSPAN, PROP_HREF, TAG_LINK, TAG_SPAN};
use crate::elements::view_more::view_more;

fn css_class(label: &str) -> String {
    format!("table__{label}")
}

pub type RowActions<T> = fn(&T) -> Dom;

/// Column and order of the last header click.
pub type SortState = Mutable<Option<(&'static str, SortOrder)>>;

/// Table over `rows`; a `link` turns the `name` cell into a link to that route's app page.
pub fn table<T>(columns: &'static [Column], rows: Mutable<Vec<T>>, link: Option<Route>) -> Dom
    where T: TableRow + Clone + 'static
{
    table_with_actions(columns, rows, Mutable::new(None), link, None)
}

pub fn table_with_actions<T>(
    columns: &'static [Column],
    rows: Mutable<Vec<T>>,
    sort: SortState,
    link: Option<Route>,
    actions: Option<RowActions<T>>,
) -> Dom
    where T: TableRow + Clone + 'static
{
    html!("table", {
        .class(css_class("container"))
        .child(html!("thead", {
            .child(html!("tr", {
                .children(columns.iter().map(|column| header_cell(column, rows.clone(), sort.clone())))
            }))
        }))
        .child_signal(rows.signal_cloned().map(move |rows| Some(body(columns, &rows, link, actions))))
    })
}

fn header_cell<T>(column: &'static Column, rows: Mutable<Vec<T>>, sort: SortState) -> Dom
    where T: TableRow + Clone + 'static
{
    let field = column.field;
    let sortable = column.sortable;

    html!("th", {
        .class(column.align.class_name())
        .class(if sortable { css_class("sortable") } else { css_class("fixed") })
        .class_signal(SortOrder::Asc.class_name(), sort.signal_ref(move |s| *s == Some((field, SortOrder::Asc))))
        .class_signal(SortOrder::Desc.class_name(), sort.signal_ref(move |s| *s == Some((field, SortOrder::Desc))))
        .text(column.label)
        .event(move |_: events::Click| {
            if !sortable {
                return;
            }
            let order = match sort.get() {
                Some((current, order)) if current == field => order.toggle(),
                _ => SortOrder::Asc,
            };
            sort.set(Some((field, order)));
            sort_rows(&mut rows.lock_mut(), field, order);
        })
    })
}

fn body<T>(columns: &'static [Column], rows: &[T], link: Option<Route>, actions: Option<RowActions<T>>) -> Dom
    where T: TableRow + Clone + 'static
{
    if rows.is_empty() {
        return html!("tbody", {
            .child(html!("tr", {
                .child(html!("td", {
                    .class(css_class("no-data"))
                    .attr(PROP_COLSPAN, &columns.len().to_string())
                    .text(NO_DATA_FOUND)
                }))
            }))
        });
    }

    html!("tbody", {
        .children(rows.iter().map(|row| {
            html!("tr", {
                .children(columns.iter().map(|column| body_cell(column, row, link, actions)))
            })
        }))
    })
}

fn body_cell<T>(column: &Column, row: &T, link: Option<Route>, actions: Option<RowActions<T>>) -> Dom
    where T: TableRow + Clone + 'static
{
    let content = match (column.is_actions(), actions) {
        (true, Some(actions)) => actions(row),
        (true, None) => html!(TAG_SPAN),
        _ => match (row.list(column.field), link) {
            (Some(items), _) => view_more(column.label, items),
            (None, Some(route)) if column.field == "name" => {
                let name = display_cell(row.cell(column.field));
                html!(TAG_LINK, {
                    .class(css_class("link"))
                    .attr(PROP_HREF, &route.app_link(&name))
                    .text(&name)
                })
            }
            (None, _) => html!(TAG_SPAN, {
                .text(&display_cell(row.cell(column.field)))
            }),
        },
    };

    html!("td", {
        .class(column.align.class_name())
        .child(content)
    })
}
