use dominator::{Dom, events, html};
use futures_signals::signal::Mutable;

use shared::table::{EMPTY_CELL, IDENTITY_COLUMNS, NameRow};

use crate::constants::{TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::dialog::dialogs::Dialog;
use crate::elements::table::table;

fn css_class(label: &str) -> String {
    format!("view-more__{label}")
}

/// First value of `items` followed by a "+N" button listing all of them.
pub fn view_more(title: &str, items: Vec<String>) -> Dom {
    let first = items.first().cloned().unwrap_or_else(|| EMPTY_CELL.to_string());
    let rest = items.len().saturating_sub(1);
    let title = title.to_string();

    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(html!(TAG_SPAN, {
            .class(css_class("first"))
            .text(&first)
        }))
        .children(if rest > 0 { Some(more_button(title, items, rest)) } else { None })
    })
}

fn more_button(title: String, items: Vec<String>, rest: usize) -> Dom {
    html!(TAG_BUTTON, {
        .class(css_class("button"))
        .text(&format!("+{rest}"))
        .event(move |_: events::Click| {
            let items = items.clone();
            Dialog::content(&title, move || {
                let rows = items.iter().cloned().map(NameRow).collect::<Vec<_>>();
                table(IDENTITY_COLUMNS, Mutable::new(rows), None)
            });
        })
    })
}
