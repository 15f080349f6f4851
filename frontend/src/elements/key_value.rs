use dominator::{Dom, html};

use shared::table::EMPTY_CELL;

use crate::constants::{TAG_DIV, TAG_SPAN};

fn css_class(label: &str) -> String {
    format!("key-value__{label}")
}

pub fn key_value(key: &str, value: &str) -> Dom {
    let value = if value.trim().is_empty() { EMPTY_CELL } else { value };
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_SPAN, {
                .class(css_class("key"))
                .text(key)
            }),
            html!(TAG_SPAN, {
                .class(css_class("value"))
                .text(value)
            }),
        ])
    })
}

pub fn key_values(rows: Vec<(&str, String)>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("list"))
        .children(rows.iter().map(|(key, value)| key_value(key, value)))
    })
}
