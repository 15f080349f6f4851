use dominator::{Dom, events, html};
use futures_signals::signal::Mutable;

use crate::constants::{TAG_DIV, TAG_SPAN};

fn css_class(label: &str) -> String {
    format!("tooltip__{label}")
}

/// Wraps `content`; `text` shows while the pointer is over it.
pub fn tooltip(text: &str, content: Dom) -> Dom {
    let over = Mutable::new(false);
    let over_enter = over.clone();
    let over_leave = over.clone();

    html!(TAG_DIV, {
        .class(css_class("container"))
        .event(move |_: events::MouseEnter| over_enter.set_neq(true))
        .event(move |_: events::MouseLeave| over_leave.set_neq(false))
        .children([
            content,
            html!(TAG_SPAN, {
                .class(css_class("text"))
                .visible_signal(over.signal())
                .text(text)
            }),
        ])
    })
}
