use dominator::{Dom, events, html};
use futures_signals::signal::{Mutable, SignalExt};

use crate::constants::{TAG_BUTTON, TAG_DIV, TAG_SPAN};

fn css_class(label: &str) -> String {
    format!("accordion__{label}")
}

pub fn accordion(title: &str, body: Dom) -> Dom {
    let open = Mutable::new(false);

    html!(TAG_DIV, {
        .class(css_class("container"))
        .class_signal("open", open.signal())
        .children([
            html!(TAG_BUTTON, {
                .class(css_class("header"))
                .children([
                    html!(TAG_SPAN, {
                        .text(title)
                    }),
                    html!(TAG_SPAN, {
                        .class(css_class("arrow"))
                        .text_signal(open.signal().map(|open| if open { "▴" } else { "▾" }))
                    }),
                ])
                .event({
                    let open = open.clone();
                    move |_: events::Click| open.set(!open.get())
                })
            }),
            html!(TAG_DIV, {
                .class(css_class("body"))
                .visible_signal(open.signal())
                .child(body)
            }),
        ])
    })
}
