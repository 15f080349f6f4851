use dominator::{Dom, events, html, svg};

use crate::constants::{PROP_ARIA_LABEL, PROP_TITLE, TAG_BUTTON, TAG_SPAN};

fn css_class(label: &str) -> String {
    format!("button__{label}")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Text,
    Outlined,
    Danger,
}

impl ButtonVariant {
    fn class_name(&self) -> String {
        match self {
            ButtonVariant::Text => css_class("text"),
            ButtonVariant::Outlined => css_class("outlined"),
            ButtonVariant::Danger => css_class("danger"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Icon {
    Download,
    History,
    Delete,
    Back,
}

impl Icon {
    fn path(&self) -> &'static str {
        match self {
            Icon::Download => "M5 20h14v-2H5v2zM19 9h-4V3H9v6H5l7 7 7-7z",
            Icon::History => "M13 3a9 9 0 0 0-9 9H1l3.89 3.89.07.14L9 12H6c0-3.87 3.13-7 7-7s7 3.13 7 7-3.13 7-7 7c-1.93 0-3.68-.79-4.94-2.06l-1.42 1.42A8.95 8.95 0 0 0 13 21a9 9 0 0 0 0-18zm-1 5v5l4.28 2.54.72-1.21-3.5-2.08V8H12z",
            Icon::Delete => "M6 19c0 1.1.9 2 2 2h8c1.1 0 2-.9 2-2V7H6v12zM19 4h-3.5l-1-1h-5l-1 1H5v2h14V4z",
            Icon::Back => "M20 11H7.83l5.59-5.59L12 4l-8 8 8 8 1.41-1.41L7.83 13H20v-2z",
        }
    }
}

pub fn icon(icon: Icon) -> Dom {
    svg!("svg", {
        .attr("viewBox", "0 0 24 24")
        .class(css_class("icon"))
        .child(svg!("path", {
            .attr("fill", "currentColor")
            .attr("d", icon.path())
        }))
    })
}

pub fn button<F>(label: &str, variant: ButtonVariant, icon_before: Option<Icon>, click: F) -> Dom
    where F: FnMut() + 'static
{
    let mut click = click;
    html!(TAG_BUTTON, {
        .class(css_class("container"))
        .class(variant.class_name())
        .children(icon_before.map(icon))
        .child(html!(TAG_SPAN, {
            .text(label)
        }))
        .event(move |_: events::Click| click())
    })
}

pub fn icon_button<F>(title: &str, icon_type: Icon, click: F) -> Dom
    where F: FnMut() + 'static
{
    let mut click = click;
    html!(TAG_BUTTON, {
        .class(css_class("icon-only"))
        .attr(PROP_TITLE, title)
        .attr(PROP_ARIA_LABEL, title)
        .child(icon(icon_type))
        .event(move |_: events::Click| click())
    })
}
