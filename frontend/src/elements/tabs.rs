use std::rc::Rc;

use dominator::{Dom, events, html};
use futures_signals::signal::{Mutable, SignalExt};

use shared::utils::{counter_text, out_of_text};

use crate::constants::{PROP_STYLE_LEFT, TAB_WIDTH_PX, TAG_BUTTON, TAG_DIV, TAG_SPAN};

fn css_class(label: &str) -> String {
    format!("tabs__{label}")
}

#[derive(Clone)]
pub struct Tab {
    pub label: String,
    pub count: u64,
    pub out_of: Option<u64>,
    pub critical: bool,
    pub panel: Rc<dyn Fn() -> Dom>,
}

impl Tab {
    pub fn new<F>(label: &str, count: u64, panel: F) -> Self
        where F: Fn() -> Dom + 'static
    {
        Self {
            label: label.to_string(),
            count,
            out_of: None,
            critical: false,
            panel: Rc::new(panel),
        }
    }

    pub fn out_of(mut self, total: u64) -> Self {
        self.out_of = Some(total);
        self
    }

    pub fn critical(mut self, critical: bool) -> Self {
        self.critical = critical;
        self
    }
}

pub fn indicator_offset(index: usize) -> String {
    format!("{}px", index * TAB_WIDTH_PX)
}

pub fn tabs(list: Vec<Tab>) -> Dom {
    let active = Mutable::new(0_usize);
    let panels = list.clone();

    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(html!(TAG_DIV, {
            .class(css_class("list"))
            .children(list.iter().enumerate().map(|(index, tab)| tab_button(index, tab, active.clone())))
            .child(html!(TAG_DIV, {
                .class(css_class("indicator"))
                .style_signal(PROP_STYLE_LEFT, active.signal().map(indicator_offset))
            }))
        }))
        .child_signal(active.signal().map(move |index| {
            panels.get(index).map(|tab| html!(TAG_DIV, {
                .class(css_class("panel"))
                .child((tab.panel)())
            }))
        }))
    })
}

fn tab_button(index: usize, tab: &Tab, active: Mutable<usize>) -> Dom {
    html!(TAG_BUTTON, {
        .class(css_class("tab"))
        .class_signal("active", active.signal().map(move |current| current == index))
        .children([
            html!(TAG_SPAN, {
                .class(css_class("counter"))
                .apply_if(tab.critical, |dom| dom.class("critical"))
                .text(&counter_text(tab.count))
            }),
            html!(TAG_SPAN, {
                .class(css_class("out-of"))
                .text(&tab.out_of.map(out_of_text).unwrap_or_default())
            }),
            html!(TAG_SPAN, {
                .class(css_class("label"))
                .text(&tab.label)
            }),
        ])
        .event(move |_: events::Click| active.set_neq(index))
    })
}
