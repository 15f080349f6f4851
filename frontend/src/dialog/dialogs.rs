use std::sync::Arc;

use dominator::{Dom, events, html, svg};
use futures_signals::signal::{Signal, SignalExt};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use once_cell::sync::Lazy;

use crate::constants::{LABEL_CANCEL, PROP_ARIA_LABEL, TAG_BUTTON, TAG_DIV, TAG_SPAN};

pub static DIALOGS: Lazy<MutableVec<Dialog>> = Lazy::new(|| {
    MutableVec::new()
});

pub type DialogBody = Arc<dyn Fn() -> Dom + Send + Sync>;
pub type DialogAction = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct Dialog {
    pub type_: DialogType,
    pub title: String,
    pub message: String,
    pub body: DialogBody,
    pub confirm_label: String,
    pub confirm: DialogAction,
}

impl Default for Dialog {
    fn default() -> Self {
        Self {
            type_: DialogType::Content,
            title: "".to_string(),
            message: "".to_string(),
            body: Arc::new(|| html!(TAG_DIV)),
            confirm_label: "".to_string(),
            confirm: Arc::new(|| {}),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DialogType {
    Confirm,
    Content,
}

impl Dialog {
    pub fn confirm<F>(title: &str, message: &str, confirm_label: &str, confirm: F)
        where F: Fn() + Send + Sync + 'static
    {
        DIALOGS.lock_mut().push_cloned(Self {
            type_: DialogType::Confirm,
            title: title.to_string(),
            message: message.to_string(),
            confirm_label: confirm_label.to_string(),
            confirm: Arc::new(confirm),
            ..Dialog::default()
        });
    }

    pub fn content<F>(title: &str, body: F)
        where F: Fn() -> Dom + Send + Sync + 'static
    {
        DIALOGS.lock_mut().push_cloned(Self {
            type_: DialogType::Content,
            title: title.to_string(),
            body: Arc::new(body),
            ..Dialog::default()
        });
    }
}

// ===

fn css_class(label: &str) -> String {
    format!("dialogs__{label}")
}

pub fn dialogs() -> impl Signal<Item=Option<Dom>> {
    DIALOGS.signal_vec_cloned().to_signal_cloned().map(current_element)
}

fn current_element(list: Vec<Dialog>) -> Option<Dom> {
    list.last().map(|dialog| match dialog.type_ {
        DialogType::Confirm => dialog_confirm(dialog),
        DialogType::Content => dialog_content(dialog),
    })
}

fn dialog_common(rows: Vec<Dom>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("back"))
        .child(html!(TAG_DIV, {
            .class(css_class("container"))
            .children(rows)
        }))
    })
}

fn dialog_header(title: &str) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("header"))
        .children([
            html!(TAG_SPAN, {
                .class(css_class("title"))
                .text(title)
            }),
            html!(TAG_BUTTON, {
                .class(css_class("close"))
                .attr(PROP_ARIA_LABEL, "close")
                .child(icon_close())
                .event(|_: events::Click| dialog_close())
            }),
        ])
    })
}

fn dialog_confirm(data: &Dialog) -> Dom {
    let confirm = data.confirm.clone();
    dialog_common(vec![
        dialog_header(&data.title),
        html!(TAG_DIV, {
            .class(css_class("body"))
            .text(&data.message)
        }),
        html!(TAG_DIV, {
            .class(css_class("footer"))
            .children([
                html!(TAG_BUTTON, {
                    .class(css_class("button-cancel"))
                    .text(LABEL_CANCEL)
                    .attr(PROP_ARIA_LABEL, "cancel")
                    .event(|_: events::Click| dialog_close())
                }),
                html!(TAG_BUTTON, {
                    .class(css_class("button-confirm"))
                    .text(&data.confirm_label)
                    .attr(PROP_ARIA_LABEL, "confirm")
                    .event(move |_: events::Click| confirm())
                }),
            ])
        }),
    ])
}

fn dialog_content(data: &Dialog) -> Dom {
    dialog_common(vec![
        dialog_header(&data.title),
        html!(TAG_DIV, {
            .class(css_class("body"))
            .child((data.body)())
        }),
    ])
}

pub fn dialog_close() {
    let mut dialogs = DIALOGS.lock_mut();
    let count = dialogs.len();
    if count > 0 {
        dialogs.remove(count - 1);
    }
}

pub fn dialog_close_all() {
    DIALOGS.lock_mut().clear();
}

fn icon_close() -> Dom {
    svg!("svg", {
        .attr("viewBox", "0 0 24 24")
        .class(css_class("icon"))
        .child(svg!("path", {
            .attr("fill", "currentColor")
            .attr("d", "M19 6.41 17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z")
        }))
    })
}
