use dominator::{Dom, html};
use futures_signals::signal::SignalExt;
use gloo_timers::callback::Timeout;

use shared::constants::SNACKBAR_TIMEOUT_MS;

use crate::constants::TAG_DIV;
use crate::state::SNACKBAR;

fn css_class(label: &str) -> String {
    format!("snackbar__{label}")
}

pub fn snackbar() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .class_signal("show", SNACKBAR.signal_ref(|message| message.is_some()))
        .child_signal(SNACKBAR.signal_cloned().map(|message| {
            message.map(|message| html!(TAG_DIV, {
                .class(css_class("message"))
                .text(&message)
            }))
        }))
    })
}

pub fn show_snackbar(message: &str) {
    show_snackbar_then(message, || {});
}

/// Shows `message`, hides it after the timeout and then runs `callback`.
pub fn show_snackbar_then<F>(message: &str, callback: F)
    where F: FnOnce() + 'static
{
    let message = message.to_string();
    SNACKBAR.set(Some(message.clone()));
    Timeout::new(SNACKBAR_TIMEOUT_MS, move || {
        let mut current = SNACKBAR.lock_mut();
        if current.as_deref() == Some(message.as_str()) {
            *current = None;
        }
        drop(current);
        callback();
    }).forget();
}
