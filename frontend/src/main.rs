use shared::constants::SNACKBAR_ID;

use crate::elements::app_root::app_root;
use crate::elements::snackbar::snackbar;
use crate::utils::{get_html_element, query_selector};

mod connect_fetch;
mod constants;
mod dialog;
mod elements;
mod pages;
mod state;
mod utils;

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    match get_html_element(query_selector(&format!("#{SNACKBAR_ID}"))) {
        Some(host) => dominator::append_dom(&host, snackbar()),
        None => dominator::append_dom(&dominator::body(), snackbar()),
    };
    dominator::append_dom(&dominator::body(), app_root());
}
