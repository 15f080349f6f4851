use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlInputElement, Location, Window};

pub fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

pub fn get_location() -> Option<Location> {
    get_window().map(|w| w.location())
}

pub fn location_pathname() -> String {
    get_location().and_then(|l| l.pathname().ok()).unwrap_or_default()
}

pub fn location_assign(url: &str) {
    if let Some(location) = get_location() {
        if let Err(err) = location.assign(url) {
            log::error!("location_assign {url}: {:?}", err);
        }
    }
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

pub fn query_selector(selectors: &str) -> Option<Element> {
    get_document().and_then(|d| d.query_selector(selectors).ok()).and_then(|e| e)
}

pub fn get_html_element(el: Option<Element>) -> Option<HtmlElement> {
    el.and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// `data-*` value of the element matched by `selectors`.
pub fn dataset_value(selectors: &str, key: &str) -> Option<String> {
    get_html_element(query_selector(selectors)).and_then(|element| element.dataset().get(key))
}

pub fn input_value(target: Option<EventTarget>) -> String {
    target
        .and_then(|target| JsValue::from(target).dyn_ref::<HtmlInputElement>().map(|input| input.value()))
        .unwrap_or_default()
}

pub fn static_path(static_url: &str, file: &str) -> String {
    format!("{}/{file}", static_url.trim_end_matches('/'))
}
