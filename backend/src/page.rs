use askama::Template;
use serde::Serialize;

use shared::constants::SNACKBAR_ID;

use crate::constants::{FRONTEND_JS, FRONTEND_WASM, STYLESHEET};

/// HTML shell; the frontend reads its data from the `#main_script` dataset.
#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    app_data: String,
    static_url: &'a str,
    proxy: &'a str,
    snackbar_id: &'static str,
    stylesheet: &'static str,
    frontend_js: &'static str,
    frontend_wasm: &'static str,
}

/// HTML shell with `data` serialized into the `data-app-data` attribute.
pub fn render_page<T: Serialize>(data: &T, static_url: &str, proxy: &str) -> String {
    let app_data = match serde_json::to_string(data) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!("[Page]: payload serialization failed: {err}");
            "{}".to_string()
        }
    };
    let page = PageTemplate {
        app_data,
        static_url: static_url.trim_end_matches('/'),
        proxy,
        snackbar_id: SNACKBAR_ID,
        stylesheet: STYLESHEET,
        frontend_js: FRONTEND_JS,
        frontend_wasm: FRONTEND_WASM,
    };
    match page.render() {
        Ok(html) => html,
        Err(err) => {
            tracing::error!("[Page]: render failed: {err}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn payload_lands_in_script_dataset() {
        let page = render_page(&json!({"name": "acme"}), "/static/", "http://proxy");
        assert!(page.contains(r#"data-app-data="{&quot;name&quot;:&quot;acme&quot;}""#));
        assert!(page.contains(r#"data-static-url="/static""#));
        assert!(page.contains(r#"data-proxy="http://proxy""#));
        assert!(page.contains("import init from '/static/pebblo-frontend.js';"));
        assert!(page.contains(r#"<div id="snackbar""#));
    }

    #[test]
    fn markup_in_payload_is_escaped() {
        let page = render_page(&json!({"name": "</script><b>'x'&"}), "/static", "");
        assert!(!page.contains("</script><b>"));
        assert!(page.contains("&lt;/script&gt;&lt;b&gt;"));
        assert!(page.contains("&amp;"));
    }
}
