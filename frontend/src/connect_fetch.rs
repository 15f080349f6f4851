use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Blob, Request, RequestInit, Response, Url};

use shared::constants::{MSG_DELETE_FAILED, MSG_DELETE_SUCCESS, SUCCESS_CODE};

use crate::dialog::dialogs::dialog_close_all;
use crate::elements::snackbar::{show_snackbar, show_snackbar_then};
use crate::utils::{get_window, location_assign};

async fn send(url: &str, method: &str) -> Result<Response, JsValue> {
    let mut opts = RequestInit::new();
    opts.method(method);
    opts.credentials(web_sys::RequestCredentials::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)?;
    let window = get_window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into::<Response>()
}

async fn open_blob(url: &str) -> Result<(), JsValue> {
    let resp = send(url, "GET").await?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("status {}", resp.status())));
    }
    let blob: Blob = JsFuture::from(resp.blob()?).await?.dyn_into()?;
    let object_url = Url::create_object_url_with_blob(&blob)?;
    if let Some(window) = get_window() {
        window.open_with_url(&object_url)?;
    }
    Ok(())
}

/// Fetches `url` and opens the body in a new window.
pub fn get_file(url: &str) {
    let url = url.to_string();
    spawn_local(async move {
        if let Err(err) = open_blob(&url).await {
            log::error!("get_file {url}: {:?}", err);
        }
    });
}

/// Sends `DELETE` to `url`; on success goes to `redirect` once the snackbar is gone.
pub fn delete_app(url: &str, redirect: String) {
    let url = url.to_string();
    spawn_local(async move {
        let status = match send(&url, "DELETE").await {
            Ok(resp) => resp.status(),
            Err(err) => {
                log::error!("delete_app {url}: {:?}", err);
                0
            }
        };
        dialog_close_all();
        if status == SUCCESS_CODE {
            show_snackbar_then(MSG_DELETE_SUCCESS, move || location_assign(&redirect));
        } else {
            show_snackbar(MSG_DELETE_FAILED);
        }
    });
}
