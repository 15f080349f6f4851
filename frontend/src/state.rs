use futures_signals::signal::Mutable;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

use shared::constants::{DATA_APP, DATA_PROXY, DATA_STATIC_URL, SCRIPT_ELEMENT_ID};
use shared::routes::Route;

use crate::utils::{dataset_value, location_pathname};

/// Values the server put on `<script id="main_script">`.
#[derive(Debug, Clone, Default)]
pub struct PageConfig {
    pub app_data: String,
    pub static_url: String,
    pub proxy: String,
}

pub static PAGE: Lazy<PageConfig> = Lazy::new(|| {
    let selector = format!("#{SCRIPT_ELEMENT_ID}");
    PageConfig {
        app_data: dataset_value(&selector, DATA_APP).unwrap_or_default(),
        static_url: dataset_value(&selector, DATA_STATIC_URL).unwrap_or_default(),
        proxy: dataset_value(&selector, DATA_PROXY).unwrap_or_default(),
    }
});

pub static ROUTE: Lazy<Route> = Lazy::new(|| Route::from_path(&location_pathname()));

pub static SNACKBAR: Lazy<Mutable<Option<String>>> = Lazy::new(|| Mutable::new(None));

/// Page payload; a missing or malformed payload yields the empty value.
pub fn app_data<T>() -> T
    where T: DeserializeOwned + Default
{
    if PAGE.app_data.is_empty() {
        log::warn!("[Page] no app data");
        return T::default();
    }
    let value = match js_sys::JSON::parse(&PAGE.app_data) {
        Ok(value) => value,
        Err(err) => {
            log::error!("[Page] app data is not JSON: {:?}", err);
            return T::default();
        }
    };
    serde_wasm_bindgen::from_value::<T>(value).unwrap_or_else(|err| {
        log::error!("[Page] app data: {}", err);
        T::default()
    })
}
