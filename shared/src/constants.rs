pub static ROOT_PATH: &'static str = "pebblo";

pub static PATH_APP: &'static str = "app";
pub static PATH_SAFE_RETRIEVAL: &'static str = "safe_retrieval";
pub static PATH_NOT_FOUND: &'static str = "not-found";
pub static PATH_REPORT: &'static str = "report";
pub static PATH_DELETE: &'static str = "delete";
pub static PATH_STATIC: &'static str = "static";

pub static QUERY_APP_NAME: &'static str = "app_name";

pub static SCRIPT_ELEMENT_ID: &'static str = "main_script";
pub static DATA_APP: &'static str = "appData";
pub static DATA_STATIC_URL: &'static str = "staticUrl";
pub static DATA_PROXY: &'static str = "proxy";

pub static SNACKBAR_ID: &'static str = "snackbar";

pub const SUCCESS_CODE: u16 = 200;
pub const SNACKBAR_TIMEOUT_MS: u32 = 2000;

pub static MSG_DELETE_SUCCESS: &'static str = "App deleted successfully";
pub static MSG_DELETE_FAILED: &'static str = "Failed to delete app";
