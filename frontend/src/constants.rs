pub static PROP_TITLE: &'static str = "title";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_HREF: &'static str = "href";
pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_ARIA_LABEL: &'static str = "aria-label";
pub static PROP_COLSPAN: &'static str = "colspan";
pub static PROP_STYLE_LEFT: &'static str = "left";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_LINK: &'static str = "a";
pub static TAG_IMG: &'static str = "img";

pub static LOGO_IMAGE: &'static str = "pebblo-logo.svg";
pub static EMPTY_IMAGE: &'static str = "empty-state.svg";

pub static TAB_WIDTH_PX: usize = 248;

pub static LABEL_BACK: &'static str = "Back";
pub static LABEL_DOWNLOAD_REPORT: &'static str = "Download Report";
pub static LABEL_LOAD_HISTORY: &'static str = "Load History";
pub static LABEL_DELETE_APP: &'static str = "Delete App";
pub static LABEL_DELETE: &'static str = "Delete";
pub static LABEL_CANCEL: &'static str = "Cancel";
pub static LABEL_SEARCH: &'static str = "Search";
pub static LABEL_INSTANCE_DETAILS: &'static str = "Instance Details";
