pub mod accordion;
pub mod app_header;
pub mod app_root;
pub mod applications_list;
pub mod button;
pub mod chart;
pub mod empty_state;
pub mod key_value;
pub mod snackbar;
pub mod snippets;
pub mod table;
pub mod tabs;
pub mod tooltip;
pub mod view_more;
