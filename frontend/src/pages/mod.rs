use dominator::{Dom, html};

use shared::routes::{delete_app_url, Route};
use shared::types::{FrameworkInfo, InstanceDetails};
use shared::utils::format_date;

use crate::connect_fetch::delete_app;
use crate::constants::{LABEL_DELETE, LABEL_DELETE_APP, LABEL_INSTANCE_DETAILS};
use crate::dialog::dialogs::Dialog;
use crate::elements::accordion::accordion;
use crate::elements::button::{button, ButtonVariant, Icon};
use crate::elements::key_value::key_values;

pub mod app_details;
pub mod not_found;
pub mod overview;
pub mod retrieval_app_details;
pub mod safe_retrieval;

pub fn instance_details(instance: &InstanceDetails, framework: &FrameworkInfo) -> Dom {
    let value = |v: &Option<String>| v.clone().unwrap_or_default();
    let framework_text = match (&framework.name, &framework.version) {
        (Some(name), Some(version)) => format!("{name} {version}"),
        (Some(name), None) => name.clone(),
        _ => String::new(),
    };
    let language = match (&instance.language, &instance.language_version) {
        (Some(language), Some(version)) => format!("{language} {version}"),
        (Some(language), None) => language.clone(),
        _ => String::new(),
    };
    let os = match (&instance.os, &instance.os_version) {
        (Some(os), Some(version)) => format!("{os} {version}"),
        (Some(os), None) => os.clone(),
        _ => String::new(),
    };

    accordion(LABEL_INSTANCE_DETAILS, key_values(vec![
        ("Framework", framework_text),
        ("Type", value(&instance.type_)),
        ("Host", value(&instance.host)),
        ("Path", value(&instance.path)),
        ("Runtime", value(&instance.runtime)),
        ("IP", value(&instance.ip)),
        ("Language", language),
        ("Platform", value(&instance.platform)),
        ("OS", os),
        ("Created", format_date(&value(&instance.created_at), true)),
    ]))
}

/// Opens the delete confirmation; a successful delete leads to `redirect`.
pub fn delete_app_button(app_name: &str, redirect: Route) -> Dom {
    let app_name = app_name.to_string();
    button(LABEL_DELETE_APP, ButtonVariant::Danger, Some(Icon::Delete), move || {
        let app_name = app_name.clone();
        let message = format!("Are you sure you want to delete {app_name}? This action cannot be undone.");
        Dialog::confirm(LABEL_DELETE_APP, &message, LABEL_DELETE, move || {
            delete_app(&delete_app_url(&app_name), redirect.path());
        });
    })
}

pub fn page_title(name: &str, description: Option<&str>) -> Dom {
    html!("div", {
        .class("page__title")
        .child(html!("h2", {
            .text(name)
        }))
        .children(description.filter(|d| !d.is_empty()).map(|description| html!("p", {
            .class("page__description")
            .text(description)
        })))
    })
}
