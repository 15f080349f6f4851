use dominator::{Dom, html};

use shared::routes::{report_url, Route};
use shared::table::{
    APPLICATIONS_COLUMNS, APPLICATIONS_SEARCH, DATA_SOURCE_COLUMNS, DATA_SOURCE_SEARCH, FILES_WITH_FINDINGS_COLUMNS,
    FILES_WITH_FINDINGS_SEARCH, FINDINGS_COLUMNS, FINDINGS_SEARCH,
};
use shared::types::{DashboardData, LoaderAppListDetails};

use crate::connect_fetch::get_file;
use crate::constants::{LABEL_DOWNLOAD_REPORT, TAG_DIV, TAG_SPAN};
use crate::elements::applications_list::{applications_list, ListConfig};
use crate::elements::button::{Icon, icon_button};
use crate::elements::tabs::{Tab, tabs};
use crate::state::{app_data, PAGE};

fn css_class(label: &str) -> String {
    format!("overview__{label}")
}

fn report_action(row: &LoaderAppListDetails) -> Dom {
    let url = report_url(&PAGE.proxy, &row.name);
    icon_button(LABEL_DOWNLOAD_REPORT, Icon::Download, move || get_file(&url))
}

pub fn overview_page() -> Dom {
    let data = app_data::<DashboardData>();
    let loader = data.loader_apps;

    let apps = loader.app_list.clone();
    let findings = loader.findings.clone();
    let documents = loader.documents_with_findings.clone();
    let data_sources = loader.data_source.clone();

    html!(TAG_DIV, {
        .class(css_class("container"))
        .children(data.pebblo_server_version.map(|version| html!(TAG_SPAN, {
            .class(css_class("version"))
            .text(&format!("Pebblo Server {version}"))
        })))
        .child(tabs(vec![
            Tab::new("Applications With Findings", loader.applications_at_risk_count, move || {
                let config = ListConfig::<LoaderAppListDetails>::new("Applications", APPLICATIONS_COLUMNS, APPLICATIONS_SEARCH)
                    .link(Route::AppDetails)
                    .actions(report_action);
                applications_list(config, apps.clone())
            })
                .out_of(loader.app_list.len() as u64)
                .critical(loader.applications_at_risk_count > 0),
            Tab::new("Findings", loader.findings_count, move || {
                applications_list(ListConfig::new("Findings", FINDINGS_COLUMNS, FINDINGS_SEARCH), findings.clone())
            })
                .critical(loader.findings_count > 0),
            Tab::new("Files With Findings", loader.documents_with_findings_count, move || {
                let config = ListConfig::new("Files With Findings", FILES_WITH_FINDINGS_COLUMNS, FILES_WITH_FINDINGS_SEARCH);
                applications_list(config, documents.clone())
            }),
            Tab::new("Data Source", loader.data_source_count, move || {
                applications_list(ListConfig::new("Data Source", DATA_SOURCE_COLUMNS, DATA_SOURCE_SEARCH), data_sources.clone())
            }),
        ]))
    })
}
