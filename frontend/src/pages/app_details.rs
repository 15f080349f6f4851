use dominator::{Dom, html};
use futures_signals::signal::Mutable;

use shared::routes::{report_url, Route};
use shared::table::{
    APP_DETAILS_FINDINGS_COLUMNS, APP_DETAILS_FINDINGS_SEARCH, DATA_SOURCE_COLUMNS, DATA_SOURCE_SEARCH,
    LOAD_HISTORY_COLUMNS, report_data_sources, report_findings, report_snippets, TOP_FINDINGS_COLUMNS,
    TOP_FINDINGS_SEARCH,
};
use shared::types::{LoadHistory, ReportModel, Summary};
use shared::utils::format_date;

use crate::connect_fetch::get_file;
use crate::constants::{LABEL_DOWNLOAD_REPORT, LABEL_LOAD_HISTORY, TAG_DIV, TAG_SPAN};
use crate::dialog::dialogs::Dialog;
use crate::elements::applications_list::{applications_list, ListConfig};
use crate::elements::button::{button, ButtonVariant, Icon};
use crate::elements::chart::findings_chart;
use crate::elements::key_value::key_value;
use crate::elements::snippets::snippets;
use crate::elements::table::table;
use crate::elements::tabs::{Tab, tabs};
use crate::pages::{delete_app_button, instance_details, page_title};
use crate::state::{app_data, PAGE};
use crate::utils::set_title;

fn css_class(label: &str) -> String {
    format!("app-details__{label}")
}

pub fn app_details_page() -> Dom {
    let report = app_data::<ReportModel>();
    set_title(&format!("{} | Pebblo", report.name));

    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("header"))
                .children([
                    page_title(&report.name, report.description.as_deref()),
                    actions(&report),
                ])
            }),
            instance_details(&report.instance_details, &report.framework),
            summary_line(&report.report_summary),
            report_tabs(&report),
        ])
    })
}

fn actions(report: &ReportModel) -> Dom {
    let url = report_url(&PAGE.proxy, &report.name);
    let history = report.load_history.clone();

    html!(TAG_DIV, {
        .class(css_class("actions"))
        .children([
            button(LABEL_DOWNLOAD_REPORT, ButtonVariant::Outlined, Some(Icon::Download), move || get_file(&url)),
            button(LABEL_LOAD_HISTORY, ButtonVariant::Outlined, Some(Icon::History), move || {
                let history = history.clone();
                Dialog::content(LABEL_LOAD_HISTORY, move || load_history(&history));
            }),
            delete_app_button(&report.name, Route::Dashboard),
        ])
    })
}

fn load_history(history: &LoadHistory) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("load-history"))
        .child(table(LOAD_HISTORY_COLUMNS, Mutable::new(history.history.clone()), None))
        .children(history.more_reports_path.as_ref().map(|path| key_value("More reports", path)))
    })
}

fn summary_line(summary: &Summary) -> Dom {
    let items = [
        format!("Findings: {}", summary.findings),
        format!("Files with findings: {} of {}", summary.files_with_findings, summary.total_files),
        format!("Data sources: {}", summary.data_sources),
        format!("Owner: {}", if summary.owner.is_empty() { "-" } else { summary.owner.as_str() }),
        format!("Created: {}", format_date(&summary.created_at, true)),
    ];

    html!(TAG_DIV, {
        .class(css_class("summary"))
        .children(items.iter().map(|text| html!(TAG_SPAN, {
            .class(css_class("summary-item"))
            .text(text)
        })))
    })
}

fn report_tabs(report: &ReportModel) -> Dom {
    let summary = &report.report_summary;
    let findings = report_findings(report);
    let files = report.top_findings.clone();
    let sources = report_data_sources(report);
    let details = report_snippets(report);
    let snippet_count = details.iter().map(|d| d.snippets.len() as u64).sum::<u64>();

    tabs(vec![
        Tab::new("Findings", summary.findings, move || {
            html!(TAG_DIV, {
                .class(css_class("findings"))
                .children([
                    findings_chart(&findings),
                    applications_list(
                        ListConfig::new("Findings", APP_DETAILS_FINDINGS_COLUMNS, APP_DETAILS_FINDINGS_SEARCH),
                        findings.clone(),
                    ),
                ])
            })
        })
            .critical(summary.findings > 0),
        Tab::new("Files With Findings", summary.files_with_findings, move || {
            applications_list(ListConfig::new("Files With Findings", TOP_FINDINGS_COLUMNS, TOP_FINDINGS_SEARCH), files.clone())
        })
            .out_of(summary.total_files),
        Tab::new("Data Source", sources.len() as u64, move || {
            applications_list(ListConfig::new("Data Source", DATA_SOURCE_COLUMNS, DATA_SOURCE_SEARCH), sources.clone())
        }),
        Tab::new("Snippets", snippet_count, move || snippets(details.clone())),
    ])
}
