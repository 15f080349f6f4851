use std::cmp::Ordering;

use crate::chart::FindingKind;
use crate::types::{
    ActiveUser, DataSourceRow, DocumentWithFindings, FindingRow, FindingsDetail, LoadHistoryItem, LoaderAppListDetails,
    ReportModel, RetrievalAppListDetails, RetrievalData, TopFinding,
};
use crate::utils::{format_date, get_file_size};

pub const NO_DATA_FOUND: &str = "No Data Found";
pub const EMPTY_CELL: &str = "-";
pub const FIELD_ACTIONS: &str = "actions";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
}

impl Align {
    pub fn class_name(&self) -> &'static str {
        match self {
            Align::Start => "text-start",
            Align::Center => "text-center",
            Align::End => "text-end",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub field: &'static str,
    pub align: Align,
    pub sortable: bool,
}

impl Column {
    pub const fn new(label: &'static str, field: &'static str, align: Align) -> Self {
        Self { label, field, align, sortable: true }
    }

    pub const fn fixed(label: &'static str, field: &'static str, align: Align) -> Self {
        Self { label, field, align, sortable: false }
    }

    pub fn is_actions(&self) -> bool {
        self.field == FIELD_ACTIONS
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Option<Self> {
        Some(Cell::Text(value.into()))
    }

    pub fn number<N: Into<f64>>(value: N) -> Option<Self> {
        Some(Cell::Number(value.into()))
    }

    /// Text shown in a `<td>`; empty values become `-`.
    pub fn display(&self) -> String {
        match self {
            Cell::Text(text) if text.trim().is_empty() => EMPTY_CELL.to_string(),
            Cell::Text(text) => text.clone(),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Cell::Number(n) => format!("{n}"),
        }
    }

    fn as_number(&self) -> f64 {
        match self {
            Cell::Number(n) => *n,
            Cell::Text(text) => text.trim().parse::<f64>().unwrap_or_default(),
        }
    }

    fn as_search_text(&self) -> String {
        match self {
            Cell::Text(text) => text.to_lowercase(),
            Cell::Number(_) => self.display(),
        }
    }
}

pub fn display_cell(cell: Option<Cell>) -> String {
    cell.map(|c| c.display()).unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// Field lookup for rows rendered by the generic table.
pub trait TableRow {
    fn cell(&self, field: &str) -> Option<Cell>;

    /// Value compared when sorting on `field`; differs from `cell` for formatted dates.
    fn sort_key(&self, field: &str) -> Option<Cell> {
        self.cell(field)
    }

    /// Multi-valued fields, shown as the first value and a "+N" counter.
    fn list(&self, _field: &str) -> Option<Vec<String>> {
        None
    }
}

// === filter & sort

pub fn filter_rows<T: TableRow + Clone>(rows: &[T], fields: &[&str], query: &str) -> Vec<T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| {
            fields.iter().any(|field| {
                row.cell(field)
                    .map(|cell| cell.as_search_text().contains(&query))
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect()
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggle(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Text vs numeric comparison is decided by the first row holding a value under `key`;
/// rows without one sort as empty text or zero.
pub fn sort_rows<T: TableRow>(rows: &mut [T], key: &str, order: SortOrder) {
    let is_text = match rows.iter().find_map(|row| row.sort_key(key)) {
        Some(Cell::Text(_)) => true,
        Some(Cell::Number(_)) => false,
        None => return,
    };

    rows.sort_by(|a, b| {
        let ordering = if is_text {
            let a = text_key(a.sort_key(key));
            let b = text_key(b.sort_key(key));
            a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(&b))
        } else {
            let a = a.sort_key(key).map(|c| c.as_number()).unwrap_or_default();
            let b = b.sort_key(key).map(|c| c.as_number()).unwrap_or_default();
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Rows matching `query`, kept in the order of the active sort.
pub fn filter_sorted<T: TableRow + Clone>(
    rows: &[T],
    fields: &[&str],
    query: &str,
    sort: Option<(&str, SortOrder)>,
) -> Vec<T> {
    let mut found = filter_rows(rows, fields, query);
    if let Some((key, order)) = sort {
        sort_rows(&mut found, key, order);
    }
    found
}

fn text_key(cell: Option<Cell>) -> String {
    match cell {
        Some(Cell::Text(text)) => text,
        Some(cell) => cell.display(),
        None => String::new(),
    }
}

// === columns

pub const APPLICATIONS_COLUMNS: &[Column] = &[
    Column::new("Application", "name", Align::Start),
    Column::new("Findings - Topics", "topics", Align::End),
    Column::new("Findings - Entities", "entities", Align::End),
    Column::new("Owner", "owner", Align::Start),
    Column::fixed("", FIELD_ACTIONS, Align::End),
];
pub const APPLICATIONS_SEARCH: &[&str] = &["name", "owner"];

pub const FINDINGS_COLUMNS: &[Column] = &[
    Column::new("Finding Type", "findingsType", Align::Start),
    Column::new("Finding", "labelName", Align::Start),
    Column::new("Source Files", "fileCount", Align::End),
    Column::new("Snippets", "snippetCount", Align::End),
    Column::new("Data Source", "dataSource", Align::Start),
    Column::new("Application", "appName", Align::Start),
];
pub const FINDINGS_SEARCH: &[&str] = &["labelName", "findingsType", "appName"];

pub const FILES_WITH_FINDINGS_COLUMNS: &[Column] = &[
    Column::new("File Name", "fileName", Align::Start),
    Column::new("Findings - Topics", "findingsTopics", Align::End),
    Column::new("Findings - Entities", "findingsEntities", Align::End),
    Column::new("Data Source", "sourceName", Align::Start),
    Column::new("Application", "appName", Align::Start),
];
pub const FILES_WITH_FINDINGS_SEARCH: &[&str] = &["fileName", "appName"];

pub const DATA_SOURCE_COLUMNS: &[Column] = &[
    Column::new("Data Source Name", "name", Align::Start),
    Column::new("Findings - Topics", "findingsTopics", Align::End),
    Column::new("Findings - Entities", "findingsEntities", Align::End),
    Column::new("Application", "appName", Align::Start),
];
pub const DATA_SOURCE_SEARCH: &[&str] = &["name", "appName"];

pub const APP_DETAILS_FINDINGS_COLUMNS: &[Column] = &[
    Column::new("Finding Type", "findingsType", Align::Start),
    Column::new("Finding", "labelName", Align::Start),
    Column::new("Source Files", "fileCount", Align::End),
    Column::new("Snippets", "snippetCount", Align::End),
    Column::new("Data Source", "dataSource", Align::Start),
];
pub const APP_DETAILS_FINDINGS_SEARCH: &[&str] = &["labelName", "findingsType"];

pub const TOP_FINDINGS_COLUMNS: &[Column] = &[
    Column::new("File Name", "fileName", Align::Start),
    Column::new("Findings - Topics", "findingsTopics", Align::End),
    Column::new("Findings - Entities", "findingsEntities", Align::End),
    Column::fixed("Authorized Identities", "authorizedIdentities", Align::Start),
];
pub const TOP_FINDINGS_SEARCH: &[&str] = &["fileName", "fileOwner"];

pub const LOAD_HISTORY_COLUMNS: &[Column] = &[
    Column::fixed("Report Name", "reportName", Align::Start),
    Column::fixed("Findings", "findings", Align::End),
    Column::fixed("Files With Findings", "filesWithFindings", Align::End),
    Column::fixed("Generated On", "generatedOn", Align::Start),
];

pub const RETRIEVAL_APPS_COLUMNS: &[Column] = &[
    Column::new("Application", "name", Align::Start),
    Column::new("Owner", "owner", Align::Start),
    Column::new("Retrievals", "retrievals", Align::End),
    Column::fixed("Active Users", "activeUsers", Align::Start),
    Column::fixed("Documents", "documents", Align::Start),
    Column::fixed("Vector DB", "vectorDbs", Align::Start),
];
pub const RETRIEVAL_APPS_SEARCH: &[&str] = &["name", "owner"];

pub const RETRIEVALS_COLUMNS: &[Column] = &[
    Column::new("Prompt", "prompt", Align::Start),
    Column::new("Retrieved From", "retrievedFrom", Align::Start),
    Column::new("User", "user", Align::Start),
    Column::new("Application", "name", Align::Start),
    Column::new("Retrieved On", "promptTime", Align::Start),
];
pub const RETRIEVALS_SEARCH: &[&str] = &["prompt", "user", "name", "retrievedFrom"];

pub const ACTIVE_USERS_COLUMNS: &[Column] = &[
    Column::new("User", "name", Align::Start),
    Column::new("Retrievals", "retrievals", Align::End),
    Column::fixed("Linked Groups", "linkedGroups", Align::Start),
    Column::new("Last Accessed", "lastAccessedTime", Align::Start),
];
pub const ACTIVE_USERS_SEARCH: &[&str] = &["name"];

pub const NAMED_COUNT_COLUMNS: &[Column] = &[
    Column::new("Name", "name", Align::Start),
    Column::new("Retrievals", "retrievals", Align::End),
    Column::new("Last Accessed", "lastAccessedTime", Align::Start),
];
pub const NAMED_COUNT_SEARCH: &[&str] = &["name"];

pub const IDENTITY_COLUMNS: &[Column] = &[Column::fixed("Name", "name", Align::Start)];

// === report rows

/// Findings summary rows of every data source, tagged with the source name.
pub fn report_findings(report: &ReportModel) -> Vec<FindingRow> {
    report.data_sources.iter()
        .flat_map(|source| {
            source.findings_summary.iter().cloned().map(move |mut row| {
                if row.data_source.is_empty() {
                    row.data_source = source.name.clone();
                }
                row
            })
        })
        .collect()
}

pub fn report_data_sources(report: &ReportModel) -> Vec<DataSourceRow> {
    report.data_sources.iter()
        .map(|source| {
            let total = |kind: FindingKind| {
                source.findings_summary.iter()
                    .filter(|row| FindingKind::from_type(&row.findings_type) == kind)
                    .map(|row| row.findings)
                    .sum::<u64>()
            };
            DataSourceRow {
                name: source.name.clone(),
                source_path: source.source_path.clone(),
                source_type: source.source_type.clone(),
                source_size: source.source_size,
                findings_entities: total(FindingKind::Entity),
                findings_topics: total(FindingKind::Topic),
                app_name: report.name.clone(),
            }
        })
        .collect()
}

pub fn report_snippets(report: &ReportModel) -> Vec<FindingsDetail> {
    report.data_sources.iter().flat_map(|source| source.findings_details.iter().cloned()).collect()
}

// === row implementations

impl TableRow for LoaderAppListDetails {
    fn cell(&self, field: &str) -> Option<Cell> {
        match field {
            "name" => Cell::text(&self.name),
            "topics" => Cell::number(self.topics as f64),
            "entities" => Cell::number(self.entities as f64),
            "owner" => self.owner.as_ref().and_then(Cell::text),
            "loadId" => self.load_id.as_ref().and_then(Cell::text),
            _ => None,
        }
    }
}

impl TableRow for FindingRow {
    fn cell(&self, field: &str) -> Option<Cell> {
        match field {
            "labelName" => Cell::text(&self.label_name),
            "findingsType" => Cell::text(&self.findings_type),
            "findings" => Cell::number(self.findings as f64),
            "fileCount" => Cell::number(self.file_count as f64),
            "snippetCount" => Cell::number(self.snippet_count as f64),
            "dataSource" => Cell::text(&self.data_source),
            "appName" => Cell::text(&self.app_name),
            _ => None,
        }
    }
}

impl TableRow for DocumentWithFindings {
    fn cell(&self, field: &str) -> Option<Cell> {
        match field {
            "fileName" => Cell::text(&self.file_name),
            "fileOwner" => Cell::text(&self.file_owner),
            "sourceSize" => Cell::text(get_file_size(self.source_size)),
            "findingsEntities" => Cell::number(self.findings_entities as f64),
            "findingsTopics" => Cell::number(self.findings_topics as f64),
            "findings" => Cell::number(self.findings as f64),
            "authorizedIdentities" => Cell::text(self.authorized_identities.join(", ")),
            "sourceName" => Cell::text(&self.source_name),
            "appName" => Cell::text(&self.app_name),
            _ => None,
        }
    }

    fn list(&self, field: &str) -> Option<Vec<String>> {
        match field {
            "authorizedIdentities" => Some(self.authorized_identities.clone()),
            _ => None,
        }
    }
}

impl TableRow for DataSourceRow {
    fn cell(&self, field: &str) -> Option<Cell> {
        match field {
            "name" => Cell::text(&self.name),
            "sourcePath" => Cell::text(&self.source_path),
            "sourceType" => Cell::text(&self.source_type),
            "sourceSize" => Cell::text(get_file_size(self.source_size)),
            "findingsEntities" => Cell::number(self.findings_entities as f64),
            "findingsTopics" => Cell::number(self.findings_topics as f64),
            "appName" => Cell::text(&self.app_name),
            _ => None,
        }
    }
}

impl TableRow for TopFinding {
    fn cell(&self, field: &str) -> Option<Cell> {
        match field {
            "fileName" => Cell::text(&self.file_name),
            "fileOwner" => Cell::text(&self.file_owner),
            "sourceSize" => Cell::text(get_file_size(self.source_size)),
            "findingsEntities" => Cell::number(self.findings_entities as f64),
            "findingsTopics" => Cell::number(self.findings_topics as f64),
            "findings" => Cell::number(self.findings as f64),
            "authorizedIdentities" => Cell::text(self.authorized_identities.join(", ")),
            _ => None,
        }
    }

    fn list(&self, field: &str) -> Option<Vec<String>> {
        match field {
            "authorizedIdentities" => Some(self.authorized_identities.clone()),
            _ => None,
        }
    }
}

impl TableRow for LoadHistoryItem {
    fn cell(&self, field: &str) -> Option<Cell> {
        match field {
            "reportName" => Cell::text(&self.report_name),
            "findings" => Cell::number(self.findings as f64),
            "filesWithFindings" => Cell::number(self.files_with_findings as f64),
            "generatedOn" => Cell::text(format_date(&self.generated_on, true)),
            _ => None,
        }
    }

    fn sort_key(&self, field: &str) -> Option<Cell> {
        match field {
            "generatedOn" => Cell::text(&self.generated_on),
            _ => self.cell(field),
        }
    }
}

impl TableRow for RetrievalAppListDetails {
    fn cell(&self, field: &str) -> Option<Cell> {
        match field {
            "name" => Cell::text(&self.name),
            "owner" => Cell::text(&self.owner),
            "retrievals" => Cell::number(self.retrievals.len() as f64),
            "activeUsers" => Cell::text(self.active_users.join(", ")),
            "documents" => Cell::text(self.documents.join(", ")),
            "vectorDbs" => Cell::text(self.vector_dbs.join(", ")),
            _ => None,
        }
    }

    fn list(&self, field: &str) -> Option<Vec<String>> {
        match field {
            "activeUsers" => Some(self.active_users.clone()),
            "documents" => Some(self.documents.clone()),
            "vectorDbs" => Some(self.vector_dbs.clone()),
            _ => None,
        }
    }
}

impl TableRow for RetrievalData {
    fn cell(&self, field: &str) -> Option<Cell> {
        match field {
            "prompt" => self.prompt.data.as_ref().and_then(Cell::text),
            "response" => self.response.data.as_ref().and_then(Cell::text),
            "retrievedFrom" => Cell::text(
                self.context.iter().map(|c| c.retrieved_from.as_str()).collect::<Vec<_>>().join(", "),
            ),
            "user" => Cell::text(&self.user),
            "name" => Cell::text(&self.name),
            "promptTime" => Cell::text(format_date(&self.prompt_time, true)),
            _ => None,
        }
    }

    fn sort_key(&self, field: &str) -> Option<Cell> {
        match field {
            "promptTime" => Cell::text(&self.prompt_time),
            _ => self.cell(field),
        }
    }
}

/// Row for tables keyed by a name with a list of retrievals behind it
/// (active users, documents, vector databases).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedRetrievals {
    pub name: String,
    pub retrievals: usize,
    pub last_accessed_time: String,
    pub linked_groups: Vec<String>,
}

impl NamedRetrievals {
    pub fn from_users<'a>(users: impl IntoIterator<Item=(&'a String, &'a ActiveUser)>) -> Vec<Self> {
        users.into_iter()
            .map(|(name, user)| Self {
                name: name.clone(),
                retrievals: user.retrievals.len(),
                last_accessed_time: user.last_accessed_time.clone(),
                linked_groups: user.linked_groups.clone(),
            })
            .collect()
    }

    pub fn from_grouped<'a>(groups: impl IntoIterator<Item=(&'a String, &'a Vec<RetrievalData>)>) -> Vec<Self> {
        groups.into_iter()
            .map(|(name, retrievals)| Self {
                name: name.clone(),
                retrievals: retrievals.len(),
                last_accessed_time: retrievals.iter()
                    .map(|r| r.prompt_time.as_str())
                    .max()
                    .unwrap_or_default()
                    .to_string(),
                linked_groups: vec![],
            })
            .collect()
    }
}

impl TableRow for NamedRetrievals {
    fn cell(&self, field: &str) -> Option<Cell> {
        match field {
            "name" => Cell::text(&self.name),
            "retrievals" => Cell::number(self.retrievals as f64),
            "lastAccessedTime" => Cell::text(format_date(&self.last_accessed_time, true)),
            "linkedGroups" => Cell::text(self.linked_groups.join(", ")),
            _ => None,
        }
    }

    fn sort_key(&self, field: &str) -> Option<Cell> {
        match field {
            "lastAccessedTime" => Cell::text(&self.last_accessed_time),
            _ => self.cell(field),
        }
    }

    fn list(&self, field: &str) -> Option<Vec<String>> {
        match field {
            "linkedGroups" => Some(self.linked_groups.clone()),
            _ => None,
        }
    }
}

/// Single-column row used by identity and group dialogs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameRow(pub String);

impl TableRow for NameRow {
    fn cell(&self, field: &str) -> Option<Cell> {
        match field {
            "name" => Cell::text(&self.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: &str, owner: &str, topics: u64) -> LoaderAppListDetails {
        LoaderAppListDetails {
            name: name.to_string(),
            owner: Some(owner.to_string()),
            topics,
            ..LoaderAppListDetails::default()
        }
    }

    fn apps() -> Vec<LoaderAppListDetails> {
        vec![app("Acme-RAG", "alice", 3), app("billing", "Bob", 12), app("chatbot", "carol", 0)]
    }

    #[test]
    fn empty_query_keeps_all_rows() {
        assert_eq!(filter_rows(&apps(), APPLICATIONS_SEARCH, "   ").len(), 3);
    }

    #[test]
    fn filter_is_case_insensitive_across_fields() {
        let rows = filter_rows(&apps(), APPLICATIONS_SEARCH, "BOB");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "billing");

        let rows = filter_rows(&apps(), APPLICATIONS_SEARCH, "acme");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].owner.as_deref(), Some("alice"));
    }

    #[test]
    fn filter_ignores_fields_outside_search_list() {
        assert!(filter_rows(&apps(), &["owner"], "chat").is_empty());
    }

    #[test]
    fn filter_skips_missing_values() {
        let mut rows = apps();
        rows[0].owner = None;
        let found = filter_rows(&rows, &["owner"], "alice");
        assert!(found.is_empty());
    }

    #[test]
    fn sorts_text_ignoring_case() {
        let mut rows = apps();
        sort_rows(&mut rows, "owner", SortOrder::Asc);
        let owners: Vec<_> = rows.iter().map(|r| r.owner.clone().unwrap_or_default()).collect();
        assert_eq!(owners, ["alice", "Bob", "carol"]);

        sort_rows(&mut rows, "owner", SortOrder::Desc);
        assert_eq!(rows[0].owner.as_deref(), Some("carol"));
    }

    #[test]
    fn sorts_numbers_numerically() {
        let mut rows = apps();
        sort_rows(&mut rows, "topics", SortOrder::Asc);
        let topics: Vec<_> = rows.iter().map(|r| r.topics).collect();
        assert_eq!(topics, [0, 3, 12]);

        sort_rows(&mut rows, "topics", SortOrder::Desc);
        let topics: Vec<_> = rows.iter().map(|r| r.topics).collect();
        assert_eq!(topics, [12, 3, 0]);
    }

    #[test]
    fn sort_on_unknown_key_keeps_order() {
        let mut rows = apps();
        sort_rows(&mut rows, "missing", SortOrder::Desc);
        assert_eq!(rows, apps());

        let mut empty: Vec<LoaderAppListDetails> = vec![];
        sort_rows(&mut empty, "name", SortOrder::Asc);
        assert!(empty.is_empty());
    }

    #[test]
    fn missing_values_sort_first() {
        let mut rows = vec![app("a", "", 0), app("b", "zed", 0), app("c", "amy", 0)];
        rows[0].owner = None;

        sort_rows(&mut rows, "owner", SortOrder::Asc);
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a", "c", "b"]);

        sort_rows(&mut rows, "owner", SortOrder::Desc);
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["b", "c", "a"]);
    }

    #[test]
    fn dates_sort_by_timestamp() {
        let named = |name: &str, time: &str| NamedRetrievals {
            name: name.to_string(),
            last_accessed_time: time.to_string(),
            ..NamedRetrievals::default()
        };
        let mut rows = vec![named("march", "2024-03-01T10:00:00"), named("april", "2024-04-01T10:00:00")];
        sort_rows(&mut rows, "lastAccessedTime", SortOrder::Asc);
        assert_eq!(rows[0].name, "march");
        assert_eq!(display_cell(rows[0].cell("lastAccessedTime")), "Mar 01, 2024, 10:00 AM");

        let retrieval = |user: &str, time: &str| RetrievalData {
            user: user.to_string(),
            prompt_time: time.to_string(),
            ..RetrievalData::default()
        };
        let mut rows = vec![retrieval("dec", "2023-12-31T23:00:00"), retrieval("feb", "2024-02-01T08:00:00")];
        sort_rows(&mut rows, "promptTime", SortOrder::Desc);
        assert_eq!(rows[0].user, "feb");
    }

    #[test]
    fn filtering_keeps_active_sort() {
        let rows = apps();
        let found = filter_sorted(&rows, APPLICATIONS_SEARCH, "a", Some(("topics", SortOrder::Desc)));
        let names: Vec<_> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Acme-RAG", "chatbot"]);

        let found = filter_sorted(&rows, APPLICATIONS_SEARCH, "", Some(("topics", SortOrder::Desc)));
        assert_eq!(found[0].name, "billing");

        assert_eq!(filter_sorted(&rows, APPLICATIONS_SEARCH, "", None), rows);
    }

    #[test]
    fn sort_order_toggles() {
        assert_eq!(SortOrder::Asc.toggle(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggle(), SortOrder::Asc);
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }

    #[test]
    fn cells_fall_back_to_dash() {
        let row = LoaderAppListDetails::default();
        assert_eq!(display_cell(row.cell("owner")), EMPTY_CELL);
        assert_eq!(display_cell(row.cell("name")), EMPTY_CELL);
        assert_eq!(display_cell(row.cell("nope")), EMPTY_CELL);
        assert_eq!(display_cell(row.cell("topics")), "0");
    }

    #[test]
    fn numbers_render_without_fraction() {
        assert_eq!(Cell::Number(42.0).display(), "42");
        assert_eq!(Cell::Number(1.5).display(), "1.5");
    }

    #[test]
    fn list_fields_expose_all_values() {
        let row = RetrievalAppListDetails {
            documents: vec!["a.pdf".to_string(), "b.pdf".to_string()],
            ..RetrievalAppListDetails::default()
        };
        assert_eq!(row.list("documents").map(|l| l.len()), Some(2));
        assert_eq!(row.list("name"), None);
        assert_eq!(display_cell(row.cell("vectorDbs")), EMPTY_CELL);
    }

    #[test]
    fn report_rows_are_tagged_with_source() {
        let report: ReportModel = ReportModel {
            name: "acme".to_string(),
            data_sources: vec![crate::types::DataSource {
                name: "loader-1".to_string(),
                findings_summary: vec![
                    FindingRow { label_name: "us-ssn".to_string(), findings_type: "entities".to_string(), findings: 2, ..FindingRow::default() },
                    FindingRow { label_name: "medical-advice".to_string(), findings_type: "topics".to_string(), findings: 1, ..FindingRow::default() },
                ],
                findings_details: vec![FindingsDetail::default()],
                ..crate::types::DataSource::default()
            }],
            ..ReportModel::default()
        };

        let findings = report_findings(&report);
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|row| row.data_source == "loader-1"));

        let sources = report_data_sources(&report);
        assert_eq!(sources[0].findings_entities, 2);
        assert_eq!(sources[0].findings_topics, 1);
        assert_eq!(sources[0].app_name, "acme");

        assert_eq!(report_snippets(&report).len(), 1);
    }

    #[test]
    fn alignment_classes() {
        assert_eq!(Align::Start.class_name(), "text-start");
        assert_eq!(Align::Center.class_name(), "text-center");
        assert_eq!(Align::End.class_name(), "text-end");
    }

    #[test]
    fn named_retrievals_from_groups() {
        let mut groups = std::collections::BTreeMap::new();
        groups.insert(
            "docs/a.pdf".to_string(),
            vec![
                RetrievalData { prompt_time: "2024-03-01T10:00:00".to_string(), ..RetrievalData::default() },
                RetrievalData { prompt_time: "2024-03-04T08:00:00".to_string(), ..RetrievalData::default() },
            ],
        );
        let rows = NamedRetrievals::from_grouped(&groups);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].retrievals, 2);
        assert_eq!(rows[0].last_accessed_time, "2024-03-04T08:00:00");
    }
}
