use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Reads an explicit `null` the same way as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// === dashboard

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardData {
    pub pebblo_server_version: Option<String>,
    pub loader_apps: LoaderAppModel,
    pub retrieval_apps: RetrievalAppList,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LoaderAppModel {
    pub applications_at_risk_count: u64,
    pub findings_count: u64,
    pub documents_with_findings_count: u64,
    pub data_source_count: u64,
    pub app_list: Vec<LoaderAppListDetails>,
    pub findings: Vec<FindingRow>,
    pub documents_with_findings: Vec<DocumentWithFindings>,
    pub data_source: Vec<DataSourceRow>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LoaderAppListDetails {
    pub name: String,
    pub topics: u64,
    pub entities: u64,
    pub owner: Option<String>,
    pub load_id: Option<String>,
}

/// One row of a findings summary, per label and data source.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FindingRow {
    pub label_name: String,
    pub findings_type: String,
    pub findings: u64,
    pub file_count: u64,
    pub snippet_count: u64,
    pub data_source: String,
    pub app_name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentWithFindings {
    pub file_name: String,
    pub file_owner: String,
    pub source_size: u64,
    pub findings_entities: u64,
    pub findings_topics: u64,
    pub findings: u64,
    pub authorized_identities: Vec<String>,
    pub source_name: String,
    pub app_name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DataSourceRow {
    pub name: String,
    pub source_path: String,
    pub source_type: String,
    pub source_size: u64,
    pub findings_entities: u64,
    pub findings_topics: u64,
    pub app_name: String,
}

// === loader app details

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportModel {
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub framework: FrameworkInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub report_summary: Summary,
    #[serde(deserialize_with = "null_as_default")]
    pub load_history: LoadHistory,
    #[serde(deserialize_with = "null_as_default")]
    pub top_findings: Vec<TopFinding>,
    #[serde(deserialize_with = "null_as_default")]
    pub instance_details: InstanceDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub data_sources: Vec<DataSource>,
    pub pebblo_server_version: Option<String>,
    pub pebblo_client_version: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Summary {
    pub findings: u64,
    pub findings_entities: u64,
    pub findings_topics: u64,
    pub total_files: u64,
    pub files_with_findings: u64,
    pub data_sources: u64,
    pub owner: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct FrameworkInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InstanceDetails {
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub host: Option<String>,
    pub path: Option<String>,
    pub runtime: Option<String>,
    pub ip: Option<String>,
    pub language: Option<String>,
    pub language_version: Option<String>,
    pub platform: Option<String>,
    pub os: Option<String>,
    pub os_version: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LoadHistory {
    pub history: Vec<LoadHistoryItem>,
    pub more_reports_path: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LoadHistoryItem {
    pub load_id: String,
    pub report_name: String,
    pub findings: u64,
    pub files_with_findings: u64,
    pub generated_on: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TopFinding {
    pub file_name: String,
    pub file_owner: String,
    pub source_size: u64,
    pub findings_entities: u64,
    pub findings_topics: u64,
    pub findings: u64,
    pub authorized_identities: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DataSource {
    pub name: String,
    pub source_path: String,
    pub source_type: String,
    pub source_size: u64,
    pub total_snippet_count: u64,
    pub displayed_snippet_count: u64,
    pub findings_summary: Vec<FindingRow>,
    pub findings_details: Vec<FindingsDetail>,
}

/// Snippets grouped under one finding label.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FindingsDetail {
    pub label_name: String,
    pub findings_type: String,
    pub findings: u64,
    pub snippet_count: u64,
    pub file_count: u64,
    pub snippets: Vec<SnippetItem>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SnippetItem {
    pub snippet: String,
    pub source_path: String,
    pub file_owner: String,
    pub authorized_identities: Vec<String>,
    pub entity_details: BTreeMap<String, Vec<EntityLocation>>,
    pub topic_details: BTreeMap<String, Vec<EntityLocation>>,
}

/// `location` is `"{start}_{end}"` in chars of the snippet.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EntityLocation {
    pub location: String,
    pub confidence_score: Option<String>,
}

// === retrieval

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RetrievalAppList {
    pub app_list: Vec<RetrievalAppListDetails>,
    pub retrievals: Vec<RetrievalData>,
    pub active_users: BTreeMap<String, ActiveUser>,
    pub violations: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RetrievalAppListDetails {
    pub name: String,
    pub owner: String,
    pub retrievals: Vec<RetrievalData>,
    pub active_users: Vec<String>,
    pub vector_dbs: Vec<String>,
    pub documents: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RetrievalData {
    pub name: String,
    pub prompt: AiDataModel,
    pub response: AiDataModel,
    pub context: Vec<RetrievalContext>,
    pub prompt_time: String,
    pub user: String,
    pub linked_groups: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AiDataModel {
    pub data: Option<String>,
    pub entity_count: u64,
    pub entities: BTreeMap<String, u64>,
    pub topic_count: Option<u64>,
    pub topics: BTreeMap<String, u64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RetrievalContext {
    pub retrieved_from: String,
    pub doc: String,
    pub vector_db: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ActiveUser {
    pub retrievals: Vec<RetrievalData>,
    pub last_accessed_time: String,
    pub linked_groups: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RetrievalAppDetails {
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub framework: FrameworkInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub instance_details: InstanceDetails,
    pub pebblo_server_version: Option<String>,
    pub pebblo_client_version: Option<String>,
    pub retrievals: Vec<RetrievalData>,
    pub active_users: BTreeMap<String, ActiveUser>,
    pub vector_dbs: BTreeMap<String, Vec<RetrievalData>>,
    pub documents: BTreeMap<String, Vec<RetrievalData>>,
}

// === api

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct DeleteResult {
    pub message: String,
}
