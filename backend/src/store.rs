use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tokio::fs;

use shared::table::report_findings;
use shared::types::{
    DashboardData, DataSourceRow, DocumentWithFindings, LoaderAppListDetails, LoaderAppModel, ReportModel,
    RetrievalAppDetails, RetrievalAppList,
};

use crate::constants::{path_to_app, path_to_app_metadata, path_to_metadata, path_to_report, path_to_report_pdf};
use crate::retrieval::{accumulate_users, active_users, app_list_details, app_details, sort_retrievals};
use crate::types::{AppMetadata, AppType, RetrievalAppMetadata};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("application not found: {0}")]
    NotFound(String),
    #[error("invalid application name: {0:?}")]
    InvalidName(String),
    #[error("no readable report for application: {0}")]
    NoReport(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl warp::reject::Reject for StoreError {}

/// Either kind of single-app payload.
#[derive(Debug, Clone)]
pub enum AppDetails {
    Loader(Box<ReportModel>),
    Retrieval(Box<RetrievalAppDetails>),
}

fn check_name(app_name: &str) -> Result<(), StoreError> {
    let invalid = app_name.is_empty()
        || app_name.starts_with('.')
        || app_name.contains(['/', '\\'])
        || app_name.contains("..");
    if invalid {
        Err(StoreError::InvalidName(app_name.to_string()))
    } else {
        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let source = fs::read(path).await?;
    Ok(serde_json::from_slice::<T>(&source)?)
}

async fn read_metadata(home: &Path, app_dir: &str) -> Result<AppMetadata, StoreError> {
    check_name(app_dir)?;
    let path = path_to_metadata(home, app_dir);
    match read_json::<AppMetadata>(&path).await {
        Err(StoreError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(StoreError::NotFound(app_dir.to_string()))
        }
        other => other,
    }
}

/// Walks load ids newest first and returns the first one with a readable report.
async fn latest_report(home: &Path, app_dir: &str, load_ids: &[String]) -> Option<(String, ReportModel)> {
    for load_id in load_ids.iter().rev() {
        let path = path_to_report(home, app_dir, load_id);
        match read_json::<ReportModel>(&path).await {
            Ok(report) => return Some((load_id.clone(), report)),
            Err(StoreError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("[App Details]: no report at {}", path.display())
            }
            Err(err) => tracing::warn!("[App Details]: unreadable report {}: {}", path.display(), err),
        }
    }
    None
}

async fn app_dirs(home: &Path) -> Result<Vec<String>, StoreError> {
    let mut dirs = vec![];
    let mut entries = fs::read_dir(home).await?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            tracing::debug!("[Dashboard]: skipping hidden folder {name}");
            continue;
        }
        if entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false) {
            dirs.push(name);
        }
    }
    dirs.sort();
    Ok(dirs)
}

#[derive(Default)]
struct DashboardBuilder {
    loader: LoaderAppModel,
    retrieval: RetrievalAppList,
}

impl DashboardBuilder {
    fn add_loader(&mut self, app_name: &str, load_id: String, report: ReportModel) {
        let summary = &report.report_summary;
        if report.data_sources.is_empty() {
            tracing::warn!("[Dashboard]: no data source details for application: {app_name}, skipping application");
            return;
        }

        self.loader.app_list.push(LoaderAppListDetails {
            name: app_name.to_string(),
            topics: summary.findings_topics,
            entities: summary.findings_entities,
            owner: Some(summary.owner.clone()).filter(|o| !o.is_empty()),
            load_id: Some(load_id),
        });

        for source in &report.data_sources {
            self.loader.data_source.push(DataSourceRow {
                name: source.name.clone(),
                source_path: source.source_path.clone(),
                source_type: source.source_type.clone(),
                source_size: source.source_size,
                findings_entities: summary.findings_entities,
                findings_topics: summary.findings_topics,
                app_name: app_name.to_string(),
            });
        }
        self.loader.findings.extend(report_findings(&report).into_iter().map(|mut row| {
            row.app_name = app_name.to_string();
            row
        }));

        let source_name = report.data_sources.first().map(|s| s.name.clone()).unwrap_or_default();
        self.loader.documents_with_findings.extend(report.top_findings.iter().map(|file| DocumentWithFindings {
            file_name: file.file_name.clone(),
            file_owner: file.file_owner.clone(),
            source_size: file.source_size,
            findings_entities: file.findings_entities,
            findings_topics: file.findings_topics,
            findings: file.findings,
            authorized_identities: file.authorized_identities.clone(),
            source_name: source_name.clone(),
            app_name: app_name.to_string(),
        }));

        self.loader.findings_count += summary.findings;
        self.loader.documents_with_findings_count += summary.files_with_findings;
        self.loader.data_source_count += summary.data_sources;
        if summary.findings > 0 {
            self.loader.applications_at_risk_count += 1;
        }
    }

    fn add_retrieval(&mut self, metadata: RetrievalAppMetadata) {
        let retrievals = sort_retrievals(metadata.retrievals.clone())
            .into_iter()
            .map(|mut r| {
                r.name = metadata.name.clone();
                r
            })
            .collect::<Vec<_>>();
        self.retrieval.retrievals.extend(retrievals.iter().cloned());
        accumulate_users(&mut self.retrieval.active_users, active_users(&retrievals));
        self.retrieval.app_list.push(app_list_details(&metadata, &retrievals));
    }
}

pub async fn dashboard_data(home: &Path, server_version: &str) -> DashboardData {
    let mut builder = DashboardBuilder::default();

    let dirs = match app_dirs(home).await {
        Ok(dirs) => dirs,
        Err(err) => {
            tracing::error!("[Dashboard]: error in app listing {}: {}", home.display(), err);
            vec![]
        }
    };

    for app_dir in dirs {
        let metadata = match read_metadata(home, &app_dir).await {
            Ok(metadata) => metadata,
            Err(err) => {
                tracing::warn!("[Dashboard]: metadata file is not present for application: {app_dir}, {err}");
                continue;
            }
        };
        let app_name = if metadata.name.is_empty() { app_dir.clone() } else { metadata.name.clone() };

        match metadata.app_type() {
            AppType::Loader => match latest_report(home, &app_dir, &metadata.load_ids).await {
                Some((load_id, report)) => builder.add_loader(&app_name, load_id, report),
                None => tracing::warn!("[Dashboard]: no valid load ids found for application: {app_name}, skipping application"),
            },
            AppType::Retrieval => {
                match read_json::<RetrievalAppMetadata>(&path_to_app_metadata(home, &app_dir)).await {
                    Ok(mut content) => {
                        if content.name.is_empty() {
                            content.name = app_name;
                        }
                        builder.add_retrieval(content);
                    }
                    Err(err) => tracing::warn!("[Dashboard]: application metadata for {app_name}: {err}, skipping application"),
                }
            }
        }
    }

    DashboardData {
        pebblo_server_version: Some(server_version.to_string()),
        loader_apps: builder.loader,
        retrieval_apps: builder.retrieval,
    }
}

pub async fn app_details_data(home: &Path, app_name: &str) -> Result<AppDetails, StoreError> {
    let metadata = read_metadata(home, app_name).await?;
    match metadata.app_type() {
        AppType::Loader => latest_report(home, app_name, &metadata.load_ids)
            .await
            .map(|(_, report)| AppDetails::Loader(Box::new(report)))
            .ok_or_else(|| StoreError::NoReport(app_name.to_string())),
        AppType::Retrieval => {
            let mut content = read_json::<RetrievalAppMetadata>(&path_to_app_metadata(home, app_name)).await?;
            if content.name.is_empty() {
                content.name = metadata.name;
            }
            Ok(AppDetails::Retrieval(Box::new(app_details(content))))
        }
    }
}

pub async fn report_path(home: &Path, app_name: &str) -> Result<PathBuf, StoreError> {
    let metadata = read_metadata(home, app_name).await?;
    for load_id in metadata.load_ids.iter().rev() {
        let path = path_to_report_pdf(home, app_name, load_id);
        if fs::metadata(&path).await.map(|m| m.is_file()).unwrap_or(false) {
            return Ok(path);
        }
    }
    Err(StoreError::NoReport(app_name.to_string()))
}

pub async fn delete_app(home: &Path, app_name: &str) -> Result<(), StoreError> {
    check_name(app_name)?;
    let path = path_to_app(home, app_name);
    if !fs::metadata(&path).await.map(|m| m.is_dir()).unwrap_or(false) {
        return Err(StoreError::NotFound(app_name.to_string()));
    }
    fs::remove_dir_all(&path).await?;
    tracing::info!("[Delete App]: removed {}", path.display());
    Ok(())
}

#[cfg(test)]
pub mod tests {
    use std::fs as std_fs;

    use serde_json::json;

    use super::*;

    pub fn write(path: &Path, value: serde_json::Value) {
        if let Some(parent) = path.parent() {
            std_fs::create_dir_all(parent).unwrap();
        }
        std_fs::write(path, serde_json::to_vec(&value).unwrap()).unwrap();
    }

    pub fn loader_fixture(home: &Path, app: &str, findings: u64) {
        write(&path_to_metadata(home, app), json!({"name": app, "load_ids": ["l1", "l2"]}));
        write(
            &path_to_report(home, app, "l1"),
            json!({
                "name": app,
                "reportSummary": {"findings": findings, "findingsEntities": 2, "findingsTopics": 1,
                    "filesWithFindings": 1, "dataSources": 1, "owner": "alice", "createdAt": "2024-03-05T14:07:00"},
                "topFindings": [{"fileName": "hr.pdf", "fileOwner": "alice", "sourceSize": 2048,
                    "findingsEntities": 2, "findingsTopics": 1, "findings": 3, "authorizedIdentities": []}],
                "dataSources": [{"name": "loader-1", "sourcePath": "/data", "sourceType": "directory",
                    "sourceSize": 4096, "findingsSummary": [
                        {"labelName": "us-ssn", "findingsType": "entities", "findings": 2, "snippetCount": 2, "fileCount": 1}
                    ]}]
            }),
        );
    }

    pub fn retrieval_fixture(home: &Path, app: &str) {
        write(&path_to_metadata(home, app), json!({"name": app, "app_type": "retrieval"}));
        write(
            &path_to_app_metadata(home, app),
            json!({
                "name": app,
                "owner": "bob",
                "chains": [{"name": "chain", "vectorDbs": [{"name": "chroma"}]}],
                "retrievals": [
                    {"user": "carol", "prompt_time": "2024-03-02T10:00:00", "prompt": {"data": "what is my pay"},
                     "context": [{"retrieved_from": "pay.pdf", "doc": "...", "vector_db": "chroma"}]}
                ]
            }),
        );
    }

    #[tokio::test]
    async fn dashboard_aggregates_apps() {
        let home = tempfile::tempdir().unwrap();
        loader_fixture(home.path(), "acme", 3);
        loader_fixture(home.path(), "clean", 0);
        retrieval_fixture(home.path(), "rag");
        std_fs::create_dir_all(home.path().join(".hidden")).unwrap();
        std_fs::create_dir_all(home.path().join("broken")).unwrap();

        let data = dashboard_data(home.path(), "0.1.0").await;
        let loader = &data.loader_apps;
        assert_eq!(loader.app_list.len(), 2);
        assert_eq!(loader.applications_at_risk_count, 1);
        assert_eq!(loader.findings_count, 3);
        assert_eq!(loader.app_list[0].load_id.as_deref(), Some("l1"));
        assert_eq!(loader.findings.len(), 2);
        assert_eq!(loader.findings[0].app_name, "acme");
        assert_eq!(loader.findings[0].data_source, "loader-1");
        assert_eq!(loader.documents_with_findings[0].source_name, "loader-1");

        let retrieval = &data.retrieval_apps;
        assert_eq!(retrieval.app_list.len(), 1);
        assert_eq!(retrieval.app_list[0].vector_dbs, vec!["chroma"]);
        assert_eq!(retrieval.retrievals[0].name, "rag");
        assert!(retrieval.active_users.contains_key("carol"));
    }

    #[tokio::test]
    async fn null_sections_keep_apps_listed() {
        let home = tempfile::tempdir().unwrap();
        write(&path_to_metadata(home.path(), "acme"), json!({"name": "acme", "load_ids": ["l1"]}));
        write(
            &path_to_report(home.path(), "acme", "l1"),
            json!({
                "name": "acme", "framework": null, "instanceDetails": null, "loadHistory": null, "topFindings": null,
                "reportSummary": {"findings": 1, "owner": "alice"},
                "dataSources": [{"name": "loader-1", "findingsSummary": []}]
            }),
        );
        write(&path_to_metadata(home.path(), "rag"), json!({"name": "rag", "app_type": "retrieval"}));
        write(
            &path_to_app_metadata(home.path(), "rag"),
            json!({"name": "rag", "framework": null, "instanceDetails": null, "chains": null, "retrievals": null}),
        );

        let data = dashboard_data(home.path(), "0.1.0").await;
        assert_eq!(data.loader_apps.app_list.len(), 1);
        assert_eq!(data.retrieval_apps.app_list.len(), 1);
        assert!(matches!(app_details_data(home.path(), "acme").await, Ok(AppDetails::Loader(_))));
        assert!(matches!(app_details_data(home.path(), "rag").await, Ok(AppDetails::Retrieval(_))));
    }

    #[tokio::test]
    async fn missing_home_gives_empty_dashboard() {
        let home = tempfile::tempdir().unwrap();
        let data = dashboard_data(&home.path().join("absent"), "0.1.0").await;
        assert!(data.loader_apps.app_list.is_empty());
        assert!(data.retrieval_apps.app_list.is_empty());
    }

    #[tokio::test]
    async fn details_for_each_app_type() {
        let home = tempfile::tempdir().unwrap();
        loader_fixture(home.path(), "acme", 3);
        retrieval_fixture(home.path(), "rag");

        match app_details_data(home.path(), "acme").await {
            Ok(AppDetails::Loader(report)) => assert_eq!(report.report_summary.owner, "alice"),
            other => panic!("unexpected {other:?}"),
        }
        match app_details_data(home.path(), "rag").await {
            Ok(AppDetails::Retrieval(details)) => assert_eq!(details.documents.len(), 1),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(app_details_data(home.path(), "nope").await, Err(StoreError::NotFound(_))));
        assert!(matches!(app_details_data(home.path(), "../etc").await, Err(StoreError::InvalidName(_))));
    }

    #[tokio::test]
    async fn report_pdf_lookup() {
        let home = tempfile::tempdir().unwrap();
        loader_fixture(home.path(), "acme", 3);
        assert!(matches!(report_path(home.path(), "acme").await, Err(StoreError::NoReport(_))));

        std_fs::write(path_to_report_pdf(home.path(), "acme", "l1"), b"%PDF-1.4").unwrap();
        let path = report_path(home.path(), "acme").await.unwrap();
        assert!(path.ends_with("l1/pebblo_report.pdf"));
    }

    #[tokio::test]
    async fn delete_removes_app_directory() {
        let home = tempfile::tempdir().unwrap();
        loader_fixture(home.path(), "acme", 3);
        delete_app(home.path(), "acme").await.unwrap();
        assert!(!home.path().join("acme").exists());
        assert!(matches!(delete_app(home.path(), "acme").await, Err(StoreError::NotFound(_))));
        assert!(matches!(delete_app(home.path(), "a/b").await, Err(StoreError::InvalidName(_))));
    }
}
