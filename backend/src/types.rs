use std::path::PathBuf;

use serde::Deserialize;

use shared::constants::PATH_STATIC;
use shared::types::{FrameworkInfo, InstanceDetails, null_as_default, RetrievalData};

use crate::config::Config;

/// `{app}/metadata/metadata.json`
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppMetadata {
    pub name: String,
    pub app_type: Option<AppType>,
    pub load_ids: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppType {
    Loader,
    Retrieval,
}

impl AppMetadata {
    pub fn app_type(&self) -> AppType {
        self.app_type.unwrap_or(AppType::Loader)
    }
}

/// `{app}/metadata/app_metadata.json`, written for retrieval apps.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RetrievalAppMetadata {
    pub name: String,
    pub owner: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub framework: FrameworkInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub instance_details: InstanceDetails,
    pub pebblo_server_version: Option<String>,
    pub pebblo_client_version: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub chains: Vec<Chain>,
    #[serde(deserialize_with = "null_as_default")]
    pub retrievals: Vec<RetrievalData>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Chain {
    pub name: Option<String>,
    pub vector_dbs: Vec<VectorDb>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct VectorDb {
    pub name: Option<String>,
}

/// Everything a request handler needs besides the request itself.
#[derive(Debug, Clone)]
pub struct Site {
    pub home: PathBuf,
    pub static_url: String,
    pub proxy: String,
    pub server_version: String,
}

impl Site {
    pub fn from_config(config: &Config) -> Self {
        Self {
            home: config.home_path(),
            static_url: format!("/{PATH_STATIC}"),
            proxy: config.proxy.trim_end_matches('/').to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
