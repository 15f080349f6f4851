use std::fs;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use serde::Deserialize;

const CONFIG_ENV: &str = "PEBBLO_UI_CONFIG";
const CONFIG_DEFAULT_PATH: &str = "env.json";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub host: [u8; 4],
    pub port: u16,
    pub home_dir: String,
    pub static_dir: String,
    pub proxy: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: [127, 0, 0, 1],
            port: 8000,
            home_dir: "~/.pebblo".to_string(),
            static_dir: "frontend/dist".to_string(),
            proxy: "".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn home_path(&self) -> PathBuf {
        expand_home(&self.home_dir)
    }

    pub fn static_path(&self) -> PathBuf {
        expand_home(&self.static_dir)
    }

    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Config>(source)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("config {path}: {source}")]
    Parse { path: String, source: serde_json::Error },
}

/// Missing file means defaults; an unreadable or malformed one is an error.
pub fn read_config(path: &str) -> Result<Config, ConfigError> {
    match fs::read_to_string(path) {
        Ok(source) => Config::from_json(&source).map_err(|source| ConfigError::Parse { path: path.to_string(), source }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
        Err(source) => Err(ConfigError::Read { path: path.to_string(), source }),
    }
}

/// Outcome of reading the config file, kept so the error can be logged once tracing is up.
pub static CONFIG_LOAD: Lazy<Result<Config, ConfigError>> = Lazy::new(|| {
    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_DEFAULT_PATH.to_string());
    read_config(&path)
});

pub static CONFIG: Lazy<Config> = Lazy::new(|| CONFIG_LOAD.as_ref().map(Clone::clone).unwrap_or_default());

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => match std::env::var("HOME") {
            Ok(home) => PathBuf::from(home).join(rest),
            Err(_) => PathBuf::from(rest),
        },
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = Config::from_json(r#"{"port": 9100, "proxy": "http://proxy"}"#).unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.proxy, "http://proxy");
        assert_eq!(config.host, [127, 0, 0, 1]);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn plain_paths_are_kept() {
        let config = Config { home_dir: "/var/cache/pebblo".to_string(), ..Config::default() };
        assert_eq!(config.home_path(), PathBuf::from("/var/cache/pebblo"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Config::from_json("{ port: ").is_err());
    }

    #[test]
    fn config_file_outcomes() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.json");
        assert_eq!(read_config(&absent.to_string_lossy()).unwrap().port, 8000);

        let broken = dir.path().join("env.json");
        fs::write(&broken, "{ port: ").unwrap();
        assert!(matches!(read_config(&broken.to_string_lossy()), Err(ConfigError::Parse { .. })));

        fs::write(&broken, r#"{"port": 9200}"#).unwrap();
        assert_eq!(read_config(&broken.to_string_lossy()).unwrap().port, 9200);
    }
}
