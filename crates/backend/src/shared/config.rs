use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Insert the demo catalog when the dataset table is empty
    #[serde(default = "default_seed_on_empty")]
    pub seed_on_empty: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_on_empty: default_seed_on_empty(),
        }
    }
}

fn default_seed_on_empty() -> bool {
    true
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/explore_data.db"

[server]
port = 3000

[catalog]
seed_on_empty = true
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Embedded default
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            }
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Database file path; relative paths resolve against the executable directory
pub fn get_database_path(config: &Config) -> PathBuf {
    let db_path = Path::new(&config.database.path);

    if db_path.is_absolute() {
        return db_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(db_path);
        }
    }

    PathBuf::from(&config.database.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/explore_data.db");
        assert_eq!(config.server.port, 3000);
        assert!(config.catalog.seed_on_empty);
    }

    #[test]
    fn test_optional_sections_fall_back() {
        let config = parse_config("[database]\npath = \"/tmp/catalog.db\"\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.catalog.seed_on_empty);
        assert_eq!(get_database_path(&config), PathBuf::from("/tmp/catalog.db"));
    }

    #[test]
    fn test_overrides() {
        let config = parse_config(
            "[database]\npath = \"db.sqlite\"\n[server]\nport = 8080\n[catalog]\nseed_on_empty = false\n",
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(!config.catalog.seed_on_empty);
    }

    #[test]
    fn test_missing_database_section_is_error() {
        assert!(parse_config("[server]\nport = 1\n").is_err());
    }
}
