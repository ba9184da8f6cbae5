use std::path::PathBuf;

use shared::models::Menu;

use crate::utils::{AppError, AppResult};

/// Default number of records shown in the recent-records listing
pub const DEFAULT_RECENT_RECORDS_LIMIT: usize = 30;

/// Default receipt width in characters (58mm roll)
pub const DEFAULT_RECEIPT_WIDTH: usize = 32;

/// Terminal configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./work_dir | Working directory for the ledger and logs |
/// | LEDGER_DB_FILE | ledger.redb | Ledger database file, relative to WORK_DIR |
/// | LOG_LEVEL | info | Log level |
/// | LOG_JSON | false | JSON console logs |
/// | LOG_TO_FILE | true | Write rolling log files under WORK_DIR/logs |
/// | RECENT_RECORDS_LIMIT | 30 | Length of the recent-records listing |
/// | RECEIPT_WIDTH | 32 | Plain-text invoice width |
/// | MENU_FILE | (unset) | JSON menu file; the built-in menu is used when unset |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/counter LOG_LEVEL=debug ./counter
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory, holds the ledger database and logs
    pub work_dir: String,
    /// Ledger database file name
    pub ledger_db_file: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_to_file: bool,
    pub recent_records_limit: usize,
    pub receipt_width: usize,
    /// Optional JSON menu file
    pub menu_file: Option<String>,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable variables fall back to their defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            ledger_db_file: std::env::var("LEDGER_DB_FILE")
                .unwrap_or_else(|_| "ledger.redb".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_to_file: std::env::var("LOG_TO_FILE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            recent_records_limit: std::env::var("RECENT_RECORDS_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RECENT_RECORDS_LIMIT),
            receipt_width: std::env::var("RECEIPT_WIDTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RECEIPT_WIDTH),
            menu_file: std::env::var("MENU_FILE").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Override the working directory
    ///
    /// Mostly used by tests
    pub fn with_overrides(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// Full path of the ledger database
    pub fn ledger_db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.ledger_db_file)
    }

    /// Directory for rolling log files, if file logging is enabled
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_to_file
            .then(|| PathBuf::from(&self.work_dir).join("logs"))
    }

    /// Load the menu: `menu_file` when set, otherwise the built-in menu
    pub fn load_menu(&self) -> AppResult<Menu> {
        match &self.menu_file {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    AppError::config(format!("Failed to read menu file {}: {}", path, e))
                })?;
                Menu::from_json(&json)
            }
            None => Ok(Menu::counter_default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    fn base(work_dir: &str) -> Config {
        Config {
            work_dir: work_dir.into(),
            ledger_db_file: "ledger.redb".into(),
            log_level: "info".into(),
            log_json: false,
            log_to_file: true,
            recent_records_limit: DEFAULT_RECENT_RECORDS_LIMIT,
            receipt_width: DEFAULT_RECEIPT_WIDTH,
            menu_file: None,
        }
    }

    #[test]
    fn test_paths() {
        let config = base("/tmp/counter");
        assert_eq!(
            config.ledger_db_path(),
            PathBuf::from("/tmp/counter/ledger.redb")
        );
        assert_eq!(config.log_dir(), Some(PathBuf::from("/tmp/counter/logs")));

        let config = Config {
            log_to_file: false,
            ..base("/tmp/counter")
        };
        assert_eq!(config.log_dir(), None);
    }

    #[test]
    fn test_load_default_menu() {
        let menu = base("/tmp").load_menu().unwrap();
        assert_eq!(menu, Menu::counter_default());
    }

    #[test]
    fn test_load_menu_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("menu.json");
        std::fs::write(&path, r#"[{"name":"Tea","price":10}]"#).unwrap();

        let config = Config {
            menu_file: Some(path.to_string_lossy().into_owned()),
            ..base("/tmp")
        };
        let menu = config.load_menu().unwrap();
        assert_eq!(menu.len(), 1);

        let config = Config {
            menu_file: Some(tmp.path().join("missing.json").to_string_lossy().into_owned()),
            ..base("/tmp")
        };
        assert_eq!(config.load_menu().unwrap_err().code, ErrorCode::ConfigError);
    }
}
