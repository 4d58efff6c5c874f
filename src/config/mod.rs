use crate::errors::{AppError, AppResult};
use crate::models::session::Role;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

pub mod check; // use submodule at src/config/check.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_store")]
    pub store: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_officer_poll")]
    pub officer_poll_interval_ms: u64,
    #[serde(default = "default_admin_poll")]
    pub admin_poll_interval_ms: u64,
    #[serde(default = "default_roster_page_size")]
    pub roster_page_size: usize,
    #[serde(default = "default_sheet_page_size")]
    pub sheet_page_size: usize,
    #[serde(default = "default_admin_roster_limit")]
    pub admin_roster_limit: usize,
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:5000/api".to_string()
}
fn default_store() -> String {
    Config::store_file().to_string_lossy().to_string()
}
fn default_request_timeout_ms() -> u64 {
    10_000
}
fn default_officer_poll() -> u64 {
    5_000
}
fn default_admin_poll() -> u64 {
    10_000
}
fn default_roster_page_size() -> usize {
    10
}
fn default_sheet_page_size() -> usize {
    20
}
fn default_admin_roster_limit() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            store: default_store(),
            request_timeout_ms: default_request_timeout_ms(),
            officer_poll_interval_ms: default_officer_poll(),
            admin_poll_interval_ms: default_admin_poll(),
            roster_page_size: default_roster_page_size(),
            sheet_page_size: default_sheet_page_size(),
            admin_roster_limit: default_admin_roster_limit(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Return the full path of the local SQLite store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("rattendance.sqlite")
    }

    /// Revocation poll interval of the console `role` lands on.
    pub fn poll_interval(&self, role: Role) -> Duration {
        let ms = match role {
            Role::Admin => self.admin_poll_interval_ms,
            Role::Officer => self.officer_poll_interval_ms,
        };
        Duration::from_millis(ms)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize configuration and local store files
    pub fn init_all(
        custom_store: Option<String>,
        api_base_url: Option<String>,
        is_test: bool,
    ) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store path: user provided or default
        let store_path = match custom_store {
            Some(name) => {
                let p = crate::utils::path::expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::store_file(),
        };

        let config = Config {
            api_base_url: api_base_url.unwrap_or_else(default_api_base_url),
            store: store_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = store_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
