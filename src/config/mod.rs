use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Keys every configuration file is expected to carry.
pub const CONFIG_KEYS: [&str; 5] = [
    "backend",
    "data_file",
    "workbook_dir",
    "credentials",
    "log_level",
];

/// Storage backend holding the entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Single CSV table with every entry
    #[default]
    File,
    /// Spreadsheet workbook with one tab per category
    Sheet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_workbook_dir")]
    pub workbook_dir: String,
    #[serde(default = "default_credentials")]
    pub credentials: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> String {
    Config::config_dir()
        .join("overtime.csv")
        .to_string_lossy()
        .to_string()
}
fn default_workbook_dir() -> String {
    Config::config_dir()
        .join("workbook")
        .to_string_lossy()
        .to_string()
}
fn default_credentials() -> String {
    Config::config_dir()
        .join("credentials.json")
        .to_string_lossy()
        .to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            data_file: default_data_file(),
            workbook_dir: default_workbook_dir(),
            credentials: default_credentials(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rovertime")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rovertime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rovertime.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn workbook_path(&self) -> PathBuf {
        expand_tilde(&self.workbook_dir)
    }

    pub fn credentials_path(&self) -> PathBuf {
        expand_tilde(&self.credentials)
    }

    /// Where the entries of the active backend live.
    pub fn store_location(&self) -> PathBuf {
        match self.backend {
            Backend::File => self.data_path(),
            Backend::Sheet => self.workbook_path(),
        }
    }

    /// Point the active backend at a different file or workbook directory.
    pub fn override_store(&mut self, location: &str) {
        match self.backend {
            Backend::File => self.data_file = location.to_string(),
            Backend::Sheet => self.workbook_dir = location.to_string(),
        }
    }

    /// Initialize the configuration file (unless `is_test`).
    /// Returns the path of the configured store.
    pub fn init_all(&self, is_test: bool) -> AppResult<PathBuf> {
        if !is_test {
            let path = Self::config_file();
            self.save_to(&path)?;
            println!("✅ Config file: {}", path.display());
        }

        Ok(self.store_location())
    }
}

/// List the expected keys absent from a YAML configuration text.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    let Some(map) = yaml.as_mapping() else {
        return Ok(CONFIG_KEYS.to_vec());
    };

    Ok(CONFIG_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(serde_yaml::Value::String(k.to_string())))
        .collect())
}
