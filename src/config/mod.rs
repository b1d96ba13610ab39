use crate::errors::{AppError, AppResult};
use crate::models::DeliveryType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Rows per page in the list views.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Purpose pre-filled on the visitor form.
    #[serde(default = "default_purpose")]
    pub default_purpose: String,
    /// Delivery type pre-selected on the delivery form.
    #[serde(default = "default_delivery_type")]
    pub default_delivery_type: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_page_size() -> usize {
    8
}
fn default_purpose() -> String {
    "Họp".to_string()
}
fn default_delivery_type() -> String {
    "package".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            page_size: default_page_size(),
            default_purpose: default_purpose(),
            default_delivery_type: default_delivery_type(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.frontdesk`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".frontdesk")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("frontdesk.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("frontdesk.sqlite")
    }

    /// Load configuration from the default file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// The configured default delivery type, checked.
    pub fn delivery_type(&self) -> AppResult<DeliveryType> {
        DeliveryType::from_code(&self.default_delivery_type)
            .ok_or_else(|| AppError::InvalidDeliveryType(self.default_delivery_type.clone()))
    }

    /// Resolve a `--db` value: a relative name lives inside the config directory.
    pub fn resolve_database(name: &str) -> String {
        let p = Path::new(name);
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        };
        path.to_string_lossy().to_string()
    }

    /// Build the configuration written by `init`.
    pub fn for_init(custom_db: Option<&str>) -> Self {
        let database = match custom_db {
            Some(name) => Self::resolve_database(name),
            None => default_database(),
        };

        Self {
            database,
            ..Self::default()
        }
    }
}
