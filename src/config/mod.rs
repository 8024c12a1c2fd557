//! User preferences and their JSON persistence.
//!
//! Only preferences live on disk; transactions never do.

use std::{
    env,
    fmt,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::core::services::DisplaySettings;
use crate::currency::{CurrencyCode, DateFormatStyle, LocaleConfig};
use crate::errors::ConfigError;

/// Overrides the directory that holds `config.json`.
pub const HOME_ENV_VAR: &str = "EXPENSE_TRACKER_HOME";
const CONFIG_FILE_NAME: &str = "config.json";
const APP_DIR_NAME: &str = "expense-tracker";
const TMP_SUFFIX: &str = "tmp";

/// Which view collaborator the shell renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    #[default]
    Terminal,
    Json,
}

impl FromStr for ViewKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" => Ok(ViewKind::Terminal),
            "json" => Ok(ViewKind::Json),
            other => Err(ConfigError::Serde(format!("unknown view `{other}`"))),
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewKind::Terminal => "terminal",
            ViewKind::Json => "json",
        })
    }
}

/// Stores user-configurable display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub date_format: DateFormatStyle,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub view: ViewKind,
    #[serde(default = "Config::default_notice_seconds")]
    pub notice_seconds: u64,
    /// Overrides the decimal separator implied by `locale`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_separator: Option<char>,
    /// Overrides digit grouping implied by `locale`; `""` turns it off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping_separator: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            date_format: DateFormatStyle::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            view: ViewKind::default(),
            notice_seconds: Self::default_notice_seconds(),
            decimal_separator: None,
            grouping_separator: None,
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_notice_seconds() -> u64 {
        3
    }

    /// Separators follow `locale` unless overridden explicitly.
    pub fn display_settings(&self) -> DisplaySettings {
        let mut locale = LocaleConfig::for_tag(&self.locale);
        locale.date_format = self.date_format;
        if let Some(separator) = self.decimal_separator {
            locale.decimal_separator = separator;
        }
        if let Some(grouping) = &self.grouping_separator {
            locale.grouping_separator = grouping.chars().next();
        }
        DisplaySettings {
            currency: CurrencyCode::new(&self.currency),
            locale,
        }
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_seconds)
    }
}

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE_NAME)))
    }

    /// `$EXPENSE_TRACKER_HOME`, else the platform config dir, else `.`.
    pub fn default_base_dir() -> PathBuf {
        if let Some(home) = env::var_os(HOME_ENV_VAR).filter(|value| !value.is_empty()) {
            return PathBuf::from(home);
        }
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_base_dir(Self::default_base_dir())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the stored config, falling back to defaults when no file exists.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.config_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}
