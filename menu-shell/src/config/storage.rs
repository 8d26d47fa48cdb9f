use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::errors::ConfigError;
use super::model::AppConfig;
use super::store::ConfigStore;
use crate::layout::clamp_sidebar_width;

const SIDEBAR_WIDTH_KEY: &str = "sidebar_width";

/// How the file on disk was interpreted.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// A decoded configuration paired with how it was obtained.
///
/// Anything but [`ConfigLoadStatus::Loaded`] carries the defaults.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: AppConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    fn defaults(status: ConfigLoadStatus) -> Self {
        Self {
            config: AppConfig::default(),
            status,
        }
    }

    pub(crate) fn into_parts(self) -> (AppConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

/// Read the configuration from its default location.
pub(crate) fn load_config() -> Result<ConfigLoad, ConfigError> {
    ConfigFile::locate().read()
}

/// Write the configuration to its default location.
pub(crate) fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    ConfigFile::locate().write(config)
}

/// Build the startup store. Unreadable files fall back to defaults.
pub(crate) fn load_initial_store() -> ConfigStore {
    let load = match load_config() {
        Ok(load) => load,
        Err(err) => {
            log::warn!("failed to read config, using defaults: {err}");
            return ConfigStore::default();
        },
    };

    let (config, status) = load.into_parts();
    match status {
        ConfigLoadStatus::Loaded => log::debug!("config loaded: {config:?}"),
        ConfigLoadStatus::Missing => {
            log::info!("config file missing, using defaults")
        },
        ConfigLoadStatus::Invalid(message) => {
            log::warn!("config file invalid, using defaults: {message}")
        },
    }
    ConfigStore::with_config(config)
}

/// The JSON file backing the [`ConfigStore`].
#[derive(Debug, Clone)]
struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `$HOME/.config/menu-shell/config.json`, or the temp dir without a home.
    fn locate() -> Self {
        let root = std::env::var_os("HOME")
            .map(|home| Path::new(&home).join(".config"))
            .unwrap_or_else(std::env::temp_dir);

        Self::new(root.join("menu-shell").join("config.json"))
    }

    fn read(&self) -> Result<ConfigLoad, ConfigError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(decode(&data)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Ok(ConfigLoad::defaults(ConfigLoadStatus::Missing))
            },
            Err(err) => Err(err.into()),
        }
    }

    /// Replace the file in one rename so readers never see a partial write.
    fn write(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let payload = serde_json::to_vec_pretty(config)?;
        let staged = self.path.with_extension("json.tmp");
        fs::write(&staged, payload)?;
        fs::rename(&staged, &self.path)?;
        Ok(())
    }
}

/// Interpret raw file contents.
///
/// The file must hold a JSON object. Only `sidebar_width` is read from it:
/// a number is clamped into the sidebar bounds, any other value is dropped
/// so the default applies. Unknown keys are ignored.
fn decode(data: &str) -> ConfigLoad {
    match serde_json::from_str::<Value>(data) {
        Ok(Value::Object(fields)) => ConfigLoad {
            config: decode_fields(&fields),
            status: ConfigLoadStatus::Loaded,
        },
        Ok(other) => ConfigLoad::defaults(ConfigLoadStatus::Invalid(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
        Err(err) => ConfigLoad::defaults(ConfigLoadStatus::Invalid(format!(
            "{err}"
        ))),
    }
}

fn decode_fields(fields: &Map<String, Value>) -> AppConfig {
    let mut config = AppConfig::default();

    match fields.get(SIDEBAR_WIDTH_KEY) {
        Some(Value::Number(width)) => {
            if let Some(width) = width.as_f64() {
                config.set_sidebar_width(clamp_sidebar_width(width as f32));
            }
        },
        Some(other) => {
            log::warn!(
                "ignoring {SIDEBAR_WIDTH_KEY}: expected a number, found {}",
                json_kind(other)
            );
        },
        None => {},
    }

    config
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
