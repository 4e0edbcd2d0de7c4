use crate::error::{Result, ShelfError};
use crate::store::fs::validate_key;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_STORAGE_KEY: &str = "BOOKSHELF_APPS";

/// What to do when the stored shelf cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptDataPolicy {
    /// Refuse to start and report the error.
    #[default]
    Fail,
    /// Start with an empty shelf; the next save overwrites the bad data.
    Discard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// `None` means "detect from the terminal".
    pub fn as_override(&self) -> Option<bool> {
        match self {
            ColorChoice::Auto => None,
            ColorChoice::Always => Some(true),
            ColorChoice::Never => Some(false),
        }
    }
}

impl fmt::Display for CorruptDataPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorruptDataPolicy::Fail => f.write_str("fail"),
            CorruptDataPolicy::Discard => f.write_str("discard"),
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorChoice::Auto => f.write_str("auto"),
            ColorChoice::Always => f.write_str("always"),
            ColorChoice::Never => f.write_str("never"),
        }
    }
}

/// Configuration for bookshelf, stored in `config.json` inside the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ShelfConfig {
    /// Key the shelf is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Policy for unreadable stored data
    #[serde(default)]
    pub on_corrupt: CorruptDataPolicy,

    /// Terminal color output
    #[serde(default)]
    pub color: ColorChoice,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            on_corrupt: CorruptDataPolicy::default(),
            color: ColorChoice::default(),
        }
    }
}

impl ShelfConfig {
    pub const KEYS: &'static [&'static str] = &["storage-key", "on-corrupt", "color"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            ShelfError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "on-corrupt" => Some(self.on_corrupt.to_string()),
            "color" => Some(self.color.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "storage-key" => {
                let value = value.trim();
                validate_key(value).map_err(|e| e.to_string())?;
                self.storage_key = value.to_string();
            }
            "on-corrupt" => {
                self.on_corrupt = match value {
                    "fail" => CorruptDataPolicy::Fail,
                    "discard" => CorruptDataPolicy::Discard,
                    other => {
                        return Err(format!(
                            "Invalid value for on-corrupt: {} (expected fail or discard)",
                            other
                        ))
                    }
                };
            }
            "color" => {
                self.color = match value {
                    "auto" => ColorChoice::Auto,
                    "always" => ColorChoice::Always,
                    "never" => ColorChoice::Never,
                    other => {
                        return Err(format!(
                            "Invalid value for color: {} (expected auto, always or never)",
                            other
                        ))
                    }
                };
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}
