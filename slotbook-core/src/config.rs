//! slotbook configuration at ~/.config/slotbook/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{SlotbookError, SlotbookResult};
use crate::summary::{DEFAULT_EMPTY_MESSAGE, MeridiemLabels, SummaryFormatter};

static DEFAULT_DATABASE_PATH: &str = "~/.local/share/slotbook/slotbook.db";

fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_PATH)
}

fn is_default_database_path(p: &PathBuf) -> bool {
    *p == default_database_path()
}

fn default_empty_message() -> String {
    DEFAULT_EMPTY_MESSAGE.to_string()
}

fn is_default_empty_message(m: &String) -> bool {
    m == DEFAULT_EMPTY_MESSAGE
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    /// Preferred share helper, e.g. "whatsapp" for `slotbook-share-whatsapp`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SlotbookConfig {
    #[serde(
        default = "default_database_path",
        skip_serializing_if = "is_default_database_path"
    )]
    pub database: PathBuf,

    #[serde(
        default = "default_empty_message",
        skip_serializing_if = "is_default_empty_message"
    )]
    pub empty_message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<MeridiemLabels>,

    #[serde(default)]
    pub share: ShareConfig,
}

impl Default for SlotbookConfig {
    fn default() -> Self {
        SlotbookConfig {
            database: default_database_path(),
            empty_message: default_empty_message(),
            labels: None,
            share: ShareConfig::default(),
        }
    }
}

impl SlotbookConfig {
    pub fn config_path() -> SlotbookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SlotbookError::Config("Could not determine config directory".into()))?
            .join("slotbook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, writing a commented default file first if
    /// there is none.
    pub fn load() -> SlotbookResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> SlotbookResult<Self> {
        if !path.exists() {
            Self::create_default_config(path)?;
        }

        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| SlotbookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SlotbookError::Config(e.to_string()))
    }

    /// Database location with `~` expanded.
    pub fn database_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.database.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    pub fn summary_formatter(&self) -> SummaryFormatter {
        SummaryFormatter::new()
            .with_labels(self.labels.clone())
            .with_empty_message(self.empty_message.clone())
    }

    pub fn save(&self) -> SlotbookResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> SlotbookResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| SlotbookError::Serialization(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SlotbookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> SlotbookResult<()> {
        let contents = format!(
            "\
# slotbook configuration

# Where events and names are stored:
# database = \"{}\"

# Shown when there is nothing to list or share:
# empty_message = \"{}\"

# Replace AM/PM in summaries (the label is placed before the time):
# [labels]
# am = \"காலை\"
# pm = \"மாலை\"

# Preferred share helper (runs slotbook-share-<app>):
# [share]
# app = \"whatsapp\"
",
            DEFAULT_DATABASE_PATH, DEFAULT_EMPTY_MESSAGE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SlotbookError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SlotbookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slotbook/config.toml");

        let config = SlotbookConfig::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config, SlotbookConfig::default());
        assert!(config.labels.is_none());
    }

    #[test]
    fn reads_labels_and_share_app() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "database = \"/tmp/slotbook-test.db\"\n\
             empty_message = \"Nothing planned\"\n\
             [labels]\nam = \"காலை\"\npm = \"மாலை\"\n\
             [share]\napp = \"whatsapp\"\n",
        )
        .unwrap();

        let config = SlotbookConfig::load_from(&path).unwrap();
        assert_eq!(config.database_path(), PathBuf::from("/tmp/slotbook-test.db"));
        assert_eq!(config.share.app.as_deref(), Some("whatsapp"));

        let formatter = config.summary_formatter();
        assert_eq!(formatter.render(&[], ""), "Nothing planned");

        let event = Event {
            id: 1,
            name: "Alice".to_string(),
            date: "1/1/2026".to_string(),
            time: "06:00 PM".to_string(),
            created_at: 0,
        };
        assert_eq!(
            formatter.render(&[event], ""),
            "Date: 1/1/2026\nTime: மாலை 06:00"
        );
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = SlotbookConfig {
            labels: Some(MeridiemLabels {
                am: "morning".to_string(),
                pm: "evening".to_string(),
            }),
            share: ShareConfig {
                app: Some("signal".to_string()),
            },
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(SlotbookConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn tilde_is_expanded() {
        if dirs::home_dir().is_none() {
            return;
        }
        let config = SlotbookConfig::default();
        assert!(!config.database_path().to_string_lossy().starts_with('~'));
    }
}
