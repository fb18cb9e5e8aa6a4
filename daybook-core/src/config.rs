//! Global daybook configuration at ~/.config/daybook/config.toml

use std::path::{Path, PathBuf};

use chrono::{Local, Weekday};
use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;
use crate::error::{DaybookError, DaybookResult};
use crate::storage::FileStorage;

static FALLBACK_DATA_PATH: &str = "~/.daybook";

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("daybook"))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_PATH))
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Self {
        match start {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DaybookConfig {
    /// Where events.json lives
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub week_start: WeekStart,

    /// IANA zone name; the system zone is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Default for DaybookConfig {
    fn default() -> Self {
        DaybookConfig {
            data_dir: default_data_dir(),
            week_start: WeekStart::default(),
            timezone: None,
        }
    }
}

impl DaybookConfig {
    pub fn config_path() -> DaybookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DaybookError::Config("Could not determine config directory".into()))?
            .join("daybook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first run.
    pub fn load() -> DaybookResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path`, with `DAYBOOK_*` environment variables layered on top.
    pub fn load_from(path: &Path) -> DaybookResult<Self> {
        let config: DaybookConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("DAYBOOK"))
            .build()
            .map_err(|e| DaybookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DaybookError::Config(e.to_string()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DaybookResult<()> {
        let contents = format!(
            "\
# daybook configuration

# Where your entries are stored:
# data_dir = \"{}\"

# First column of the month view (\"sunday\" or \"monday\"):
# week_start = \"sunday\"

# Time zone used to decide what \"today\" is (defaults to the system zone):
# timezone = \"Asia/Seoul\"
",
            default_data_dir().display()
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DaybookError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DaybookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn to_toml(&self) -> DaybookResult<String> {
        toml::to_string_pretty(self).map_err(|e| DaybookError::Config(e.to_string()))
    }

    /// `data_dir` with a leading `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.data_path())
    }

    pub fn first_weekday(&self) -> Weekday {
        self.week_start.into()
    }

    pub fn tz(&self) -> DaybookResult<Option<Tz>> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| DaybookError::Config(format!("Unknown timezone '{name}'")))
            })
            .transpose()
    }

    /// Today's key in the configured zone.
    pub fn today(&self) -> DaybookResult<DateKey> {
        Ok(match self.tz()? {
            Some(tz) => DateKey::today_in(&tz),
            None => DateKey::today_in(&Local),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_file_loads_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("daybook/config.toml");

        DaybookConfig::create_default_config(&path).unwrap();
        let config = DaybookConfig::load_from(&path).unwrap();

        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(config.first_weekday(), Weekday::Sun);
        assert!(config.timezone.is_none());
    }

    #[test]
    fn test_load_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/daybook-data\"\nweek_start = \"monday\"\ntimezone = \"Asia/Seoul\"\n",
        )
        .unwrap();

        let config = DaybookConfig::load_from(&path).unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/tmp/daybook-data"));
        assert_eq!(config.first_weekday(), Weekday::Mon);
        assert_eq!(config.tz().unwrap(), Some(chrono_tz::Asia::Seoul));
    }

    #[test]
    fn test_unknown_timezone_is_config_error() {
        let config = DaybookConfig {
            timezone: Some("Mars/Olympus".to_string()),
            ..DaybookConfig::default()
        };
        assert!(matches!(config.tz(), Err(DaybookError::Config(_))));
        assert!(config.today().is_err());
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let config = DaybookConfig {
            data_dir: PathBuf::from("/data"),
            week_start: WeekStart::Monday,
            timezone: None,
        };
        let text = config.to_toml().unwrap();
        assert!(text.contains("week_start = \"monday\""));

        let back: DaybookConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.data_dir, config.data_dir);
        assert_eq!(back.week_start, WeekStart::Monday);
    }
}
