pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod interactive;
pub mod list;
pub mod month;
pub mod now;
pub mod toggle;

use anyhow::Result;
use daybook_core::DateKey;
use daybook_core::config::DaybookConfig;
use daybook_core::planner::Planner;
use daybook_core::storage::FileStorage;

use crate::utils::date::parse_date_arg;

/// Loaded config plus a planner over the configured data directory.
pub struct Session {
    pub config: DaybookConfig,
    pub planner: Planner<FileStorage>,
}

impl Session {
    pub fn open() -> Result<Self> {
        let config = DaybookConfig::load()?;
        let planner = Planner::open(config.storage());
        Ok(Session { config, planner })
    }

    pub fn today(&self) -> Result<DateKey> {
        Ok(self.config.today()?)
    }

    /// Resolve a `--date` argument, defaulting to today.
    pub fn resolve_date(&self, arg: Option<&str>) -> Result<DateKey> {
        let today = self.today()?;
        match arg {
            Some(s) => parse_date_arg(s, today),
            None => Ok(today),
        }
    }
}
