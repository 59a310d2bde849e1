//! Challenge list configuration.
//!
//! Configuration is read from `.challenges/config.yaml` (or the file named
//! by `CHALLENGE_LIST_CONFIG`) and includes:
//! - Filter debounce window and search input minimum length
//! - Default sort column and direction
//! - Roles that see every submitter's challenges
//! - Pagination widget width and the project site base URL

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ChallengeListError, Result};
use crate::identity::{AdminRoles, DEFAULT_ADMIN_ROLE};
use crate::query::SortSpec;
use crate::types::{SortColumn, SortOrder};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "CHALLENGE_LIST_CONFIG";

const DEFAULT_CONFIG_PATH: &str = ".challenges/config.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Quiet period before a filter edit is applied, in milliseconds (default: 1000)
    #[serde(default = "default_filter_debounce_ms")]
    pub filter_debounce_ms: u64,

    /// Shortest search text forwarded to the coordinator (default: 2)
    #[serde(default = "default_search_min_length")]
    pub search_min_length: usize,

    /// Number of page links shown by the pagination widget (default: 5)
    #[serde(default = "default_page_range_displayed")]
    pub page_range_displayed: u32,

    #[serde(default)]
    pub default_sort_by: SortColumn,

    #[serde(default)]
    pub default_sort_order: SortOrder,

    /// Roles granting unscoped access (default: administrator)
    #[serde(default = "default_admin_roles")]
    pub admin_roles: Vec<String>,

    /// Base URL for "View Project" links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_app_url: Option<String>,
}

fn default_filter_debounce_ms() -> u64 {
    1000
}

fn default_search_min_length() -> usize {
    2
}

fn default_page_range_displayed() -> u32 {
    5
}

fn default_admin_roles() -> Vec<String> {
    vec![DEFAULT_ADMIN_ROLE.to_string()]
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            filter_debounce_ms: default_filter_debounce_ms(),
            search_min_length: default_search_min_length(),
            page_range_displayed: default_page_range_displayed(),
            default_sort_by: SortColumn::default(),
            default_sort_order: SortOrder::default(),
            admin_roles: default_admin_roles(),
            connect_app_url: None,
        }
    }
}

impl ListConfig {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(ListConfig::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: ListConfig = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_range_displayed == 0 {
            return Err(ChallengeListError::Config(
                "page_range_displayed must be at least 1".to_string(),
            ));
        }
        if self.admin_roles.iter().any(|r| r.trim().is_empty()) {
            return Err(ChallengeListError::Config(
                "admin_roles must not contain empty role names".to_string(),
            ));
        }
        Ok(())
    }

    pub fn filter_debounce(&self) -> Duration {
        Duration::from_millis(self.filter_debounce_ms)
    }

    pub fn default_sort(&self) -> SortSpec {
        SortSpec::new(self.default_sort_by, self.default_sort_order)
    }

    pub fn admin_roles(&self) -> AdminRoles {
        AdminRoles::new(self.admin_roles.iter().cloned())
    }
}
