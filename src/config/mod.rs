#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::app::export::OutputFormat;
use crate::core::ConfigProvider;
use crate::domain::ports::{
    DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT, MAX_PAGE_LIMIT,
    MAX_TIMEOUT_SECONDS, MIN_PAGE_LIMIT, MIN_TIMEOUT_SECONDS,
};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

/// 合併 TOML 檔與命令列參數後的最終設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub api_base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
    pub page_limit: Option<u32>,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_limit: None,
            format: OutputFormat::default(),
        }
    }
}

impl From<&TomlConfig> for Settings {
    fn from(config: &TomlConfig) -> Self {
        Self {
            api_base_url: config.api_base_url().to_string(),
            timeout_seconds: config.timeout_seconds(),
            user_agent: config.user_agent().to_string(),
            page_limit: config.page_limit(),
            format: config.output_format().unwrap_or_default(),
        }
    }
}

impl ConfigProvider for Settings {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn page_limit(&self) -> Option<u32> {
        self.page_limit
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base_url", &self.api_base_url)?;
        validation::validate_range(
            "timeout_seconds",
            self.timeout_seconds,
            MIN_TIMEOUT_SECONDS,
            MAX_TIMEOUT_SECONDS,
        )?;
        validation::validate_non_empty_string("user_agent", &self.user_agent)?;
        if let Some(limit) = self.page_limit {
            validation::validate_range("page_limit", limit, MIN_PAGE_LIMIT, MAX_PAGE_LIMIT)?;
        }
        Ok(())
    }
}
