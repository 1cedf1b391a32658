use crate::app::export::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "spreaks")]
#[command(about = "Look up Spreaker users and shows from the public API")]
pub struct CliConfig {
    /// Base URL of the Spreaker v2 API
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Page size for follower/following/show/episode lists (API default when omitted)
    #[arg(long, global = true)]
    pub page_limit: Option<u32>,

    /// TOML configuration file; explicit flags take precedence over it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch a user's public profile with first-page follower, following and show ids
    User { target: String },
    /// Fetch a show's public metadata with first-page episode ids
    Show { target: String },
    /// Print the contact information a user made public
    Contact { target: String },
}

impl CliConfig {
    pub fn target(&self) -> &str {
        match &self.command {
            Command::User { target } | Command::Show { target } | Command::Contact { target } => {
                target
            }
        }
    }

    /// 載入設定檔（若有）並以命令列參數覆寫
    pub fn resolve_settings(&self) -> Result<Settings> {
        let base = match &self.config {
            Some(path) => Settings::from(&TomlConfig::from_file(path)?),
            None => Settings::default(),
        };
        Ok(self.apply_overrides(base))
    }

    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(url) = &self.api_base_url {
            settings.api_base_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_seconds = timeout;
        }
        if let Some(limit) = self.page_limit {
            settings.page_limit = Some(limit);
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_command() {
        let cli = CliConfig::try_parse_from(["spreaks", "user", "jane", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Command::User { .. }));
        assert_eq!(cli.target(), "jane");
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::try_parse_from([
            "spreaks",
            "--api-base-url",
            "http://localhost:1234",
            "--page-limit",
            "20",
            "show",
            "99",
        ])
        .unwrap();

        let settings = cli.resolve_settings().unwrap();
        assert_eq!(settings.api_base_url, "http://localhost:1234");
        assert_eq!(settings.page_limit, Some(20));
        assert_eq!(settings.timeout_seconds, Settings::default().timeout_seconds);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(CliConfig::try_parse_from(["spreaks"]).is_err());
    }
}
