pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::http::SpreakerClient;
pub use app::export::OutputFormat;
pub use config::{toml_config::TomlConfig, Settings};
pub use domain::model::{Contact, Page, Show, Target, User};
pub use domain::ports::{ConfigProvider, Resource};
pub use utils::error::{Result, SpreaksError};
