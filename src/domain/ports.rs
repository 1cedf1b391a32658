use crate::adapters::http::SpreakerClient;
use crate::domain::model::Target;
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_API_BASE_URL: &str = "https://api.spreaker.com/v2";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("spreaks/", env!("CARGO_PKG_VERSION"));

pub const MIN_TIMEOUT_SECONDS: u64 = 1;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;
/// API 單頁最多 100 筆
pub const MIN_PAGE_LIMIT: u32 = 1;
pub const MAX_PAGE_LIMIT: u32 = 100;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> &str;
    /// `None` 表示使用 API 預設的分頁大小
    fn page_limit(&self) -> Option<u32>;
}

/// 可以用 id 或 slug 從 API 取得的資源
#[async_trait]
pub trait Resource: Sized {
    async fn fetch(client: &SpreakerClient, target: &Target) -> Result<Self>;
}
