use crate::domain::model::Page;
use crate::domain::ports::{ConfigProvider, DEFAULT_USER_AGENT};
use crate::utils::error::{Result, SpreaksError};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Spreaker v2 API 的唯讀 HTTP client
///
/// Every call is a single unauthenticated GET. Listings return their first
/// page only.
#[derive(Debug, Clone)]
pub struct SpreakerClient {
    client: Client,
    base_url: String,
    page_limit: Option<u32>,
}

impl SpreakerClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().user_agent(DEFAULT_USER_AGENT).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_limit: None,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self::with_client(client, config.api_base_url()).with_page_limit(config.page_limit()))
    }

    pub fn with_page_limit(mut self, page_limit: Option<u32>) -> Self {
        self.page_limit = page_limit;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 每個 segment 都會被 percent-encode，slug 裡的 `?`、`#` 不會改變路徑
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| SpreaksError::InvalidConfigValueError {
            field: "api_base_url".to_string(),
            value: self.base_url.clone(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        url.path_segments_mut()
            .map_err(|_| SpreaksError::InvalidConfigValueError {
                field: "api_base_url".to_string(),
                value: self.base_url.clone(),
                reason: "URL cannot have a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn send(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Value> {
        let url = self.url(segments)?;
        let path = url.path().to_string();
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!("GET {} -> {}", url, status);

        if status != StatusCode::OK {
            return Err(api_error(status, &body));
        }

        let mut json: Value = serde_json::from_str(&body)?;
        json.get_mut("response")
            .map(Value::take)
            .ok_or_else(|| SpreaksError::UnexpectedPayload {
                message: format!("{} returned no 'response' object", path),
            })
    }

    /// 取得回應中的 `response` 物件
    pub async fn get_response(&self, segments: &[&str]) -> Result<Value> {
        self.send(segments, &[]).await
    }

    /// 取得 `response.<key>`，例如 `user`、`show`
    pub async fn get_entity(&self, segments: &[&str], key: &str) -> Result<Value> {
        let mut response = self.get_response(segments).await?;
        response
            .get_mut(key)
            .map(Value::take)
            .ok_or_else(|| SpreaksError::UnexpectedPayload {
                message: format!("/{} returned no '{}' object", segments.join("/"), key),
            })
    }

    /// 取得列表第一頁中每個 item 的 `id_field`
    pub async fn get_page(&self, segments: &[&str], id_field: &str) -> Result<Page<u64>> {
        let query: Vec<(&str, String)> = self
            .page_limit
            .map(|limit| vec![("limit", limit.to_string())])
            .unwrap_or_default();

        let response = self.send(segments, &query).await?;
        let page = extract_ids(&response, id_field)?;

        if page.has_more() {
            tracing::debug!(
                "/{}: only the first {} items were fetched, more are available",
                segments.join("/"),
                page.items.len()
            );
        }

        Ok(page)
    }
}

fn extract_ids(response: &Value, id_field: &str) -> Result<Page<u64>> {
    let items = response
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| SpreaksError::UnexpectedPayload {
            message: "listing has no 'items' array".to_string(),
        })?;

    let ids = items
        .iter()
        .filter_map(|item| item.get(id_field).and_then(Value::as_u64))
        .collect();

    let next_url = response
        .get("next_url")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(Page {
        items: ids,
        next_url,
    })
}

/// 將非 200 回應轉為 `SpreaksError::Api`
///
/// The API reports failures as `{"response": {"error": {"code": .., "messages": [..]}}}`.
/// Bodies that don't follow that shape fall back to the HTTP status and raw text.
fn api_error(status: StatusCode, body: &str) -> SpreaksError {
    let error = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json.get("response")?.get("error").cloned());

    let code = error
        .as_ref()
        .and_then(|e| e.get("code"))
        .and_then(Value::as_u64)
        .and_then(|c| u16::try_from(c).ok())
        .unwrap_or(status.as_u16());

    let messages = match error.as_ref().and_then(|e| e.get("messages")) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|m| m.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(message)) => vec![message.clone()],
        _ if body.trim().is_empty() => vec![status.canonical_reason().unwrap_or("").to_string()],
        _ => vec![body.trim().to_string()],
    };

    SpreaksError::Api {
        status: status.as_u16(),
        code,
        messages,
    }
}
