use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpreaksError {
    #[error("API error {code}: {}", .messages.join("; "))]
    Api {
        status: u16,
        code: u16,
        messages: Vec<String>,
    },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unexpected API payload: {message}")]
    UnexpectedPayload { message: String },

    #[error("Invalid target '{value}': expected a numeric id or a slug")]
    InvalidTarget { value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SpreaksError {
    /// API 回報 404（找不到使用者或節目）
    pub fn is_not_found(&self) -> bool {
        matches!(self, SpreaksError::Api { status: 404, .. })
            || matches!(self, SpreaksError::Api { code: 404, .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SpreaksError::Api { .. } if self.is_not_found() => {
                "The requested user or show does not exist".to_string()
            }
            SpreaksError::Api { code, messages, .. } => {
                format!("Spreaker API rejected the request ({}): {}", code, messages.join("; "))
            }
            SpreaksError::HttpError(_) => "Could not reach the Spreaker API".to_string(),
            SpreaksError::SerializationError(_) | SpreaksError::UnexpectedPayload { .. } => {
                "The Spreaker API returned a response that could not be understood".to_string()
            }
            SpreaksError::InvalidTarget { value } => {
                format!("'{}' is not a valid user or show identifier", value)
            }
            SpreaksError::CsvError(_) | SpreaksError::IoError(_) => {
                "Failed to write output".to_string()
            }
            SpreaksError::ConfigError { .. }
            | SpreaksError::ConfigValidationError { .. }
            | SpreaksError::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SpreaksError::Api { .. } if self.is_not_found() => {
                "Check the numeric id or the slug of the user or show"
            }
            SpreaksError::Api { .. } => "Retry later; the API may be rate limiting requests",
            SpreaksError::HttpError(_) => "Check the network connection and --api-base-url",
            SpreaksError::SerializationError(_) | SpreaksError::UnexpectedPayload { .. } => {
                "Make sure --api-base-url points at the v2 API"
            }
            SpreaksError::InvalidTarget { .. } => "Pass a numeric id such as 42 or a slug",
            SpreaksError::CsvError(_) | SpreaksError::IoError(_) => {
                "Check that stdout is writable"
            }
            _ => "Fix the configuration file or command line flags",
        }
    }

    /// 依錯誤種類決定 CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            SpreaksError::Api { .. } if self.is_not_found() => 4,
            SpreaksError::Api { .. } | SpreaksError::HttpError(_) => 2,
            SpreaksError::ConfigError { .. }
            | SpreaksError::ConfigValidationError { .. }
            | SpreaksError::InvalidConfigValueError { .. }
            | SpreaksError::InvalidTarget { .. } => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpreaksError>;
