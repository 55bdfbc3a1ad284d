use thiserror::Error;

/// Failures talking to the admin REST backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Backend responded with status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Could not encode query: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// True when the backend rejected the session cookie.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status(401))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::Status(status.as_u16()),
            None if err.is_decode() => ApiError::Decode(err.to_string()),
            None => ApiError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<serde_html_form::ser::Error> for ApiError {
    fn from(err: serde_html_form::ser::Error) -> Self {
        ApiError::Encode(err.to_string())
    }
}
