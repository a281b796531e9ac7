use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error as ThisError;

/// Failures talking to football-data.org. Never retried.
#[derive(Debug, ThisError)]
pub enum UpstreamError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),

    #[error("Network error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream returned {status} for {url}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Invalid payload from {url}: {source}")]
    Payload {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl From<url::ParseError> for UpstreamError {
    fn from(e: url::ParseError) -> Self {
        UpstreamError::InvalidUrl(e.to_string())
    }
}

/// Error surfaced to API clients as `{"error": "..."}`.
#[derive(Debug, ThisError)]
pub enum ResultsError {
    /// Missing or malformed query parameter, detected before any upstream call
    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    Upstream {
        message: &'static str,
        #[source]
        source: UpstreamError,
    },
}

impl ResultsError {
    pub fn validation(message: impl Into<String>) -> Self {
        ResultsError::Validation(message.into())
    }

    pub fn upstream(message: &'static str, source: UpstreamError) -> Self {
        ResultsError::Upstream { message, source }
    }
}

impl ResponseError for ResultsError {
    fn status_code(&self) -> StatusCode {
        match self {
            ResultsError::Validation(_) => StatusCode::BAD_REQUEST,
            ResultsError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}
