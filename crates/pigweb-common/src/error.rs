use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Message shown when a caller submits a protocol without its required fields.
pub const INCOMPLETE_INPUT_MESSAGE: &str = "Please complete all required fields.";

/// Message shown when assembling an evaluation fails unexpectedly.
pub const CALCULATION_FAILED_MESSAGE: &str = "Calculation failed.";

#[derive(Debug, Error)]
pub enum PigwebError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Incomplete input: missing {0}")]
    IncompleteInput(String),

    #[error("Gene '{0}' not found in Pig (Sus scrofa) database.")]
    GeneNotFound(String),

    #[error("Gene lookup error: {0}")]
    Lookup(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Security error: {0}")]
    SecurityError(String),

    #[error("Report rendering error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PigwebError>;

/// Error type returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Please complete all required fields.")]
    IncompleteInput,

    #[error("Calculation failed.")]
    CalculationFailed,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::IncompleteInput => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::CalculationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PigwebError> for ApiError {
    fn from(err: PigwebError) -> Self {
        match err {
            PigwebError::IncompleteInput(_) => ApiError::IncompleteInput,
            PigwebError::GeneNotFound(_) => ApiError::NotFound(err.to_string()),
            PigwebError::Http(_) | PigwebError::Lookup(_) | PigwebError::Timeout(_) => {
                ApiError::Upstream(err.to_string())
            }
            PigwebError::SecurityError(_) => ApiError::BadRequest(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Malformed or mistyped request bodies surface as a JSON 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "Request failed");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_input_maps_to_422() {
        let api: ApiError = PigwebError::IncompleteInput("goal".into()).into();
        assert_eq!(api.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api.to_string(), INCOMPLETE_INPUT_MESSAGE);
    }

    #[test]
    fn test_gene_not_found_keeps_message() {
        let api: ApiError = PigwebError::GeneNotFound("XYZ1".into()).into();
        assert_eq!(api.status(), StatusCode::NOT_FOUND);
        assert!(api.to_string().contains("XYZ1"));
    }

    #[test]
    fn test_timeout_is_upstream_failure() {
        let api: ApiError = PigwebError::Timeout(15).into();
        assert_eq!(api.status(), StatusCode::BAD_GATEWAY);
    }
}
