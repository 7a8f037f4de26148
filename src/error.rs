//! Error types for the atlas
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Atlas Error Enum ==
/// Unified error type for lookups, validation and dataset loading.
///
/// Name and ID lookups in the engine report "not found" through `Option`,
/// never through this type. `NotFound` exists for the HTTP layer.
#[derive(Error, Debug)]
pub enum AtlasError {
    /// Language selector outside the supported set (strict mode only)
    #[error("Invalid language: {0}. Supported languages are: english, french, arabic")]
    InvalidLanguage(String),

    /// Region ID not present in the dataset
    #[error("Invalid region ID: {0}")]
    InvalidRegionId(String),

    /// City ID that is not a positive integer
    #[error("Invalid city ID: {0}")]
    InvalidCityId(String),

    /// Dataset failed its integrity checks
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// Rejected settings update
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Query string or request body that could not be decoded
    #[error("Invalid argument: {0}")]
    BadRequest(String),

    /// Dataset file could not be read
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset JSON could not be parsed
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

impl AtlasError {
    // == Kind ==
    /// Stable name of the error class, reported alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            AtlasError::InvalidLanguage(_) => "InvalidLanguageError",
            AtlasError::InvalidRegionId(_) => "InvalidRegionIdError",
            AtlasError::InvalidCityId(_) => "InvalidCityIdError",
            AtlasError::DataIntegrity(_) => "DataIntegrityError",
            AtlasError::InvalidConfig(_) => "InvalidConfigError",
            AtlasError::NotFound(_) => "NotFoundError",
            AtlasError::BadRequest(_) => "InvalidArgumentError",
            AtlasError::Io(_) | AtlasError::Parse(_) => "DatasetLoadError",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AtlasError::InvalidLanguage(_)
            | AtlasError::InvalidRegionId(_)
            | AtlasError::InvalidCityId(_)
            | AtlasError::InvalidConfig(_)
            | AtlasError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AtlasError::NotFound(_) => StatusCode::NOT_FOUND,
            AtlasError::DataIntegrity(_) | AtlasError::Io(_) | AtlasError::Parse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// == Extractor Rejections ==
impl From<QueryRejection> for AtlasError {
    fn from(rejection: QueryRejection) -> Self {
        AtlasError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AtlasError {
    fn from(rejection: JsonRejection) -> Self {
        AtlasError::BadRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AtlasError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.to_string(),
            "kind": self.kind(),
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the atlas.
pub type Result<T> = std::result::Result<T, AtlasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_region_id_message_carries_value() {
        let err = AtlasError::InvalidRegionId("nope".to_string());
        assert_eq!(err.to_string(), "Invalid region ID: nope");
        assert_eq!(err.kind(), "InvalidRegionIdError");
    }

    #[test]
    fn test_invalid_language_lists_supported() {
        let err = AtlasError::InvalidLanguage("klingon".to_string());
        assert!(err.to_string().contains("klingon"));
        assert!(err.to_string().contains("english, french, arabic"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AtlasError::InvalidRegionId("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AtlasError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AtlasError::DataIntegrity("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AtlasError::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_bad_request_kind() {
        let err = AtlasError::BadRequest("count: invalid digit".to_string());
        assert_eq!(err.kind(), "InvalidArgumentError");
        assert_eq!(err.to_string(), "Invalid argument: count: invalid digit");
    }
}
