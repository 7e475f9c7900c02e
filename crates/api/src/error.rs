//! API error types and their HTTP mapping.

use crate::models::ErrorResponse;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roi_calc_data::DataError;
use roi_calc_domain::RoiError;
use roi_calc_report::ReportError;
use tracing::{error, warn};

/// Errors returned by API handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// One or more required fields are absent.
    #[error("Missing required fields")]
    MissingFields(Vec<&'static str>),
    /// The request was malformed or failed validation.
    #[error("{0}")]
    BadRequest(String),
    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The request conflicts with stored state.
    #[error("{0}")]
    Conflict(String),
    /// Storage or report failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RoiError> for ApiError {
    fn from(err: RoiError) -> Self {
        match err {
            RoiError::InvalidInput(reason) => Self::BadRequest(reason),
        }
    }
}

impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::DuplicateName(_) => Self::Conflict(err.to_string()),
            DataError::NotFound(_) => Self::NotFound(err.to_string()),
            DataError::Corrupt { .. } | DataError::Database(_) => {
                error!(error = %err, "storage failure");
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        error!(error = %err, "report generation failed");
        Self::Internal(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection, "rejected request body");
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let required = match &self {
            Self::MissingFields(fields) => Some(fields.iter().map(|f| f.to_string()).collect()),
            _ => None,
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
            required,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roi_calc_domain::ScenarioId;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(RoiError::invalid("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(DataError::DuplicateName("x".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(DataError::NotFound(ScenarioId::generate())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::MissingFields(vec!["email"]).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::from(DataError::DuplicateName("x".into())).to_string(),
            "A scenario with this name already exists"
        );
        assert_eq!(
            ApiError::from(DataError::NotFound(ScenarioId::generate())).to_string(),
            "Scenario not found"
        );
    }
}
