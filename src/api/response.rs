use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::scheduler::SchedError;

/// Corps d'erreur renvoyé au client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// Erreur API accompagnée de son statut HTTP.
#[derive(Debug)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub error: ApiError,
}

impl ApiErrorResponse {
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<SchedError> for ApiErrorResponse {
    fn from(error: SchedError) -> Self {
        let message = error.to_string();
        match error {
            SchedError::InvalidPolicy(_) => {
                Self::bad_request(ApiError::new("INVALID_POLICY", message))
            }
            SchedError::InvalidWindow => Self::bad_request(ApiError::with_details(
                "INVALID_WINDOW",
                message,
                "`from` must be strictly before `until`",
            )),
            SchedError::InvalidOverride { .. } => {
                Self::bad_request(ApiError::new("INVALID_OVERRIDE", message))
            }
            SchedError::MalformedInput(_) => {
                Self::bad_request(ApiError::malformed_json(message))
            }
            SchedError::TimeOverflow => {
                Self::bad_request(ApiError::new("TIME_OUT_OF_RANGE", message))
            }
        }
    }
}
