// SPDX-License-Identifier: Apache-2.0

//! Conversion of roulette-core errors into HTTP responses.
//!
//! Every failure is answered with a JSON body of the form `{"error": "..."}`:
//! - `NotAuthenticated` -> 401
//! - an unknown `filter` query value -> 400
//! - everything else -> 500

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roulette_core::RouletteError;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// JSON error payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

/// Error returned by request handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Failure from the aggregation pipeline.
    Roulette(RouletteError),
    /// Malformed request parameters.
    BadRequest(String),
}

impl From<RouletteError> for ApiError {
    fn from(err: RouletteError) -> Self {
        ApiError::Roulette(err)
    }
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Roulette(RouletteError::NotAuthenticated) => StatusCode::UNAUTHORIZED,
            ApiError::Roulette(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Roulette(err) => err.to_string(),
            ApiError::BadRequest(message) => message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
