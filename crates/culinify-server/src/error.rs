//! Gateway error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use culinify_core::CoreError;
use culinify_protocol::ErrorResponse;
use log::error;

/// Static body for failures whose cause stays server-side.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Structured gateway error: an HTTP status plus a JSON `error` body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    /// Build a 400 Bad Request with the given client-safe message.
    pub fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse {
                error: message.to_string(),
            },
        }
    }

    /// Build a 500 with a generic body, logging the real cause.
    pub fn internal(cause: &CoreError) -> Self {
        error!("gateway internal error: {cause}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorResponse {
                error: INTERNAL_SERVER_ERROR.to_string(),
            },
        }
    }

    /// Build a 500 relaying the store's own message.
    pub fn store(cause: &culinify_store::StoreError) -> Self {
        error!("gateway store error: {cause}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorResponse {
                error: cause.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, INTERNAL_SERVER_ERROR};
    use axum::http::StatusCode;
    use culinify_core::CoreError;
    use pretty_assertions::assert_eq;

    #[test]
    fn helpers_build_expected_statuses() {
        let bad = ApiError::bad_request("Missing prompt or userId");
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);
        assert_eq!(bad.body.error, "Missing prompt or userId");

        let internal = ApiError::internal(&CoreError::Upstream("Webhook error".to_string()));
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.body.error, INTERNAL_SERVER_ERROR);

        let store = ApiError::store(&culinify_store::StoreError::Rejected {
            status: 500,
            message: "permission denied for table recipes".to_string(),
        });
        assert_eq!(store.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.body.error, "permission denied for table recipes");
    }
}
