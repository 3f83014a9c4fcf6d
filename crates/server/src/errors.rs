use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::reporting::ErrorReporter;
use models::errors::ModelError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

use crate::response::ApiResponse;

/// Operation whose boundary produced an error; picks the generic message
/// used for internal faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListServices,
    RequestService,
    AiHealth,
}

impl Operation {
    pub fn context(self) -> &'static str {
        match self {
            Operation::ListServices => "list_services",
            Operation::RequestService => "request_service",
            Operation::AiHealth => "ai_health",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::ListServices => "Failed to fetch services",
            Operation::RequestService => "Failed to create service request",
            Operation::AiHealth => "AI service health check failed",
        }
    }
}

/// Error response: status code plus a caller-safe message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn invalid_action() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid action")
    }

    pub fn invalid_body(rejection: &JsonRejection) -> Self {
        warn!(reason = %rejection.body_text(), "request body rejected");
        Self::new(StatusCode::BAD_REQUEST, "Invalid request body")
    }

    /// Translate the service taxonomy into the HTTP buckets. Internal faults
    /// are logged and reported with full detail; the caller only gets the
    /// operation's generic message.
    pub fn from_service(err: ServiceError, op: Operation, reporter: &dyn ErrorReporter) -> Self {
        match &err {
            ServiceError::Validation(_) | ServiceError::Model(ModelError::Validation(_)) => {
                Self::new(StatusCode::BAD_REQUEST, "Missing required parameters")
            }
            ServiceError::AuthRequired => Self::new(StatusCode::UNAUTHORIZED, "Authentication required"),
            ServiceError::Unauthorized => Self::new(StatusCode::UNAUTHORIZED, "Invalid authentication"),
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Service not found"),
            ServiceError::Db(_) | ServiceError::Upstream(_) | ServiceError::Model(ModelError::Db(_)) => {
                Self::internal(&err, op, reporter)
            }
        }
    }

    /// Generic 500 for `op`; `err` goes to the logs and the reporter only.
    pub fn internal(err: &(dyn std::error::Error + 'static), op: Operation, reporter: &dyn ErrorReporter) -> Self {
        error!(operation = op.context(), error = %err, "request failed");
        reporter.capture(op.context(), err);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, op.failure_message())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::failure(self.message))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::reporting::mock::RecordingReporter;

    #[test]
    fn client_errors_are_not_reported() {
        let reporter = RecordingReporter::default();
        let cases = [
            (ServiceError::Validation("x".into()), StatusCode::BAD_REQUEST, "Missing required parameters"),
            (ServiceError::AuthRequired, StatusCode::UNAUTHORIZED, "Authentication required"),
            (ServiceError::Unauthorized, StatusCode::UNAUTHORIZED, "Invalid authentication"),
            (ServiceError::not_found("service"), StatusCode::NOT_FOUND, "Service not found"),
        ];
        for (err, status, message) in cases {
            let api = ApiError::from_service(err, Operation::RequestService, &reporter);
            assert_eq!(api.status, status);
            assert_eq!(api.message, message);
        }
        assert_eq!(reporter.count(), 0);
    }

    #[test]
    fn internal_errors_are_reported_and_masked() {
        let reporter = RecordingReporter::default();
        let api = ApiError::from_service(
            ServiceError::Db("relation \"service\" does not exist".into()),
            Operation::ListServices,
            &reporter,
        );
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "Failed to fetch services");
        let captured = reporter.captured();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].context, "list_services");
        assert!(captured[0].message.contains("does not exist"));
    }

    #[test]
    fn upstream_errors_use_the_health_message() {
        let reporter = RecordingReporter::default();
        let err = ServiceError::from(common::CoreError::Status(502));
        let api = ApiError::from_service(err, Operation::AiHealth, &reporter);
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "AI service health check failed");
        assert_eq!(reporter.captured()[0].context, "ai_health");
    }
}
