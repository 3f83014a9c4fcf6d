use thiserror::Error;

use crate::auth::errors::AuthError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("authentication required")]
    AuthRequired,
    #[error("invalid authentication")]
    Unauthorized,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Faults that callers must only see as a generic failure.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ServiceError::Db(_) | ServiceError::Upstream(_) | ServiceError::Model(models::errors::ModelError::Db(_))
        )
    }
}

impl From<AuthError> for ServiceError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingCredentials => ServiceError::AuthRequired,
            AuthError::InvalidCredentials => ServiceError::Unauthorized,
            AuthError::Repository(msg) => ServiceError::Db(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}

impl From<common::CoreError> for ServiceError {
    fn from(e: common::CoreError) -> Self { ServiceError::Upstream(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn internal_classification() {
        assert!(ServiceError::Db("io".into()).is_internal());
        assert!(ServiceError::Model(ModelError::Db("io".into())).is_internal());
        assert!(!ServiceError::Model(ModelError::Validation("x".into())).is_internal());
        assert!(!ServiceError::Unauthorized.is_internal());
        assert!(!ServiceError::not_found("service").is_internal());
    }

    #[test]
    fn upstream_faults_are_internal() {
        let err = ServiceError::from(common::CoreError::Status(503));
        assert!(matches!(err, ServiceError::Upstream(_)));
        assert!(err.is_internal());
        assert_eq!(err.to_string(), "upstream error: upstream returned status 503");
    }

    #[test]
    fn auth_errors_map_to_service_errors() {
        assert!(matches!(ServiceError::from(AuthError::MissingCredentials), ServiceError::AuthRequired));
        assert!(matches!(ServiceError::from(AuthError::InvalidCredentials), ServiceError::Unauthorized));
        assert!(matches!(ServiceError::from(AuthError::Repository("down".into())), ServiceError::Db(_)));
    }
}
