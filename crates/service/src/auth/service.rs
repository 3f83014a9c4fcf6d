use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::domain::AuthUser;
use super::errors::AuthError;
use super::repository::UserRepository;

/// Per-request credential check, independent of the web framework.
#[derive(Clone)]
pub struct AuthGate {
    repo: Arc<dyn UserRepository>,
}

impl AuthGate {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self { Self { repo } }

    /// Authenticate `(user_id, token)`.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthGate, repository::mock::MockUserRepository, errors::AuthError};
    /// use std::sync::Arc;
    /// let gate = AuthGate::new(Arc::new(MockUserRepository::default().with_user(1, "t1")));
    /// let user = tokio_test::block_on(gate.authenticate(Some(1), Some("t1"))).unwrap();
    /// assert_eq!(user.id, 1);
    /// let denied = tokio_test::block_on(gate.authenticate(Some(1), None));
    /// assert!(matches!(denied, Err(AuthError::MissingCredentials)));
    /// ```
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, user_id: Option<i32>, token: Option<&str>) -> Result<AuthUser, AuthError> {
        let (Some(user_id), Some(token)) = (user_id, token.filter(|t| !t.is_empty())) else {
            let err = AuthError::MissingCredentials;
            debug!(code = err.code(), "credentials missing");
            return Err(err);
        };
        match self.repo.find_by_credentials(user_id, token).await? {
            Some(user) => Ok(user),
            None => {
                let err = AuthError::InvalidCredentials;
                warn!(user_id, code = err.code(), "authentication rejected");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::mock::MockUserRepository;

    fn gate() -> AuthGate {
        AuthGate::new(Arc::new(MockUserRepository::default().with_user(1, "t1").with_user(2, "t2")))
    }

    #[tokio::test]
    async fn accepts_exact_match() {
        let user = gate().authenticate(Some(2), Some("t2")).await.expect("authenticated");
        assert_eq!(user.id, 2);
    }

    #[tokio::test]
    async fn missing_or_empty_credentials() {
        let g = gate();
        for (id, token) in [(None, Some("t1")), (Some(1), None), (None, None), (Some(1), Some(""))] {
            let res = g.authenticate(id, token).await;
            assert!(matches!(res, Err(AuthError::MissingCredentials)), "id={id:?} token={token:?}");
        }
    }

    #[tokio::test]
    async fn mismatch_is_indistinguishable() {
        let g = gate();
        let unknown_id = g.authenticate(Some(99), Some("t1")).await.unwrap_err();
        let wrong_token = g.authenticate(Some(1), Some("t2")).await.unwrap_err();
        assert!(matches!(unknown_id, AuthError::InvalidCredentials));
        assert!(matches!(wrong_token, AuthError::InvalidCredentials));
        assert_eq!(unknown_id.to_string(), wrong_token.to_string());
        assert_eq!(unknown_id.code(), wrong_token.code());
    }

    #[tokio::test]
    async fn repository_failure_propagates() {
        let g = AuthGate::new(Arc::new(MockUserRepository::failing("connection reset")));
        let res = g.authenticate(Some(1), Some("t1")).await;
        assert!(matches!(res, Err(AuthError::Repository(_))));
    }
}
