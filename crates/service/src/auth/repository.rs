use async_trait::async_trait;

use super::domain::AuthUser;
use super::errors::AuthError;

/// Repository abstraction for user lookups.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// User whose id and token both match exactly.
    async fn find_by_credentials(&self, user_id: i32, token: &str) -> Result<Option<AuthUser>, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<HashMap<i32, (AuthUser, String)>>, // key: user id, value: (user, token)
        fail_with: Option<String>,
    }

    impl MockUserRepository {
        /// Every lookup fails with a repository error.
        pub fn failing(msg: &str) -> Self {
            Self { fail_with: Some(msg.to_string()), ..Default::default() }
        }

        pub fn with_user(self, id: i32, token: &str) -> Self {
            let user = AuthUser { id, email: format!("user{}@example.com", id), name: format!("User {}", id) };
            self.users.lock().unwrap_or_else(|e| e.into_inner()).insert(id, (user, token.to_string()));
            self
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_credentials(&self, user_id: i32, token: &str) -> Result<Option<AuthUser>, AuthError> {
            if let Some(msg) = &self.fail_with {
                return Err(AuthError::Repository(msg.clone()));
            }
            let users = self.users.lock().unwrap_or_else(|e| e.into_inner());
            Ok(users.get(&user_id).filter(|(_, t)| t == token).map(|(u, _)| u.clone()))
        }
    }
}
