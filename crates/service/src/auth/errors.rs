use thiserror::Error;

/// Business errors for the authentication gate
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication required")]
    MissingCredentials,
    /// Deliberately does not say whether the id or the token was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("repository error: {0}")]
    Repository(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::MissingCredentials => 1001,
            AuthError::InvalidCredentials => 1004,
            AuthError::Repository(_) => 1200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_per_outcome() {
        let codes = [
            AuthError::MissingCredentials.code(),
            AuthError::InvalidCredentials.code(),
            AuthError::Repository("down".into()).code(),
        ];
        assert_eq!(codes, [1001, 1004, 1200]);
    }
}
