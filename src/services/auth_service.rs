//! Domain service for login and bearer-token authentication.

use thiserror::Error;

use crate::models::{AuthenticatedUser, UserData};

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,
}

/// Login result containing the issued token and public user data.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub user_data: UserData,
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Verifies credentials and issues the user's token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if no user matches.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AuthError>;

    /// Resolves a bearer token to the user it was issued for.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] if the token was never issued or
    /// its user no longer exists.
    async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
