//! In-memory implementation of the `AuthService` trait.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::db::Store;
use crate::models::{AuthenticatedUser, UserData};
use crate::services::auth_service::{AuthError, AuthService, LoginResult};
use crate::services::token::TokenSigner;

pub struct InMemoryAuthService {
    store: Store,
    signer: TokenSigner,
}

impl InMemoryAuthService {
    #[must_use]
    pub const fn new(store: Store, signer: TokenSigner) -> Self {
        Self { store, signer }
    }
}

#[async_trait]
impl AuthService for InMemoryAuthService {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AuthError> {
        let Some(user) = self.store.find_user_by_credentials(username, password) else {
            debug!("Rejected login for {username:?}");
            return Err(AuthError::InvalidCredentials);
        };

        let token = self.signer.sign(user.id);
        self.store.record_token(&token, user.id).await;

        info!(user_id = user.id, "User {} logged in", user.username);

        Ok(LoginResult {
            token,
            user_data: UserData::from(&user),
        })
    }

    async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let user_id = self
            .store
            .resolve_token(token)
            .await
            .ok_or(AuthError::InvalidToken)?;

        let user = self
            .store
            .get_user(user_id)
            .ok_or(AuthError::InvalidToken)?;

        Ok(AuthenticatedUser::from(&user))
    }
}
