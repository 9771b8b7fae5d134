//! In-memory storage for users, facts, and issued tokens.
//!
//! Nothing here is persisted: every process starts from the seed data in
//! [`seed`] and loses all created facts and tokens on exit.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{Fact, User};

pub mod repositories;
pub mod seed;

#[derive(Clone)]
pub struct Store {
    users: Arc<[User]>,
    facts: Arc<RwLock<Vec<Fact>>>,
    tokens: Arc<RwLock<HashMap<String, i32>>>,
}

impl Store {
    #[must_use]
    pub fn new(users: Vec<User>, facts: Vec<Fact>) -> Self {
        Self {
            users: users.into(),
            facts: Arc::new(RwLock::new(facts)),
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store populated with the demo accounts and facts.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::users(), seed::facts())
    }

    fn user_repo(&self) -> repositories::user::UserRepository<'_> {
        repositories::user::UserRepository::new(&self.users)
    }

    fn fact_repo(&self) -> repositories::fact::FactRepository<'_> {
        repositories::fact::FactRepository::new(&self.facts)
    }

    fn token_repo(&self) -> repositories::token::TokenRepository<'_> {
        repositories::token::TokenRepository::new(&self.tokens)
    }

    // ========================================================================
    // Users
    // ========================================================================

    #[must_use]
    pub fn find_user_by_credentials(&self, username: &str, password: &str) -> Option<User> {
        self.user_repo().find_by_credentials(username, password)
    }

    #[must_use]
    pub fn get_user(&self, id: i32) -> Option<User> {
        self.user_repo().get_by_id(id)
    }

    // ========================================================================
    // Facts
    // ========================================================================

    pub async fn list_facts(&self) -> Vec<Fact> {
        self.fact_repo().list().await
    }

    pub async fn insert_fact(&self, owner: &str, cat_fact: &str) -> Fact {
        self.fact_repo().insert(owner, cat_fact).await
    }

    // ========================================================================
    // Tokens
    // ========================================================================

    pub async fn record_token(&self, token: &str, user_id: i32) {
        self.token_repo().record(token, user_id).await;
    }

    pub async fn resolve_token(&self, token: &str) -> Option<i32> {
        self.token_repo().resolve(token).await
    }

    pub async fn issued_token_count(&self) -> usize {
        self.token_repo().count().await
    }
}
