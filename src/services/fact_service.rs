//! Domain service for listing and creating cat facts.

use thiserror::Error;

use crate::models::Fact;

#[derive(Debug, Error)]
pub enum FactError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

#[async_trait::async_trait]
pub trait FactService: Send + Sync {
    /// Every fact, unfiltered and unpaginated.
    async fn list_facts(&self) -> Vec<Fact>;

    /// Creates a fact owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::Validation`] if `cat_fact` is blank.
    async fn create_fact(&self, owner: &str, cat_fact: &str) -> Result<Fact, FactError>;
}
