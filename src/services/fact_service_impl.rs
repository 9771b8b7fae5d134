//! In-memory implementation of the `FactService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::db::Store;
use crate::models::Fact;
use crate::services::fact_service::{FactError, FactService};

pub struct InMemoryFactService {
    store: Store,
}

impl InMemoryFactService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FactService for InMemoryFactService {
    async fn list_facts(&self) -> Vec<Fact> {
        self.store.list_facts().await
    }

    async fn create_fact(&self, owner: &str, cat_fact: &str) -> Result<Fact, FactError> {
        if cat_fact.trim().is_empty() {
            return Err(FactError::Validation("Cat fact cannot be empty".to_string()));
        }

        let fact = self.store.insert_fact(owner, cat_fact).await;
        info!(fact_id = fact.fact_id, "New fact created by {}", fact.owner);

        Ok(fact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed;

    #[tokio::test]
    async fn test_create_appends_with_next_id() {
        let facts = InMemoryFactService::new(Store::seeded());

        let created = facts.create_fact("hassan", "Cats sleep a lot").await.unwrap();
        assert_eq!(created.fact_id, 8);
        assert_eq!(created.owner, "hassan");

        let all = facts.list_facts().await;
        assert_eq!(all.len(), 8);
        assert_eq!(all.last(), Some(&created));
    }

    #[tokio::test]
    async fn test_create_on_empty_store_yields_one() {
        let facts = InMemoryFactService::new(Store::new(seed::users(), Vec::new()));

        let first = facts.create_fact("tariq", "first").await.unwrap();
        let second = facts.create_fact("tariq", "second").await.unwrap();

        assert_eq!(first.fact_id, 1);
        assert_eq!(second.fact_id, 2);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_text() {
        let facts = InMemoryFactService::new(Store::seeded());

        for text in ["", "   ", "\n\t"] {
            assert!(matches!(
                facts.create_fact("hassan", text).await,
                Err(FactError::Validation(_))
            ));
        }
        assert_eq!(facts.list_facts().await.len(), 7);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_unique_ids() {
        let facts = std::sync::Arc::new(InMemoryFactService::new(Store::new(
            seed::users(),
            Vec::new(),
        )));

        let mut handles = Vec::new();
        for i in 0..20 {
            let facts = facts.clone();
            handles.push(tokio::spawn(async move {
                facts.create_fact("hassan", &format!("fact {i}")).await.unwrap().fact_id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }
}
