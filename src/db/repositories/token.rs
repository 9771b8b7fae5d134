use std::collections::HashMap;
use tokio::sync::RwLock;

/// Issued tokens mapped to the user they were issued for.
/// Entries are never removed.
pub struct TokenRepository<'a> {
    tokens: &'a RwLock<HashMap<String, i32>>,
}

impl<'a> TokenRepository<'a> {
    #[must_use]
    pub const fn new(tokens: &'a RwLock<HashMap<String, i32>>) -> Self {
        Self { tokens }
    }

    pub async fn record(&self, token: &str, user_id: i32) {
        self.tokens.write().await.insert(token.to_string(), user_id);
    }

    pub async fn resolve(&self, token: &str) -> Option<i32> {
        self.tokens.read().await.get(token).copied()
    }

    pub async fn count(&self) -> usize {
        self.tokens.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_is_idempotent() {
        let tokens = RwLock::new(HashMap::new());
        let repo = TokenRepository::new(&tokens);

        repo.record("abc", 1).await;
        repo.record("abc", 1).await;
        repo.record("def", 2).await;

        assert_eq!(repo.count().await, 2);
        assert_eq!(repo.resolve("abc").await, Some(1));
        assert_eq!(repo.resolve("def").await, Some(2));
        assert_eq!(repo.resolve("nope").await, None);
    }
}
