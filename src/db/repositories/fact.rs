use tokio::sync::RwLock;

use crate::models::Fact;

pub struct FactRepository<'a> {
    facts: &'a RwLock<Vec<Fact>>,
}

impl<'a> FactRepository<'a> {
    #[must_use]
    pub const fn new(facts: &'a RwLock<Vec<Fact>>) -> Self {
        Self { facts }
    }

    /// All facts in insertion order.
    pub async fn list(&self) -> Vec<Fact> {
        self.facts.read().await.clone()
    }

    /// Appends a fact with id `max(existing) + 1`, or 1 when empty.
    /// Id assignment and append happen under one write lock.
    pub async fn insert(&self, owner: &str, cat_fact: &str) -> Fact {
        let mut facts = self.facts.write().await;

        let fact = Fact::new(next_fact_id(&facts), owner, cat_fact);
        facts.push(fact.clone());
        fact
    }
}

fn next_fact_id(facts: &[Fact]) -> i32 {
    facts.iter().map(|f| f.fact_id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_fact_id() {
        assert_eq!(next_fact_id(&[]), 1);

        let facts = [
            Fact::new(3, "a", "x"),
            Fact::new(10, "b", "y"),
            Fact::new(4, "c", "z"),
        ];
        assert_eq!(next_fact_id(&facts), 11);
    }

    #[tokio::test]
    async fn test_insert_into_empty_starts_at_one() {
        let facts = RwLock::new(Vec::new());
        let repo = FactRepository::new(&facts);

        let first = repo.insert("hassan", "first").await;
        let second = repo.insert("tariq", "second").await;

        assert_eq!(first.fact_id, 1);
        assert_eq!(second.fact_id, 2);
        assert_eq!(repo.list().await, vec![first, second]);
    }
}
