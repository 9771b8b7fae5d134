use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    pub fact_id: i32,

    pub owner: String,

    pub cat_fact: String,
}

impl Fact {
    pub fn new(fact_id: i32, owner: impl Into<String>, cat_fact: impl Into<String>) -> Self {
        Self {
            fact_id,
            owner: owner.into(),
            cat_fact: cat_fact.into(),
        }
    }

    /// Whether `username` owns this fact, ignoring case.
    #[must_use]
    pub fn is_owned_by(&self, username: &str) -> bool {
        self.owner.eq_ignore_ascii_case(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_wire_format() {
        let fact = Fact::new(3, "Karim", "Cats like to swim 🌊");
        let json = serde_json::to_value(&fact).unwrap();

        assert_eq!(json["factId"], 3);
        assert_eq!(json["owner"], "Karim");
        assert_eq!(json["catFact"], "Cats like to swim 🌊");
    }

    #[test]
    fn test_is_owned_by_ignores_case() {
        let fact = Fact::new(1, "Tariq", "please like my website 🐸");
        assert!(fact.is_owned_by("tariq"));
        assert!(fact.is_owned_by("TARIQ"));
        assert!(!fact.is_owned_by("hassan"));
    }
}
