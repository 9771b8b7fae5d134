use crate::models::User;

/// Read-only view over the seeded accounts.
pub struct UserRepository<'a> {
    users: &'a [User],
}

impl<'a> UserRepository<'a> {
    #[must_use]
    pub const fn new(users: &'a [User]) -> Self {
        Self { users }
    }

    /// Exact, case-sensitive match on both username and password.
    #[must_use]
    pub fn find_by_credentials(&self, username: &str, password: &str) -> Option<User> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned()
    }

    #[must_use]
    pub fn get_by_id(&self, id: i32) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed;

    #[test]
    fn test_find_by_credentials() {
        let users = seed::users();
        let repo = UserRepository::new(&users);

        assert_eq!(repo.find_by_credentials("hassan", "1122").map(|u| u.id), Some(1));
        assert_eq!(repo.find_by_credentials("tariq", "1122").map(|u| u.id), Some(2));
        assert!(repo.find_by_credentials("hassan", "wrong").is_none());
        assert!(repo.find_by_credentials("Hassan", "1122").is_none());
        assert!(repo.find_by_credentials("", "").is_none());
    }

    #[test]
    fn test_get_by_id() {
        let users = seed::users();
        let repo = UserRepository::new(&users);

        assert_eq!(repo.get_by_id(2).map(|u| u.username), Some("tariq".to_string()));
        assert!(repo.get_by_id(99).is_none());
    }
}
