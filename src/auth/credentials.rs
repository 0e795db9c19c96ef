//! Credential records
//!
//! The persisted tuple for one registered user.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One registered user. Passwords are kept in plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// All users keyed by lowercased username
pub type Users = BTreeMap<String, UserRecord>;

impl UserRecord {
    /// Build a record, lowercasing the username and email keys
    pub fn new(username: &str, email: &str, password: &str) -> Self {
        Self {
            username: username.to_lowercase(),
            email: email.to_lowercase(),
            password: password.to_string(),
        }
    }
}

/// Case-insensitive "is this username taken" lookup
pub trait UsernameLookup {
    fn contains_username(&self, username: &str) -> bool;
}

impl UsernameLookup for Users {
    fn contains_username(&self, username: &str) -> bool {
        self.contains_key(&username.to_lowercase())
    }
}

impl UsernameLookup for std::collections::HashSet<String> {
    fn contains_username(&self, username: &str) -> bool {
        let wanted = username.to_lowercase();
        self.iter().any(|name| name.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_lowercases_keys() {
        let record = UserRecord::new("Alice", "Alice@Mail.COM", "Secret-Pass1");
        assert_eq!(record.username, "alice");
        assert_eq!(record.email, "alice@mail.com");
        assert_eq!(record.password, "Secret-Pass1");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut users = Users::new();
        users.insert(
            "alice".to_string(),
            UserRecord::new("alice", "a@mail.com", "x"),
        );
        assert!(users.contains_username("ALICE"));
        assert!(!users.contains_username("bob"));

        let names: HashSet<String> = ["Bob".to_string()].into_iter().collect();
        assert!(names.contains_username("bob"));
        assert!(names.contains_username("BOB"));
        assert!(!names.contains_username("alice"));
    }
}
