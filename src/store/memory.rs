//! In-memory directory backed by a concurrent map.

use dashmap::DashMap;

use super::seed::seed_users;
use super::UserDirectory;
use crate::domain::User;

/// Concrete `UserDirectory` backed by a `DashMap` keyed by email.
///
/// Each operation is atomic at the entry level: readers never observe a
/// partially written record, and `add_role` holds the entry's exclusive
/// guard across its check-then-mutate, so concurrent calls for the same
/// email cannot lose updates.
///
/// Invariant: every key equals the `email` field of its value.
pub struct InMemoryUserStore {
    users: DashMap<String, User>,
}

impl InMemoryUserStore {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// Create a directory pre-populated with the demo seed records
    pub fn with_seed() -> Self {
        let store = Self::new();
        for user in seed_users() {
            store.users.insert(user.email.clone(), user);
        }
        tracing::info!(count = store.users.len(), "user directory seeded");
        store
    }

    /// Number of records currently stored
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True when the directory holds no records
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory for InMemoryUserStore {
    fn find_by_login_details(&self, email: &str, password: &str) -> Option<User> {
        self.users
            .get(email)
            .filter(|entry| entry.password == password)
            .map(|entry| entry.value().clone())
    }

    fn create_or_update(&self, user: User) {
        tracing::debug!(email = %user.email, "upserting user");
        self.users.insert(user.email.clone(), user);
    }

    fn add_role(&self, email: &str, role: &str) -> bool {
        // get_mut keeps the entry exclusively locked across the insert
        match self.users.get_mut(email) {
            Some(mut entry) => {
                entry.roles.insert(role.to_string());
                tracing::debug!(email, role, "role added");
                true
            }
            None => false,
        }
    }

    fn get_all(&self) -> Vec<User> {
        self.users.iter().map(|entry| entry.value().clone()).collect()
    }

    fn authors_percentage(&self) -> f64 {
        crate::metrics::authors_percentage(&self.get_all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_always_matches_email() {
        let store = InMemoryUserStore::new();
        store.create_or_update(User::new("A", "B", "a@example.org", "pw"));
        store.create_or_update(User::new("C", "D", "c@example.org", "pw"));

        for entry in store.users.iter() {
            assert_eq!(entry.key(), &entry.value().email);
        }
    }

    #[test]
    fn test_add_role_unknown_email_leaves_store_untouched() {
        let store = InMemoryUserStore::with_seed();
        assert!(!store.add_role("unknown@example.org", "x"));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_add_role_is_idempotent() {
        let store = InMemoryUserStore::with_seed();
        assert!(store.add_role("gimli@example.org", "editor"));
        assert!(store.add_role("gimli@example.org", "editor"));

        let gimli = store
            .find_by_login_details("gimli@example.org", "gimli123")
            .unwrap();
        assert_eq!(gimli.roles.len(), 1);
        assert!(gimli.has_role("editor"));
    }
}
