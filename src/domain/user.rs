//! User domain entity.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::constants::ROLE_ADMIN;

/// User domain entity.
///
/// The email doubles as the directory key. The password is demo-grade
/// cleartext and is never serialized, so the hosting layer cannot leak
/// it when rendering users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    /// Role tags; a set, so duplicates are impossible by construction
    pub roles: HashSet<String>,
}

impl User {
    /// Create a user with an empty role set
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
            roles: HashSet::new(),
        }
    }

    /// Create a user carrying the given roles
    pub fn with_roles(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        roles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut user = Self::new(first_name, last_name, email, password);
        user.roles = roles.into_iter().map(Into::into).collect();
        user
    }

    /// Check if the user carries the given role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Check if the user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_roles_deduplicates() {
        let user = User::with_roles("A", "B", "a@example.org", "pw", ["admin", "admin"]);
        assert_eq!(user.roles.len(), 1);
        assert!(user.is_admin());
    }

    #[test]
    fn test_new_has_no_roles() {
        let user = User::new("A", "B", "a@example.org", "pw");
        assert!(user.roles.is_empty());
        assert!(!user.has_role("admin"));
    }
}
