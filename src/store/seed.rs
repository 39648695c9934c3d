//! Fixed demo records loaded before the directory serves any caller.

use crate::domain::{User, ROLE_ADMIN, ROLE_AUTHOR, ROLE_SUBSCRIBER};

/// The six demo users the directory starts with.
///
/// Values are fixed; the test suite depends on them verbatim.
pub fn seed_users() -> Vec<User> {
    vec![
        User::with_roles("Bilbo", "Baggins", "bilbo@example.org", "bilbo123", [ROLE_ADMIN]),
        User::with_roles(
            "Frodo",
            "Baggins",
            "frodo@example.org",
            "frodo123",
            [ROLE_AUTHOR, ROLE_SUBSCRIBER],
        ),
        User::with_roles(
            "Gandalf",
            "the Grey",
            "gandalf@example.org",
            "gandalf123",
            [ROLE_AUTHOR],
        ),
        User::with_roles(
            "Aragorn",
            "son of Aratorn",
            "aragorn@example.org",
            "aragorn123",
            [ROLE_SUBSCRIBER],
        ),
        // Upstream seeded this record with aragorn's email in the email
        // field; corrected so the key-equals-email invariant holds from
        // the first insert. The password stays as shipped.
        User::with_roles(
            "Legolas",
            "son of Thranduil",
            "legolas@example.org",
            "aragorn123",
            [ROLE_SUBSCRIBER],
        ),
        User::new("Gimli", "son of Gloin", "gimli@example.org", "gimli123"),
    ]
}
