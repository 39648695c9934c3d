//! Directory store - the public contract and its in-memory implementation.

mod memory;
mod seed;

pub use memory::InMemoryUserStore;
pub use seed::seed_users;

use crate::domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User directory trait for dependency injection.
///
/// The embedding application constructs one store at startup and hands it
/// to all callers as an `Arc<dyn UserDirectory>`. Every operation is
/// synchronous and safe to invoke from concurrent callers.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserDirectory: Send + Sync {
    /// Look up a user by email and exact password match.
    ///
    /// Returns `None` when the email is unknown or the stored password
    /// differs. Plain string equality, no hashing: the directory holds
    /// demo credentials only.
    fn find_by_login_details(&self, email: &str, password: &str) -> Option<User>;

    /// Insert or replace the record keyed by `user.email`.
    ///
    /// Last-write-wins: an existing record with the same email is replaced
    /// wholesale, roles included. Always succeeds.
    fn create_or_update(&self, user: User);

    /// Add `role` to the user's role set, in place.
    ///
    /// Returns `false` and mutates nothing when the email is unknown.
    /// Adding a role the user already carries is a no-op that still
    /// returns `true`.
    fn add_role(&self, email: &str, role: &str) -> bool;

    /// Snapshot of all current records, in arbitrary order.
    fn get_all(&self) -> Vec<User>;

    /// Fraction of users carrying the author role.
    ///
    /// Recomputed from live data on every call, never cached. An empty
    /// directory reports `0.0`.
    fn authors_percentage(&self) -> f64;
}
