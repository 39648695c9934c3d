//! Derived directory metrics, exposed as plain callbacks for the host to poll.

use std::sync::Arc;

use crate::domain::{User, ROLE_AUTHOR};
use crate::store::UserDirectory;

/// Fraction of `users` carrying the author role, in floating point.
///
/// Empty input reports `0.0` rather than dividing by zero, keeping the
/// value poll-safe for a gauge.
pub fn authors_percentage(users: &[User]) -> f64 {
    if users.is_empty() {
        return 0.0;
    }
    let authors = users.iter().filter(|user| user.has_role(ROLE_AUTHOR)).count();
    authors as f64 / users.len() as f64
}

/// Package the authors percentage as a gauge callback over a shared
/// directory handle.
///
/// The hosting layer samples the returned closure on its own schedule;
/// each call recomputes from live data.
pub fn authors_gauge(directory: Arc<dyn UserDirectory>) -> impl Fn() -> f64 {
    move || directory.authors_percentage()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_reports_zero() {
        assert_eq!(authors_percentage(&[]), 0.0);
    }

    #[test]
    fn test_counts_author_role_only() {
        let users = vec![
            User::with_roles("A", "A", "a@example.org", "pw", [ROLE_AUTHOR]),
            User::with_roles("B", "B", "b@example.org", "pw", ["subscriber"]),
        ];
        assert_eq!(authors_percentage(&users), 0.5);
    }
}
