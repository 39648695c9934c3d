//! Role constants shared across the crate.
//!
//! Roles are open-ended string tags; these cover the ones the seed data
//! uses. Callers may add arbitrary further roles (e.g. "editor").

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

/// Content author role, the subject of the authors gauge
pub const ROLE_AUTHOR: &str = "author";

/// Plain subscriber role
pub const ROLE_SUBSCRIBER: &str = "subscriber";
