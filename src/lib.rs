//! In-memory user directory with seeded demo data.
//!
//! Holds a concurrent email-to-user map supporting credential lookup,
//! upsert, role management, full enumeration, and a derived authors
//! gauge the hosting layer samples on demand.
//!
//! # Architecture Layers
//!
//! - **domain**: the `User` entity and role constants
//! - **store**: the `UserDirectory` contract and its DashMap-backed store
//! - **metrics**: derived gauges computed from live directory data
//!
//! The crate deliberately stops at the store boundary: HTTP hosting,
//! dependency injection wiring, and metric reporting belong to the
//! embedding application, which holds the store behind an
//! `Arc<dyn UserDirectory>` handle.

pub mod domain;
pub mod metrics;
pub mod store;

// Re-export commonly used types at crate root
pub use domain::{User, ROLE_ADMIN, ROLE_AUTHOR, ROLE_SUBSCRIBER};
pub use store::{seed_users, InMemoryUserStore, UserDirectory};

#[cfg(any(test, feature = "test-utils"))]
pub use store::MockUserDirectory;
