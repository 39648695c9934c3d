//! Domain layer - the user entity and role constants.

pub mod constants;
pub mod user;

pub use constants::*;
pub use user::User;
