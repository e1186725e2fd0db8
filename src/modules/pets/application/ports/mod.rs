pub mod auth;

pub use auth::{AuthSession, ADMIN_ROLE};
