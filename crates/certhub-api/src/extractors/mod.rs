//! Custom Axum extractors.

pub mod auth;
pub mod signature;

pub use auth::AuthSession;
pub use signature::SignatureHeader;
