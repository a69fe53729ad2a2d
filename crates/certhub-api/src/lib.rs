//! # certhub-api
//!
//! HTTP surface for the CertHub identity core: Axum routes, extractors for
//! the device-signature header and bearer-token auth, request/response
//! DTOs, and the error-to-status mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
