//! # certhub-store
//!
//! Persistence collaborator for CertHub identity records. Defines the
//! store traits the identity core consumes and two providers:
//!
//! - `memory` — dashmap-backed, for development and tests
//! - `postgres` — sqlx-backed, for deployment
//!
//! The provider is selected from configuration at startup. Every Postgres
//! call runs under a per-operation deadline; an elapsed deadline surfaces
//! as a transient `Timeout` error.

pub mod memory;
pub mod postgres;
pub mod provider;
pub mod traits;

pub use provider::Stores;
pub use traits::{AccountStore, AuthCodeStore, OrganizationStore, SessionStore};
