//! # certhub-auth
//!
//! The CertHub identity core: passwordless login, device-bound sessions,
//! short-lived signed tokens, and cross-organization permission checks.
//!
//! ## Modules
//!
//! - `hasher` — deterministic, content-derived identifier digests
//! - `signature` — device-signature header decoding and validation
//! - `code` — one-time login code issuance and verification
//! - `session` — device-bound session lifecycle and per-request checks
//! - `token` — signed token creation and validation
//! - `permission` — organization and internal permission policy
//!
//! Issuance path: `signature` → `code` → `session` → `token`. On every
//! subsequent request: `token` → `session::check_session` → `permission`.

pub mod code;
pub mod error;
pub mod hasher;
pub mod identity;
pub mod permission;
pub mod session;
pub mod signature;
pub mod token;

pub use code::AuthCodeFlow;
pub use error::AuthError;
pub use identity::Identity;
pub use permission::PermissionPolicy;
pub use session::SessionManager;
pub use signature::SignatureCodec;
pub use token::{Claims, TokenDecoder, TokenEncoder};
