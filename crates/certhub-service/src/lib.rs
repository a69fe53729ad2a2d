//! # certhub-service
//!
//! Thin services over the identity core: account registration and login
//! entry points, and organization enrollment. Business CRUD beyond the
//! identity fields lives elsewhere; these services own exactly what the
//! auth core needs from accounts and organizations.

pub mod account;
pub mod organization;

pub use account::AccountService;
pub use organization::OrganizationService;
