//! Organization service.

pub mod service;

pub use service::OrganizationService;
