//! One-time authentication code entity.

pub mod model;

pub use model::AuthCode;
