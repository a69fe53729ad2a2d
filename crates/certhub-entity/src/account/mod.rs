//! Account entity and role enumeration.

pub mod model;
pub mod role;

pub use model::Account;
pub use role::AccountRole;
