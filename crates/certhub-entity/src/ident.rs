//! Identifier format validation.
//!
//! Account and organization identifiers are 40-character lowercase hex
//! strings: accounts derive theirs from the owner's email address, while
//! organization identifiers are externally supplied in the same format.

use certhub_core::error::AppError;

/// Length of every content-derived identifier (160-bit digest, hex).
pub const IDENTIFIER_LEN: usize = 40;

/// Check that `id` is a well-formed 40-hex identifier.
pub fn validate_identifier(id: &str) -> Result<(), AppError> {
    if id.len() != IDENTIFIER_LEN {
        return Err(AppError::validation(format!(
            "Identifier must be {IDENTIFIER_LEN} hex characters, got {}",
            id.len()
        )));
    }
    if !id.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AppError::validation(
            "Identifier must contain only hex characters",
        ));
    }
    Ok(())
}
