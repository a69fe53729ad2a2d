//! Deterministic identity digests.
//!
//! Every identifier in the platform — account, session, code — is derived
//! from content, never generated randomly: the same email always yields the
//! same account id, which makes lookups idempotent and duplicate detection
//! a pure existence check. The digest is SHA-1: a fixed 160-bit,
//! collision-resistant function used strictly for identifier derivation,
//! not secrecy.
//!
//! Argument order matters — the parts are concatenated without a separator,
//! so each identifier type fixes its order through the typed helpers below.

use chrono::{DateTime, Utc};
use sha1::{Digest, Sha1};

use certhub_entity::signature::DeviceSignature;

/// Digest the given parts, in call order, into a 40-char lowercase hex id.
pub fn identity_hash(parts: &[&str]) -> String {
    let mut hasher = Sha1::new();
    for part in parts {
        hasher.update(part.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Account identifier: digest of the normalized (trimmed, lowercased) email.
pub fn account_id(email: &str) -> String {
    identity_hash(&[email.trim().to_lowercase().as_str()])
}

/// One-time-code identifier: digest of (userAgent, uniqueId) — one
/// outstanding code per device signature.
pub fn code_id(user_agent: &str, unique_id: &str) -> String {
    identity_hash(&[user_agent, unique_id])
}

/// Session identifier: digest of (device, account, expiry).
///
/// The expiry enters as epoch milliseconds so that successive logins from
/// the same device produce distinct identifiers.
pub fn session_id(device_id: &str, account_id: &str, expires_at: DateTime<Utc>) -> String {
    identity_hash(&[
        device_id,
        account_id,
        &expires_at.timestamp_millis().to_string(),
    ])
}

/// Correlation digest of a full device signature, stored on the session.
pub fn signature_hash(signature: &DeviceSignature) -> String {
    code_id(&signature.user_agent, &signature.unique_id)
}

/// The value matched against the internal-organization allow-list.
pub fn organization_key(organization_id: &str) -> String {
    identity_hash(&[organization_id])
}
