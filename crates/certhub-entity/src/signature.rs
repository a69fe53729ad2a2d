//! Device signature value object.

use serde::{Deserialize, Serialize};

/// Client-supplied, self-asserted tuple identifying the calling device.
///
/// Carried base64-encoded in a request header. Exactly these three keys:
/// `deny_unknown_fields` rejects extras, and every field is required, so a
/// payload with a missing or surplus key fails deserialization. Not
/// cryptographically proven — used only as a correlation key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeviceSignature {
    /// Opaque per-device identifier chosen by the client.
    pub unique_id: String,
    /// User-Agent string of the calling device/browser.
    pub user_agent: String,
    /// Observed client IP address.
    pub ip_address: String,
}
