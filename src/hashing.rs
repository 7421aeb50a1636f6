//! Hashing - SHA-256 digests of configuration and generated headers
//!
//! Two runs over the same configuration must produce the same header digest.

use sha2::{Digest, Sha256};

use crate::config::GeneratorConfig;

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Digest of the configuration a header was generated from.
///
/// The configuration holds only structs and lists, so its compact JSON is
/// already canonical: fields serialize in declaration order, lists in
/// configured order.
pub fn compute_config_hash(config: &GeneratorConfig) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(config)?;
    Ok(sha256_hex(json.as_bytes()))
}

pub fn compute_header_hash(text: &str) -> String {
    sha256_hex(text.as_bytes())
}
