//! Deterministic identifier generation (spec.md §4.2).
//!
//! SHA-1 over a pre-hash key string, truncated to the first 16 hex
//! characters (64 bits). Collisions are not defended against; the key space
//! is the caller's responsibility, same as the Python original's reliance on
//! `hashlib.sha1(...).hexdigest()[:16]`.

use sha1::{Digest, Sha1};

const ID_HEX_LEN: usize = 16;

/// Hash an arbitrary pre-hash key into a 16-hex-character identifier.
pub fn hash_id(prehash_key: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(prehash_key.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)[..ID_HEX_LEN].to_string()
}

/// `"{normalized_name}|metal"`
pub fn metal_id(name_norm: &str) -> String {
    hash_id(&format!("{name_norm}|metal"))
}

/// `"{normalized_name}|basket"`
pub fn basket_id(name_norm: &str) -> String {
    hash_id(&format!("{name_norm}|basket"))
}

/// `"{country}.{admin1_code}|place"`
pub fn place_id(country: &str, admin1_code: &str) -> String {
    hash_id(&format!("{country}.{admin1_code}|place"))
}

/// `"{normalized_provider}|{normalized_ticker}"`
pub fn instrument_id(provider_norm: &str, ticker_norm: &str) -> String {
    hash_id(&format!("{provider_norm}|{ticker_norm}"))
}

/// `"{normalized_unit_name}|unit"`
pub fn unit_id(unit_name_norm: &str) -> String {
    hash_id(&format!("{unit_name_norm}|unit"))
}
