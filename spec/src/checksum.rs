//! Record integrity checksums.
//!
//! The checksum is the first 16 hex digits of SHA-256 over the record's JSON
//! serialisation with keys sorted and the `checksum` field itself omitted.

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::model::ProofRecord;

/// Computes the checksum of `record`, ignoring its current `checksum` field.
#[must_use]
pub fn record_checksum(record: &ProofRecord) -> String {
    let mut value = serde_json::to_value(record).unwrap_or(Value::Null);
    if let Value::Object(map) = &mut value {
        map.remove("checksum");
    }
    let digest = Sha256::digest(value.to_string().as_bytes());
    hex::encode(&digest[..8])
}

/// Returns true if the stored checksum matches the record's contents.
#[must_use]
pub fn verify_checksum(record: &ProofRecord) -> bool {
    record.checksum == record_checksum(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeneratorContext;

    #[test]
    fn checksum_is_sixteen_hex_digits() {
        let record = GeneratorContext::default().generate_next(1);
        assert_eq!(record.checksum.len(), 16);
        assert!(record.checksum.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(verify_checksum(&record));
    }

    #[test]
    fn tampering_breaks_checksum() {
        let mut record = GeneratorContext::default().generate_next(4);
        record.verified = !record.verified;
        assert!(!verify_checksum(&record));
    }

    #[test]
    fn checksum_ignores_stored_checksum() {
        let mut record = GeneratorContext::default().generate_next(2);
        let expected = record.checksum.clone();
        record.checksum = String::from("0000000000000000");
        assert_eq!(record_checksum(&record), expected);
    }
}
