//! Short, prefixed audit identifiers (`vrts_` + 8 hex chars).

use std::fmt;

use rand::RngCore;
use serde::{Deserialize, Serialize};

const PREFIX: &str = "vrts_";
const HEX_LEN: usize = 8;

/// A short unique identifier for one audit, e.g. `vrts_9f3a2b10`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditId(String);

impl AuditId {
    /// Generate a new random audit id.
    pub fn generate() -> Self {
        let mut bytes = [0u8; HEX_LEN / 2];
        rand::thread_rng().fill_bytes(&mut bytes);
        let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        Self(format!("{PREFIX}{hex}"))
    }

    /// Parse an existing audit id, validating the `vrts_` + 8 hex chars shape.
    pub fn parse(raw: &str) -> Option<Self> {
        let suffix = raw.strip_prefix(PREFIX)?;
        if suffix.len() != HEX_LEN || !suffix.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuditId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AuditId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_match_shape() {
        let id = AuditId::generate();
        assert!(id.as_str().starts_with(PREFIX));
        assert_eq!(id.as_str().len(), PREFIX.len() + HEX_LEN);
        assert!(AuditId::parse(id.as_str()).is_some());
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(AuditId::parse("vrts_zzzzzzzz").is_none()); // not hex
        assert!(AuditId::parse("vrts_abc").is_none()); // too short
        assert!(AuditId::parse("wrong_9f3a2b10").is_none()); // wrong prefix
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = AuditId::generate();
        let b = AuditId::generate();
        assert_ne!(a, b);
    }
}
