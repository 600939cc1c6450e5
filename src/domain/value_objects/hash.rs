//! SHA-256 fingerprint of a combined document.
//!
//! Printed after every build so two CI runs can be compared at a glance.

use std::fmt::{self, Write as _};

use sha2::{Digest, Sha256};

/// Raw SHA-256 digest, rendered as `sha256:<hex>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    pub const ALGORITHM: &'static str = "sha256";

    pub fn from_content(content: &str) -> Self {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&Sha256::digest(content.as_bytes()));
        Self(bytes)
    }

    /// Lowercase hex digest with no algorithm label
    pub fn hex(&self) -> String {
        self.0.iter().fold(String::with_capacity(64), |mut out, byte| {
            let _ = write!(out, "{byte:02x}");
            out
        })
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", Self::ALGORITHM, self.hex())
    }
}
