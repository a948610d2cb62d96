use serde::Serialize;

use crate::count::{count_bytes, rune_len};
use crate::error::Result;
use crate::policy::InvalidPolicy;

/// Byte length and code point count of one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// Encoded length in bytes.
    pub bytes: usize,
    /// Number of code points.
    pub runes: usize,
}

impl TextStats {
    pub fn of(s: &str) -> Self {
        Self {
            bytes: s.len(),
            runes: rune_len(s),
        }
    }

    /// Stats for raw bytes. Fails only under [`InvalidPolicy::Strict`].
    pub fn from_bytes(bytes: &[u8], policy: InvalidPolicy) -> Result<Self> {
        Ok(Self {
            bytes: bytes.len(),
            runes: count_bytes(bytes, policy)?,
        })
    }

    /// True when every code point is a single byte.
    pub fn is_ascii(&self) -> bool {
        self.bytes == self.runes
    }
}
