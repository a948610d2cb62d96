use serde::{Deserialize, Serialize};
use std::fmt;

/// How byte sequences that are not valid UTF-8 are counted.
///
/// Config files accept the CLI spellings too (`per-byte`), plus `replace`
/// for `lossy`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidPolicy {
    /// Fail on the first invalid sequence.
    Strict,
    /// One code point per maximal invalid subsequence, the way
    /// `String::from_utf8_lossy` inserts U+FFFD.
    #[default]
    #[serde(alias = "replace")]
    Lossy,
    /// One code point per invalid byte (Go's `utf8.RuneCount` convention).
    #[serde(alias = "per-byte")]
    PerByte,
}

impl InvalidPolicy {
    pub const ALL: [InvalidPolicy; 3] = [Self::Strict, Self::Lossy, Self::PerByte];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lossy => "lossy",
            Self::PerByte => "per_byte",
        }
    }
}

impl fmt::Display for InvalidPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
