//! Code point counting over text and raw bytes.

use crate::error::{DecodeError, Result};
use crate::policy::InvalidPolicy;

/// Number of Unicode code points in `s`.
///
/// This is not `s.len()`, which counts UTF-8 bytes: `"résumé"` is 8 bytes
/// and 6 code points.
#[inline]
pub fn rune_len(s: &str) -> usize {
    s.chars().count()
}

/// Number of Unicode code points in `bytes`, applying `policy` to any
/// sequence that is not valid UTF-8.
///
/// For valid UTF-8 the result equals [`rune_len`] under every policy.
pub fn count_bytes(bytes: &[u8], policy: InvalidPolicy) -> Result<usize> {
    let mut runes = 0usize;
    let mut invalid_bytes = 0usize;
    let mut invalid_sequences = 0usize;
    let mut consumed = 0usize;
    let mut rest = bytes;

    loop {
        let err = match std::str::from_utf8(rest) {
            Ok(valid) => {
                runes += rune_len(valid);
                break;
            }
            Err(err) => err,
        };

        let good = err.valid_up_to();
        runes += count_valid_prefix(&rest[..good]);

        let bad = err.error_len().unwrap_or(rest.len() - good);
        match policy {
            InvalidPolicy::Strict => {
                return Err(DecodeError::InvalidUtf8 {
                    offset: consumed + good,
                    len: err.error_len(),
                });
            }
            InvalidPolicy::Lossy => runes += 1,
            InvalidPolicy::PerByte => runes += bad,
        }

        invalid_bytes += bad;
        invalid_sequences += 1;
        consumed += good + bad;
        rest = &rest[good + bad..];
    }

    if invalid_sequences > 0 {
        tracing::debug!(
            policy = %policy,
            invalid_sequences,
            invalid_bytes,
            "counted invalid utf-8"
        );
    }
    Ok(runes)
}

// Prefix already validated by from_utf8; every code point has exactly one
// non-continuation byte.
fn count_valid_prefix(prefix: &[u8]) -> usize {
    prefix.iter().filter(|&&b| (b & 0xC0) != 0x80).count()
}
