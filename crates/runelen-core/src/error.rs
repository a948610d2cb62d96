//! Error types for byte-level counting.

/// Result alias for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Invalid UTF-8 sequence found while counting in strict mode.
    ///
    /// `len` is the length of the offending sequence, or `None` when the
    /// input ends in the middle of a multi-byte sequence.
    #[error("invalid utf-8 at byte {offset}{}", describe_len(.len))]
    InvalidUtf8 { offset: usize, len: Option<usize> },
}

impl DecodeError {
    /// Byte offset of the first invalid sequence.
    pub fn offset(&self) -> usize {
        match self {
            Self::InvalidUtf8 { offset, .. } => *offset,
        }
    }

    /// True if the input was cut off mid-sequence rather than malformed.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::InvalidUtf8 { len: None, .. })
    }
}

fn describe_len(len: &Option<usize>) -> String {
    match len {
        Some(1) => " (1 byte)".to_string(),
        Some(n) => format!(" ({n} bytes)"),
        None => " (truncated sequence)".to_string(),
    }
}
