//! Unicode code point ("rune") counting.
//!
//! A `str` in Rust is UTF-8, so its `len()` is a byte count. This crate
//! answers the other question: how many code points does the text hold.
//!
//! - [`rune_len`] counts code points in valid text
//! - [`count_bytes`] counts code points in arbitrary bytes under an
//!   [`InvalidPolicy`]
//! - [`TextStats`] pairs byte length and rune count for reporting
//! - [`CountConfig`] is the YAML configuration used by the `runelen` CLI
//!
//! # Quick Start
//!
//! ```
//! use runelen_core::{count_bytes, rune_len, InvalidPolicy};
//!
//! assert_eq!("résumé".len(), 8);
//! assert_eq!(rune_len("résumé"), 6);
//!
//! let bytes = b"caf\xc3";
//! assert!(count_bytes(bytes, InvalidPolicy::Strict).is_err());
//! assert_eq!(count_bytes(bytes, InvalidPolicy::Lossy).unwrap(), 4);
//! ```
//!
//! Code points are not graphemes: `"e\u{301}"` renders as one glyph but
//! counts as two.

pub mod config;
pub mod count;
pub mod error;
pub mod policy;
pub mod stats;

pub use config::{CountConfig, OutputFormat};
pub use count::{count_bytes, rune_len};
pub use error::{DecodeError, Result};
pub use policy::InvalidPolicy;
pub use stats::TextStats;
