//! Error types for NeoPop core operations.

use thiserror::Error;

/// Error type for color parsing operations.
///
/// Malformed input is rejected up front rather than being folded into a
/// garbage color value, so callers can surface the bad string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// Hex string had an invalid length.
    #[error("invalid hex length: {0} (expected 3 or 6)")]
    InvalidLength(usize),

    /// Invalid hexadecimal character.
    #[error("invalid hex character")]
    InvalidHexChar,
}
