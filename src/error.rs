//! Decode and encode error types.

use thiserror::Error;

/// Decode failure reported by the JSON codec, propagated verbatim.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct DecodeError(#[from] serde_json::Error);

/// Encode failure.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The undefined sentinel has no JSON representation and the caller
    /// requested no omission mechanism for it.
    #[error("value is undefined")]
    Undefined,
    /// Failure reported by the JSON codec, propagated verbatim.
    #[error(transparent)]
    Codec(serde_json::Error),
}
