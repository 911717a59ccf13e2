// src/utils/error.rs

use thiserror::Error;

/// The primary error type for all compress and decompress operations.
///
/// Broken tree invariants are deliberately absent from this enum: a violated
/// invariant is a programming defect and panics, since carrying on would
/// desynchronize the encoder and decoder trees for every later symbol.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("compressed stream ended before the declared bit count was consumed")]
    TruncatedStream,
}

/// A specialized `Result` type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
