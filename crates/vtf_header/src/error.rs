//! Error types that can be emitted from this library
//!

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Fewer bytes remain in the stream than a read requires
    #[error("input truncated at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        /// Absolute offset of the failed read
        offset: u64,
        /// Bytes the read required
        needed: u64,
        /// Bytes left in the stream
        remaining: u64,
    },

    /// File is not a valid VTF, the signature did not match
    #[error("file is not a valid vtf, signature did not match")]
    InvalidSignature,

    /// Resource count is negative or larger than the remaining stream could hold
    #[error("implausible resource count {0}")]
    InvalidResourceCount(i32),

    /// Key/value resource offset points outside the stream
    #[error("resource offset {0} points outside the stream")]
    InvalidResourceOffset(i32),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
