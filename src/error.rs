//! the [`ReadError`] enum
use std::{io, str::Utf8Error};

/// error returned by reader operations
///
/// end of stream is not represented here, see [`ReadResult::Eof`]
///
/// [`ReadResult::Eof`]: crate::common::ReadResult::Eof
#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    /// a fixed-format token did not match
    #[error("malformed token: unexpected byte `{}` at position {}", .found.escape_ascii(), .at)]
    MalformedToken {
        /// the offending byte
        found: u8,
        /// zero-based position of the offending byte within the token
        at: usize,
    },
    /// a header line is missing the colon separator
    #[error("invalid header line")]
    InvalidHeader,
    /// the body ended before the declared length
    #[error("unexpected end of stream")]
    UnexpectedEof,
    /// header or reason text is not valid utf8
    #[error("invalid utf8: {0}")]
    InvalidString(#[from] Utf8Error),
    /// transport fault, passed through unchanged
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
