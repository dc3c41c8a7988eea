//! the [`StatusLine`] struct
use crate::{bytestr::ByteStr, version::Version};

/// the first line of an http response
///
/// the [`Default`] value is all zero, `code` is only ever `0` when the read
/// that produced it did not return ok
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub version: Version,
    pub code: u16,
    pub reason: ByteStr,
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.version, self.code, self.reason)
    }
}
