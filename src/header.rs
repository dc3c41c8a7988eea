//! the [`Header`] struct
use crate::bytestr::ByteStr;

/// an http header
///
/// name and value are trimmed of surrounding whitespace. headers are
/// collected in wire order into a `Vec<Header>`, duplicates allowed
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub name: ByteStr,
    pub value: ByteStr,
}

impl Header {
    /// create empty header
    pub const fn new() -> Header {
        Header {
            name: ByteStr::new(),
            value: ByteStr::new(),
        }
    }

    /// `true` if the header name matches, ascii case insensitive
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl std::fmt::Debug for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Header")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}
