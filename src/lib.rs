//! # Yomu
//!
//! yomu is an incremental HTTP/1.x response reader
//!
//! it consumes an already-open byte stream one token at a time, a line, a
//! version, a status code, a header, and reports exactly what it found even
//! when the stream ends mid token, see [`ReadResult`]
#![warn(missing_debug_implementations)]
pub mod bytestr;
pub mod version;
pub mod header;
pub mod status;
pub mod response;

pub mod common;
pub mod error;

pub mod reader;
pub mod body;

pub use bytestr::ByteStr;
pub use version::Version;
pub use header::Header;
pub use status::StatusLine;
pub use response::Response;
pub use common::ReadResult;
pub use error::ReadError;
pub use reader::Reader;
pub use body::Body;
