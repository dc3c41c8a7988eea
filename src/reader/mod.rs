//! incremental response reading
//!
//! [`Reader`] owns an already-open byte stream and a fill buffer, and
//! consumes the stream one token at a time: a raw line, a version token, a
//! status code, a full status line, one header, the whole header block.
//!
//! Every operation returns a [`ReadResult`]: [`Ok`] when the token and its
//! delimiter were observed, [`Eof`] when the source exhausted first (with
//! whatever partial value was read, never silently dropped), [`Err`] on a
//! malformed token or a transport fault.
//!
//! Operations consume strictly increasing prefixes of the stream. Nothing
//! rewinds, nothing is read twice.
//!
//! [`Ok`]: ReadResult::Ok
//! [`Eof`]: ReadResult::Eof
//! [`Err`]: ReadResult::Err
use bytes::{Buf, Bytes, BytesMut};
use log::trace;
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::body::Body;
use crate::bytestr::ByteStr;
use crate::common::ReadResult;
use crate::error::ReadError;
use crate::header::Header;
use crate::response::Response;
use crate::status::StatusLine;
use crate::version::Version;


/// default fill buffer capacity
const INIT_CAPACITY: usize = 1024;

/// incremental http response reader
///
/// wraps a readable stream supplied by whoever manages the connection, the
/// reader never opens, closes, or reconnects it
pub struct Reader<S> {
    pub(crate) stream: S,
    pub(crate) buffer: BytesMut,
}

impl<S> Reader<S> {
    /// create a reader over an open stream
    pub fn new(stream: S) -> Reader<S> {
        Reader::with_capacity(INIT_CAPACITY, stream)
    }

    /// create a reader with a given initial buffer capacity
    pub fn with_capacity(capacity: usize, stream: S) -> Reader<S> {
        Reader {
            stream,
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    /// hand the underlying stream back
    ///
    /// bytes already pulled into the fill buffer are discarded
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: AsyncRead + Unpin> Reader<S> {
    /// read once into the fill buffer, `0` means end of stream
    pub(crate) async fn fill(&mut self) -> io::Result<usize> {
        let read = self.stream.read_buf(&mut self.buffer).await?;
        trace!("fill {read} bytes");
        Ok(read)
    }

    /// read raw bytes up to and including the next `\n`
    ///
    /// the line is returned verbatim, terminator included, stripping is the
    /// caller's choice. on end of stream the bytes read so far are still
    /// returned in [`ReadResult::Eof`]
    pub async fn read_line(&mut self) -> ReadResult<Bytes> {
        use ReadResult as Result;

        let mut scanned = 0;
        loop {
            if let Some(at) = self.buffer[scanned..].iter().position(|byte| *byte == b'\n') {
                return Result::Ok(self.buffer.split_to(scanned + at + 1).freeze());
            }
            scanned = self.buffer.len();

            match self.fill().await {
                Ok(0) => return Result::Eof(self.buffer.split().freeze()),
                Ok(_) => {}
                Err(err) => return Result::Err(err.into()),
            }
        }
    }

    /// read one `HTTP/<major>.<minor> ` token
    ///
    /// the pattern is matched byte by byte, case sensitive, and the trailing
    /// space is part of it: a structurally complete version string whose
    /// delimiter never arrives is [`ReadResult::Eof`] with the unset
    /// version, not a success
    pub async fn read_version(&mut self) -> ReadResult<Version> {
        use ReadResult as Result;

        const LEN: usize = b"HTTP/1.1 ".len();

        let mut at = 0;
        while at < LEN {
            let Some(&byte) = self.buffer.get(at) else {
                match self.fill().await {
                    Ok(0) => {
                        self.buffer.clear();
                        return Result::Eof(Version::default());
                    }
                    Ok(_) => continue,
                    Err(err) => return Result::Err(err.into()),
                }
            };

            let matched = match at {
                0..=4 => byte == b"HTTP/"[at],
                5 | 7 => byte.is_ascii_digit(),
                6 => byte == b'.',
                _ => byte == b' ',
            };
            if !matched {
                return Result::Err(ReadError::MalformedToken { found: byte, at });
            }
            at += 1;
        }

        let token = self.buffer.split_to(LEN);
        let version = Version::new(token[5] - b'0', token[7] - b'0');
        trace!("read version {version:?}");
        Result::Ok(version)
    }

    /// read one status code token
    ///
    /// the token runs up to the next space or line terminator. a space
    /// delimiter is consumed, a line terminator is a valid token end and is
    /// left for the next read. end of stream before any delimiter discards
    /// the partial digits and returns [`ReadResult::Eof`] with code `0`
    pub async fn read_status_code(&mut self) -> ReadResult<u16> {
        use ReadResult as Result;

        let mut at = 0;
        let token = loop {
            let Some(&byte) = self.buffer.get(at) else {
                match self.fill().await {
                    Ok(0) => {
                        self.buffer.clear();
                        return Result::Eof(0);
                    }
                    Ok(_) => continue,
                    Err(err) => return Result::Err(err.into()),
                }
            };

            match byte {
                // an empty token is never a silent code 0
                b' ' | b'\r' | b'\n' if at == 0 => {
                    return Result::Err(ReadError::MalformedToken { found: byte, at: 0 });
                }
                b' ' => {
                    let token = self.buffer.split_to(at);
                    self.buffer.advance(1);
                    break token;
                }
                b'\r' | b'\n' => break self.buffer.split_to(at),
                _ => at += 1,
            }
        };

        match parse_code(&token) {
            Ok(code) => {
                trace!("read status code {code}");
                Result::Ok(code)
            }
            Err(err) => Result::Err(err),
        }
    }

    /// read a full status line
    ///
    /// sequences [`read_version`], [`read_status_code`], then a raw line as
    /// the reason phrase with its terminator stripped. the contract is all
    /// or nothing: if the version or code step does not complete, the whole
    /// result is the zero [`StatusLine`]
    ///
    /// [`read_version`]: Reader::read_version
    /// [`read_status_code`]: Reader::read_status_code
    pub async fn read_status_line(&mut self) -> ReadResult<StatusLine> {
        use ReadResult as Result;

        let version = match self.read_version().await {
            Result::Ok(version) => version,
            Result::Eof(_) => return Result::Eof(StatusLine::default()),
            Result::Err(err) => return Result::Err(err),
        };

        let code = match self.read_status_code().await {
            Result::Ok(code) => code,
            Result::Eof(_) => return Result::Eof(StatusLine::default()),
            Result::Err(err) => return Result::Err(err),
        };

        // end of stream on the reason phrase is tolerated, the partial line
        // is the reason
        let line = match self.read_line().await {
            Result::Ok(line) | Result::Eof(line) => line,
            Result::Err(err) => return Result::Err(err),
        };

        let reason = match ByteStr::from_utf8(trim_terminator(line)) {
            Ok(reason) => reason,
            Err(err) => return Result::Err(err.into()),
        };

        let status = StatusLine {
            version,
            code,
            reason,
        };
        trace!("read status line {status:?}");
        Result::Ok(status)
    }

    /// read one header line
    ///
    /// returns `Ok(None)` on a line that is exactly the terminator, the
    /// normal end of the header block. otherwise the line splits at the
    /// first colon, name and value trimmed of surrounding whitespace. a
    /// non-blank line without a colon is [`ReadError::InvalidHeader`]
    pub async fn read_header(&mut self) -> ReadResult<Option<Header>> {
        use ReadResult as Result;

        let line = match self.read_line().await {
            Result::Ok(line) => line,
            // an unterminated header line reports end of stream, not a header
            Result::Eof(_) => return Result::Eof(None),
            Result::Err(err) => return Result::Err(err),
        };

        let line = trim_terminator(line);
        if line.is_empty() {
            trace!("read end of headers");
            return Result::Ok(None);
        }

        let Some(colon) = line.iter().position(|byte| *byte == b':') else {
            return Result::Err(ReadError::InvalidHeader);
        };

        let name = trim(line.slice(..colon));
        let value = trim(line.slice(colon + 1..));

        let header = match (ByteStr::from_utf8(name), ByteStr::from_utf8(value)) {
            (Ok(name), Ok(value)) => Header { name, value },
            (Err(err), _) | (_, Err(err)) => return Result::Err(err.into()),
        };

        trace!("read header {header:?}");
        Result::Ok(Some(header))
    }

    /// read headers until the end of the block
    ///
    /// end of stream mid-sequence is a soft stop: the headers collected so
    /// far are returned without error. parse faults still propagate
    pub async fn read_headers(&mut self) -> Result<Vec<Header>, ReadError> {
        let mut headers = Vec::new();
        loop {
            match self.read_header().await {
                ReadResult::Ok(Some(header)) => headers.push(header),
                ReadResult::Ok(None) | ReadResult::Eof(_) => break,
                ReadResult::Err(err) => return Err(err),
            }
        }
        Ok(headers)
    }

    /// read a status line and its header block
    pub async fn read_response(&mut self) -> ReadResult<Response> {
        use ReadResult as Result;

        let status = match self.read_status_line().await {
            Result::Ok(status) => status,
            Result::Eof(_) => return Result::Eof(Response::default()),
            Result::Err(err) => return Result::Err(err),
        };

        let headers = match self.read_headers().await {
            Ok(headers) => headers,
            Err(err) => return Result::Err(err),
        };

        Result::Ok(Response { status, headers })
    }

    /// hand out the remaining stream as a body bounded by `length` bytes
    ///
    /// bytes beyond `length` stay on the reader for subsequent reads, see
    /// [`Body`]
    pub fn read_body(&mut self, length: usize) -> Body<'_, S> {
        Body::new(self, length)
    }
}

impl<S> std::fmt::Debug for Reader<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader")
            .field("buffered", &self.buffer.len())
            .finish_non_exhaustive()
    }
}

/// parse a non-empty base 10 status code token
fn parse_code(token: &[u8]) -> Result<u16, ReadError> {
    let mut code = 0u16;
    for (at, byte) in token.iter().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(ReadError::MalformedToken { found: *byte, at });
        }
        code = code
            .checked_mul(10)
            .and_then(|code| code.checked_add(u16::from(byte - b'0')))
            .ok_or(ReadError::MalformedToken { found: *byte, at })?;
    }
    Ok(code)
}

/// strip one trailing `\r\n` or `\n`
fn trim_terminator(mut line: Bytes) -> Bytes {
    if line.last() == Some(&b'\n') {
        line.truncate(line.len() - 1);
        if line.last() == Some(&b'\r') {
            line.truncate(line.len() - 1);
        }
    }
    line
}

/// strip surrounding ascii whitespace
fn trim(bytes: Bytes) -> Bytes {
    let mut start = 0;
    let mut end = bytes.len();
    while start < end && bytes[start].is_ascii_whitespace() {
        start += 1;
    }
    while end > start && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    bytes.slice(start..end)
}
