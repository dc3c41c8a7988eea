//! assembled response head
use crate::{bytestr::ByteStr, header::Header, status::StatusLine};

/// status line and ordered headers of one response
///
/// the body is not part of this struct, it stays on the stream and is
/// consumed separately through [`Reader::read_body`]
///
/// [`Reader::read_body`]: crate::reader::Reader::read_body
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: StatusLine,
    pub headers: Vec<Header>,
}

impl Response {
    /// first header value matching `name`, ascii case insensitive
    pub fn header(&self, name: &str) -> Option<&ByteStr> {
        self.headers
            .iter()
            .find_map(|header| header.is(name).then_some(&header.value))
    }

    /// declared content-length if any
    ///
    /// chunked content is not supported
    pub fn content_length(&self) -> Option<usize> {
        self.header("content-length")?.as_str().parse().ok()
    }
}

#[cfg(test)]
mod test {
    use super::Response;
    use crate::{bytestr::ByteStr, header::Header, status::StatusLine};

    fn header(name: &'static str, value: &'static str) -> Header {
        Header {
            name: ByteStr::from_static(name),
            value: ByteStr::from_static(value),
        }
    }

    #[test]
    fn test_header_lookup() {
        let response = Response {
            status: StatusLine::default(),
            headers: vec![
                header("Host", "localhost"),
                header("Content-Length", "5"),
                header("Vary", "gzip"),
                header("Vary", "br"),
            ],
        };

        assert_eq!(response.header("host").unwrap(), "localhost");
        assert_eq!(response.header("HOST").unwrap(), "localhost");
        // duplicates keep wire order, lookup returns the first
        assert_eq!(response.header("vary").unwrap(), "gzip");
        assert_eq!(response.content_length(), Some(5));
        assert!(response.header("connection").is_none());

        let empty = Response::default();
        assert!(empty.content_length().is_none());
    }
}
