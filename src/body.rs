//! response body reading
use bytes::{Bytes, BytesMut};
use tokio::io::AsyncRead;

use crate::{error::ReadError, reader::Reader};

/// remaining response payload, bounded by a declared length
///
/// created by [`Reader::read_body`]. the body borrows the reader, drains
/// its buffered bytes first, then reads the stream. bytes beyond the
/// declared length are left buffered for subsequent reads
pub struct Body<'a, S> {
    reader: &'a mut Reader<S>,
    remaining: usize,
}

impl<'a, S> Body<'a, S> {
    pub(crate) fn new(reader: &'a mut Reader<S>, length: usize) -> Body<'a, S> {
        Body { reader, remaining: length }
    }

    /// bytes not yet yielded
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<S: AsyncRead + Unpin> Body<'_, S> {
    /// next segment of the body
    ///
    /// returns `None` once the declared length has been yielded. if the
    /// stream ends short of it, the read that crosses the shortfall returns
    /// [`ReadError::UnexpectedEof`], after every available byte has been
    /// yielded, and the body terminates
    pub async fn chunk(&mut self) -> Option<Result<Bytes, ReadError>> {
        if self.remaining == 0 {
            return None;
        }

        if self.reader.buffer.is_empty() {
            match self.reader.fill().await {
                Ok(0) => {
                    self.remaining = 0;
                    return Some(Err(ReadError::UnexpectedEof));
                }
                Ok(_) => {}
                Err(err) => return Some(Err(err.into())),
            }
        }

        let len = usize::min(self.reader.buffer.len(), self.remaining);
        self.remaining -= len;
        Some(Ok(self.reader.buffer.split_to(len).freeze()))
    }

    /// consume the whole body into [`BytesMut`]
    pub async fn bytes_mut(mut self) -> Result<BytesMut, ReadError> {
        let mut buffer = BytesMut::with_capacity(self.remaining);
        while let Some(chunk) = self.chunk().await {
            buffer.extend_from_slice(&chunk?);
        }
        Ok(buffer)
    }

    /// consume the whole body into [`Bytes`]
    ///
    /// this is utility function that propagate [`Body::bytes_mut`]
    pub async fn bytes(self) -> Result<Bytes, ReadError> {
        Ok(self.bytes_mut().await?.freeze())
    }
}

impl<S> std::fmt::Debug for Body<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Body").field(&self.remaining).finish()
    }
}
