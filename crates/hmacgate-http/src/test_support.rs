//! Test-only request bodies.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;

/// A request body whose first read fails, like a connection reset mid-upload.
#[derive(Debug)]
pub(crate) struct FailingBody;

impl http_body::Body for FailingBody {
    type Data = Bytes;
    type Error = std::io::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<http_body::Frame<Self::Data>, Self::Error>>> {
        Poll::Ready(Some(Err(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset by peer",
        ))))
    }
}
