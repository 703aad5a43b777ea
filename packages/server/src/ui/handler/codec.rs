//! Inbound line framing.

use tokio_util::{
    bytes::BytesMut,
    codec::{Decoder, LinesCodec, LinesCodecError},
};

/// One framed unit read from a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundLine {
    /// A complete line, delimiter stripped
    Line(String),
    /// A line longer than the limit; its bytes are discarded up to the next delimiter
    TooLong,
}

/// `LinesCodec` that reports over-long lines as an item instead of an error.
///
/// `FramedRead` stops decoding buffered bytes after a decoder error, so lines
/// that arrived together with an over-long one would wait for the next read.
#[derive(Debug, Clone)]
pub struct InboundLineCodec {
    inner: LinesCodec,
}

impl InboundLineCodec {
    pub fn new(max_length: usize) -> Self {
        Self {
            inner: LinesCodec::new_with_max_length(max_length),
        }
    }
}

fn into_inbound(
    decoded: Result<Option<String>, LinesCodecError>,
) -> Result<Option<InboundLine>, LinesCodecError> {
    match decoded {
        Ok(line) => Ok(line.map(InboundLine::Line)),
        Err(LinesCodecError::MaxLineLengthExceeded) => Ok(Some(InboundLine::TooLong)),
        Err(e) => Err(e),
    }
}

impl Decoder for InboundLineCodec {
    type Item = InboundLine;
    type Error = LinesCodecError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<InboundLine>, LinesCodecError> {
        into_inbound(self.inner.decode(buf))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<InboundLine>, LinesCodecError> {
        into_inbound(self.inner.decode_eof(buf))
    }
}
