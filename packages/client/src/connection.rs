//! Line-framed TCP connection to the server.

use tokio::net::{
    TcpStream,
    tcp::{OwnedReadHalf, OwnedWriteHalf},
};
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};

use crate::error::ClientError;

/// Incoming server lines, delimiter stripped
pub type LineReader = FramedRead<OwnedReadHalf, LinesCodec>;
/// Outgoing lines, delimiter appended
pub type LineWriter = FramedWrite<OwnedWriteHalf, LinesCodec>;

/// Connect to `addr` (`host:port`) and frame both directions by line.
pub async fn connect(addr: &str) -> Result<(LineReader, LineWriter), ClientError> {
    let stream = TcpStream::connect(addr)
        .await
        .map_err(|source| ClientError::Connect {
            addr: addr.to_string(),
            source,
        })?;
    let (read_half, write_half) = stream.into_split();

    Ok((
        FramedRead::new(read_half, LinesCodec::new()),
        FramedWrite::new(write_half, LinesCodec::new()),
    ))
}
