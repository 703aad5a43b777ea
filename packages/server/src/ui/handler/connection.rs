//! Per-connection session lifecycle.
//!
//! Each accepted connection runs three concurrent activities:
//!
//! - the reader loop: reads lines, reports activity, runs commands
//! - the flush loop: drains the session mailbox onto the socket
//! - the idle watchdog: evicts the session after the idle timeout
//!
//! Whichever ends first ends the session. The session is then unregistered
//! and an offline notice is broadcast to everyone still online.

use std::{fmt, io, sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use linechat_shared::time::{elapsed_secs, get_timestamp_millis};
use tokio::{
    io::{AsyncRead, AsyncWrite},
    net::TcpStream,
};
use tokio_util::{
    codec::{FramedRead, FramedWrite, LinesCodec, LinesCodecError},
    sync::CancellationToken,
};

use crate::{
    domain::{Mailbox, MailboxReceiver, Notice, PeerAddr, Session},
    ui::state::AppState,
};

use super::{
    codec::{InboundLine, InboundLineCodec},
    idle::{ActivitySignal, IdleSupervisor},
};

type LineReader<R> = FramedRead<R, InboundLineCodec>;
type LineWriter<W> = FramedWrite<W, LinesCodec>;

/// How long an evicted session's flush loop may take to write the kick
/// notice before it is aborted.
const EVICTION_GRACE: Duration = Duration::from_secs(5);

/// Why a session ended
#[derive(Debug)]
enum SessionEnd {
    /// Client closed the connection
    Disconnected,
    /// Reading from the connection failed
    ReadFailed(io::Error),
    /// Writing to the connection failed
    WriteFailed,
    /// No activity within the idle timeout
    Evicted,
}

impl fmt::Display for SessionEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionEnd::Disconnected => f.write_str("disconnected"),
            SessionEnd::ReadFailed(e) => write!(f, "read failed ({})", e),
            SessionEnd::WriteFailed => f.write_str("write failed"),
            SessionEnd::Evicted => f.write_str("evicted for inactivity"),
        }
    }
}

/// Run one session from accept to close.
pub async fn handle_connection(stream: TcpStream, address: PeerAddr, state: Arc<AppState>) {
    let (read_half, write_half) = stream.into_split();
    run_session(read_half, write_half, address, state).await;
}

async fn run_session<R, W>(read_half: R, write_half: W, address: PeerAddr, state: Arc<AppState>)
where
    R: AsyncRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let reader = FramedRead::new(
        read_half,
        InboundLineCodec::new(state.config.max_line_length),
    );
    let writer = FramedWrite::new(write_half, LinesCodec::new());

    let (mailbox, mailbox_rx) = Mailbox::channel();
    let session = Arc::new(Session::new(address, mailbox, get_timestamp_millis()));

    // Online before any command of this session is processed
    if let Err(e) = state.connect_session_usecase.execute(&session).await {
        tracing::error!("Failed to bring session {} online: {}", session.address(), e);
        if let Err(e) = state.disconnect_session_usecase.execute(&session).await {
            tracing::warn!("Failed to announce {} offline: {}", session.address(), e);
        }
        return;
    }
    tracing::info!("Session {} online", session.address());

    let (supervisor, activity) = IdleSupervisor::new(state.config.idle_timeout);
    let eviction = CancellationToken::new();

    let mut flush_task = tokio::spawn(flush_loop(mailbox_rx, writer, eviction.clone()));
    let mut read_task = tokio::spawn(read_loop(
        reader,
        session.clone(),
        state.clone(),
        activity,
        eviction.clone(),
    ));

    // If any one of the activities completes, stop the others
    let end = tokio::select! {
        result = &mut read_task => {
            flush_task.abort();
            result.unwrap_or_else(|e| SessionEnd::ReadFailed(io::Error::other(e)))
        }
        _ = &mut flush_task => {
            read_task.abort();
            SessionEnd::WriteFailed
        }
        _ = supervisor.wait_for_idle() => {
            tracing::debug!(
                "Session {} idle for {:?}, evicting",
                session.address(),
                supervisor.timeout()
            );
            eviction.cancel();
            if tokio::time::timeout(EVICTION_GRACE, &mut flush_task).await.is_err() {
                flush_task.abort();
            }
            let _ = (&mut read_task).await;
            SessionEnd::Evicted
        }
    };

    match &end {
        SessionEnd::ReadFailed(e) => {
            tracing::warn!("Read from {} failed: {}", session.address(), e)
        }
        SessionEnd::WriteFailed => {
            tracing::warn!("Write to {} failed", session.address())
        }
        SessionEnd::Disconnected | SessionEnd::Evicted => {}
    }

    // -> Closed
    if let Err(e) = state.disconnect_session_usecase.execute(&session).await {
        tracing::warn!("Failed to announce {} offline: {}", session.address(), e);
    }

    tracing::info!(
        "Session {} ('{}') closed: {} after {}s ({} still online)",
        session.address(),
        session.name().await,
        end,
        elapsed_secs(session.connected_at(), get_timestamp_millis()),
        state.disconnect_session_usecase.count_remaining_sessions().await
    );
}

/// Read lines until the client goes away or the session is evicted.
async fn read_loop<R>(
    mut reader: LineReader<R>,
    session: Arc<Session>,
    state: Arc<AppState>,
    activity: ActivitySignal,
    eviction: CancellationToken,
) -> SessionEnd
where
    R: AsyncRead + Unpin,
{
    loop {
        let next = tokio::select! {
            _ = eviction.cancelled() => return SessionEnd::Evicted,
            next = reader.next() => next,
        };

        match next {
            None => return SessionEnd::Disconnected,
            Some(Err(LinesCodecError::Io(e))) => return SessionEnd::ReadFailed(e),
            Some(Err(e)) => return SessionEnd::ReadFailed(io::Error::other(e)),
            Some(Ok(InboundLine::TooLong)) => {
                activity.observe();
                tracing::debug!("Discarded over-long line from {}", session.address());
                if let Err(e) = session.reply(Notice::LineTooLong) {
                    tracing::debug!("Could not reply to {}: {}", session.address(), e);
                }
            }
            Some(Ok(InboundLine::Line(line))) => {
                activity.observe();
                if line.is_empty() {
                    continue;
                }
                if let Err(e) = state
                    .process_command_usecase
                    .execute(&session, &line)
                    .await
                {
                    tracing::warn!("Command from {} failed: {}", session.address(), e);
                }
            }
        }
    }
}

/// Write every mailbox line to the client. On eviction, write the kick
/// notice, close the mailbox and shut the connection down.
async fn flush_loop<W>(
    mut mailbox: MailboxReceiver,
    mut writer: LineWriter<W>,
    eviction: CancellationToken,
)
where
    W: AsyncWrite + Unpin,
{
    loop {
        tokio::select! {
            biased;
            _ = eviction.cancelled() => {
                if let Err(e) = writer.send(Notice::Kicked.to_string()).await {
                    tracing::debug!("Failed to send kick notice: {}", e);
                }
                mailbox.close();
                if let Err(e) = SinkExt::<String>::close(&mut writer).await {
                    tracing::debug!("Failed to close connection: {}", e);
                }
                return;
            }
            line = mailbox.recv() => match line {
                Some(line) => {
                    if let Err(e) = writer.send(line).await {
                        tracing::debug!("Failed to write line: {}", e);
                        return;
                    }
                }
                None => return,
            },
        }
    }
}
