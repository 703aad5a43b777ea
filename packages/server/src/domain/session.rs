//! Session model: one connected user, its mailbox and its registry view.

use std::fmt;

use tokio::sync::{Mutex, MutexGuard, mpsc};

use super::{
    error::MailboxError,
    value_object::{PeerAddr, SessionName},
};

/// Receiving end of a mailbox, drained by the session's flush loop only.
pub type MailboxReceiver = mpsc::UnboundedReceiver<String>;

/// Outbound message queue of one session.
///
/// Many producers (broadcast dispatcher, directed-message senders, the
/// session itself) push into it; exactly one flush loop drains it. Pushes
/// never block.
#[derive(Debug, Clone)]
pub struct Mailbox {
    sender: mpsc::UnboundedSender<String>,
}

impl Mailbox {
    /// Create a mailbox and the receiver its flush loop consumes.
    pub fn channel() -> (Self, MailboxReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Queue one line (without delimiter) for delivery.
    pub fn push(&self, line: impl Into<String>) -> Result<(), MailboxError> {
        self.sender
            .send(line.into())
            .map_err(|_| MailboxError::Closed)
    }

    /// Whether both mailboxes feed the same session.
    pub fn same_channel(&self, other: &Mailbox) -> bool {
        self.sender.same_channel(&other.sender)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// What the registry stores for an online session.
#[derive(Debug, Clone)]
pub struct OnlineSession {
    pub name: SessionName,
    pub address: PeerAddr,
    pub mailbox: Mailbox,
}

/// Server-side state of one connected client.
///
/// The name is guarded by its own lock. Rename and unregister hold it while
/// they touch the registry, so the session's name and its registry key never
/// disagree. Lock order is always session name, then registry.
pub struct Session {
    address: PeerAddr,
    name: Mutex<SessionName>,
    mailbox: Mailbox,
    connected_at: i64,
}

impl Session {
    pub fn new(address: PeerAddr, mailbox: Mailbox, connected_at: i64) -> Self {
        Self {
            name: Mutex::new(SessionName::from_address(&address)),
            address,
            mailbox,
            connected_at,
        }
    }

    pub fn address(&self) -> &PeerAddr {
        &self.address
    }

    pub fn mailbox(&self) -> &Mailbox {
        &self.mailbox
    }

    /// Unix timestamp (milliseconds) of the accept.
    pub fn connected_at(&self) -> i64 {
        self.connected_at
    }

    /// Current display name.
    pub async fn name(&self) -> SessionName {
        self.name.lock().await.clone()
    }

    /// Hold the name while a registry mutation keyed by it is in flight.
    pub async fn lock_name(&self) -> MutexGuard<'_, SessionName> {
        self.name.lock().await
    }

    /// Registry entry for the current name.
    pub async fn to_online(&self) -> OnlineSession {
        OnlineSession {
            name: self.name().await,
            address: self.address.clone(),
            mailbox: self.mailbox.clone(),
        }
    }

    /// Queue a reply for this session's own client.
    pub fn reply(&self, notice: impl fmt::Display) -> Result<(), MailboxError> {
        self.mailbox.push(notice.to_string())
    }
}
