//! Broadcast message and the broadcaster interface.

use std::fmt;

use super::{
    error::BroadcastError,
    value_object::{PeerAddr, SessionName},
};

/// Text announced when a session comes online.
pub const ONLINE_TEXT: &str = "online";

/// Text announced when a session goes offline.
pub const OFFLINE_TEXT: &str = "offline";

/// A message fanned out to every online session.
///
/// Rendered once as `[<address>]<name>:<text>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastMessage {
    sender_name: SessionName,
    sender_address: PeerAddr,
    text: String,
}

impl BroadcastMessage {
    pub fn new(sender_name: SessionName, sender_address: PeerAddr, text: impl Into<String>) -> Self {
        Self {
            sender_name,
            sender_address,
            text: text.into(),
        }
    }

    pub fn online(sender_name: SessionName, sender_address: PeerAddr) -> Self {
        Self::new(sender_name, sender_address, ONLINE_TEXT)
    }

    pub fn offline(sender_name: SessionName, sender_address: PeerAddr) -> Self {
        Self::new(sender_name, sender_address, OFFLINE_TEXT)
    }

    pub fn sender_name(&self) -> &SessionName {
        &self.sender_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for BroadcastMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]{}:{}",
            self.sender_address, self.sender_name, self.text
        )
    }
}

/// Serialized fan-out channel.
///
/// Messages are delivered to every session online at dispatch time, in
/// submission order. Submitting never blocks on a slow client.
#[cfg_attr(test, mockall::automock)]
pub trait Broadcaster: Send + Sync {
    fn submit(&self, message: BroadcastMessage) -> Result<(), BroadcastError>;
}
