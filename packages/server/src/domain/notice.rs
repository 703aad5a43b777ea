//! Lines the server sends to a single client.

use std::fmt;

use super::value_object::{PeerAddr, SessionName};

/// A reply or directed line for one client (broadcasts use
/// [`BroadcastMessage`](super::BroadcastMessage)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// One line of a `who` listing
    WhoEntry { name: SessionName, address: PeerAddr },
    /// Rename succeeded
    Renamed(SessionName),
    /// Rename target is taken
    NameInUse,
    /// Rename target is not a valid name
    InvalidName,
    /// `to|` without a recipient
    InvalidDirectFormat,
    /// `to|` recipient is not online
    NoSuchUser,
    /// `to|` without content
    NoContent,
    /// Directed message delivered to its recipient
    Directed { from: SessionName, content: String },
    /// Last line before an idle eviction
    Kicked,
    /// Input line exceeded the maximum length and was dropped
    LineTooLong,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::WhoEntry { name, address } => write!(f, "[{}]{}:online...", address, name),
            Notice::Renamed(name) => write!(f, "you have been renamed to: {}", name),
            Notice::NameInUse => f.write_str("name already in use"),
            Notice::InvalidName => f.write_str("invalid name, use \"rename|<name>\""),
            Notice::InvalidDirectFormat => {
                f.write_str("invalid message format, use \"to|<name>|<content>\"")
            }
            Notice::NoSuchUser => f.write_str("no such user"),
            Notice::NoContent => f.write_str("no content, please resend"),
            Notice::Directed { from, content } => write!(f, "{} said to you: {}", from, content),
            Notice::Kicked => f.write_str("you have been kicked for inactivity"),
            Notice::LineTooLong => f.write_str("line too long, discarded"),
        }
    }
}
