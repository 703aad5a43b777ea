//! Command grammar for input lines.
//!
//! ```text
//! line    = who | rename | direct | chat
//! who     = "who"
//! rename  = "rename|" name [ "|" any ]      ; line longer than 7 bytes
//! direct  = "to|" name [ "|" content ]      ; line longer than 4 bytes
//! chat    = any other line
//! ```
//!
//! Verbs are case-sensitive. The length guards are part of the protocol:
//! `rename|` alone and lines like `to|a` are relayed as chat.

use linechat_shared::protocol::FIELD_SEPARATOR;

const WHO: &str = "who";
const RENAME_PREFIX: &str = "rename|";
const DIRECT_PREFIX: &str = "to|";

/// Shortest line, in bytes, that is read as a rename.
const RENAME_MIN_LEN: usize = RENAME_PREFIX.len() + 1;
/// Shortest line, in bytes, that is read as a directed message.
const DIRECT_MIN_LEN: usize = DIRECT_PREFIX.len() + 2;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List online sessions
    Who,
    /// Change the requester's display name
    Rename { new_name: String },
    /// Send `content` to the session named `recipient` only
    DirectMessage { recipient: String, content: String },
    /// Relay the line to every online session
    Broadcast(String),
}

impl Command {
    /// Parse one line (delimiter already stripped). Never fails: anything
    /// unrecognized is chat.
    pub fn parse(line: &str) -> Self {
        if line == WHO {
            return Command::Who;
        }

        if line.len() >= RENAME_MIN_LEN && line.starts_with(RENAME_PREFIX) {
            let rest = &line[RENAME_PREFIX.len()..];
            let new_name = rest.split(FIELD_SEPARATOR).next().unwrap_or_default();
            return Command::Rename {
                new_name: new_name.to_string(),
            };
        }

        if line.len() >= DIRECT_MIN_LEN && line.starts_with(DIRECT_PREFIX) {
            let rest = &line[DIRECT_PREFIX.len()..];
            let mut fields = rest.splitn(2, FIELD_SEPARATOR);
            let recipient = fields.next().unwrap_or_default();
            let content = fields.next().unwrap_or_default();
            return Command::DirectMessage {
                recipient: recipient.to_string(),
                content: content.to_string(),
            };
        }

        Command::Broadcast(line.to_string())
    }
}
