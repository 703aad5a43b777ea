//! Domain error types.

use thiserror::Error;

/// Value object validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// Session name is empty
    #[error("session name must not be empty")]
    EmptySessionName,

    /// Session name contains the field separator
    #[error("session name '{0}' must not contain '|'")]
    SessionNameContainsSeparator(String),
}

/// Registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Another online session already uses the name
    #[error("name '{0}' is already in use")]
    NameTaken(String),

    /// No online session is registered under the name
    #[error("session '{0}' is not registered")]
    SessionNotFound(String),
}

/// Mailbox push errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailboxError {
    /// The owning session stopped draining its mailbox
    #[error("mailbox is closed")]
    Closed,
}

/// Broadcast submission errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BroadcastError {
    /// The dispatcher loop is no longer running
    #[error("broadcast dispatcher has stopped")]
    DispatcherStopped,
}
