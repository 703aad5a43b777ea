//! Wire-level constants of the line protocol.
//!
//! Every message in both directions is a single UTF-8 line terminated by
//! `\n` (a preceding `\r` is stripped on input). There is no other framing.

/// Separator between a command verb and its arguments (`to|bob|hi`).
pub const FIELD_SEPARATOR: char = '|';

/// Longest accepted input line in bytes, delimiter excluded.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 4096;

/// Default host the server binds to and the client connects to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default TCP port.
pub const DEFAULT_PORT: u16 = 8888;

/// Inactivity window after which the server evicts a session.
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 120;
