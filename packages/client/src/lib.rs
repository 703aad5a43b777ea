//! Interactive line client for the Linechat server.
//!
//! Reads input with line editing and history, sends each line to the
//! server and prints every line the server sends, prefixed with the local
//! receive time.

pub mod connection;
pub mod error;
mod formatter;
mod session;
mod ui;

pub use session::run_client;
