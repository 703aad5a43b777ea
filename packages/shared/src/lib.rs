//! Shared utilities for the Linechat server and client.

pub mod logger;
pub mod protocol;
pub mod time;
