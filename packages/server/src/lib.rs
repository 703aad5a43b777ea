//! Line-oriented multi-user chat server.
//!
//! Clients connect over TCP and send newline-terminated commands:
//! `who`, `rename|<name>`, `to|<name>|<content>`, or any other text, which is
//! relayed to everyone online. Sessions idle for longer than the configured
//! timeout are evicted.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
