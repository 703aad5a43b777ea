//! Broadcaster の実装
//!
//! - `channel`: 単一のディスパッチャタスクとキューを使った実装

pub mod channel;

pub use channel::ChannelBroadcaster;
