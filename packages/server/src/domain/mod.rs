//! Domain layer: value objects, the session model, the command grammar and
//! the interfaces (registry, broadcaster) the use cases depend on.

mod broadcast;
mod command;
mod error;
mod notice;
mod repository;
mod session;
mod value_object;

pub use broadcast::{BroadcastMessage, Broadcaster, OFFLINE_TEXT, ONLINE_TEXT};
pub use command::Command;
pub use error::{BroadcastError, MailboxError, RegistryError, ValueObjectError};
pub use notice::Notice;
pub use repository::SessionRepository;
pub use session::{Mailbox, MailboxReceiver, OnlineSession, Session};
pub use value_object::{PeerAddr, SessionName};

#[cfg(test)]
pub use broadcast::MockBroadcaster;
#[cfg(test)]
pub use repository::MockSessionRepository;
