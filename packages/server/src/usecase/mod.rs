//! UseCase 層
//!
//! セッションのライフサイクルとコマンド処理のビジネスロジック。
//! Registry と Broadcaster の trait にのみ依存します。

mod connect_session;
mod direct_message;
mod disconnect_session;
mod error;
mod list_sessions;
mod process_command;
mod rename_session;
mod send_message;

pub use connect_session::ConnectSessionUseCase;
pub use direct_message::DirectMessageUseCase;
pub use disconnect_session::DisconnectSessionUseCase;
pub use error::{CommandError, ConnectError, DirectMessageError, RenameError};
pub use list_sessions::ListSessionsUseCase;
pub use process_command::ProcessCommandUseCase;
pub use rename_session::RenameSessionUseCase;
pub use send_message::SendMessageUseCase;
