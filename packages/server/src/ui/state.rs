//! Server state shared by every connection.

use std::sync::Arc;

use crate::{
    config::ServerConfig,
    usecase::{ConnectSessionUseCase, DisconnectSessionUseCase, ProcessCommandUseCase},
};

/// Shared application state
pub struct AppState {
    /// ServerConfig（接続ごとのタイムアウト・行長制限）
    pub config: ServerConfig,
    /// ConnectSessionUseCase（セッション接続のユースケース）
    pub connect_session_usecase: Arc<ConnectSessionUseCase>,
    /// DisconnectSessionUseCase（セッション切断のユースケース）
    pub disconnect_session_usecase: Arc<DisconnectSessionUseCase>,
    /// ProcessCommandUseCase（コマンド処理のユースケース）
    pub process_command_usecase: Arc<ProcessCommandUseCase>,
}
