//! Server execution logic.

use std::{future::Future, io, sync::Arc};

use thiserror::Error;
use tokio::net::TcpListener;

use crate::{
    config::{ConfigError, ServerConfig},
    domain::PeerAddr,
    usecase::{ConnectSessionUseCase, DisconnectSessionUseCase, ProcessCommandUseCase},
};

use super::{handler::handle_connection, signal::shutdown_signal, state::AppState};

/// Errors that stop the server from running
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Line-oriented TCP chat server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     connect_session_usecase,
///     disconnect_session_usecase,
///     process_command_usecase,
/// );
/// server.run(ServerConfig::default()).await?;
/// ```
pub struct Server {
    /// ConnectSessionUseCase（セッション接続のユースケース）
    connect_session_usecase: Arc<ConnectSessionUseCase>,
    /// DisconnectSessionUseCase（セッション切断のユースケース）
    disconnect_session_usecase: Arc<DisconnectSessionUseCase>,
    /// ProcessCommandUseCase（コマンド処理のユースケース）
    process_command_usecase: Arc<ProcessCommandUseCase>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(
        connect_session_usecase: Arc<ConnectSessionUseCase>,
        disconnect_session_usecase: Arc<DisconnectSessionUseCase>,
        process_command_usecase: Arc<ProcessCommandUseCase>,
    ) -> Self {
        Self {
            connect_session_usecase,
            disconnect_session_usecase,
            process_command_usecase,
        }
    }

    /// Bind to the configured address and serve until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the listener
    /// cannot be bound.
    pub async fn run(self, config: ServerConfig) -> Result<(), ServerError> {
        config.validate()?;

        let bind_addr = config.bind_addr();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: bind_addr.clone(),
                source,
            })?;

        tracing::info!("Chat server listening on {}", listener.local_addr()?);
        tracing::info!("Connect with: nc {} {}", config.host, config.port);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, config, shutdown_signal()).await;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Accept connections on `listener` until `shutdown` resolves.
    ///
    /// Every accepted connection gets its own task. A failed accept is
    /// logged and the loop keeps going.
    pub async fn serve<F>(self, listener: TcpListener, config: ServerConfig, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let app_state = Arc::new(AppState {
            config,
            connect_session_usecase: self.connect_session_usecase,
            disconnect_session_usecase: self.disconnect_session_usecase,
            process_command_usecase: self.process_command_usecase,
        });

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                accepted = listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        tracing::info!("Accepted connection from {}", peer);
                        tokio::spawn(handle_connection(
                            stream,
                            PeerAddr::from(peer),
                            app_state.clone(),
                        ));
                    }
                    Err(e) => {
                        tracing::error!("Failed to accept connection: {}", e);
                    }
                },
            }
        }
    }
}
