//! Line-oriented multi-user chat server.
//!
//! Clients connect over plain TCP (e.g. `nc`) and exchange newline-terminated lines.
//! Sessions idle for longer than the idle timeout are evicted.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin linechat-server
//! cargo run --bin linechat-server -- --host 0.0.0.0 --port 9000 --idle-timeout-secs 300
//! ```

use std::{sync::Arc, time::Duration};

use clap::Parser;
use linechat_server::{
    config::ServerConfig,
    infrastructure::{broadcaster::ChannelBroadcaster, repository::InMemorySessionRepository},
    ui::Server,
    usecase::{ConnectSessionUseCase, DisconnectSessionUseCase, ProcessCommandUseCase},
};
use linechat_shared::{
    logger::setup_logger,
    protocol::{DEFAULT_HOST, DEFAULT_IDLE_TIMEOUT_SECS, DEFAULT_MAX_LINE_LENGTH, DEFAULT_PORT},
};

#[derive(Parser, Debug)]
#[command(name = "linechat-server")]
#[command(about = "Line-oriented TCP chat server with idle eviction", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Seconds of inactivity before a session is evicted
    #[arg(long, default_value_t = DEFAULT_IDLE_TIMEOUT_SECS)]
    idle_timeout_secs: u64,

    /// Longest accepted input line in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LENGTH)]
    max_line_length: usize,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            idle_timeout: Duration::from_secs(args.idle_timeout_secs),
            max_line_length: args.max_line_length,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::from(Args::parse());

    // Initialize dependencies in order:
    // 1. Repository
    // 2. Broadcaster
    // 3. UseCases
    // 4. Server

    // 1. Create Repository (in-memory session registry)
    let repository = Arc::new(InMemorySessionRepository::new());

    // 2. Create Broadcaster (single dispatcher task)
    let (broadcaster, dispatcher) = ChannelBroadcaster::spawn(repository.clone());
    let broadcaster = Arc::new(broadcaster);

    // 3. Create UseCases
    let connect_session_usecase = Arc::new(ConnectSessionUseCase::new(
        repository.clone(),
        broadcaster.clone(),
    ));
    let disconnect_session_usecase = Arc::new(DisconnectSessionUseCase::new(
        repository.clone(),
        broadcaster.clone(),
    ));
    let process_command_usecase = Arc::new(ProcessCommandUseCase::new(
        repository.clone(),
        broadcaster.clone(),
    ));

    // 4. Create and run the server
    let server = Server::new(
        connect_session_usecase,
        disconnect_session_usecase,
        process_command_usecase,
    );
    let result = server.run(config).await;
    dispatcher.abort();

    if let Err(e) = result {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
