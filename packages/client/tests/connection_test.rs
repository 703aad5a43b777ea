//! Integration tests for the client connection against an in-process server.

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use linechat_client::{connection::connect, error::ClientError};
use linechat_server::{
    config::ServerConfig,
    infrastructure::{broadcaster::ChannelBroadcaster, repository::InMemorySessionRepository},
    ui::Server,
    usecase::{ConnectSessionUseCase, DisconnectSessionUseCase, ProcessCommandUseCase},
};
use tokio::net::TcpListener;

/// Start a server on a free loopback port and return its address
async fn start_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener
        .local_addr()
        .expect("Failed to get local address")
        .to_string();

    let repository = Arc::new(InMemorySessionRepository::new());
    let (broadcaster, _dispatcher) = ChannelBroadcaster::spawn(repository.clone());
    let broadcaster = Arc::new(broadcaster);
    let server = Server::new(
        Arc::new(ConnectSessionUseCase::new(
            repository.clone(),
            broadcaster.clone(),
        )),
        Arc::new(DisconnectSessionUseCase::new(
            repository.clone(),
            broadcaster.clone(),
        )),
        Arc::new(ProcessCommandUseCase::new(repository, broadcaster)),
    );
    tokio::spawn(server.serve(listener, ServerConfig::default(), std::future::pending()));

    addr
}

#[tokio::test]
async fn test_connect_receives_own_online_line() {
    // テスト項目: 接続すると自分自身の online 通知を受け取る
    // given (前提条件):
    let addr = start_server().await;

    // when (操作):
    let (mut read, _write) = connect(&addr).await.expect("Failed to connect");

    // then (期待する結果):
    let line = read
        .next()
        .await
        .expect("connection closed")
        .expect("read error");
    assert!(line.starts_with("[127.0.0.1:"));
    assert!(line.ends_with(":online"));
}

#[tokio::test]
async fn test_sent_line_is_echoed_as_broadcast() {
    // テスト項目: 送った行が `[addr]name:text` 形式で自分にも配信される
    // given (前提条件):
    let addr = start_server().await;
    let (mut read, mut write) = connect(&addr).await.expect("Failed to connect");
    let online = read.next().await.expect("connection closed").expect("read error");
    let prefix = online.trim_end_matches("online").to_string();

    // when (操作):
    write.send("hello").await.expect("Failed to send");

    // then (期待する結果):
    let line = read.next().await.expect("connection closed").expect("read error");
    assert_eq!(line, format!("{}hello", prefix));
}

#[tokio::test]
async fn test_connect_to_closed_port_fails() {
    // テスト項目: サーバーがいないアドレスへの接続は Connect エラーになる
    // given (前提条件):
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr").to_string();
    drop(listener);

    // when (操作):
    let result = connect(&addr).await;

    // then (期待する結果):
    assert!(matches!(result, Err(ClientError::Connect { .. })));
}
