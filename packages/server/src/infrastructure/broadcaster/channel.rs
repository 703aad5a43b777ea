//! キューと単一ディスパッチャを使った Broadcaster 実装
//!
//! ## 責務
//!
//! - ブロードキャスト要求を1本のキューに直列化する
//! - ディスパッチャタスクが要求を1件ずつ取り出し、その時点でオンラインの
//!   全セッションのメールボックスへ配送する
//!
//! ## 設計ノート
//!
//! 配送先ごとの push はブロックしない（メールボックスは非有界）。
//! 遅いクライアントはそのセッションのメールボックスが伸びるだけで、
//! 他のセッションへの配送は止まらない。

use std::sync::Arc;

use tokio::{sync::mpsc, task::JoinHandle};

use crate::domain::{BroadcastError, BroadcastMessage, Broadcaster, SessionRepository};

/// キューを使った Broadcaster 実装
///
/// ## 使用例
///
/// ```ignore
/// let repository = Arc::new(InMemorySessionRepository::new());
/// let (broadcaster, dispatcher) = ChannelBroadcaster::spawn(repository.clone());
///
/// broadcaster.submit(BroadcastMessage::online(name, address))?;
/// ```
pub struct ChannelBroadcaster {
    /// ディスパッチャへのキュー
    queue: mpsc::UnboundedSender<BroadcastMessage>,
}

impl ChannelBroadcaster {
    /// ディスパッチャタスクを起動し、Broadcaster とタスクのハンドルを返す
    ///
    /// ディスパッチャは全ての `ChannelBroadcaster` が drop されると終了します。
    pub fn spawn(repository: Arc<dyn SessionRepository>) -> (Self, JoinHandle<()>) {
        let (queue, receiver) = mpsc::unbounded_channel();
        let dispatcher = tokio::spawn(dispatch_loop(receiver, repository));
        (Self { queue }, dispatcher)
    }
}

impl Broadcaster for ChannelBroadcaster {
    fn submit(&self, message: BroadcastMessage) -> Result<(), BroadcastError> {
        self.queue
            .send(message)
            .map_err(|_| BroadcastError::DispatcherStopped)
    }
}

/// キューから1件ずつ取り出し、スナップショットの全セッションへ配送する
async fn dispatch_loop(
    mut receiver: mpsc::UnboundedReceiver<BroadcastMessage>,
    repository: Arc<dyn SessionRepository>,
) {
    while let Some(message) = receiver.recv().await {
        let line = message.to_string();
        let targets = repository.snapshot().await;

        let mut delivered = 0usize;
        for target in &targets {
            // 一部の配送失敗は許容する
            match target.mailbox.push(line.clone()) {
                Ok(()) => delivered += 1,
                Err(e) => tracing::debug!("Skipping session '{}': {}", target.name, e),
            }
        }

        tracing::debug!(
            "Broadcasted message from '{}' to {}/{} sessions",
            message.sender_name(),
            delivered,
            targets.len()
        );
    }

    tracing::info!("Broadcast dispatcher stopped");
}
