//! UseCase: チャットのブロードキャスト

use std::sync::Arc;

use crate::domain::{BroadcastError, BroadcastMessage, Broadcaster, Session};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Broadcaster（ブロードキャストの抽象化）
    broadcaster: Arc<dyn Broadcaster>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(broadcaster: Arc<dyn Broadcaster>) -> Self {
        Self { broadcaster }
    }

    /// 送信者の現在の名前とアドレスを付けて、本文をそのままブロードキャストに投入する
    pub async fn execute(&self, sender: &Session, text: &str) -> Result<(), BroadcastError> {
        let message = BroadcastMessage::new(sender.name().await, sender.address().clone(), text);
        self.broadcaster.submit(message)
    }
}
