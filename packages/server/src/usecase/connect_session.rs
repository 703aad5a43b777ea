//! UseCase: セッション接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectSessionUseCase::execute() メソッド
//! - Registry への登録と入室通知のブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 入室通知は、そのセッションのコマンド処理より先に行われなければならない
//! - 登録と通知の順序（登録 → 通知）を保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規セッションの登録と通知
//! - 異常系：ディスパッチャ停止時の通知失敗

use std::sync::Arc;

use crate::domain::{BroadcastMessage, Broadcaster, Session, SessionRepository};

use super::error::ConnectError;

/// セッション接続のユースケース
pub struct ConnectSessionUseCase {
    /// Registry（データアクセス層の抽象化）
    repository: Arc<dyn SessionRepository>,
    /// Broadcaster（ブロードキャストの抽象化）
    broadcaster: Arc<dyn Broadcaster>,
}

impl ConnectSessionUseCase {
    /// 新しい ConnectSessionUseCase を作成
    pub fn new(repository: Arc<dyn SessionRepository>, broadcaster: Arc<dyn Broadcaster>) -> Self {
        Self {
            repository,
            broadcaster,
        }
    }

    /// セッション接続を実行
    ///
    /// # Arguments
    ///
    /// * `session` - 受け付けたばかりのセッション（名前はアドレス）
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 登録と入室通知の投入に成功
    /// * `Err(ConnectError)` - 入室通知を投入できなかった（登録は済んでいる）
    pub async fn execute(&self, session: &Session) -> Result<(), ConnectError> {
        // 1. Registry に登録
        let online = session.to_online().await;
        let name = online.name.clone();
        if let Some(displaced) = self.repository.register(online).await {
            tracing::warn!(
                "Session name '{}' was held by {}, entry overwritten",
                name,
                displaced.address
            );
        }

        // 2. 入室通知をブロードキャスト
        self.broadcaster
            .submit(BroadcastMessage::online(name, session.address().clone()))?;

        Ok(())
    }
}
