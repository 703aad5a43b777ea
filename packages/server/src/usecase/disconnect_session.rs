//! UseCase: セッション切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectSessionUseCase::execute() メソッド
//! - Registry からの登録解除と退室通知のブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 切断したセッションが Registry に残り続けないことを保証する
//! - 退室通知は残りのセッションにだけ届く（解除してから通知する）
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録済みセッションの切断と通知
//! - エッジケース：既に解除済みのセッション（通知しない）

use std::sync::Arc;

use crate::domain::{BroadcastError, BroadcastMessage, Broadcaster, Session, SessionRepository};

/// セッション切断のユースケース
pub struct DisconnectSessionUseCase {
    /// Registry（データアクセス層の抽象化）
    repository: Arc<dyn SessionRepository>,
    /// Broadcaster（ブロードキャストの抽象化）
    broadcaster: Arc<dyn Broadcaster>,
}

impl DisconnectSessionUseCase {
    /// 新しい DisconnectSessionUseCase を作成
    pub fn new(repository: Arc<dyn SessionRepository>, broadcaster: Arc<dyn Broadcaster>) -> Self {
        Self {
            repository,
            broadcaster,
        }
    }

    /// セッション切断を実行
    ///
    /// 名前のロックを保持したまま登録解除するため、改名と競合しない。
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - 登録解除して退室通知を投入した
    /// * `Ok(false)` - 登録されていない、または同名の他セッションに上書きされていた（何もしない）
    /// * `Err(BroadcastError)` - 登録解除したが退室通知を投入できなかった
    pub async fn execute(&self, session: &Session) -> Result<bool, BroadcastError> {
        // 1. Registry から登録解除
        let guard = session.lock_name().await;
        let removed = self.repository.unregister(&guard, session.mailbox()).await;
        let name = guard.clone();
        drop(guard);

        if removed.is_none() {
            tracing::debug!("Session '{}' was not registered", name);
            return Ok(false);
        }

        // 2. 退室通知をブロードキャスト
        self.broadcaster
            .submit(BroadcastMessage::offline(name, session.address().clone()))?;

        Ok(true)
    }

    /// 残りのセッション数を取得
    pub async fn count_remaining_sessions(&self) -> usize {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Mailbox, MailboxReceiver, PeerAddr},
        infrastructure::{
            broadcaster::ChannelBroadcaster, repository::InMemorySessionRepository,
        },
        usecase::ConnectSessionUseCase,
    };

    fn create_test_session(address: &str) -> (Session, MailboxReceiver) {
        let (mailbox, receiver) = Mailbox::channel();
        (Session::new(PeerAddr::new(address), mailbox, 0), receiver)
    }

    fn create_usecases() -> (
        ConnectSessionUseCase,
        DisconnectSessionUseCase,
        Arc<InMemorySessionRepository>,
    ) {
        let repository = Arc::new(InMemorySessionRepository::new());
        let (broadcaster, _dispatcher) = ChannelBroadcaster::spawn(repository.clone());
        let broadcaster = Arc::new(broadcaster);
        (
            ConnectSessionUseCase::new(repository.clone(), broadcaster.clone()),
            DisconnectSessionUseCase::new(repository.clone(), broadcaster),
            repository,
        )
    }

    #[tokio::test]
    async fn test_disconnect_notifies_remaining_sessions() {
        // テスト項目: 切断すると残りのセッションに退室通知が届く
        // given (前提条件):
        let (connect, disconnect, _repository) = create_usecases();
        let (alice, _alice_rx) = create_test_session("127.0.0.1:1");
        let (bob, mut bob_rx) = create_test_session("127.0.0.1:2");
        connect.execute(&alice).await.unwrap();
        connect.execute(&bob).await.unwrap();
        // 入室通知を読み捨てる（alice, bob の2件）
        bob_rx.recv().await;
        bob_rx.recv().await;

        // when (操作):
        let result = disconnect.execute(&alice).await;

        // then (期待する結果):
        assert_eq!(result, Ok(true));
        assert_eq!(
            bob_rx.recv().await,
            Some("[127.0.0.1:1]127.0.0.1:1:offline".to_string())
        );
        assert_eq!(disconnect.count_remaining_sessions().await, 1);
    }

    #[tokio::test]
    async fn test_disconnect_twice_is_noop() {
        // テスト項目: 既に解除済みのセッションを切断しても通知されない
        // given (前提条件):
        let (connect, disconnect, repository) = create_usecases();
        let (alice, _alice_rx) = create_test_session("127.0.0.1:1");
        connect.execute(&alice).await.unwrap();
        disconnect.execute(&alice).await.unwrap();

        // when (操作):
        let result = disconnect.execute(&alice).await;

        // then (期待する結果):
        assert_eq!(result, Ok(false));
        assert_eq!(repository.count().await, 0);
    }

    #[tokio::test]
    async fn test_disconnect_uses_current_name() {
        // テスト項目: 改名後の切断では新しい名前で解除・通知される
        // given (前提条件):
        let (connect, disconnect, repository) = create_usecases();
        let (alice, _alice_rx) = create_test_session("127.0.0.1:1");
        let (bob, mut bob_rx) = create_test_session("127.0.0.1:2");
        connect.execute(&bob).await.unwrap();
        connect.execute(&alice).await.unwrap();
        {
            let mut name = alice.lock_name().await;
            let new_name = crate::domain::SessionName::new("alice".to_string()).unwrap();
            repository
                .rename(&name, new_name.clone(), alice.mailbox())
                .await
                .unwrap();
            *name = new_name;
        }
        bob_rx.recv().await;
        bob_rx.recv().await;

        // when (操作):
        disconnect.execute(&alice).await.unwrap();

        // then (期待する結果):
        assert_eq!(
            bob_rx.recv().await,
            Some("[127.0.0.1:1]alice:offline".to_string())
        );
        assert_eq!(repository.count().await, 1);
    }

    #[tokio::test]
    async fn test_disconnect_keeps_entry_of_session_that_took_the_name() {
        // テスト項目: 自分の名前が後から来たセッションに上書きされていた場合、切断してもそのエントリは消えない
        // given (前提条件): 127.0.0.1:1 が "127.0.0.1:9" に改名し、その後 127.0.0.1:9 から接続がある
        let (connect, disconnect, repository) = create_usecases();
        let rename = crate::usecase::RenameSessionUseCase::new(repository.clone());
        let (squatter, _squatter_rx) = create_test_session("127.0.0.1:1");
        let (newcomer, _newcomer_rx) = create_test_session("127.0.0.1:9");
        connect.execute(&squatter).await.unwrap();
        rename.execute(&squatter, "127.0.0.1:9").await.unwrap();
        connect.execute(&newcomer).await.unwrap();

        // when (操作):
        let result = disconnect.execute(&squatter).await;

        // then (期待する結果):
        assert_eq!(result, Ok(false));
        let found = repository.lookup(&newcomer.name().await).await.unwrap();
        assert!(found.mailbox.same_channel(newcomer.mailbox()));
        assert_eq!(repository.count().await, 1);
    }
}
