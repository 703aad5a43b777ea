//! UseCase: 改名処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RenameSessionUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 使用中の名前への改名は Registry もセッションの名前も変えてはいけない
//! - 成功時は Registry のキーとセッションの名前が一致していなければならない
//!
//! ### どのような状況を想定しているか
//! - 正常系：空いている名前への改名
//! - 異常系：使用中の名前、不正な名前

use std::sync::Arc;

use crate::domain::{RegistryError, Session, SessionName, SessionRepository};

use super::error::RenameError;

/// 改名のユースケース
pub struct RenameSessionUseCase {
    /// Registry（データアクセス層の抽象化）
    repository: Arc<dyn SessionRepository>,
}

impl RenameSessionUseCase {
    /// 新しい RenameSessionUseCase を作成
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// 改名を実行
    ///
    /// # Arguments
    ///
    /// * `session` - 改名するセッション
    /// * `new_name` - 新しい名前（未検証の文字列）
    ///
    /// # Returns
    ///
    /// * `Ok(SessionName)` - 改名後の名前
    /// * `Err(RenameError)` - 改名失敗（状態は変わらない）
    pub async fn execute(
        &self,
        session: &Session,
        new_name: &str,
    ) -> Result<SessionName, RenameError> {
        let new_name = SessionName::new(new_name.to_string())?;

        // 名前のロックを保持したまま Registry のキーを付け替える
        let mut current = session.lock_name().await;
        self.repository
            .rename(&current, new_name.clone(), session.mailbox())
            .await
            .map_err(|e| match e {
                RegistryError::NameTaken(name) => RenameError::NameTaken(name),
                RegistryError::SessionNotFound(name) => RenameError::NotRegistered(name),
            })?;

        tracing::info!("Session '{}' renamed to '{}'", *current, new_name);
        *current = new_name.clone();

        Ok(new_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Mailbox, PeerAddr, ValueObjectError},
        infrastructure::repository::InMemorySessionRepository,
    };

    async fn create_registered_session(
        repository: &InMemorySessionRepository,
        address: &str,
    ) -> Session {
        let (mailbox, _receiver) = Mailbox::channel();
        let session = Session::new(PeerAddr::new(address), mailbox, 0);
        repository.register(session.to_online().await).await;
        session
    }

    async fn sorted_keys(repository: &InMemorySessionRepository) -> Vec<String> {
        let mut keys: Vec<String> = repository
            .snapshot()
            .await
            .into_iter()
            .map(|s| s.name.as_str().to_string())
            .collect();
        keys.sort();
        keys
    }

    #[tokio::test]
    async fn test_rename_to_free_name() {
        // テスト項目: 空いている名前に改名すると Registry とセッションの両方が更新される
        // given (前提条件):
        let repository = Arc::new(InMemorySessionRepository::new());
        let session = create_registered_session(&repository, "127.0.0.1:2").await;
        let _other = create_registered_session(&repository, "127.0.0.1:3").await;
        let usecase = RenameSessionUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(&session, "bob").await;

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "bob");
        assert_eq!(session.name().await.as_str(), "bob");
        assert_eq!(sorted_keys(&repository).await, vec!["127.0.0.1:3", "bob"]);
    }

    #[tokio::test]
    async fn test_rename_to_taken_name_changes_nothing() {
        // テスト項目: 使用中の名前への改名は両セッションの名前も Registry も変えない
        // given (前提条件):
        let repository = Arc::new(InMemorySessionRepository::new());
        let first = create_registered_session(&repository, "127.0.0.1:2").await;
        let second = create_registered_session(&repository, "127.0.0.1:3").await;
        let usecase = RenameSessionUseCase::new(repository.clone());
        usecase.execute(&first, "bob").await.unwrap();

        // when (操作):
        let result = usecase.execute(&second, "bob").await;

        // then (期待する結果):
        assert_eq!(result, Err(RenameError::NameTaken("bob".to_string())));
        assert_eq!(first.name().await.as_str(), "bob");
        assert_eq!(second.name().await.as_str(), "127.0.0.1:3");
        assert_eq!(sorted_keys(&repository).await, vec!["127.0.0.1:3", "bob"]);
    }

    #[tokio::test]
    async fn test_rename_to_own_name_is_in_use() {
        // テスト項目: 現在の自分の名前への改名も使用中として扱われる
        // given (前提条件):
        let repository = Arc::new(InMemorySessionRepository::new());
        let session = create_registered_session(&repository, "127.0.0.1:2").await;
        let usecase = RenameSessionUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(&session, "127.0.0.1:2").await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RenameError::NameTaken("127.0.0.1:2".to_string()))
        );
    }

    #[tokio::test]
    async fn test_rename_to_empty_name_is_invalid() {
        // テスト項目: 空の名前への改名は不正な名前としてエラーになる
        // given (前提条件):
        let repository = Arc::new(InMemorySessionRepository::new());
        let session = create_registered_session(&repository, "127.0.0.1:2").await;
        let usecase = RenameSessionUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(&session, "").await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RenameError::InvalidName(ValueObjectError::EmptySessionName))
        );
        assert_eq!(sorted_keys(&repository).await, vec!["127.0.0.1:2"]);
    }
}
