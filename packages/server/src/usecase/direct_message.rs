//! UseCase: 個別メッセージ（`to|<name>|<content>`）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DirectMessageUseCase::execute() メソッド
//! - 宛先のメールボックスにだけ直接届くこと（ブロードキャストを経由しない）
//!
//! ### どのような状況を想定しているか
//! - 正常系：オンラインの宛先への送信
//! - 異常系：宛先が空、宛先がいない、本文が空（この順で判定する）

use std::sync::Arc;

use crate::domain::{Notice, Session, SessionName, SessionRepository};

use super::error::DirectMessageError;

/// 個別メッセージのユースケース
pub struct DirectMessageUseCase {
    /// Registry（データアクセス層の抽象化）
    repository: Arc<dyn SessionRepository>,
}

impl DirectMessageUseCase {
    /// 新しい DirectMessageUseCase を作成
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// 個別メッセージを実行
    ///
    /// # Arguments
    ///
    /// * `sender` - 送信者のセッション
    /// * `recipient` - 宛先の名前（未検証の文字列）
    /// * `content` - 本文
    ///
    /// # Returns
    ///
    /// * `Ok(SessionName)` - 届けた宛先の名前
    /// * `Err(DirectMessageError)` - 送信失敗（送信者にだけ報告する）
    pub async fn execute(
        &self,
        sender: &Session,
        recipient: &str,
        content: &str,
    ) -> Result<SessionName, DirectMessageError> {
        // 1. 宛先の名前を検証
        let recipient = SessionName::new(recipient.to_string())
            .map_err(|_| DirectMessageError::MissingRecipient)?;

        // 2. 宛先を Registry から検索
        let target = self
            .repository
            .lookup(&recipient)
            .await
            .ok_or_else(|| DirectMessageError::UnknownRecipient(recipient.as_str().to_string()))?;

        // 3. 本文を検証
        if content.is_empty() {
            return Err(DirectMessageError::EmptyContent);
        }

        // 4. 宛先のメールボックスへ直接届ける
        let notice = Notice::Directed {
            from: sender.name().await,
            content: content.to_string(),
        };
        target
            .mailbox
            .push(notice.to_string())
            .map_err(|source| DirectMessageError::DeliveryFailed {
                recipient: recipient.as_str().to_string(),
                source,
            })?;

        Ok(recipient)
    }
}
