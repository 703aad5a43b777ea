//! UseCase: オンライン一覧（`who`）

use std::sync::Arc;

use crate::domain::{MailboxError, Notice, Session, SessionRepository};

/// オンライン一覧のユースケース
pub struct ListSessionsUseCase {
    /// Registry（データアクセス層の抽象化）
    repository: Arc<dyn SessionRepository>,
}

impl ListSessionsUseCase {
    /// 新しい ListSessionsUseCase を作成
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// 要求元に、オンラインの全セッションを1行ずつ返す（要求元自身も含む）
    ///
    /// 一覧は名前順。スナップショットはロック中にコピーされ、
    /// 返信の push はロックの外で行う。
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 返した行数
    /// * `Err(MailboxError)` - 要求元のメールボックスが閉じていた
    pub async fn execute(&self, requester: &Session) -> Result<usize, MailboxError> {
        let mut sessions = self.repository.snapshot().await;
        sessions.sort_by(|a, b| a.name.cmp(&b.name));

        for session in &sessions {
            requester.reply(Notice::WhoEntry {
                name: session.name.clone(),
                address: session.address.clone(),
            })?;
        }

        Ok(sessions.len())
    }
}
