//! InMemory Session Registry 実装
//!
//! ドメイン層が定義する SessionRepository trait の具体的な実装。
//! HashMap を単一の Mutex で保護して使用します。
//!
//! ## ロック規律
//!
//! - ロックを保持するのはマップの読み書きとスナップショットのコピーの間だけ
//! - ロック中にメールボックスへの送信やソケット I/O は行わない

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Mailbox, OnlineSession, RegistryError, SessionName, SessionRepository};

/// インメモリ Session Registry 実装
#[derive(Default)]
pub struct InMemorySessionRepository {
    /// 名前 → オンライン中のセッション
    sessions: Mutex<HashMap<SessionName, OnlineSession>>,
}

impl InMemorySessionRepository {
    /// 空の Registry を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn register(&self, session: OnlineSession) -> Option<OnlineSession> {
        let mut sessions = self.sessions.lock().await;
        let name = session.name.clone();
        let displaced = sessions.insert(name.clone(), session);
        tracing::debug!("Session '{}' registered ({} online)", name, sessions.len());
        displaced
    }

    async fn unregister(&self, name: &SessionName, owner: &Mailbox) -> Option<OnlineSession> {
        let mut sessions = self.sessions.lock().await;
        let owned = sessions
            .get(name)
            .is_some_and(|entry| entry.mailbox.same_channel(owner));
        if !owned {
            return None;
        }
        let removed = sessions.remove(name);
        if removed.is_some() {
            tracing::debug!("Session '{}' unregistered ({} online)", name, sessions.len());
        }
        removed
    }

    async fn lookup(&self, name: &SessionName) -> Option<OnlineSession> {
        let sessions = self.sessions.lock().await;
        sessions.get(name).cloned()
    }

    async fn snapshot(&self) -> Vec<OnlineSession> {
        let sessions = self.sessions.lock().await;
        sessions.values().cloned().collect()
    }

    async fn rename(
        &self,
        current: &SessionName,
        new_name: SessionName,
        owner: &Mailbox,
    ) -> Result<(), RegistryError> {
        let mut sessions = self.sessions.lock().await;

        if sessions.contains_key(&new_name) {
            return Err(RegistryError::NameTaken(new_name.as_str().to_string()));
        }

        // 同名で上書きされていれば、そのエントリは他セッションのもの
        let owned = sessions
            .get(current)
            .is_some_and(|entry| entry.mailbox.same_channel(owner));
        let entry = if owned { sessions.remove(current) } else { None };
        let mut entry =
            entry.ok_or_else(|| RegistryError::SessionNotFound(current.as_str().to_string()))?;
        entry.name = new_name.clone();
        sessions.insert(new_name, entry);

        Ok(())
    }

    async fn count(&self) -> usize {
        let sessions = self.sessions.lock().await;
        sessions.len()
    }
}
