//! UseCase: コマンド処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ProcessCommandUseCase::execute() メソッド
//! - 入力行の解釈と、各ユースケースへの振り分け・エラーの返信
//!
//! ### なぜこのテストが必要か
//! - 回復可能なエラーは要求元にだけ1行で返さなければならない
//! - 短い "to|" 行がチャットとして扱われる挙動はプロトコルの一部
//!
//! ### どのような状況を想定しているか
//! - 正常系：who / rename / to / チャット
//! - 異常系：使用中の名前、宛先なし、本文なし、書式エラー

use std::sync::Arc;

use crate::domain::{Broadcaster, Command, Notice, Session, SessionRepository};

use super::{
    DirectMessageUseCase, ListSessionsUseCase, RenameSessionUseCase, SendMessageUseCase,
    error::CommandError,
};

/// コマンド処理のユースケース
pub struct ProcessCommandUseCase {
    list_sessions: ListSessionsUseCase,
    rename_session: RenameSessionUseCase,
    direct_message: DirectMessageUseCase,
    send_message: SendMessageUseCase,
}

impl ProcessCommandUseCase {
    /// 新しい ProcessCommandUseCase を作成
    pub fn new(repository: Arc<dyn SessionRepository>, broadcaster: Arc<dyn Broadcaster>) -> Self {
        Self {
            list_sessions: ListSessionsUseCase::new(repository.clone()),
            rename_session: RenameSessionUseCase::new(repository.clone()),
            direct_message: DirectMessageUseCase::new(repository),
            send_message: SendMessageUseCase::new(broadcaster),
        }
    }

    /// 1行を解釈して実行する
    ///
    /// # Arguments
    ///
    /// * `session` - 入力元のセッション
    /// * `line` - 区切り文字を除いた入力行
    ///
    /// # Returns
    ///
    /// * `Ok(Command)` - 解釈したコマンド（回復可能なエラーは返信済み）
    /// * `Err(CommandError)` - 返信もブロードキャストもできなかった
    pub async fn execute(&self, session: &Session, line: &str) -> Result<Command, CommandError> {
        let command = Command::parse(line);

        match &command {
            Command::Who => {
                let count = self.list_sessions.execute(session).await?;
                tracing::debug!("Listed {} sessions for {}", count, session.address());
            }
            Command::Rename { new_name } => {
                match self.rename_session.execute(session, new_name).await {
                    Ok(name) => session.reply(Notice::Renamed(name))?,
                    Err(e) => {
                        tracing::debug!("Rename by {} rejected: {}", session.address(), e);
                        session.reply(e.notice())?;
                    }
                }
            }
            Command::DirectMessage { recipient, content } => {
                match self.direct_message.execute(session, recipient, content).await {
                    Ok(recipient) => {
                        tracing::debug!(
                            "Directed message from {} to '{}'",
                            session.address(),
                            recipient
                        );
                    }
                    Err(e) => {
                        tracing::debug!(
                            "Directed message by {} rejected: {}",
                            session.address(),
                            e
                        );
                        session.reply(e.notice())?;
                    }
                }
            }
            Command::Broadcast(text) => {
                self.send_message.execute(session, text).await?;
            }
        }

        Ok(command)
    }
}
