//! Registry trait 定義
//!
//! オンライン中のセッションを名前で管理するインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{
    error::RegistryError,
    session::{Mailbox, OnlineSession},
    value_object::SessionName,
};

/// Session Registry trait
///
/// 名前 → セッションの対応表。全ての操作は単一のロックで直列化され、
/// ロックを保持したままネットワーク I/O を待つことはない。
///
/// ## 不変条件
///
/// - 同じ名前のセッションは同時に1つまで
/// - 名前のキーが存在する ⇔ そのセッションがオンライン
/// - 登録解除と改名は `owner` のメールボックスを持つエントリにだけ作用する
///   （同名で上書きされた他セッションのエントリには触れない）
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// セッションを名前で登録する（同名があれば上書きし、追い出したエントリを返す）
    async fn register(&self, session: OnlineSession) -> Option<OnlineSession>;

    /// `owner` のセッションを登録解除する（存在しない・他セッションのエントリなら何もしない）
    async fn unregister(&self, name: &SessionName, owner: &Mailbox) -> Option<OnlineSession>;

    /// 名前でセッションを検索する
    async fn lookup(&self, name: &SessionName) -> Option<OnlineSession>;

    /// オンライン中の全セッションのコピーを取得する
    async fn snapshot(&self) -> Vec<OnlineSession>;

    /// 重複チェックとキーの付け替えを1回のロック内で行う
    async fn rename(
        &self,
        current: &SessionName,
        new_name: SessionName,
        owner: &Mailbox,
    ) -> Result<(), RegistryError>;

    /// オンライン中のセッション数を取得する
    async fn count(&self) -> usize;
}
