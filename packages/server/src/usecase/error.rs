//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::{BroadcastError, MailboxError, Notice, ValueObjectError};

/// セッション接続のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// 入室通知をブロードキャストできなかった
    #[error("failed to announce session: {0}")]
    Broadcast(#[from] BroadcastError),
}

/// 改名のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameError {
    /// 新しい名前が不正
    #[error("invalid name: {0}")]
    InvalidName(#[from] ValueObjectError),

    /// 新しい名前は使用中
    #[error("name '{0}' is already in use")]
    NameTaken(String),

    /// 要求元のセッションが Registry にいない
    #[error("session '{0}' is not registered")]
    NotRegistered(String),
}

impl RenameError {
    /// 要求元に返す1行
    pub fn notice(&self) -> Notice {
        match self {
            RenameError::InvalidName(_) | RenameError::NotRegistered(_) => Notice::InvalidName,
            RenameError::NameTaken(_) => Notice::NameInUse,
        }
    }
}

/// 個別メッセージのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectMessageError {
    /// 宛先が空
    #[error("recipient is missing")]
    MissingRecipient,

    /// 宛先がオンラインでない
    #[error("no such user: '{0}'")]
    UnknownRecipient(String),

    /// 本文が空
    #[error("content is empty")]
    EmptyContent,

    /// 宛先のメールボックスが閉じていた
    #[error("failed to deliver to '{recipient}': {source}")]
    DeliveryFailed {
        recipient: String,
        #[source]
        source: MailboxError,
    },
}

impl DirectMessageError {
    /// 送信者に返す1行
    pub fn notice(&self) -> Notice {
        match self {
            DirectMessageError::MissingRecipient => Notice::InvalidDirectFormat,
            DirectMessageError::UnknownRecipient(_) | DirectMessageError::DeliveryFailed { .. } => {
                Notice::NoSuchUser
            }
            DirectMessageError::EmptyContent => Notice::NoContent,
        }
    }
}

/// コマンド処理で要求元に報告できないエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// 要求元のメールボックスが閉じていた（セッション終了中）
    #[error("failed to reply: {0}")]
    Reply(#[from] MailboxError),

    /// ブロードキャストを投入できなかった
    #[error("failed to broadcast: {0}")]
    Broadcast(#[from] BroadcastError),
}
