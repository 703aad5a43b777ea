//! Value objects identifying a session.

use std::{fmt, net::SocketAddr};

use linechat_shared::protocol::FIELD_SEPARATOR;

use super::error::ValueObjectError;

/// Display name of an online session.
///
/// Unique among online sessions. Initially the remote address string, later
/// anything chosen through `rename|<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionName(String);

impl SessionName {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::EmptySessionName);
        }
        if value.contains(FIELD_SEPARATOR) {
            return Err(ValueObjectError::SessionNameContainsSeparator(value));
        }
        Ok(Self(value))
    }

    /// The name a session starts with: its remote address.
    pub fn from_address(address: &PeerAddr) -> Self {
        Self(address.as_str().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SessionName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SessionName {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl fmt::Display for SessionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remote endpoint of a connection, kept for display only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PeerAddr(String);

impl PeerAddr {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<SocketAddr> for PeerAddr {
    fn from(addr: SocketAddr) -> Self {
        Self(addr.to_string())
    }
}

impl fmt::Display for PeerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_name_accepts_plain_name() {
        // テスト項目: 通常の名前から SessionName を生成できる
        // given (前提条件):
        let value = "alice".to_string();

        // when (操作):
        let result = SessionName::new(value);

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "alice");
    }

    #[test]
    fn test_session_name_rejects_empty() {
        // テスト項目: 空文字列の名前はエラーになる
        // given (前提条件):
        let value = String::new();

        // when (操作):
        let result = SessionName::new(value);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptySessionName));
    }

    #[test]
    fn test_session_name_rejects_separator() {
        // テスト項目: 区切り文字 '|' を含む名前はエラーになる
        // given (前提条件):
        let value = "al|ice".to_string();

        // when (操作):
        let result = SessionName::try_from(value);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ValueObjectError::SessionNameContainsSeparator(
                "al|ice".to_string()
            ))
        );
    }

    #[test]
    fn test_initial_name_is_remote_address() {
        // テスト項目: 初期名はリモートアドレス文字列になる
        // given (前提条件):
        let socket: SocketAddr = "127.0.0.1:50000".parse().unwrap();
        let address = PeerAddr::from(socket);

        // when (操作):
        let name = SessionName::from_address(&address);

        // then (期待する結果):
        assert_eq!(name.as_str(), "127.0.0.1:50000");
        assert_eq!(address.to_string(), "127.0.0.1:50000");
    }
}
