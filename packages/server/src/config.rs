//! Server configuration.

use std::time::Duration;

use linechat_shared::protocol::{
    DEFAULT_HOST, DEFAULT_IDLE_TIMEOUT_SECS, DEFAULT_MAX_LINE_LENGTH, DEFAULT_PORT,
};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("idle timeout must be greater than zero")]
    ZeroIdleTimeout,

    #[error("max line length must be greater than zero")]
    ZeroMaxLineLength,
}

/// Runtime settings of the chat server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to bind to (0 picks a free port)
    pub port: u16,
    /// Inactivity window before a session is evicted
    pub idle_timeout: Duration,
    /// Longest accepted input line in bytes
    pub max_line_length: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl ServerConfig {
    /// `host:port` string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.idle_timeout.is_zero() {
            return Err(ConfigError::ZeroIdleTimeout);
        }
        if self.max_line_length == 0 {
            return Err(ConfigError::ZeroMaxLineLength);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // テスト項目: デフォルト設定は 120 秒のアイドルタイムアウトを持つ
        // given (前提条件):

        // when (操作):
        let config = ServerConfig::default();

        // then (期待する結果):
        assert_eq!(config.idle_timeout, Duration::from_secs(120));
        assert_eq!(config.max_line_length, 4096);
        assert_eq!(config.bind_addr(), "127.0.0.1:8888");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        // テスト項目: 0 のタイムアウトや行長は不正な設定になる
        // given (前提条件):
        let zero_timeout = ServerConfig {
            idle_timeout: Duration::ZERO,
            ..ServerConfig::default()
        };
        let zero_length = ServerConfig {
            max_line_length: 0,
            ..ServerConfig::default()
        };

        // when (操作):
        let timeout_result = zero_timeout.validate();
        let length_result = zero_length.validate();

        // then (期待する結果):
        assert_eq!(timeout_result, Err(ConfigError::ZeroIdleTimeout));
        assert_eq!(length_result, Err(ConfigError::ZeroMaxLineLength));
    }
}
