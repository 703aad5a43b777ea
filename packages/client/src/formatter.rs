//! Line formatting for client display.

use linechat_shared::time::format_time_of_day;

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Banner shown once the connection is up
    pub fn format_connected(addr: &str) -> String {
        format!(
            "\nConnected to {}. Type messages and press Enter to send.\n\
             Commands: who, rename|<name>, to|<name>|<message>. Press Ctrl+C to exit.\n",
            addr
        )
    }

    /// Format one line received from the server
    ///
    /// # Arguments
    ///
    /// * `line` - The line as sent by the server, without delimiter
    /// * `received_at` - Unix timestamp when the line arrived (milliseconds)
    pub fn format_incoming(line: &str, received_at: i64) -> String {
        format!("\n{} {}\n", format_time_of_day(received_at), line)
    }

    /// Notice shown when the server closes the connection
    pub fn format_closed() -> String {
        "\nServer closed the connection\n".to_string()
    }
}

#[cfg(test)]
mod tests {
    use linechat_shared::time::{Clock, FixedClock};

    use super::*;

    #[test]
    fn test_format_incoming_prefixes_receive_time() {
        // テスト項目: 受信行の前に受信時刻 (HH:MM:SS) が付く
        // given (前提条件):
        let clock = FixedClock::new(1672498800000);
        let line = "[127.0.0.1:50000]bob:hello";

        // when (操作):
        let result = MessageFormatter::format_incoming(line, clock.now_millis());

        // then (期待する結果):
        let expected_time = format_time_of_day(clock.now_millis());
        assert_eq!(result, format!("\n{} {}\n", expected_time, line));
        assert_eq!(expected_time.len(), 8);
    }

    #[test]
    fn test_format_incoming_keeps_separators_untouched() {
        // テスト項目: 区切り文字 `|` や `:` を含む行もそのまま表示される
        // given (前提条件):
        let line = "alice said to you: a|b:c";

        // when (操作):
        let result = MessageFormatter::format_incoming(line, 0);

        // then (期待する結果):
        assert!(result.ends_with(" alice said to you: a|b:c\n"));
    }

    #[test]
    fn test_format_connected_mentions_address_and_commands() {
        // テスト項目: 接続時のバナーに接続先とコマンド一覧が含まれる
        // given (前提条件):
        let addr = "127.0.0.1:8888";

        // when (操作):
        let result = MessageFormatter::format_connected(addr);

        // then (期待する結果):
        assert!(result.contains("Connected to 127.0.0.1:8888"));
        assert!(result.contains("rename|<name>"));
        assert!(result.contains("to|<name>|<message>"));
    }
}
