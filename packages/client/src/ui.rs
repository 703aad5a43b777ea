//! UI utilities for the client.

use std::io::Write;

/// Input prompt
pub const PROMPT: &str = "> ";

/// Redisplay the prompt after receiving a line
pub fn redisplay_prompt() {
    print!("{}", PROMPT);
    std::io::stdout().flush().ok();
}
