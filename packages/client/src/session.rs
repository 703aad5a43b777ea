//! Client session over a line-framed TCP connection.

use futures_util::{SinkExt, StreamExt};
use linechat_shared::time::{Clock, SystemClock};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;

use crate::{connection::connect, error::ClientError};

use super::{
    formatter::MessageFormatter,
    ui::{PROMPT, redisplay_prompt},
};

/// Run the client until the server closes the connection or the user exits
pub async fn run_client(host: String, port: u16) -> Result<(), ClientError> {
    let addr = format!("{}:{}", host, port);
    let (mut read, mut write) = connect(&addr).await?;

    tracing::info!("Connected to chat server at {}", addr);
    println!("{}", MessageFormatter::format_connected(&addr));

    // Spawn a task to print incoming lines
    let mut read_task = tokio::spawn(async move {
        let clock = SystemClock;

        while let Some(line) = read.next().await {
            match line {
                Ok(line) => {
                    print!(
                        "{}",
                        MessageFormatter::format_incoming(&line, clock.now_millis())
                    );
                    redisplay_prompt();
                }
                Err(e) => {
                    tracing::warn!("Read error: {}", e);
                    return Err(ClientError::ConnectionError(e.to_string()));
                }
            }
        }

        print!("{}", MessageFormatter::format_closed());
        Ok(())
    });

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim_end();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                    }
                    // Empty lines are sent too; the server treats them as activity
                    if input_tx.send(line.to_string()).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Spawn a task to forward input lines to the server
    let mut write_task = tokio::spawn(async move {
        while let Some(line) = input_rx.recv().await {
            if let Err(e) = write.send(line).await {
                tracing::warn!("Failed to send line: {}", e);
                return Err(ClientError::ConnectionError(e.to_string()));
            }
        }

        Ok(())
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        read_result = &mut read_task => {
            write_task.abort();
            read_result.unwrap_or_else(|e| Err(ClientError::ConnectionError(e.to_string())))
        }
        write_result = &mut write_task => {
            read_task.abort();
            write_result.unwrap_or_else(|e| Err(ClientError::ConnectionError(e.to_string())))
        }
    }
}
