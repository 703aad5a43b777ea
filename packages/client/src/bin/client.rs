//! Interactive line client for the Linechat server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin linechat-client
//! cargo run --bin linechat-client -- --host 127.0.0.1 --port 8888
//! ```

use clap::Parser;
use linechat_shared::{
    logger::setup_logger,
    protocol::{DEFAULT_HOST, DEFAULT_PORT},
};

#[derive(Parser, Debug)]
#[command(name = "linechat-client")]
#[command(about = "Interactive client for the line-oriented chat server", long_about = None)]
struct Args {
    /// Server host address
    #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
    host: String,

    /// Server port number
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing (quiet by default so logs do not interleave with chat output)
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    let args = Args::parse();

    if let Err(e) = linechat_client::run_client(args.host, args.port).await {
        tracing::error!("Client error: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
