//! Connection handlers.

mod codec;
mod connection;
mod idle;

pub use connection::handle_connection;
