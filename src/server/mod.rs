// Server module entry point
// Listener setup and per-connection handling

pub mod connection;
pub mod listener;

pub use connection::accept_connection;
pub use listener::bind_listener;
