//! Server module
//!
//! Owns the listening socket and the accept loop. The listener is bound once
//! at startup and the loop runs until process termination.

mod connection;
mod listener;

use crate::config::AppState;
use crate::logger;
use std::sync::Arc;
use tokio::net::TcpListener;

pub use listener::create_listener;

/// Accept connections forever, dispatching each onto its own task.
///
/// Accept errors are logged and the loop keeps going; a single bad
/// connection never takes down the server.
pub async fn run(
    listener: TcpListener,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                connection::spawn_connection(stream, peer_addr, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_accept_error(&e);
            }
        }
    }
}
