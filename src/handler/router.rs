//! Request entry point module
//!
//! Per-request wiring between hyper and the asset responder. Every method
//! is treated as a GET-style retrieval of the request path; there is no
//! verb-specific handling.

use crate::config::AppState;
use crate::handler::assets;
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = assets::serve_asset(&state, &path).await;

    if state.config.logging.access_log {
        let body_bytes = response.body().size_hint().exact().unwrap_or(0);
        logger::log_access(
            &peer_addr,
            &method,
            &path,
            response.status().as_u16(),
            body_bytes,
        );
    }

    Ok(response)
}
