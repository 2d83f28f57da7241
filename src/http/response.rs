//! HTTP response building module
//!
//! Provides builders for the response shapes the asset responder produces,
//! decoupled from path resolution and file loading.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 OK response carrying an asset's bytes
pub fn build_asset_response(content: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    let content_length = content.len();

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 response carrying the site's custom error page
pub fn build_not_found_page_response(content: Vec<u8>) -> Response<Full<Bytes>> {
    let content_length = content.len();

    Response::builder()
        .status(404)
        .header("Content-Type", "text/html")
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build plaintext 404 fallback for when the error page itself is missing
pub fn build_not_found_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 500 response naming the failing I/O error
pub fn build_server_error_response(error: &std::io::Error) -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(format!(
            "Server Error: {}",
            error.kind()
        ))))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("Server Error")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_asset_response() {
        let resp = build_asset_response(b"body { color: red }".to_vec(), "text/css");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css");
        assert_eq!(resp.headers()["Content-Length"], "19");
    }

    #[test]
    fn test_not_found_page_response() {
        let resp = build_not_found_page_response(b"<h1>missing</h1>".to_vec());
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
    }

    #[test]
    fn test_not_found_fallback() {
        let resp = build_not_found_response();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
    }

    #[test]
    fn test_server_error_names_the_failure() {
        let resp = build_server_error_response(&Error::from(ErrorKind::PermissionDenied));
        assert_eq!(resp.status(), 500);
    }
}
