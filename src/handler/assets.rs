//! Static asset responder module
//!
//! Resolves request paths against the document root, infers content types,
//! and turns file reads into HTTP responses. A missing file is a normal
//! outcome handled by the 404 branch; only unexpected I/O errors become 500s.

use crate::config::AppState;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// How a single asset lookup failed
#[derive(Debug)]
pub enum AssetError {
    /// Resolved path does not exist (or was rejected); handled by the 404 branch
    NotFound,
    /// Any other read failure, surfaced as a 500
    Io(io::Error),
}

impl From<io::Error> for AssetError {
    fn from(error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::NotFound {
            Self::NotFound
        } else {
            Self::Io(error)
        }
    }
}

/// Serve one asset request, producing exactly one response
pub async fn serve_asset(state: &AppState, request_path: &str) -> Response<Full<Bytes>> {
    match load_asset(state, request_path).await {
        Ok((content, content_type)) => http::build_asset_response(content, content_type),
        Err(AssetError::NotFound) => serve_not_found(state).await,
        Err(AssetError::Io(e)) => {
            logger::log_error(&format!("Failed to read asset '{request_path}': {e}"));
            http::build_server_error_response(&e)
        }
    }
}

/// Load an asset's bytes and content type from under the document root
pub async fn load_asset<'a>(
    state: &'a AppState,
    request_path: &str,
) -> Result<(Vec<u8>, &'a str), AssetError> {
    let file_path = resolve_path(&state.root, request_path, &state.config.site.index_file)
        .ok_or(AssetError::NotFound)?;

    // Confine the resolved path to the document root. Canonicalization also
    // covers symlinks pointing outside the root.
    let root_canonical = fs::canonicalize(&state.root).await.map_err(|e| {
        logger::log_warning(&format!(
            "Document root not found or inaccessible '{}': {e}",
            state.root.display()
        ));
        AssetError::from(e)
    })?;

    let file_canonical = fs::canonicalize(&file_path).await?;
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            request_path,
            file_canonical.display()
        ));
        return Err(AssetError::NotFound);
    }

    let content = fs::read(&file_canonical).await?;
    let content_type = state
        .mime
        .content_type(file_path.extension().and_then(|e| e.to_str()));

    Ok((content, content_type))
}

/// Resolve a request path to a candidate file path under the document root
///
/// `/` maps to the index file; anything else is joined beneath the root.
/// Paths carrying a `..` segment are rejected outright before any
/// filesystem access.
pub fn resolve_path(root: &Path, request_path: &str, index_file: &str) -> Option<PathBuf> {
    if request_path == "/" {
        return Some(root.join(index_file));
    }

    if request_path.split('/').any(|segment| segment == "..") {
        logger::log_warning(&format!("Rejected parent-directory path: {request_path}"));
        return None;
    }

    Some(root.join(request_path.trim_start_matches('/')))
}

/// Serve the 404 branch: the site's custom error page when it exists,
/// otherwise the plaintext fallback
async fn serve_not_found(state: &AppState) -> Response<Full<Bytes>> {
    let page_path = state.root.join(&state.config.site.not_found_page);
    match fs::read(&page_path).await {
        Ok(content) => http::build_not_found_page_response(content),
        Err(_) => http::build_not_found_response(),
    }
}
