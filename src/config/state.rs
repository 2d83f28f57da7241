// Application state module
// Immutable per-process state shared by all request handlers

use std::path::PathBuf;

use super::types::Config;
use crate::http::mime::MimeTable;

/// Application state
///
/// Built once at startup and shared behind an `Arc`. Nothing in here is
/// mutable, so request handlers never take locks.
pub struct AppState {
    pub config: Config,
    /// Document root as configured
    pub root: PathBuf,
    /// Extension-to-content-type table, built-ins merged with config overrides
    pub mime: MimeTable,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let mime = MimeTable::new(
            &config.http.default_content_type,
            &config.http.content_types,
        );

        Self {
            config: config.clone(),
            root: PathBuf::from(&config.site.root),
            mime,
        }
    }
}
