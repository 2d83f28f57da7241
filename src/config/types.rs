// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::collections::HashMap;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Site configuration - where the static showcase lives on disk
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Document root directory; every servable asset lives under it
    pub root: String,
    /// File served for requests to `/`
    pub index_file: String,
    /// Custom error page served on 404, relative to the document root
    pub not_found_page: String,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Content type for extensions not present in the table
    pub default_content_type: String,
    /// Extra extension-to-content-type entries, merged over the built-ins
    #[serde(default)]
    pub content_types: HashMap<String, String>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}
