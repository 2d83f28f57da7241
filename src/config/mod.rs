// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, ServerConfig, SiteConfig};

impl Config {
    /// Load configuration from the default "config.toml" (if present),
    /// overlaid with `PRISM_`-prefixed environment variables.
    /// Nested keys use a double-underscore separator, so the listening
    /// port is `PRISM_SERVER__PORT`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("PRISM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("site.root", "prism-ui")?
            .set_default("site.index_file", "index.html")?
            .set_default("site.not_found_page", "404.html")?
            .set_default("http.default_content_type", "text/html")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that read or mutate process environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults_without_config_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let cfg = Config::load_from("nonexistent-config").expect("defaults should load");
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.site.root, "prism-ui");
        assert_eq!(cfg.site.index_file, "index.html");
        assert_eq!(cfg.site.not_found_page, "404.html");
        assert_eq!(cfg.http.default_content_type, "text/html");
        assert!(cfg.http.content_types.is_empty());
        assert!(cfg.logging.access_log);
        assert!(cfg.server.workers.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let _guard = ENV_LOCK.lock().unwrap();
        let cfg = Config::load_from("nonexistent-config").expect("defaults should load");
        let addr = cfg.get_socket_addr().expect("valid address");
        assert_eq!(addr.port(), 5000);
    }

    #[test]
    fn test_env_overrides_listen_port() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("PRISM_SERVER__PORT", "9000");
        let cfg = Config::load_from("nonexistent-config").expect("defaults should load");
        std::env::remove_var("PRISM_SERVER__PORT");
        assert_eq!(cfg.server.port, 9000);
    }
}
