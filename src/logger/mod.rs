//! Logger module
//!
//! Logging helpers for the asset server: startup banner, access lines,
//! and error/warning output. Access lines go to stdout, errors to stderr.

use crate::config::Config;
use chrono::Local;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("PrismUI server running at http://{addr}/");
    println!("Document root: {}", config.site.root);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Press Ctrl+C to quit.");
    println!("======================================\n");
}

/// Log one access line in Common Log Format
/// `$remote_addr - - [$time_local] "$method $path" $status $body_bytes_sent`
pub fn log_access(remote_addr: &SocketAddr, method: &str, path: &str, status: u16, bytes: u64) {
    println!(
        "{} - - [{}] \"{method} {path}\" {status} {bytes}",
        remote_addr.ip(),
        Local::now().format("%d/%b/%Y:%H:%M:%S %z"),
    );
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_accept_error(err: &std::io::Error) {
    eprintln!("[ERROR] Failed to accept connection: {err}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
