//! Logger module
//!
//! Provides logging utilities for the API server including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Lookup misses and handler failures
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;
pub use writer::Level;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        Level::parse(&config.logging.level),
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Before `init()` everything at info or above goes to stdout/stderr
fn write(level: Level, message: &str) {
    match writer::get() {
        Some(w) => w.write(level, message),
        None if level <= Level::Warn => eprintln!("{message}"),
        None if level == Level::Info => println!("{message}"),
        None => {}
    }
}

fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, region: &str) {
    let info = |m: &str| write(Level::Info, m);
    info("======================================");
    info(&format!("{} v{} started", config.service.name, config.service.version));
    info(&format!("Listening on: http://{addr}"));
    info(&format!("Environment: {} (region: {region})", config.service.environment));
    info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        info(&format!("Worker threads: {workers}"));
    }
    if let Some(max) = config.performance.max_connections {
        info(&format!("Max connections: {max}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        info(&format!("Error log: {path}"));
    }
    info("======================================\n");
}

pub fn log_server_stop(signal: &str) {
    write(Level::Info, &format!("[Shutdown] {signal} received, stopping server"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write(Level::Debug, &format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_rejected(peer_addr: &SocketAddr, max: u64) {
    write(
        Level::Warn,
        &format!("[WARN] Connection limit {max} reached, dropping {peer_addr}"),
    );
}

pub fn log_connection_timeout(peer_addr: &SocketAddr) {
    write(Level::Debug, &format!("[Connection] {peer_addr} idle past the header read timeout"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write(Level::Error, &format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write(Level::Error, &format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write(Level::Warn, &format!("[WARN] {message}"));
}

/// A lookup key that matched nothing in the data tables
pub fn log_lookup_miss(endpoint: &str, key: &str) {
    write(Level::Info, &format!("[{endpoint}] No data for \"{key}\""));
}

/// A handler that failed with a server-side error
pub fn log_handler_failure(endpoint: &str, err: &impl std::fmt::Display) {
    write(Level::Error, &format!("[ERROR] [{endpoint}] {err}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}
