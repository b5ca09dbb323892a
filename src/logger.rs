use crate::config::Config;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;
use std::path::Path;

pub fn log_server_start(addr: &SocketAddr, root: &Path, config: &Config) {
    println!("======================================");
    println!("Static file server started");
    println!("Listening on: http://{addr}");
    println!("Serving directory: {}", root.display());
    println!("Index file: {}", config.files.index);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

pub fn log_response(size: usize) {
    println!("[Response] Sent 200 OK ({size} bytes)\n");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}
