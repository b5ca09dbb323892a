use std::sync::Arc;

mod config;
mod error;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::Config::load()?;

    // Optional positional argument overrides the served directory.
    if let Some(root) = std::env::args().nth(1) {
        cfg.files.root = root.into();
    }

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // Fail fast with a readable diagnostic: a missing root or an occupied
    // port aborts startup before any connection is accepted.
    let root = cfg.files.root.canonicalize().map_err(|e| {
        format!(
            "Served root '{}' is not accessible: {e}",
            cfg.files.root.display()
        )
    })?;

    let listener =
        server::bind_listener(addr).map_err(|e| format!("Failed to bind {addr}: {e}"))?;

    logger::log_server_start(&addr, &root, &cfg);

    let config = Arc::new(cfg);
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                server::accept_connection(stream, peer_addr, &config);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
