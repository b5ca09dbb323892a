// Connection handling
// Accepts a TCP connection and drives HTTP/1.1 over it.

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use crate::config::Config;
use crate::handler;
use crate::logger;

/// Accept a connection and serve it on a spawned task.
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    config: &Arc<Config>,
) {
    if config.logging.access_log {
        logger::log_connection_accepted(&peer_addr);
    }

    handle_connection(stream, Arc::clone(config));
}

/// Serve a single connection in a spawned task.
///
/// Wraps the TCP stream in `TokioIo`, configures HTTP/1.1 keep-alive from
/// the performance settings, and bounds the whole connection by the larger
/// of the read/write timeouts. A client that disconnects mid-transfer just
/// ends the task; no state survives the connection.
fn handle_connection(stream: tokio::net::TcpStream, config: Arc<Config>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let keep_alive_timeout = config.performance.keep_alive_timeout;
        let timeout_duration = std::time::Duration::from_secs(std::cmp::max(
            config.performance.read_timeout,
            config.performance.write_timeout,
        ));

        let mut builder = http1::Builder::new();
        if keep_alive_timeout > 0 {
            builder.keep_alive(true);
        }

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let config = Arc::clone(&config);
                async move { handler::handle_request(req, config).await }
            }),
        );

        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection timed out after {} seconds",
                    timeout_duration.as_secs()
                ));
            }
        }
    });
}
