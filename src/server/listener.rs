// Listener setup
// Builds the TCP listener with socket2 so socket options are explicit.

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Bind a non-blocking `TcpListener` on `addr`.
///
/// `SO_REUSEADDR` is enabled so a quick restart of the process does not
/// trip over a port still in TIME_WAIT.
///
/// # Returns
///
/// * `Ok(TcpListener)` - Successfully created and bound listener
/// * `Err(std::io::Error)` - Failed to create or bind socket
pub fn bind_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;

    // Non-blocking is required before handing the socket to tokio
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let addr = "127.0.0.1:0".parse().expect("valid address");
        let listener = bind_listener(addr).expect("bind should succeed");
        let local = listener.local_addr().expect("local addr");
        assert_ne!(local.port(), 0);
    }
}
