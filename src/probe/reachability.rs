//! Plain TCP reachability check against a mail exchanger's SMTP port.

use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Opens a TCP connection to `host:port` and closes it straight away.
///
/// Returns false on refusal, resolution failure, or when `limit` elapses;
/// a pending connect is dropped at the deadline.
pub(crate) async fn tcp_connectable(host: &str, port: u16, limit: Duration) -> bool {
    tracing::debug!(target: "smtp_task", "Connecting to {}:{} (timeout {:?})", host, port, limit);
    match timeout(limit, TcpStream::connect((host, port))).await {
        Ok(Ok(stream)) => {
            drop(stream);
            tracing::debug!(target: "smtp_task", "{}:{} accepted the connection", host, port);
            true
        }
        Ok(Err(e)) => {
            tracing::debug!(target: "smtp_task", "Connection to {}:{} failed: {}", host, port, e);
            false
        }
        Err(_) => {
            tracing::warn!(target: "smtp_task",
                "Connection to {}:{} timed out after {:?}. Outbound port {} may be blocked.",
                host, port, limit, port);
            false
        }
    }
}
