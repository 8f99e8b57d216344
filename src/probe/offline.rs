//! Probe for deployments without DNS or raw sockets.

use super::{MailProbe, MxLookup};
use async_trait::async_trait;

/// Answers every question optimistically-unknown and performs no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProbe;

#[async_trait]
impl MailProbe for OfflineProbe {
    async fn lookup_mx(&self, _domain: &str) -> MxLookup {
        MxLookup::Unavailable
    }

    async fn smtp_reachable(&self, _exchange: &str) -> bool {
        false
    }

    async fn catch_all(&self, _domain: &str, _exchange: &str) -> bool {
        false
    }
}
