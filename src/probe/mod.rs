//! Network-facing checks behind a capability trait.
//!
//! [`NetworkProbe`] talks to DNS and mail servers; [`OfflineProbe`] is used
//! where no network is available and answers optimistically. Neither ever
//! returns an error: failures degrade into negative signals.

pub(crate) mod catch_all;
pub mod dns;
pub mod network;
pub mod offline;
pub(crate) mod reachability;

pub use network::NetworkProbe;
pub use offline::OfflineProbe;

use crate::core::config::Config;
use crate::core::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A mail exchanger from an MX answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailServer {
    /// Host name without the trailing root dot.
    pub exchange: String,
    pub preference: u16,
}

/// Outcome of an MX query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MxLookup {
    /// DNS is not available in this deployment; the domain is assumed fine.
    Unavailable,
    /// At least one exchanger, ordered by preference (lowest first).
    Records(Vec<MailServer>),
    /// The domain answered without MX records (or does not exist).
    NoRecords,
    /// The query itself failed (timeout, SERVFAIL, ...).
    Failed(String),
}

impl MxLookup {
    /// The exchanger to probe: the first one after preference ordering.
    pub fn primary(&self) -> Option<&MailServer> {
        match self {
            MxLookup::Records(servers) => servers.first(),
            _ => None,
        }
    }
}

/// The I/O capabilities the validator needs.
#[async_trait]
pub trait MailProbe: Send + Sync {
    /// Resolves the MX records of `domain`.
    async fn lookup_mx(&self, domain: &str) -> MxLookup;

    /// Whether a TCP connection to the SMTP port of `exchange` can be opened.
    async fn smtp_reachable(&self, exchange: &str) -> bool;

    /// Whether `exchange` accepts mail for any local-part at `domain`.
    async fn catch_all(&self, domain: &str, exchange: &str) -> bool;
}

/// Picks the probe implementation the configuration asks for.
pub async fn probe_for(config: &Config) -> Result<Arc<dyn MailProbe>> {
    if config.offline {
        tracing::info!(target: "dns_task", "Offline mode: DNS and SMTP checks are disabled.");
        Ok(Arc::new(OfflineProbe))
    } else {
        Ok(Arc::new(NetworkProbe::new(config).await?))
    }
}
