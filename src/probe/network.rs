//! The real probe: DNS over trust-dns, TCP reachability, optional catch-all check.

use super::catch_all::CatchAllProbe;
use super::dns::{create_resolver, resolve_mx};
use super::reachability::tcp_connectable;
use super::{MailProbe, MxLookup};
use crate::core::config::Config;
use crate::core::error::Result;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use trust_dns_resolver::TokioAsyncResolver;

/// Probe backed by the network.
#[derive(Clone)]
pub struct NetworkProbe {
    resolver: Arc<TokioAsyncResolver>,
    smtp_port: u16,
    smtp_timeout: Duration,
    catch_all: Option<CatchAllProbe>,
}

impl NetworkProbe {
    pub async fn new(config: &Config) -> Result<Self> {
        tracing::debug!(target: "dns_task", "Initializing network probe...");
        let resolver = Arc::new(create_resolver(config).await?);

        let catch_all = if config.enable_catch_all_probe {
            tracing::info!(target: "smtp_task",
                "Catch-all probing enabled: mail servers will receive a RCPT TO for a random recipient.");
            Some(CatchAllProbe::from_config(config))
        } else {
            None
        };

        Ok(Self {
            resolver,
            smtp_port: config.smtp_port,
            smtp_timeout: config.smtp_timeout,
            catch_all,
        })
    }
}

#[async_trait]
impl MailProbe for NetworkProbe {
    async fn lookup_mx(&self, domain: &str) -> MxLookup {
        resolve_mx(&self.resolver, domain).await
    }

    async fn smtp_reachable(&self, exchange: &str) -> bool {
        tcp_connectable(exchange, self.smtp_port, self.smtp_timeout).await
    }

    async fn catch_all(&self, domain: &str, exchange: &str) -> bool {
        match &self.catch_all {
            Some(probe) => probe.run(domain, exchange).await,
            None => false,
        }
    }
}

impl std::fmt::Debug for NetworkProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkProbe")
            .field("smtp_port", &self.smtp_port)
            .field("smtp_timeout", &self.smtp_timeout)
            .field("catch_all_enabled", &self.catch_all.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn catch_all_is_off_unless_enabled() {
        let probe = NetworkProbe::new(&Config::default()).await.unwrap();
        assert!(probe.catch_all.is_none());
        // Disabled probe answers without touching the network.
        assert!(!probe.catch_all("example.com", "mx.example.com").await);
    }

    #[tokio::test]
    async fn enabling_catch_all_is_honored() {
        let config = Config {
            enable_catch_all_probe: true,
            ..Config::default()
        };
        let probe = NetworkProbe::new(&config).await.unwrap();
        assert!(probe.catch_all.is_some());
    }
}
