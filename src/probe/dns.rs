//! DNS resolver construction and MX resolution using trust-dns.

use super::{MailServer, MxLookup};
use crate::core::config::Config;
use crate::core::error::{AppError, Result};

use std::net::IpAddr;
use trust_dns_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::TokioAsyncResolver;

/// Creates the async resolver described by `config`.
///
/// An empty `dns_servers` list means the system configuration is used.
pub async fn create_resolver(config: &Config) -> Result<TokioAsyncResolver> {
    let mut opts = ResolverOpts::default();
    opts.timeout = config.dns_timeout;
    opts.attempts = 1;

    if config.dns_servers.is_empty() {
        tracing::debug!(target: "dns_task", "Using system DNS configuration.");
        let (sys_config, mut sys_opts) = trust_dns_resolver::system_conf::read_system_conf()
            .map_err(|e| {
                AppError::Initialization(format!("Failed to read system DNS configuration: {}", e))
            })?;
        sys_opts.timeout = config.dns_timeout;
        sys_opts.attempts = 1;
        return Ok(TokioAsyncResolver::tokio(sys_config, sys_opts));
    }

    let ips = config
        .dns_servers
        .iter()
        .map(|s| s.parse::<IpAddr>())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    tracing::debug!(target: "dns_task", "Using DNS servers: {:?}", ips);

    let group = NameServerConfigGroup::from_ips_clear(&ips, 53, true);
    let resolver_config = ResolverConfig::from_parts(None, vec![], group);
    Ok(TokioAsyncResolver::tokio(resolver_config, opts))
}

/// Orders exchangers by preference; equal preferences keep answer order.
pub(crate) fn order_by_preference(mut servers: Vec<MailServer>) -> Vec<MailServer> {
    servers.sort_by_key(|s| s.preference);
    servers
}

fn classify_error(domain: &str, err: &ResolveError) -> MxLookup {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            tracing::debug!(target: "dns_task",
                "No MX records for {} (response code {:?})", domain, response_code);
            MxLookup::NoRecords
        }
        ResolveErrorKind::Timeout => {
            tracing::warn!(target: "dns_task", "MX lookup for {} timed out", domain);
            MxLookup::Failed(format!("DNS timeout for {}", domain))
        }
        _ => {
            tracing::warn!(target: "dns_task", "MX lookup for {} failed: {}", domain, err);
            MxLookup::Failed(err.to_string())
        }
    }
}

/// Resolves MX records for `domain`. Never fails; errors become
/// [`MxLookup::NoRecords`] or [`MxLookup::Failed`].
pub async fn resolve_mx(resolver: &TokioAsyncResolver, domain: &str) -> MxLookup {
    tracing::debug!(target: "dns_task", "Resolving MX for {}...", domain);
    match resolver.mx_lookup(domain).await {
        Ok(lookup) => {
            let servers: Vec<MailServer> = lookup
                .iter()
                .map(|mx| MailServer {
                    exchange: mx.exchange().to_utf8().trim_end_matches('.').to_string(),
                    preference: mx.preference(),
                })
                .filter(|s| !s.exchange.is_empty())
                .collect();

            if servers.is_empty() {
                tracing::debug!(target: "dns_task", "MX answer for {} was empty", domain);
                return MxLookup::NoRecords;
            }

            let servers = order_by_preference(servers);
            tracing::debug!(target: "dns_task",
                "Found {} MX record(s) for {}, primary {}",
                servers.len(), domain, servers[0].exchange);
            MxLookup::Records(servers)
        }
        Err(e) => classify_error(domain, &e),
    }
}
