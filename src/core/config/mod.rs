//! Defines the core runtime `Config` struct and its defaults.
//! Submodules handle loading, building, and validation.

pub(crate) mod builder;
pub(crate) mod file;
pub(crate) mod loading;
pub(crate) mod validation;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::rules::scoring::{ReputationThresholds, ScoreWeights};
use std::collections::HashSet;
use std::time::Duration;

/// Runtime configuration settings used by the validator and its probes.
#[derive(Clone)]
pub struct Config {
    pub dns_timeout: Duration,
    pub dns_servers: Vec<String>,

    pub smtp_timeout: Duration,
    pub smtp_port: u16,
    pub smtp_sender_email: String,
    pub helo_name: String,
    pub enable_catch_all_probe: bool,

    pub max_concurrency: usize,
    /// Select the no-op probe: no DNS, no sockets.
    pub offline: bool,
    pub extra_disposable_domains: HashSet<String>,
    pub extra_free_domains: HashSet<String>,

    pub weights: ScoreWeights,
    pub thresholds: ReputationThresholds,

    pub loaded_config_path: Option<String>,
}

impl Config {
    fn build_default() -> Self {
        let dns_servers = vec![
            "8.8.8.8".to_string(),
            "8.8.4.4".to_string(),
            "1.1.1.1".to_string(),
            "1.0.0.1".to_string(),
        ];

        Config {
            dns_timeout: Duration::from_secs(5),
            dns_servers,
            smtp_timeout: Duration::from_secs(5),
            smtp_port: 25,
            smtp_sender_email: "verify-probe@example.com".to_string(),
            helo_name: "localhost".to_string(),
            enable_catch_all_probe: false,
            max_concurrency: 64,
            offline: false,
            extra_disposable_domains: HashSet::new(),
            extra_free_domains: HashSet::new(),
            weights: ScoreWeights::default(),
            thresholds: ReputationThresholds::default(),
            loaded_config_path: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::build_default()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("dns_timeout", &self.dns_timeout)
            .field("dns_servers_count", &self.dns_servers.len())
            .field("smtp_timeout", &self.smtp_timeout)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_sender_email", &self.smtp_sender_email)
            .field("helo_name", &self.helo_name)
            .field("enable_catch_all_probe", &self.enable_catch_all_probe)
            .field("max_concurrency", &self.max_concurrency)
            .field("offline", &self.offline)
            .field(
                "extra_disposable_domains_count",
                &self.extra_disposable_domains.len(),
            )
            .field("extra_free_domains_count", &self.extra_free_domains.len())
            .field("weights", &self.weights)
            .field("thresholds", &self.thresholds)
            .field("loaded_config_path", &self.loaded_config_path)
            .finish()
    }
}

/// Lower-cases and trims a list of domains, dropping blanks.
pub(crate) fn normalize_domains<I, S>(domains: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    domains
        .into_iter()
        .map(|d| d.as_ref().trim().trim_end_matches('.').to_lowercase())
        .filter(|d| !d.is_empty())
        .collect()
}
