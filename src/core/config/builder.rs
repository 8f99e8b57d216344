//! Builds a runtime [`Config`]: defaults, then file values, then explicit overrides.

use super::file::ConfigFile;
use super::{loading, normalize_domains, validation, Config};
use crate::core::error::Result;
use std::path::Path;
use std::time::Duration;

/// Layered builder for [`Config`].
///
/// ```
/// use mailvet_core::ConfigBuilder;
/// use std::time::Duration;
///
/// let config = ConfigBuilder::new()
///     .offline(true)
///     .smtp_timeout(Duration::from_secs(2))
///     .build()
///     .unwrap();
/// assert!(config.offline);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    file: Option<ConfigFile>,
    loaded_path: Option<String>,
    offline: Option<bool>,
    smtp_timeout: Option<Duration>,
    dns_timeout: Option<Duration>,
    enable_catch_all_probe: Option<bool>,
    max_concurrency: Option<usize>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a config file (explicit path or the default search locations).
    pub fn load_file(mut self, explicit: Option<&Path>) -> Result<Self> {
        if let Some((file, path)) = loading::load_config_file(explicit)? {
            self.file = Some(file);
            self.loaded_path = Some(path.display().to_string());
        }
        Ok(self)
    }

    /// Uses an already-parsed config file.
    pub fn file(mut self, file: ConfigFile) -> Self {
        self.file = Some(file);
        self
    }

    /// Parses TOML text as the config file layer.
    pub fn file_str(self, raw: &str) -> Result<Self> {
        let file = loading::parse_config_str(raw)?;
        Ok(self.file(file))
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = Some(offline);
        self
    }

    pub fn smtp_timeout(mut self, timeout: Duration) -> Self {
        self.smtp_timeout = Some(timeout);
        self
    }

    pub fn dns_timeout(mut self, timeout: Duration) -> Self {
        self.dns_timeout = Some(timeout);
        self
    }

    pub fn enable_catch_all_probe(mut self, enabled: bool) -> Self {
        self.enable_catch_all_probe = Some(enabled);
        self
    }

    pub fn max_concurrency(mut self, n: usize) -> Self {
        self.max_concurrency = Some(n);
        self
    }

    /// Produces the validated [`Config`].
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(file) = &self.file {
            apply_file(&mut config, file);
        }
        config.loaded_config_path = self.loaded_path;

        if let Some(offline) = self.offline {
            config.offline = offline;
        }
        if let Some(timeout) = self.smtp_timeout {
            config.smtp_timeout = timeout;
        }
        if let Some(timeout) = self.dns_timeout {
            config.dns_timeout = timeout;
        }
        if let Some(enabled) = self.enable_catch_all_probe {
            config.enable_catch_all_probe = enabled;
        }
        if let Some(n) = self.max_concurrency {
            config.max_concurrency = n;
        }

        validation::validate_config(&config)?;
        tracing::debug!(target: "config", "Final configuration: {:?}", config);
        Ok(config)
    }
}

fn apply_file(config: &mut Config, file: &ConfigFile) {
    let dns = &file.dns;
    if let Some(secs) = dns.dns_timeout {
        config.dns_timeout = Duration::from_secs(secs);
    }
    if let Some(servers) = &dns.dns_servers {
        config.dns_servers = servers.iter().map(|s| s.trim().to_string()).collect();
    }

    let smtp = &file.smtp;
    if let Some(secs) = smtp.smtp_timeout {
        config.smtp_timeout = Duration::from_secs(secs);
    }
    if let Some(port) = smtp.smtp_port {
        config.smtp_port = port;
    }
    if let Some(sender) = &smtp.smtp_sender_email {
        config.smtp_sender_email = sender.trim().to_string();
    }
    if let Some(helo) = &smtp.helo_name {
        config.helo_name = helo.trim().to_string();
    }
    if let Some(enabled) = smtp.enable_catch_all_probe {
        config.enable_catch_all_probe = enabled;
    }

    let validation = &file.validation;
    if let Some(n) = validation.max_concurrency {
        config.max_concurrency = n;
    }
    if let Some(offline) = validation.offline {
        config.offline = offline;
    }
    if let Some(domains) = &validation.extra_disposable_domains {
        config.extra_disposable_domains = normalize_domains(domains);
    }
    if let Some(domains) = &validation.extra_free_domains {
        config.extra_free_domains = normalize_domains(domains);
    }

    let scoring = &file.scoring;
    let weights = &mut config.weights;
    let overrides = [
        (scoring.format_valid, &mut weights.format_valid),
        (scoring.domain_valid, &mut weights.domain_valid),
        (scoring.has_mx_records, &mut weights.has_mx_records),
        (scoring.smtp_reachable, &mut weights.smtp_reachable),
        (scoring.not_disposable, &mut weights.not_disposable),
        (scoring.not_catch_all, &mut weights.not_catch_all),
        (scoring.not_role_based, &mut weights.not_role_based),
        (scoring.not_spam_trap, &mut weights.not_spam_trap),
        (scoring.not_free_provider, &mut weights.not_free_provider),
    ];
    for (value, slot) in overrides {
        if let Some(v) = value {
            *slot = v;
        }
    }

    let thresholds = &mut config.thresholds;
    if let Some(v) = scoring.excellent_threshold {
        thresholds.excellent = v;
    }
    if let Some(v) = scoring.good_threshold {
        thresholds.good = v;
    }
    if let Some(v) = scoring.fair_threshold {
        thresholds.fair = v;
    }
    if let Some(v) = scoring.poor_threshold {
        thresholds.poor = v;
    }
}
