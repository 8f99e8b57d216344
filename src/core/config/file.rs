//! Defines the structure mirroring the TOML configuration file format.

use serde::Deserialize;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub(crate) dns: DnsConfig,
    #[serde(default)]
    pub(crate) smtp: SmtpConfig,
    #[serde(default)]
    pub(crate) validation: ValidationConfig,
    #[serde(default)]
    pub(crate) scoring: ScoringConfig,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct DnsConfig {
    pub(crate) dns_timeout: Option<u64>,
    pub(crate) dns_servers: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct SmtpConfig {
    pub(crate) smtp_timeout: Option<u64>,
    pub(crate) smtp_port: Option<u16>,
    pub(crate) smtp_sender_email: Option<String>,
    pub(crate) helo_name: Option<String>,
    pub(crate) enable_catch_all_probe: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct ValidationConfig {
    pub(crate) max_concurrency: Option<usize>,
    pub(crate) offline: Option<bool>,
    pub(crate) extra_disposable_domains: Option<Vec<String>>,
    pub(crate) extra_free_domains: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct ScoringConfig {
    pub(crate) format_valid: Option<u32>,
    pub(crate) domain_valid: Option<u32>,
    pub(crate) has_mx_records: Option<u32>,
    pub(crate) smtp_reachable: Option<u32>,
    pub(crate) not_disposable: Option<u32>,
    pub(crate) not_catch_all: Option<u32>,
    pub(crate) not_role_based: Option<u32>,
    pub(crate) not_spam_trap: Option<u32>,
    pub(crate) not_free_provider: Option<u32>,

    pub(crate) excellent_threshold: Option<u32>,
    pub(crate) good_threshold: Option<u32>,
    pub(crate) fair_threshold: Option<u32>,
    pub(crate) poor_threshold: Option<u32>,
}
