//! Sanity checks applied to a fully built [`Config`].

use super::Config;
use crate::core::error::{AppError, Result};
use std::net::IpAddr;
use std::time::Duration;

pub(crate) fn validate_config(config: &Config) -> Result<()> {
    if config.dns_timeout == Duration::ZERO {
        return Err(AppError::Config("dns_timeout must be greater than 0".into()));
    }
    if config.smtp_timeout == Duration::ZERO {
        return Err(AppError::Config("smtp_timeout must be greater than 0".into()));
    }
    if config.smtp_port == 0 {
        return Err(AppError::Config("smtp_port must be greater than 0".into()));
    }
    if config.max_concurrency == 0 {
        return Err(AppError::Config(
            "max_concurrency must be at least 1".into(),
        ));
    }
    if !config.smtp_sender_email.contains('@') {
        return Err(AppError::Config(format!(
            "smtp_sender_email '{}' is not an email address",
            config.smtp_sender_email
        )));
    }
    if config.helo_name.is_empty() {
        return Err(AppError::Config("helo_name must not be empty".into()));
    }
    for server in &config.dns_servers {
        server.parse::<IpAddr>().map_err(|e| {
            AppError::Config(format!("Invalid DNS server address '{}': {}", server, e))
        })?;
    }

    let t = &config.thresholds;
    if !(t.excellent > t.good && t.good > t.fair && t.fair > t.poor) {
        return Err(AppError::Config(format!(
            "Reputation thresholds must be strictly descending (excellent {} > good {} > fair {} > poor {})",
            t.excellent, t.good, t.fair, t.poor
        )));
    }

    Ok(())
}
