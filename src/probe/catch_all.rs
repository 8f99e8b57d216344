//! Opt-in catch-all detection.
//!
//! Asks the primary exchanger whether it would accept a recipient that
//! cannot exist. The session stops after `RCPT TO`; no message is sent.

use crate::core::config::Config;
use crate::core::error::{AppError, Result};

use lettre::transport::smtp::client::SmtpConnection;
use lettre::transport::smtp::commands::{Mail, Rcpt};
use lettre::transport::smtp::extension::ClientId;
use lettre::Address;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::net::ToSocketAddrs;
use std::str::FromStr;
use std::time::Duration;

const PROBE_LOCAL_PART_LEN: usize = 16;

/// A random lower-case alphanumeric local-part.
pub(crate) fn random_local_part() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(PROBE_LOCAL_PART_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

/// Settings copied out of [`Config`] so the probe can move to a blocking thread.
#[derive(Debug, Clone)]
pub(crate) struct CatchAllProbe {
    sender: String,
    helo_name: String,
    port: u16,
    timeout: Duration,
}

impl CatchAllProbe {
    pub(crate) fn from_config(config: &Config) -> Self {
        Self {
            sender: config.smtp_sender_email.clone(),
            helo_name: config.helo_name.clone(),
            port: config.smtp_port,
            timeout: config.smtp_timeout,
        }
    }

    /// Runs the probe on the blocking pool. Any failure reads as "not catch-all".
    pub(crate) async fn run(&self, domain: &str, exchange: &str) -> bool {
        let probe = self.clone();
        let domain = domain.to_string();
        let exchange = exchange.to_string();
        let label = format!("[catch-all {}]", domain);

        let outcome =
            tokio::task::spawn_blocking(move || probe.accepts_random_recipient(&domain, &exchange))
                .await
                .map_err(AppError::from)
                .and_then(|inner| inner);

        match outcome {
            Ok(accepted) => {
                tracing::debug!(target: "smtp_task", "{} Random recipient accepted: {}", label, accepted);
                accepted
            }
            Err(e) => {
                tracing::debug!(target: "smtp_task", "{} Probe inconclusive: {}", label, e);
                false
            }
        }
    }

    fn accepts_random_recipient(&self, domain: &str, exchange: &str) -> Result<bool> {
        let socket_addr = (exchange, self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                AppError::Initialization(format!("Could not resolve mail server address: {}", exchange))
            })?;

        let sender = Address::from_str(&self.sender)
            .map_err(|e| AppError::Config(format!("Invalid sender email in config: {}", e)))?;
        let probe_address = format!("{}@{}", random_local_part(), domain);
        let recipient = Address::from_str(&probe_address)
            .map_err(|e| AppError::Config(format!("Invalid probe address '{}': {}", probe_address, e)))?;

        let helo = ClientId::Domain(self.helo_name.clone());
        let mut conn = SmtpConnection::connect(socket_addr, Some(self.timeout), &helo, None, None)?;

        tracing::debug!(target: "smtp_task", "MAIL FROM:<{}> to {}", self.sender, exchange);
        if let Err(e) = conn.command(Mail::new(Some(sender), vec![])) {
            conn.quit().ok();
            return Err(e.into());
        }

        tracing::debug!(target: "smtp_task", "RCPT TO:<{}> to {}", probe_address, exchange);
        let accepted = match conn.command(Rcpt::new(recipient, vec![])) {
            Ok(response) => response.is_positive(),
            Err(e) if e.is_permanent() => false,
            Err(e) => {
                conn.quit().ok();
                return Err(e.into());
            }
        };

        conn.quit().ok();
        Ok(accepted)
    }
}
