//! Single-address validation and the concurrent batch runner.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::models::{BatchReport, Confidence, ValidationResult};
use crate::probe::{probe_for, MailProbe, MxLookup};
use crate::rules::scoring::{confidence_for, Scorer, Signals};
use crate::rules::{syntax, DomainClassifier};

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;

pub const ISSUE_INVALID_FORMAT: &str = "Invalid email format (RFC non-compliant)";
pub const ISSUE_INVALID_DOMAIN: &str = "Invalid domain";
pub const ISSUE_DISPOSABLE: &str = "Disposable email detected";
pub const ISSUE_SPAM_TRAP: &str = "Potential spam trap detected";
pub const ISSUE_NO_MX: &str = "Domain has no MX records";
pub const WARNING_ROLE_BASED: &str = "Role-based email detected (may have lower engagement)";
pub const WARNING_SMTP_UNREACHABLE: &str = "SMTP connection test failed";
pub const WARNING_CATCH_ALL: &str = "Catch-all domain detected";

/// Validates addresses against the static rules and a [`MailProbe`].
#[derive(Clone)]
pub struct EmailValidator {
    probe: Arc<dyn MailProbe>,
    classifier: DomainClassifier,
    scorer: Scorer,
    max_concurrency: usize,
}

impl EmailValidator {
    /// Builds a validator with the probe selected by `config.offline`.
    pub async fn new(config: &Config) -> Result<Self> {
        let probe = probe_for(config).await?;
        Ok(Self::with_probe(config, probe))
    }

    /// Builds a validator around a caller-supplied probe.
    pub fn with_probe(config: &Config, probe: Arc<dyn MailProbe>) -> Self {
        Self {
            probe,
            classifier: DomainClassifier::from_config(config),
            scorer: Scorer::new(config.weights, config.thresholds),
            max_concurrency: config.max_concurrency.max(1),
        }
    }

    /// Validates one address. Never fails: DNS and socket problems only
    /// weaken the result.
    pub async fn validate(&self, email: &str) -> ValidationResult {
        let mut result = ValidationResult::blank(email);

        result.format_valid = syntax::is_valid_format(email);
        if !result.format_valid {
            tracing::debug!(target: "validate_task", "<{}> failed syntax check", email);
            result.issues.push(ISSUE_INVALID_FORMAT.to_string());
            return result;
        }

        let Some(domain) = syntax::domain_of(email) else {
            result.issues.push(ISSUE_INVALID_DOMAIN.to_string());
            return result;
        };

        let flags = self.classifier.classify(email, &domain);
        result.is_disposable = flags.is_disposable;
        result.is_free_provider = flags.is_free_provider;
        result.is_role_based = flags.is_role_based;
        result.is_spam_trap = flags.is_spam_trap;
        if result.is_disposable {
            result.issues.push(ISSUE_DISPOSABLE.to_string());
        }
        if result.is_role_based {
            result.warnings.push(WARNING_ROLE_BASED.to_string());
        }
        if result.is_spam_trap {
            result.issues.push(ISSUE_SPAM_TRAP.to_string());
        }

        let lookup = self.probe.lookup_mx(&domain).await;
        match &lookup {
            MxLookup::Unavailable => {
                result.domain_valid = true;
            }
            MxLookup::Records(_) => {
                result.domain_valid = true;
                result.has_mx_records = true;
            }
            MxLookup::NoRecords => {
                result.issues.push(ISSUE_NO_MX.to_string());
            }
            MxLookup::Failed(reason) => {
                tracing::debug!(target: "validate_task", "<{}> MX lookup failed: {}", email, reason);
                result.issues.push(ISSUE_NO_MX.to_string());
            }
        }

        if let Some(primary) = lookup.primary() {
            result.mx_host = Some(primary.exchange.clone());

            result.smtp_reachable = self.probe.smtp_reachable(&primary.exchange).await;
            if result.smtp_reachable {
                result.is_catch_all = self.probe.catch_all(&domain, &primary.exchange).await;
                if result.is_catch_all {
                    result.warnings.push(WARNING_CATCH_ALL.to_string());
                }
            } else {
                result.warnings.push(WARNING_SMTP_UNREACHABLE.to_string());
            }
        }

        let (score, reputation) = self.scorer.rate(&signals_of(&result));
        result.score = score;
        result.reputation = reputation;

        result.is_valid = result.format_valid
            && result.domain_valid
            && !result.is_disposable
            && !result.is_spam_trap;
        result.confidence = if result.is_valid {
            confidence_for(result.has_mx_records, result.smtp_reachable, result.is_catch_all)
        } else {
            Confidence::Low
        };

        tracing::debug!(target: "validate_task",
            "<{}> valid={} reputation={:?} confidence={:?} score={}",
            email, result.is_valid, result.reputation, result.confidence, result.score);
        result
    }

    /// Validates every address concurrently and partitions the results.
    pub async fn validate_batch<S>(&self, emails: &[S]) -> BatchReport
    where
        S: AsRef<str> + Sync,
    {
        self.validate_batch_with(emails, |_| {}).await
    }

    /// Like [`validate_batch`](Self::validate_batch), calling `on_result`
    /// once per address, in input order, as results become available.
    pub async fn validate_batch_with<S, F>(&self, emails: &[S], on_result: F) -> BatchReport
    where
        S: AsRef<str> + Sync,
        F: Fn(&ValidationResult),
    {
        let start = Instant::now();
        tracing::info!(target: "batch_task",
            "Validating {} address(es), up to {} at a time", emails.len(), self.max_concurrency);

        let results: Vec<ValidationResult> = stream::iter(emails)
            .map(|email| self.validate(email.as_ref()))
            .buffered(self.max_concurrency)
            .inspect(|r| on_result(r))
            .collect()
            .await;

        let report = BatchReport::from_results(results);
        tracing::info!(target: "batch_task",
            "Batch finished in {:.2?}: {} valid, {} invalid",
            start.elapsed(), report.summary.valid, report.summary.invalid);
        report
    }
}

fn signals_of(result: &ValidationResult) -> Signals {
    Signals {
        format_valid: result.format_valid,
        domain_valid: result.domain_valid,
        has_mx_records: result.has_mx_records,
        smtp_reachable: result.smtp_reachable,
        is_disposable: result.is_disposable,
        is_catch_all: result.is_catch_all,
        is_role_based: result.is_role_based,
        is_spam_trap: result.is_spam_trap,
        is_free_provider: result.is_free_provider,
    }
}

impl std::fmt::Debug for EmailValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailValidator")
            .field("classifier", &self.classifier)
            .field("scorer", &self.scorer)
            .field("max_concurrency", &self.max_concurrency)
            .finish_non_exhaustive()
    }
}
