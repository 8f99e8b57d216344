//! Defines the result records produced by validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reputation tier derived from the weighted point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reputation {
    Excellent,
    Good,
    Fair,
    Poor,
    Unknown,
}

impl Reputation {
    /// Every tier, best first.
    pub const ALL: [Reputation; 5] = [
        Reputation::Excellent,
        Reputation::Good,
        Reputation::Fair,
        Reputation::Poor,
        Reputation::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Reputation::Excellent => "excellent",
            Reputation::Good => "good",
            Reputation::Fair => "fair",
            Reputation::Poor => "poor",
            Reputation::Unknown => "unknown",
        }
    }
}

/// How much the positive signals can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// The outcome of validating a single address.
///
/// `issues` explain why `is_valid` is false; `warnings` only lower the
/// reputation or confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub email: String,
    /// Lower-cased domain part, absent when the format check failed.
    pub domain: Option<String>,
    pub is_valid: bool,
    pub format_valid: bool,
    pub domain_valid: bool,
    pub has_mx_records: bool,
    /// Primary mail exchanger, when MX records were found.
    pub mx_host: Option<String>,
    pub smtp_reachable: bool,
    pub is_disposable: bool,
    pub is_free_provider: bool,
    pub is_catch_all: bool,
    pub is_role_based: bool,
    pub is_spam_trap: bool,
    /// Raw weighted point total behind `reputation`.
    pub score: u32,
    pub reputation: Reputation,
    pub confidence: Confidence,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// A result with every signal negative, before any check has run.
    pub(crate) fn blank(email: &str) -> Self {
        Self {
            email: email.to_string(),
            domain: None,
            is_valid: false,
            format_valid: false,
            domain_valid: false,
            has_mx_records: false,
            mx_host: None,
            smtp_reachable: false,
            is_disposable: false,
            is_free_provider: false,
            is_catch_all: false,
            is_role_based: false,
            is_spam_trap: false,
            score: 0,
            reputation: Reputation::Unknown,
            confidence: Confidence::Low,
            issues: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Valid and not on a free-mail provider.
    pub fn is_business(&self) -> bool {
        self.is_valid && !self.is_free_provider
    }
}

/// Count of results per reputation tier. Every tier is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationBreakdown {
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
    pub unknown: usize,
}

impl ReputationBreakdown {
    pub fn record(&mut self, reputation: Reputation) {
        match reputation {
            Reputation::Excellent => self.excellent += 1,
            Reputation::Good => self.good += 1,
            Reputation::Fair => self.fair += 1,
            Reputation::Poor => self.poor += 1,
            Reputation::Unknown => self.unknown += 1,
        }
    }

    pub fn get(&self, reputation: Reputation) -> usize {
        match reputation {
            Reputation::Excellent => self.excellent,
            Reputation::Good => self.good,
            Reputation::Fair => self.fair,
            Reputation::Poor => self.poor,
            Reputation::Unknown => self.unknown,
        }
    }

    pub fn total(&self) -> usize {
        self.excellent + self.good + self.fair + self.poor + self.unknown
    }
}

/// Aggregate counts over a batch. Each flag count is taken over the full input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub format_valid: usize,
    pub domain_valid: usize,
    pub has_mx_records: usize,
    pub smtp_reachable: usize,
    pub is_disposable: usize,
    pub is_free_provider: usize,
    pub is_catch_all: usize,
    pub is_role_based: usize,
    pub is_spam_trap: usize,
    pub business_emails: usize,
    pub reputation_breakdown: ReputationBreakdown,
}

impl BatchSummary {
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a ValidationResult>,
    {
        let mut summary = BatchSummary::default();
        for r in results {
            summary.add(r);
        }
        summary
    }

    fn add(&mut self, r: &ValidationResult) {
        let bump = |count: &mut usize, flag: bool| *count += usize::from(flag);

        self.total += 1;
        bump(&mut self.valid, r.is_valid);
        bump(&mut self.invalid, !r.is_valid);
        bump(&mut self.format_valid, r.format_valid);
        bump(&mut self.domain_valid, r.domain_valid);
        bump(&mut self.has_mx_records, r.has_mx_records);
        bump(&mut self.smtp_reachable, r.smtp_reachable);
        bump(&mut self.is_disposable, r.is_disposable);
        bump(&mut self.is_free_provider, r.is_free_provider);
        bump(&mut self.is_catch_all, r.is_catch_all);
        bump(&mut self.is_role_based, r.is_role_based);
        bump(&mut self.is_spam_trap, r.is_spam_trap);
        bump(&mut self.business_emails, r.is_business());
        self.reputation_breakdown.record(r.reputation);
    }
}

/// Output of a batch run: the input partitioned by validity, plus a summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub valid: Vec<ValidationResult>,
    pub invalid: Vec<ValidationResult>,
    pub summary: BatchSummary,
    pub checked_at: DateTime<Utc>,
}

impl BatchReport {
    /// Partitions results (keeping their order) and tabulates the summary.
    pub fn from_results(results: Vec<ValidationResult>) -> Self {
        let summary = BatchSummary::from_results(&results);
        let (valid, invalid): (Vec<_>, Vec<_>) = results.into_iter().partition(|r| r.is_valid);
        Self {
            valid,
            invalid,
            summary,
            checked_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(email: &str, valid: bool, free: bool, reputation: Reputation) -> ValidationResult {
        let mut r = ValidationResult::blank(email);
        r.format_valid = true;
        r.is_valid = valid;
        r.is_free_provider = free;
        r.reputation = reputation;
        r
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(ValidationResult::blank("a@b.co")).unwrap();
        for key in [
            "isValid",
            "formatValid",
            "domainValid",
            "hasMxRecords",
            "smtpReachable",
            "isDisposable",
            "isFreeProvider",
            "isCatchAll",
            "isRoleBased",
            "isSpamTrap",
            "reputation",
            "confidence",
            "issues",
            "warnings",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["reputation"], "unknown");
        assert_eq!(json["confidence"], "low");
    }

    #[test]
    fn report_partitions_and_counts() {
        let results = vec![
            result("a@corp.io", true, false, Reputation::Excellent),
            result("b@gmail.com", true, true, Reputation::Good),
            result("c@x.io", false, false, Reputation::Poor),
        ];
        let report = BatchReport::from_results(results);

        assert_eq!(report.valid.len() + report.invalid.len(), 3);
        assert_eq!(report.valid[0].email, "a@corp.io");
        assert_eq!(report.invalid[0].email, "c@x.io");

        let s = &report.summary;
        assert_eq!((s.total, s.valid, s.invalid), (3, 2, 1));
        assert_eq!(s.format_valid, 3);
        assert_eq!(s.is_free_provider, 1);
        assert_eq!(s.business_emails, 1);
        assert_eq!(s.reputation_breakdown.get(Reputation::Excellent), 1);
        assert_eq!(s.reputation_breakdown.get(Reputation::Unknown), 0);
        assert_eq!(s.reputation_breakdown.total(), 3);
    }

    #[test]
    fn tier_names_match_serialized_form() {
        for tier in Reputation::ALL {
            assert_eq!(serde_json::to_value(tier).unwrap(), tier.as_str());
        }
    }

    #[test]
    fn empty_batch_has_zeroed_summary() {
        let report = BatchReport::from_results(Vec::new());
        assert_eq!(report.summary, BatchSummary::default());
    }
}
