//! Turns the boolean signals of a result into a reputation tier and a
//! confidence tier. The point weights and tier thresholds are data, so they
//! can be tuned from the config file.

use crate::core::models::{Confidence, Reputation};
use serde::{Deserialize, Serialize};

/// Points awarded per signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub format_valid: u32,
    pub domain_valid: u32,
    pub has_mx_records: u32,
    pub smtp_reachable: u32,
    pub not_disposable: u32,
    pub not_catch_all: u32,
    pub not_role_based: u32,
    pub not_spam_trap: u32,
    pub not_free_provider: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            format_valid: 10,
            domain_valid: 20,
            has_mx_records: 20,
            smtp_reachable: 20,
            not_disposable: 15,
            not_catch_all: 10,
            not_role_based: 5,
            not_spam_trap: 10,
            not_free_provider: 10,
        }
    }
}

impl ScoreWeights {
    pub fn max_score(&self) -> u32 {
        self.format_valid
            + self.domain_valid
            + self.has_mx_records
            + self.smtp_reachable
            + self.not_disposable
            + self.not_catch_all
            + self.not_role_based
            + self.not_spam_trap
            + self.not_free_provider
    }
}

/// Minimum score for each tier; anything under `poor` is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationThresholds {
    pub excellent: u32,
    pub good: u32,
    pub fair: u32,
    pub poor: u32,
}

impl Default for ReputationThresholds {
    fn default() -> Self {
        Self {
            excellent: 90,
            good: 70,
            fair: 50,
            poor: 30,
        }
    }
}

impl ReputationThresholds {
    pub fn tier(&self, score: u32) -> Reputation {
        if score >= self.excellent {
            Reputation::Excellent
        } else if score >= self.good {
            Reputation::Good
        } else if score >= self.fair {
            Reputation::Fair
        } else if score >= self.poor {
            Reputation::Poor
        } else {
            Reputation::Unknown
        }
    }
}

/// The scorer's view of a validation result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signals {
    pub format_valid: bool,
    pub domain_valid: bool,
    pub has_mx_records: bool,
    pub smtp_reachable: bool,
    pub is_disposable: bool,
    pub is_catch_all: bool,
    pub is_role_based: bool,
    pub is_spam_trap: bool,
    pub is_free_provider: bool,
}

/// Weighted point total of `signals`.
pub fn score(signals: &Signals, weights: &ScoreWeights) -> u32 {
    let award = |hit: bool, points: u32| if hit { points } else { 0 };

    award(signals.format_valid, weights.format_valid)
        + award(signals.domain_valid, weights.domain_valid)
        + award(signals.has_mx_records, weights.has_mx_records)
        + award(signals.smtp_reachable, weights.smtp_reachable)
        + award(!signals.is_disposable, weights.not_disposable)
        + award(!signals.is_catch_all, weights.not_catch_all)
        + award(!signals.is_role_based, weights.not_role_based)
        + award(!signals.is_spam_trap, weights.not_spam_trap)
        + award(!signals.is_free_provider, weights.not_free_provider)
}

/// Confidence in the positive signals of a valid address.
///
/// `High` needs MX records, a reachable SMTP host and no catch-all; `Medium`
/// needs MX records alone; otherwise `Low`.
pub fn confidence_for(has_mx_records: bool, smtp_reachable: bool, is_catch_all: bool) -> Confidence {
    if has_mx_records && smtp_reachable && !is_catch_all {
        Confidence::High
    } else if has_mx_records {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Weights and thresholds bundled together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scorer {
    pub weights: ScoreWeights,
    pub thresholds: ReputationThresholds,
}

impl Scorer {
    pub fn new(weights: ScoreWeights, thresholds: ReputationThresholds) -> Self {
        Self {
            weights,
            thresholds,
        }
    }

    /// Returns the point total and its tier.
    pub fn rate(&self, signals: &Signals) -> (u32, Reputation) {
        let points = score(signals, &self.weights);
        (points, self.thresholds.tier(points))
    }
}
