//! # mailvet_core
//!
//! Grades email addresses for list hygiene. Each address gets a set of
//! independent signals (syntax, disposable / free-provider / role-based /
//! spam-trap tables, MX records, SMTP reachability, optional catch-all probe),
//! an overall validity verdict, a reputation tier, and a confidence tier.
//!
//! ```no_run
//! use mailvet_core::{Config, EmailValidator};
//!
//! # async fn run() -> mailvet_core::Result<()> {
//! let validator = EmailValidator::new(&Config::default()).await?;
//! let result = validator.validate("booking@label-records.com").await;
//! println!("{} -> valid={} ({:?})", result.email, result.is_valid, result.reputation);
//!
//! let report = validator.validate_batch(&["a@gmail.com", "test@example.com"]).await;
//! println!("{} of {} valid", report.summary.valid, report.summary.total);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod input;
pub mod probe;
pub mod rules;
pub mod validator;

pub use crate::core::config::{Config, ConfigBuilder, ConfigFile};
pub use crate::core::error::{AppError, Result};
pub use crate::core::models::{
    BatchReport, BatchSummary, Confidence, Reputation, ReputationBreakdown, ValidationResult,
};
pub use crate::probe::{MailProbe, MailServer, MxLookup, NetworkProbe, OfflineProbe};
pub use crate::rules::scoring::{ReputationThresholds, ScoreWeights};
pub use crate::validator::EmailValidator;
