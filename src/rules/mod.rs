//! Deterministic, I/O-free rules: syntax, table classification, scoring.

pub mod classify;
pub mod scoring;
pub mod syntax;
pub mod tables;

pub use classify::{Classification, DomainClassifier};
pub use scoring::{confidence_for, ReputationThresholds, ScoreWeights, Scorer, Signals};
