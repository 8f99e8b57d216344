//! Defines the custom error types for the mailvet application.
//!
//! Address validation itself never fails; these errors come from setup
//! (configuration, resolver construction) and from the CLI's file handling.

use std::{io, net::AddrParseError};
use thiserror::Error;

/// The primary error type for mailvet.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error occurring during configuration loading or validation.
    #[error("Configuration Error: {0}")]
    Config(String),

    /// Error initializing necessary components (e.g. the DNS resolver).
    #[error("Initialization Error: {0}")]
    Initialization(String),

    /// Error related to file input/output operations.
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),

    /// Error during JSON serialization or deserialization.
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file is not valid TOML or has unknown keys.
    #[error("TOML Parsing Error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Error during SMTP communication setup or command execution.
    #[error("SMTP Error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Error parsing an IP address (configured DNS servers).
    #[error("Address Parsing Error: {0}")]
    AddrParse(#[from] AddrParseError),

    /// Error related to concurrency or task execution.
    #[error("Task Execution Error: {0}")]
    Task(String),

    /// Input that cannot be processed at all (e.g. an empty address list).
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    /// File handling failure with its context attached (path, operation).
    #[error("Generic Error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Task(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
