//! Error types for statusgate.
//!
//! Uses `thiserror` for ergonomic error definitions. The rendered text of
//! [`ConfigError`] is shown to operators verbatim, so it is kept stable.

use std::path::PathBuf;
use thiserror::Error;

/// Text reported for an empty allow-list token.
pub const EMPTY_CIDR_REASON: &str = "an empty string is an invalid CIDR block or IP address";

/// A single rejected status configuration value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("port {0} is outside the permitted range (1024-65535)")]
    PortOutOfRange(i64),

    #[error("invalid IP address: {0}")]
    InvalidIp(String),

    #[error("invalid CIDR address: {0}")]
    InvalidCidr(String),
}

/// Fail-fast error from allow-list parsing.
///
/// Displays exactly as the token error that stopped parsing, and keeps the
/// tokens accepted before it. The token error is rendered, not chained, so
/// an error report shows its text once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct AllowListError {
    accepted: Vec<String>,
    error: ConfigError,
}

impl AllowListError {
    pub(crate) fn new(accepted: Vec<String>, error: ConfigError) -> Self {
        Self { accepted, error }
    }

    /// Tokens that validated before the failing one, in input order.
    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    /// The token error that aborted parsing.
    pub fn error(&self) -> &ConfigError {
        &self.error
    }

    /// Split into the accepted tokens and the token error.
    pub fn into_parts(self) -> (Vec<String>, ConfigError) {
        (self.accepted, self.error)
    }
}

/// Errors from loading and assembling status settings.
///
/// Wrapped validation errors are part of the message and are not exposed as
/// a source.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read settings from {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("invalid nginx-status-port: {0}")]
    Port(ConfigError),

    #[error("invalid nginx-status-allow-cidrs: {0}")]
    AllowList(AllowListError),
}

/// Result type alias for single-value validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
