//! Output formatting module.
//!
//! Provides formatters for plain text and JSON output of a validated
//! status configuration.

mod json_format;
mod plain;

pub use json_format::write_json;
pub use plain::{print_error, print_success, write_plain};

use crate::cli::OutputFormat;
use crate::config::StatusConfig;
use serde::Serialize;
use std::io::{self, Write};

/// Serializable view of a [`StatusConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// Whether the status endpoint is served.
    pub enabled: bool,
    /// Listening port, absent when disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Allowed client addresses, in operator order.
    pub allow_cidrs: Vec<String>,
}

impl From<&StatusConfig> for StatusReport {
    fn from(config: &StatusConfig) -> Self {
        match config {
            StatusConfig::Disabled => Self {
                enabled: false,
                port: None,
                allow_cidrs: Vec::new(),
            },
            StatusConfig::Enabled { port, allow_list } => Self {
                enabled: true,
                port: Some(port.as_u16()),
                allow_cidrs: allow_list.as_strings().to_vec(),
            },
        }
    }
}

/// Write a validated configuration according to the specified format.
pub fn write_config<W: Write>(
    out: &mut W,
    config: &StatusConfig,
    format: OutputFormat,
) -> io::Result<()> {
    let report = StatusReport::from(config);
    match format {
        OutputFormat::Plain => write_plain(out, &report),
        OutputFormat::Json => write_json(out, &report),
    }
}

/// Print a validated configuration to stdout.
pub fn print_config(config: &StatusConfig, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_config(&mut out, config, format)
}
