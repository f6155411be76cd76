//! Command-line interface definitions for statusgate.
//!
//! Uses `clap` derive macros for declarative argument parsing. Every status
//! flag can also come from the environment; unset flags fall back to the
//! settings file.

use crate::config::StatusSettings;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Validate the status endpoint settings of a network proxy.
#[derive(Parser, Debug)]
#[command(name = "statusgate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate status endpoint port and allow-list", long_about = None)]
pub struct Cli {
    /// Enable the status endpoint
    #[arg(
        long = "nginx-status",
        env = "NGINX_STATUS",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub nginx_status: Option<bool>,

    /// Port the status endpoint listens on (1024-65535)
    #[arg(
        long = "nginx-status-port",
        env = "NGINX_STATUS_PORT",
        value_name = "PORT",
        allow_negative_numbers = true
    )]
    pub nginx_status_port: Option<i64>,

    /// Comma-separated IPs and CIDR blocks allowed to reach the status endpoint
    ///
    /// Example: "127.0.0.1, 10.0.1.0/24, ::1"
    #[arg(
        long = "nginx-status-allow-cidrs",
        env = "NGINX_STATUS_ALLOW_CIDRS",
        value_name = "LIST"
    )]
    pub nginx_status_allow_cidrs: Option<String>,

    /// Path to a JSON settings file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for the validated configuration
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Report every bad allow-list entry instead of only the first
    #[arg(long)]
    pub all_errors: bool,

    /// Verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Overlay the flags that were given onto `settings`.
    pub fn apply_to(&self, settings: &mut StatusSettings) {
        if let Some(enabled) = self.nginx_status {
            settings.nginx_status = enabled;
        }
        if let Some(port) = self.nginx_status_port {
            settings.nginx_status_port = port;
        }
        if let Some(cidrs) = &self.nginx_status_allow_cidrs {
            settings.nginx_status_allow_cidrs = cidrs.clone();
        }
    }

    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["statusgate"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = parse(&[
            "--nginx-status-port",
            "9113",
            "--nginx-status-allow-cidrs",
            "10.0.0.0/8, 127.0.0.1",
        ]);
        let mut settings = StatusSettings::default();
        cli.apply_to(&mut settings);
        assert_eq!(settings.nginx_status_port, 9113);
        assert_eq!(settings.nginx_status_allow_cidrs, "10.0.0.0/8, 127.0.0.1");
        assert!(settings.nginx_status);
    }

    #[test]
    fn test_bare_status_flag() {
        assert_eq!(parse(&["--nginx-status"]).nginx_status, Some(true));
        assert_eq!(parse(&["--nginx-status=false"]).nginx_status, Some(false));
    }

    #[test]
    fn test_negative_port_reaches_validation() {
        let cli = parse(&["--nginx-status-port", "-1"]);
        assert_eq!(cli.nginx_status_port, Some(-1));
    }

    #[test]
    fn test_verbosity_conflict() {
        assert!(Cli::try_parse_from(["statusgate", "-v", "-q"]).is_err());
        assert_eq!(parse(&["-q"]).log_level(), "error");
        assert_eq!(parse(&["-v"]).log_level(), "info");
    }
}
