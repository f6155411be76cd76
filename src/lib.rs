//! # statusgate - Status endpoint settings validation
//!
//! Validates the operator-supplied settings that gate access to a network
//! proxy's status/metrics endpoint:
//!
//! - the TCP port the endpoint listens on, which must be non-privileged
//!   (1024-65535)
//! - a comma-separated allow-list of client addresses, each a bare IPv4/IPv6
//!   address or a CIDR block
//!
//! ## Example Usage
//!
//! ```rust
//! use statusgate::types::{parse_status_allow_cidrs, validate_status_port};
//!
//! assert!(validate_status_port(8080).is_ok());
//! assert!(validate_status_port(443).is_err());
//!
//! let cidrs = parse_status_allow_cidrs("127.0.0.1, 10.0.1.0/24").unwrap();
//! assert_eq!(cidrs, ["127.0.0.1", "10.0.1.0/24"]);
//!
//! let err = parse_status_allow_cidrs("earth").unwrap_err();
//! assert_eq!(err.to_string(), "invalid IP address: earth");
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Port and allow-list validators and their validated types
//! - [`config`] - Settings file loading and assembly into a [`StatusConfig`]
//! - [`cli`] - Command-line flags
//! - [`error`] - Error types
//! - [`output`] - Output formatting utilities

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use config::{StatusConfig, StatusSettings};
pub use error::{AllowListError, ConfigError, SettingsError};
pub use types::{
    parse_status_allow_cidrs, validate_cidr_or_ip, validate_status_port, AllowEntry, AllowList,
    StatusPort,
};
