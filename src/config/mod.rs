//! Configuration management for statusgate.
//!
//! Provides XDG-compliant settings loading and assembly of the validated
//! status endpoint configuration.

mod settings;

pub use settings::{Paths, StatusConfig, StatusSettings};
