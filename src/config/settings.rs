//! Status endpoint settings and paths.
//!
//! Settings come from a JSON file in the XDG config directory, with every
//! field optional. Validation turns them into a [`StatusConfig`].

use crate::cli::Cli;
use crate::error::{SettingsError, SettingsResult};
use crate::types::{validate_all_allow_cidrs, AllowList, StatusPort, TokenError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/statusgate)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Resolve paths using XDG directories.
    pub fn new() -> SettingsResult<Self> {
        let project = ProjectDirs::from("com", "statusgate", "statusgate")
            .ok_or(SettingsError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Raw, unvalidated status endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusSettings {
    /// Serve the status endpoint at all.
    pub nginx_status: bool,
    /// Port for the status endpoint. Signed so out-of-range input survives
    /// deserialization and is reported by validation.
    pub nginx_status_port: i64,
    /// Comma-separated IPs and CIDR blocks allowed to reach the endpoint.
    pub nginx_status_allow_cidrs: String,
}

impl Default for StatusSettings {
    fn default() -> Self {
        Self {
            nginx_status: true,
            nginx_status_port: i64::from(StatusPort::DEFAULT.as_u16()),
            nginx_status_allow_cidrs: "127.0.0.1".to_string(),
        }
    }
}

impl StatusSettings {
    /// Load settings from the default location, or defaults if absent.
    pub fn load() -> SettingsResult<Self> {
        let file = Paths::new()?.settings_file();

        if !file.exists() {
            debug!(path = %file.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| SettingsError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        debug!(path = %path.display(), "loaded settings file");
        serde_json::from_str(&content).map_err(|e| SettingsError::InvalidFormat(e.to_string()))
    }

    /// Assemble settings from the command line, the settings file and
    /// defaults, in that order of precedence.
    ///
    /// An explicit `--config` file must exist. Without one the default
    /// location is used if present.
    pub fn resolve(cli: &Cli) -> SettingsResult<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::load_from(path)?,
            None => Self::or_defaults(Self::load())?,
        };
        cli.apply_to(&mut settings);
        Ok(settings)
    }

    /// Fall back to defaults when there is no configuration directory.
    fn or_defaults(loaded: SettingsResult<Self>) -> SettingsResult<Self> {
        match loaded {
            Err(SettingsError::DirectoryNotFound) => {
                warn!("no configuration directory found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Every bad allow-list entry, or none when the endpoint is disabled.
    pub fn allow_list_errors(&self) -> Vec<TokenError> {
        if !self.nginx_status {
            return Vec::new();
        }
        validate_all_allow_cidrs(&self.nginx_status_allow_cidrs)
    }

    /// Validate the settings.
    ///
    /// When the endpoint is disabled the port and allow-list are ignored.
    pub fn validate(&self) -> SettingsResult<StatusConfig> {
        if !self.nginx_status {
            return Ok(StatusConfig::Disabled);
        }

        let port = StatusPort::try_from(self.nginx_status_port).map_err(SettingsError::Port)?;
        let allow_list =
            AllowList::parse(&self.nginx_status_allow_cidrs).map_err(SettingsError::AllowList)?;

        Ok(StatusConfig::Enabled { port, allow_list })
    }
}

/// Validated status endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusConfig {
    /// The status endpoint is turned off.
    Disabled,
    /// The status endpoint is served on `port` to clients in `allow_list`.
    Enabled {
        port: StatusPort,
        allow_list: AllowList,
    },
}

impl StatusConfig {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled { .. })
    }
}
