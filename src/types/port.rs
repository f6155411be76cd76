//! Status endpoint port validation.
//!
//! The status endpoint must listen on a non-privileged port (1024-65535).
//! Callers parse the number themselves; this module only range-checks it.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Check that `port` is usable for the status endpoint.
///
/// Anything from the privileged range (0-1023) or past the 16-bit port
/// space is rejected.
pub fn validate_status_port(port: i64) -> ConfigResult<()> {
    if (i64::from(StatusPort::MIN)..=i64::from(StatusPort::MAX)).contains(&port) {
        Ok(())
    } else {
        Err(ConfigError::PortOutOfRange(port))
    }
}

/// A port that passed [`validate_status_port`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct StatusPort(u16);

impl StatusPort {
    /// Lowest permitted port.
    pub const MIN: u16 = 1024;
    /// Highest permitted port.
    pub const MAX: u16 = 65535;
    /// Port used when the operator sets none.
    pub const DEFAULT: StatusPort = StatusPort(8080);

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl Default for StatusPort {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for StatusPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for StatusPort {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        validate_status_port(value)?;
        // In range, so the narrowing cannot fail.
        u16::try_from(value)
            .map(Self)
            .map_err(|_| ConfigError::PortOutOfRange(value))
    }
}

impl From<StatusPort> for u16 {
    fn from(port: StatusPort) -> Self {
        port.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_ports() {
        for port in [i64::MIN, -1, 0, 1, 80, 443, 1022, 1023, 65536, 70000] {
            assert!(validate_status_port(port).is_err(), "port {port} accepted");
        }
    }

    #[test]
    fn test_good_ports() {
        for port in [1024, 8080, 8081, 8082, 49152, 65535] {
            assert!(validate_status_port(port).is_ok(), "port {port} rejected");
        }
    }

    #[test]
    fn test_error_names_value_and_range() {
        let err = validate_status_port(443).unwrap_err();
        assert_eq!(err, ConfigError::PortOutOfRange(443));
        assert_eq!(
            err.to_string(),
            "port 443 is outside the permitted range (1024-65535)"
        );
    }

    #[test]
    fn test_status_port_agrees_with_validator() {
        assert_eq!(StatusPort::try_from(1024).unwrap().as_u16(), 1024);
        assert_eq!(StatusPort::try_from(65535).unwrap().as_u16(), 65535);
        assert!(StatusPort::try_from(1023).is_err());
        assert!(StatusPort::try_from(65536).is_err());
        assert_eq!(StatusPort::default().as_u16(), 8080);
    }

    #[test]
    fn test_serde() {
        let port: StatusPort = serde_json::from_str("9113").unwrap();
        assert_eq!(port.as_u16(), 9113);
        assert_eq!(serde_json::to_string(&port).unwrap(), "9113");
        assert!(serde_json::from_str::<StatusPort>("80").is_err());
    }
}
