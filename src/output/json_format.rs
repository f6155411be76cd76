//! JSON output formatting.

use super::StatusReport;
use std::io::{self, Write};

/// Write a report in JSON format.
pub fn write_json<W: Write>(out: &mut W, report: &StatusReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writeln!(out, "{}", json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let report = StatusReport {
            enabled: true,
            port: Some(8080),
            allow_cidrs: vec!["127.0.0.1".into(), "10.0.1.0/24".into()],
        };
        let mut buf = Vec::new();
        write_json(&mut buf, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["enabled"], true);
        assert_eq!(value["port"], 8080);
        assert_eq!(value["allow_cidrs"][1], "10.0.1.0/24");
    }

    #[test]
    fn test_disabled_omits_port() {
        let report = StatusReport {
            enabled: false,
            port: None,
            allow_cidrs: Vec::new(),
        };
        let mut buf = Vec::new();
        write_json(&mut buf, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(value.get("port").is_none());
    }
}
