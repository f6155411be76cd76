//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use super::StatusReport;
use console::style;
use std::io::{self, Write};

/// Write a report in human-readable plain text format.
pub fn write_plain<W: Write>(out: &mut W, report: &StatusReport) -> io::Result<()> {
    let port = match report.port {
        Some(port) if report.enabled => port,
        _ => {
            writeln!(out, "  {} {}", style("Status:").bold(), style("disabled").yellow())?;
            return Ok(());
        }
    };

    writeln!(out, "  {} {}", style("Status:").bold(), style("enabled").green().bold())?;
    writeln!(out, "  {} {}", style("Port:").bold(), port)?;

    if report.allow_cidrs.is_empty() {
        writeln!(out, "  {} {}", style("Allow:").bold(), style("(none)").dim())?;
    } else {
        writeln!(out, "  {}", style("Allow:").bold())?;
        for entry in &report.allow_cidrs {
            writeln!(out, "    {} {}", style("•").dim(), entry)?;
        }
    }

    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(report: &StatusReport) -> String {
        let mut buf = Vec::new();
        write_plain(&mut buf, report).unwrap();
        console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).into_owned()
    }

    #[test]
    fn test_enabled_lists_entries_in_order() {
        let text = render(&StatusReport {
            enabled: true,
            port: Some(9113),
            allow_cidrs: vec!["10.0.0.0/8".into(), "127.0.0.1".into()],
        });
        assert!(text.contains("Port: 9113"));
        let first = text.find("10.0.0.0/8").unwrap();
        let second = text.find("127.0.0.1").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_disabled() {
        let text = render(&StatusReport {
            enabled: false,
            port: None,
            allow_cidrs: Vec::new(),
        });
        assert!(text.contains("Status: disabled"));
        assert!(!text.contains("Port"));
    }
}
