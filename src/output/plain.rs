//! Plain text output formatting.
//!
//! Produces one line per scanned port, colored when stdout is a terminal.

use crate::scanner::PortResult;
use crate::storage::ScanReport;
use console::{style, Style};
use std::io::{self, Write};

/// Write every port line of the report to `out`, in report order, styled.
pub fn print_results<W: Write>(out: &mut W, report: &ScanReport, open_only: bool) -> io::Result<()> {
    write_results(out, report, open_only, true)
}

/// Write port lines to `out`, optionally styled.
pub fn write_results<W: Write>(
    out: &mut W,
    report: &ScanReport,
    open_only: bool,
    styled: bool,
) -> io::Result<()> {
    for result in report.results.iter().filter(|r| r.open || !open_only) {
        if styled {
            writeln!(out, "{}", styled_port_line(result))?;
        } else {
            writeln!(out, "{}", result)?;
        }
    }
    Ok(())
}

fn styled_port_line(result: &PortResult) -> String {
    let state = if result.open {
        Style::new().green().bold()
    } else {
        Style::new().red()
    };

    format!(
        "Port {} ({}) {}",
        result.port,
        result.service,
        state.apply_to(result.state_label())
    )
}

/// Write the one-line scan summary.
pub fn print_summary<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} {}", style("Scan finished:").bold(), report.summary())
}

/// Write a scan header before scanning begins.
pub fn print_scan_header<W: Write>(
    out: &mut W,
    host: &str,
    ports: usize,
    workers: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "{} {} v{}",
        style("Starting").cyan(),
        style("portsweep").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(
        out,
        "{} Target: {}",
        style("•").dim(),
        style(host).white().bold()
    )?;
    writeln!(
        out,
        "{} Scanning {} ports with {} workers...",
        style("•").dim(),
        style(ports).white().bold(),
        workers
    )?;
    writeln!(out)
}

/// Print an error message to stderr. A closed stderr is ignored.
pub fn print_error(msg: &str) {
    let stderr = io::stderr();
    let _ = writeln!(stderr.lock(), "{} {}", style("Error:").red().bold(), msg);
}

/// Write a success message.
pub fn print_success<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", style("✓").green().bold(), msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanSettings;
    use std::time::Duration;

    fn report() -> ScanReport {
        let results = vec![
            PortResult::new(81, false, "unknown service"),
            PortResult::new(80, true, "http"),
            PortResult::new(22, false, "ssh"),
        ];
        ScanReport::finalize(&ScanSettings::default(), results, Duration::from_secs(1))
    }

    #[test]
    fn test_all_ports_in_report_order() {
        let mut out = Vec::new();
        write_results(&mut out, &report(), false, false).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Port 80 (http) OPEN\nPort 22 (ssh) CLOSED\nPort 81 (unknown service) CLOSED\n"
        );
    }

    #[test]
    fn test_open_only() {
        let mut out = Vec::new();
        write_results(&mut out, &report(), true, false).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Port 80 (http) OPEN\n");
    }

    #[test]
    fn test_header_and_summary() {
        let mut out = Vec::new();
        print_scan_header(&mut out, "10.0.0.1", 6000, 100).unwrap();
        print_summary(&mut out, &report()).unwrap();
        print_success(&mut out, "saved").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("10.0.0.1"));
        assert!(text.contains("6000"));
        assert!(text.contains("1 open / 3 scanned"));
        assert!(text.contains("saved"));
    }

    #[test]
    fn test_styled_line_keeps_text() {
        let line = styled_port_line(&PortResult::new(443, true, "https"));
        assert!(line.starts_with("Port 443 (https) "));
        assert!(line.contains("OPEN"));
    }
}
