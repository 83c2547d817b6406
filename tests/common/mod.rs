//! Common test utilities

use std::path::{Path, PathBuf};

/// One `receptionReport` element; `None` leaves the attribute out
pub struct ReportSpec<'a> {
    pub sender_callsign: Option<&'a str>,
    pub frequency: Option<u64>,
    pub sender_locator: Option<&'a str>,
    pub receiver_locator: Option<&'a str>,
    pub snr: Option<i32>,
}

impl<'a> ReportSpec<'a> {
    /// A complete report from N0CALL in FN31pr
    pub fn complete(frequency: u64, receiver_locator: &'a str, snr: i32) -> Self {
        Self {
            sender_callsign: Some("N0CALL"),
            frequency: Some(frequency),
            sender_locator: Some("FN31pr"),
            receiver_locator: Some(receiver_locator),
            snr: Some(snr),
        }
    }
}

/// Build a query response document
pub fn reports_xml(reports: &[ReportSpec]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<receptionReports>\n");
    xml.push_str("  <lastSequenceNumber value=\"1\" />\n");
    for r in reports {
        xml.push_str("  <receptionReport receiverCallsign=\"DL1XYZ\" mode=\"FT8\"");
        if let Some(v) = r.sender_callsign {
            xml.push_str(&format!(" senderCallsign=\"{}\"", v));
        }
        if let Some(v) = r.frequency {
            xml.push_str(&format!(" frequency=\"{}\"", v));
        }
        if let Some(v) = r.sender_locator {
            xml.push_str(&format!(" senderLocator=\"{}\"", v));
        }
        if let Some(v) = r.receiver_locator {
            xml.push_str(&format!(" receiverLocator=\"{}\"", v));
        }
        if let Some(v) = r.snr {
            xml.push_str(&format!(" sNR=\"{}\"", v));
        }
        xml.push_str(" />\n");
    }
    xml.push_str("</receptionReports>\n");
    xml
}

/// A small mixed-band document
pub fn sample_reports_xml() -> String {
    reports_xml(&[
        ReportSpec::complete(14_074_000, "JO62qm", -12),
        ReportSpec::complete(7_074_000, "QF56", 3),
        ReportSpec::complete(28_074_000, "PM95", -20),
        ReportSpec::complete(21_074_000, "JO62qm", 8),
    ])
}

/// Write a cached document named `pskr-<timestamp>.xml`
pub fn write_cached_xml(dir: &Path, timestamp: &str, body: &str) -> PathBuf {
    let path = dir.join(format!("pskr-{}.xml", timestamp));
    std::fs::write(&path, body).unwrap();
    path
}
