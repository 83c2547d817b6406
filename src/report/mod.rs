//! Reception report sources: the PSK Reporter query service and cached XML files

mod cache;
mod fetch;
mod xml;

pub(crate) use cache::{list_xml_files, read_xml_file, save_xml};
pub(crate) use fetch::{DEFAULT_QUERY_URL, ReportQuery, fetch_reports};
pub(crate) use xml::parse_reports;

/// A single reception report with every attribute the plot needs
#[derive(Debug, Clone, PartialEq)]
pub struct ReceptionReport {
    pub sender_callsign: String,
    pub frequency_hz: u64,
    pub sender_locator: String,
    pub receiver_locator: String,
    pub snr_db: i32,
    pub receiver_callsign: Option<String>,
    pub mode: Option<String>,
}

/// One `receptionReport` element, in document order
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEntry {
    Complete(ReceptionReport),
    /// Missing a required attribute or carrying an unusable value
    Incomplete,
}

/// Reports extracted from one or more documents
#[derive(Debug, Default)]
pub struct ParsedReports {
    pub entries: Vec<ReportEntry>,
}

impl ParsedReports {
    pub fn reports(&self) -> impl Iterator<Item = &ReceptionReport> {
        self.entries.iter().filter_map(|entry| match entry {
            ReportEntry::Complete(report) => Some(report),
            ReportEntry::Incomplete => None,
        })
    }

    pub fn skipped(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, ReportEntry::Incomplete))
            .count()
    }

    pub fn extend(&mut self, other: ParsedReports) {
        self.entries.extend(other.entries);
    }
}
