//! receptionReport extraction

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::{ParsedReports, ReceptionReport, ReportEntry};
use crate::error::{Error, Result};

/// Parse every `receptionReport` element of a query response.
///
/// Elements missing one of the required attributes, carrying a malformed
/// attribute or a non-numeric frequency/SNR are kept as `Incomplete`.
/// A document that ends with elements still open is an error.
pub(crate) fn parse_reports(xml: &str) -> Result<ParsedReports> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut parsed = ParsedReports::default();
    let mut buf = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                depth += 1;
                if e.name().as_ref() == b"receptionReport" {
                    parsed.entries.push(entry_from_element(&e));
                }
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == b"receptionReport" => {
                parsed.entries.push(entry_from_element(&e));
            }
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) if depth > 0 => {
                return Err(Error::Xml {
                    position: reader.buffer_position(),
                    message: format!("document ends with {} unclosed element(s)", depth),
                });
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml {
                    position: reader.buffer_position(),
                    message: e.to_string(),
                });
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(parsed)
}

fn entry_from_element(e: &BytesStart) -> ReportEntry {
    match report_from_element(e) {
        Some(report) => ReportEntry::Complete(report),
        None => ReportEntry::Incomplete,
    }
}

#[derive(Default)]
struct RawAttributes {
    sender_callsign: Option<String>,
    frequency: Option<String>,
    sender_locator: Option<String>,
    receiver_locator: Option<String>,
    snr: Option<String>,
    receiver_callsign: Option<String>,
    mode: Option<String>,
}

fn report_from_element(e: &BytesStart) -> Option<ReceptionReport> {
    let mut raw = RawAttributes::default();

    for attr in e.attributes() {
        let attr = attr.ok()?;
        let value = attr.unescape_value().ok()?.trim().to_string();
        if value.is_empty() {
            continue;
        }
        match attr.key.as_ref() {
            b"senderCallsign" => raw.sender_callsign = Some(value),
            b"frequency" => raw.frequency = Some(value),
            b"senderLocator" => raw.sender_locator = Some(value),
            b"receiverLocator" => raw.receiver_locator = Some(value),
            b"sNR" => raw.snr = Some(value),
            b"receiverCallsign" => raw.receiver_callsign = Some(value),
            b"mode" => raw.mode = Some(value),
            _ => {}
        }
    }

    let (
        Some(sender_callsign),
        Some(frequency),
        Some(sender_locator),
        Some(receiver_locator),
        Some(snr),
    ) = (
        raw.sender_callsign,
        raw.frequency,
        raw.sender_locator,
        raw.receiver_locator,
        raw.snr,
    ) else {
        return None;
    };

    let (Ok(frequency_hz), Ok(snr_db)) = (frequency.parse::<u64>(), snr.parse::<i32>()) else {
        return None;
    };

    Some(ReceptionReport {
        sender_callsign,
        frequency_hz,
        sender_locator,
        receiver_locator,
        snr_db,
        receiver_callsign: raw.receiver_callsign,
        mode: raw.mode,
    })
}
