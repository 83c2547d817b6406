//! CLI mode implementations

mod combined;
mod replay;
mod single;

pub use combined::run_combined;
pub use replay::run_replay;
pub use single::run_single;

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::chart::{self, LegendEntry, MapChartData, PlotStyle, SenderMarker, SignalPath};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::geo::{self, LatLon};
use crate::mapping::{BANDS, UNCLASSIFIED_COLOR, band_for_frequency, visual_attributes};
use crate::output::{
    TimeFormat, format_datetime, print_progress, print_report, print_summary, print_warning,
};
use crate::report::{ParsedReports, ReportEntry};

/// Legend label for frequencies below every band
const UNCLASSIFIED_LABEL: &str = "other";

/// How per-report progress is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Progress {
    /// One line per report
    Verbose,
    /// `.` per plotted report, `!` per skipped one
    Markers,
}

/// Build and save one map for a set of reports shaded at `instant`, returning its path.
///
/// Every entry point goes through here, so reports are styled identically
/// whether they were fetched or replayed from the cache.
pub(crate) fn plot_reports(
    parsed: &ParsedReports,
    instant: DateTime<Utc>,
    config: &Config,
    style: &PlotStyle,
    progress: Progress,
) -> Result<PathBuf> {
    let mut paths = Vec::new();
    let mut senders = Vec::new();
    let mut receivers = Vec::new();
    let mut seen_senders = HashSet::new();
    let mut seen_receivers = HashSet::new();
    let mut bands_present = HashSet::new();
    let mut skipped = 0;
    let mut plotted = 0;

    for entry in &parsed.entries {
        let report = match entry {
            ReportEntry::Complete(report) => report,
            ReportEntry::Incomplete => {
                skipped += 1;
                match progress {
                    Progress::Verbose => print_warning("Skipping incomplete report."),
                    Progress::Markers => print_progress(false),
                }
                continue;
            }
        };

        let endpoints = geo::locator_to_lat_lon(&report.sender_locator)
            .and_then(|s| geo::locator_to_lat_lon(&report.receiver_locator).map(|r| (s, r)));
        let (sender, receiver) = match endpoints {
            Ok(points) => points,
            Err(e) => {
                skipped += 1;
                match progress {
                    Progress::Verbose => print_warning(&format!(
                        "Skipping report from {}: {}",
                        report.sender_callsign, e
                    )),
                    Progress::Markers => print_progress(false),
                }
                continue;
            }
        };

        let band = band_for_frequency(report.frequency_hz)
            .map(|b| b.label)
            .unwrap_or(UNCLASSIFIED_LABEL);
        let attrs = visual_attributes(report.frequency_hz, report.snr_db as f64);

        match progress {
            Progress::Verbose => print_report(report, sender, band),
            Progress::Markers => print_progress(true),
        }
        plotted += 1;

        for points in geo::great_circle_path(sender, receiver) {
            paths.push(SignalPath {
                band,
                color: attrs.fill_color.clone(),
                points,
            });
        }

        if seen_senders.insert((report.sender_locator.to_uppercase(), attrs.line_color)) {
            senders.push(SenderMarker {
                color: attrs.line_color,
                lon: sender.lon,
                lat: sender.lat,
            });
        }
        if seen_receivers.insert(report.receiver_locator.to_uppercase()) {
            receivers.push([receiver.lon, receiver.lat]);
        }
        bands_present.insert(band);
    }

    if progress == Progress::Markers {
        println!();
    }

    if plotted == 0 {
        print_warning("No complete reports to plot; the map will only show the night shade");
    }

    let home = match &config.locator {
        Some(locator) => match geo::locator_to_lat_lon(locator) {
            Ok(p) => Some([p.lon, p.lat]),
            Err(e) => {
                print_warning(&e.to_string());
                None
            }
        },
        None => None,
    };

    let night = if config.night_shade {
        geo::night_cells(instant, style.night_step_deg)
            .into_iter()
            .map(|p: LatLon| [p.lon, p.lat])
            .collect()
    } else {
        Vec::new()
    };

    let data = MapChartData {
        title: "PSK Reporter Signal Reports".to_string(),
        subtitle: format!(
            "{}  |  {} reports  |  {}",
            config.callsign.trim().to_uppercase(),
            plotted,
            format_datetime(instant, TimeFormat::Label)
        ),
        paths,
        senders,
        receivers,
        home,
        night,
        legend: legend_entries(&bands_present),
    };

    let path = config.output_dir.join(chart::plot_file_name(instant));
    chart::render_map_chart(&data, style, &path.to_string_lossy()).map_err(Error::Chart)?;

    print_summary(plotted, skipped);
    Ok(path)
}

/// Bands in table order with their opaque colors, unclassified last
fn legend_entries(present: &HashSet<&'static str>) -> Vec<LegendEntry> {
    BANDS
        .iter()
        .map(|b| (b.label, b.color))
        .chain(std::iter::once((UNCLASSIFIED_LABEL, UNCLASSIFIED_COLOR)))
        .filter(|(label, _)| present.contains(label))
        .map(|(label, color)| LegendEntry { label, color })
        .collect()
}

/// Console line announcing a document's instant
pub(crate) fn describe_instant(instant: DateTime<Utc>) -> String {
    format!("XML Datetime: {}", format_datetime(instant, TimeFormat::Console))
}
