use std::io::Write;

use chrono::{DateTime, Utc};
use colored::*;

use crate::geo::LatLon;
use crate::mapping::{BANDS, UNCLASSIFIED_COLOR};
use crate::report::ReceptionReport;

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn print_info(msg: &str) {
    eprintln!("{}", msg);
}

/// Where a timestamp is going to be shown
#[derive(Debug, Clone, Copy)]
pub(crate) enum TimeFormat {
    Console,
    Label,
}

pub(crate) fn format_datetime(ts: DateTime<Utc>, format: TimeFormat) -> String {
    match format {
        TimeFormat::Console => ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        TimeFormat::Label => ts.format("%d %b %Y %H:%M UTC").to_string(),
    }
}

pub(crate) fn get_display_name(path: &std::path::Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

/// Verbose per-report status line
pub(crate) fn print_report(report: &ReceptionReport, sender: LatLon, band: &str) {
    let heard_by = match (&report.receiver_callsign, &report.mode) {
        (Some(rx), Some(mode)) => format!(", Heard by: {} ({})", rx, mode),
        (Some(rx), None) => format!(", Heard by: {}", rx),
        _ => String::new(),
    };
    println!(
        "Callsign: {}, Locator: {}, Coordinates: ({:.3}, {:.3}), SNR: {} dB, Band: {}{}",
        report.sender_callsign.bold(),
        report.sender_locator,
        sender.lat,
        sender.lon,
        report.snr_db,
        band,
        heard_by
    );
}

/// Batch-mode progress marker: `.` for a plotted report, `!` for a skipped one
pub(crate) fn print_progress(plotted: bool) {
    if plotted {
        print!("{}", ".".green());
    } else {
        print!("{}", "!".red());
    }
    let _ = std::io::stdout().flush();
}

pub(crate) fn print_bands() {
    println!("Bands:");
    for band in &BANDS {
        println!(
            "  {:>4}: {:>10.3}+ MHz  {}",
            band.label,
            band.low_hz as f64 / 1e6,
            band.color
        );
    }
    println!("  {:>4}: below 1.800 MHz  {}", "-", UNCLASSIFIED_COLOR);
    println!();
}

pub(crate) fn print_summary(plotted: usize, skipped: usize) {
    let skipped_text = format!("{} skipped", skipped);
    println!(
        "Reports: {} plotted, {}",
        plotted.to_string().bold(),
        if skipped > 0 {
            skipped_text.yellow()
        } else {
            skipped_text.normal()
        }
    );
}
