//! Single query mode: fetch the latest reports and plot them now

use std::path::Path;

use chrono::Utc;

use crate::chart::PlotStyle;
use crate::config::Config;
use crate::error::Result;
use crate::output::print_info;
use crate::report::{fetch_reports, parse_reports, save_xml};

use super::{Progress, plot_reports};

/// Fetch reports for the configured callsign and plot them at the current instant
pub fn run_single(config: &Config, save_dir: Option<&Path>) -> Result<()> {
    let now = Utc::now();
    let query = config.query();

    if !config.quiet {
        print_info(&format!("Fetching {}", query.url()));
    }
    let body = fetch_reports(&query)?;

    if let Some(dir) = save_dir {
        let saved = save_xml(dir, now, &body)?;
        print_info(&format!("Saved XML to: {}", saved.display()));
    }

    let parsed = parse_reports(&body)?;
    let progress = if config.quiet {
        Progress::Markers
    } else {
        Progress::Verbose
    };

    let path = plot_reports(&parsed, now, config, &PlotStyle::SINGLE, progress)?;
    eprintln!("Plot saved to: {}", path.display());
    Ok(())
}
