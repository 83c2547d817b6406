//! Combined mode: every cached XML file on a single map

use std::path::Path;

use crate::chart::PlotStyle;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{get_display_name, print_error, print_info};
use crate::report::{ParsedReports, list_xml_files, parse_reports, read_xml_file};

use super::{Progress, describe_instant, plot_reports};

/// Merge all cached documents into one plot, shaded at the newest file's timestamp
pub fn run_combined(config: &Config, xml_dir: &Path) -> Result<()> {
    let files = list_xml_files(xml_dir)?;
    let Some(last) = files.last() else {
        return Err(Error::NoInput(xml_dir.display().to_string()));
    };

    if !config.quiet {
        print_info(&describe_instant(last.timestamp));
        print_info(&format!("Combining {} XML files", files.len()));
    }

    let mut merged = ParsedReports::default();
    let mut read = 0;
    for file in &files {
        match read_xml_file(&file.path).and_then(|body| parse_reports(&body)) {
            Ok(parsed) => {
                merged.extend(parsed);
                read += 1;
            }
            Err(e) => print_error(&format!("{}: {}", get_display_name(&file.path), e)),
        }
    }

    if read == 0 {
        return Err(Error::NoUsableInput(xml_dir.display().to_string()));
    }

    if !config.quiet {
        print_info(&format!(
            "{} reports from {} files ({} incomplete)",
            merged.reports().count(),
            read,
            merged.skipped()
        ));
    }

    let path = plot_reports(
        &merged,
        last.timestamp,
        config,
        &PlotStyle::COMBINED,
        Progress::Markers,
    )?;
    eprintln!("Plot saved to: {}", path.display());
    Ok(())
}
