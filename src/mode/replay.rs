//! Replay mode: one plot per cached XML file

use std::path::Path;

use crate::chart::PlotStyle;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{get_display_name, print_error, print_info};
use crate::report::{list_xml_files, parse_reports, read_xml_file};

use super::{Progress, describe_instant, plot_reports};

/// Plot every cached document separately, each shaded at its own timestamp.
///
/// A document that cannot be read or parsed is reported and skipped; the run
/// fails only when no plot could be produced at all.
pub fn run_replay(config: &Config, xml_dir: &Path) -> Result<()> {
    let files = list_xml_files(xml_dir)?;
    if files.is_empty() {
        return Err(Error::NoInput(xml_dir.display().to_string()));
    }

    let progress = if config.quiet {
        Progress::Markers
    } else {
        Progress::Verbose
    };

    let mut saved = 0;
    for file in &files {
        let name = get_display_name(&file.path);
        if !config.quiet {
            print_info(&describe_instant(file.timestamp));
            print_info(&format!("Parsing XML file: {}", name));
        }

        let parsed = match read_xml_file(&file.path).and_then(|body| parse_reports(&body)) {
            Ok(parsed) => parsed,
            Err(e) => {
                print_error(&format!("{}: {}", name, e));
                continue;
            }
        };

        let path = plot_reports(&parsed, file.timestamp, config, &PlotStyle::SINGLE, progress)?;
        eprintln!("Plot saved to: {}", path.display());
        saved += 1;
    }

    if saved == 0 {
        return Err(Error::NoUsableInput(xml_dir.display().to_string()));
    }

    print_info(&format!(
        "{} of {} XML files processed and plots generated.",
        saved,
        files.len()
    ));
    Ok(())
}
