mod chart;
mod config;
mod error;
mod geo;
mod mapping;
mod mode;
mod output;
mod report;

use std::path::{Path, PathBuf};

use clap::Parser;

use config::{Config, DEFAULT_LOOKBACK_SECS, PLACEHOLDER_CALLSIGN};
use mode::{run_combined, run_replay, run_single};
use output::{print_bands, print_error};
use report::DEFAULT_QUERY_URL;

#[derive(Parser)]
#[command(
    name = "pskmap",
    version,
    about = "PSK Reporter reception report plotter with band colors and day/night shading",
    after_help = "Examples:
  pskmap --callsign N0CALL                             Fetch the last 5 minutes and plot
  pskmap --callsign N0CALL --save-xml pskr-xmldata     Also keep the XML for replay
  pskmap --callsign N0CALL --replay pskr-xmldata       One plot per cached XML file
  pskmap --callsign N0CALL --replay pskr-xmldata --all All cached files on one plot

Do not query more than once every 5 minutes."
)]
struct Args {
    /// Your callsign (reports of stations hearing it are plotted)
    #[arg(long, env = "PSKMAP_CALLSIGN", default_value = PLACEHOLDER_CALLSIGN)]
    callsign: String,

    /// Your Maidenhead locator, marked on the map
    #[arg(long, env = "PSKMAP_LOCATOR")]
    locator: Option<String>,

    /// Query lookback window in seconds
    #[arg(short, long, env = "PSKMAP_LOOKBACK", default_value_t = DEFAULT_LOOKBACK_SECS, value_name = "SECONDS")]
    lookback: u32,

    /// Plot cached XML files from this directory instead of querying
    #[arg(short, long, value_name = "DIR")]
    replay: Option<PathBuf>,

    /// Combine every cached XML file into a single plot (replay mode only)
    #[arg(short, long)]
    all: bool,

    /// Directory plots are saved to
    #[arg(short, long, default_value = "plots", value_name = "DIR")]
    output: PathBuf,

    /// Save the fetched XML into this directory for later replay
    #[arg(long, value_name = "DIR")]
    save_xml: Option<PathBuf>,

    /// Do not shade the night side of the map
    #[arg(long)]
    no_night: bool,

    /// Suppress per-report output (progress markers only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Report query endpoint
    #[arg(long, env = "PSKMAP_QUERY_URL", default_value = DEFAULT_QUERY_URL, hide = true)]
    query_url: String,
}

fn require_dir(path: &Path, what: &str) {
    if !path.is_dir() {
        print_error(&format!("{} directory does not exist: {}", what, path.display()));
        std::process::exit(1);
    }
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    let config = Config {
        callsign: args.callsign,
        locator: args.locator,
        lookback_secs: args.lookback,
        query_url: args.query_url,
        output_dir: args.output,
        night_shade: !args.no_night,
        quiet: args.quiet,
    };

    // Nothing touches the network or the file system before this passes
    if let Err(e) = config.validate() {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    // Validate option combinations
    if args.all && args.replay.is_none() {
        print_error("--all can only be used with --replay");
        std::process::exit(1);
    }

    if args.save_xml.is_some() && args.replay.is_some() {
        print_error("--save-xml cannot be used with --replay");
        std::process::exit(1);
    }

    require_dir(&config.output_dir, "Output");
    if let Some(ref dir) = args.save_xml {
        require_dir(dir, "XML");
    }

    if !config.quiet {
        print_bands();
    }

    // Dispatch to appropriate mode
    let result = match args.replay {
        Some(ref dir) if args.all => run_combined(&config, dir),
        Some(ref dir) => run_replay(&config, dir),
        None => run_single(&config, args.save_xml.as_deref()),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
