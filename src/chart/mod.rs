//! Chart rendering for reception report maps

mod colors;
mod map;

pub use map::render_map_chart;

use chrono::{DateTime, Utc};

/// File name prefix for saved plots
pub(crate) const PLOT_PREFIX: &str = "psk_reporter_signal_reports";

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2800;
pub(super) const CHART_HEIGHT: u32 = 1600;

/// One great-circle polyline, `[lon, lat]` points
pub struct SignalPath {
    pub band: &'static str,
    /// `#RRGGBBAA`
    pub color: String,
    pub points: Vec<[f64; 2]>,
}

/// A sender dot in its band color
pub struct SenderMarker {
    /// `#RRGGBB`
    pub color: &'static str,
    pub lon: f64,
    pub lat: f64,
}

/// A legend swatch: band label and its opaque `#RRGGBB` color
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

/// Everything drawn on one map
pub struct MapChartData {
    pub title: String,
    pub subtitle: String,
    pub paths: Vec<SignalPath>,
    pub senders: Vec<SenderMarker>,
    /// Receiver locations as `[lon, lat]`
    pub receivers: Vec<[f64; 2]>,
    /// Configured home locator, if any
    pub home: Option<[f64; 2]>,
    /// Night cell centers as `[lon, lat]`
    pub night: Vec<[f64; 2]>,
    /// Bands shown in the legend, low to high
    pub legend: Vec<LegendEntry>,
}

/// Presentation constants that differ between modes
#[derive(Debug, Clone, Copy)]
pub struct PlotStyle {
    pub line_width: f64,
    pub sender_size: f64,
    pub receiver_size: f64,
    /// Night cell size in degrees
    pub night_step_deg: f64,
}

impl PlotStyle {
    /// Single query: few paths, draw them bold
    pub const SINGLE: PlotStyle = PlotStyle {
        line_width: 2.0,
        sender_size: 12.0,
        receiver_size: 14.0,
        night_step_deg: 2.0,
    };

    /// Many documents on one map: thinner lines, smaller markers
    pub const COMBINED: PlotStyle = PlotStyle {
        line_width: 1.0,
        sender_size: 8.0,
        receiver_size: 8.0,
        night_step_deg: 2.0,
    };
}

/// `<prefix>.YYYY-MM-DDTHH-MM-SSz.png`
pub(crate) fn plot_file_name(timestamp: DateTime<Utc>) -> String {
    format!(
        "{}.{}.png",
        PLOT_PREFIX,
        timestamp.format("%Y-%m-%dT%H-%M-%Sz")
    )
}
