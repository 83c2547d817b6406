//! Amateur radio band definitions

/// Band with label, inclusive lower bound and display color
pub(crate) struct Band {
    pub(crate) label: &'static str,
    pub(crate) low_hz: u64,
    pub(crate) color: &'static str,
}

/// Color for frequencies below the 160m band
pub(crate) const UNCLASSIFIED_COLOR: &str = "#808080";

/// The 10 plotted bands, lowest frequency first
pub(crate) const BANDS: [Band; 10] = [
    Band {
        label: "160m",
        low_hz: 1_800_000,
        color: "#7cfc00",
    },
    Band {
        label: "80m",
        low_hz: 3_500_000,
        color: "#e550e5",
    },
    Band {
        label: "40m",
        low_hz: 7_000_000,
        color: "#5959ff",
    },
    Band {
        label: "30m",
        low_hz: 10_100_000,
        color: "#62d962",
    },
    Band {
        label: "20m",
        low_hz: 14_000_000,
        color: "#f2c40c",
    },
    Band {
        label: "17m",
        low_hz: 18_068_000,
        color: "#f2f261",
    },
    Band {
        label: "15m",
        low_hz: 21_000_000,
        color: "#cca166",
    },
    Band {
        label: "12m",
        low_hz: 24_890_000,
        color: "#b22222",
    },
    Band {
        label: "10m",
        low_hz: 28_000_000,
        color: "#ff69b4",
    },
    Band {
        label: "6m",
        low_hz: 56_000_000,
        color: "#ff0000",
    },
];

/// Find the band a frequency belongs to.
///
/// Bounds are checked highest first, so a frequency sitting exactly on a
/// lower bound belongs to that band.
pub(crate) fn band_for_frequency(frequency_hz: u64) -> Option<&'static Band> {
    BANDS.iter().rev().find(|band| frequency_hz >= band.low_hz)
}

/// Base `#RRGGBB` color for a frequency
pub(crate) fn color_for_frequency(frequency_hz: u64) -> &'static str {
    band_for_frequency(frequency_hz)
        .map(|band| band.color)
        .unwrap_or(UNCLASSIFIED_COLOR)
}
