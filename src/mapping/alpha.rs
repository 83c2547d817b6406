//! SNR to transparency

use super::bands::color_for_frequency;

/// SNR range (dB) spread over the full alpha range
const SNR_MIN_DB: f64 = -23.0;
const SNR_MAX_DB: f64 = 10.0;

/// Styling for one reception report
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VisualAttributes {
    /// `#RRGGBB`
    pub(crate) line_color: &'static str,
    /// `#RRGGBBAA`
    pub(crate) fill_color: String,
}

/// Linear interpolation of SNR onto 0..=255, clamped at both ends
pub(crate) fn snr_to_alpha(snr_db: f64) -> u8 {
    if snr_db.is_nan() {
        return 0;
    }
    let t = ((snr_db - SNR_MIN_DB) / (SNR_MAX_DB - SNR_MIN_DB)).clamp(0.0, 1.0);
    (t * 255.0).round() as u8
}

/// Band color with the SNR alpha appended
pub(crate) fn transparency_for_snr(frequency_hz: u64, snr_db: f64) -> String {
    format!(
        "{}{:02x}",
        color_for_frequency(frequency_hz),
        snr_to_alpha(snr_db)
    )
}

pub(crate) fn visual_attributes(frequency_hz: u64, snr_db: f64) -> VisualAttributes {
    VisualAttributes {
        line_color: color_for_frequency(frequency_hz),
        fill_color: transparency_for_snr(frequency_hz, snr_db),
    }
}
