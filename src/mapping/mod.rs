//! Frequency and SNR to plot style mapping

mod alpha;
mod bands;

pub(crate) use alpha::visual_attributes;
pub(crate) use bands::{BANDS, UNCLASSIFIED_COLOR, band_for_frequency};
