//! Maidenhead grid locator decoding

use super::LatLon;
use crate::error::{Error, Result};

/// Decode a 2, 4, 6 or 8 character locator into the center of its square
pub(crate) fn locator_to_lat_lon(locator: &str) -> Result<LatLon> {
    let invalid = || Error::Locator(locator.to_string());

    let chars: Vec<char> = locator.trim().chars().map(|c| c.to_ascii_uppercase()).collect();
    if chars.is_empty() || chars.len() > 8 || chars.len() % 2 != 0 {
        return Err(invalid());
    }

    let mut lon = -180.0;
    let mut lat = -90.0;
    // Cell size at the current precision
    let mut lon_size = 360.0;
    let mut lat_size = 180.0;

    for (pair, chunk) in chars.chunks(2).enumerate() {
        let (base, divisions) = match pair {
            0 => ('A', 18),
            1 | 3 => ('0', 10),
            _ => ('A', 24),
        };
        lon_size /= divisions as f64;
        lat_size /= divisions as f64;

        let lon_idx = (chunk[0] as u32).wrapping_sub(base as u32);
        let lat_idx = (chunk[1] as u32).wrapping_sub(base as u32);
        if lon_idx >= divisions || lat_idx >= divisions {
            return Err(invalid());
        }

        lon += lon_idx as f64 * lon_size;
        lat += lat_idx as f64 * lat_size;
    }

    Ok(LatLon::new(lat + lat_size / 2.0, lon + lon_size / 2.0))
}
