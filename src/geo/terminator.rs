//! Day/night terminator from a low-precision solar position

use chrono::{DateTime, Utc};

use super::{LatLon, normalize_lon};

/// Sun elevation (degrees) below which a point counts as night, allowing for refraction
pub(crate) const NIGHT_ELEVATION_DEG: f64 = -0.83;

const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const J2000_JD: f64 = 2_451_545.0;

/// Point on Earth where the sun is at the zenith
pub(crate) fn subsolar_point(instant: DateTime<Utc>) -> LatLon {
    let jd = instant.timestamp_millis() as f64 / 86_400_000.0 + UNIX_EPOCH_JD;
    let n = jd - J2000_JD;

    let mean_lon = (280.460 + 0.985_647_4 * n).rem_euclid(360.0);
    let mean_anomaly = (357.528 + 0.985_600_3 * n).rem_euclid(360.0).to_radians();
    let ecliptic_lon = (mean_lon
        + 1.915 * mean_anomaly.sin()
        + 0.020 * (2.0 * mean_anomaly).sin())
    .to_radians();
    let obliquity = (23.439 - 0.000_000_4 * n).to_radians();

    let right_ascension = (obliquity.cos() * ecliptic_lon.sin()).atan2(ecliptic_lon.cos());
    let declination = (obliquity.sin() * ecliptic_lon.sin()).asin();

    let gmst_hours = (18.697_374_558 + 24.065_709_824_419_08 * n).rem_euclid(24.0);
    let lon = normalize_lon(right_ascension.to_degrees() - gmst_hours * 15.0);

    LatLon::new(declination.to_degrees(), lon)
}

/// Elevation of the sun above the horizon at a point, in degrees
pub(crate) fn solar_elevation(point: LatLon, subsolar: LatLon) -> f64 {
    let (lat, dec) = (point.lat.to_radians(), subsolar.lat.to_radians());
    let hour_angle = (point.lon - subsolar.lon).to_radians();
    let sin_el = lat.sin() * dec.sin() + lat.cos() * dec.cos() * hour_angle.cos();
    sin_el.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Centers of the `step_deg` grid cells that are in darkness at `instant`
pub(crate) fn night_cells(instant: DateTime<Utc>, step_deg: f64) -> Vec<LatLon> {
    let subsolar = subsolar_point(instant);
    let rows = (180.0 / step_deg).round() as usize;
    let cols = (360.0 / step_deg).round() as usize;

    let mut cells = Vec::new();
    for row in 0..rows {
        let lat = -90.0 + (row as f64 + 0.5) * step_deg;
        for col in 0..cols {
            let lon = -180.0 + (col as f64 + 0.5) * step_deg;
            let p = LatLon::new(lat, lon);
            if solar_elevation(p, subsolar) < NIGHT_ELEVATION_DEG {
                cells.push(p);
            }
        }
    }
    cells
}
