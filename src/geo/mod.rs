//! Geographic helpers: grid locators, great-circle paths, day/night terminator

mod locator;
mod path;
mod terminator;

pub(crate) use locator::locator_to_lat_lon;
pub(crate) use path::great_circle_path;
pub(crate) use terminator::night_cells;

/// A point in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LatLon {
    pub(crate) lat: f64,
    pub(crate) lon: f64,
}

impl LatLon {
    pub(crate) fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Wrap a longitude into [-180, 180)
pub(crate) fn normalize_lon(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}
