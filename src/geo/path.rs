//! Great-circle path interpolation

use super::LatLon;

/// Points per degree of arc
const POINTS_PER_DEGREE: f64 = 1.0;

fn to_vector(p: LatLon) -> [f64; 3] {
    let (lat, lon) = (p.lat.to_radians(), p.lon.to_radians());
    [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
}

fn from_vector(v: [f64; 3]) -> LatLon {
    let lat = v[2].atan2((v[0] * v[0] + v[1] * v[1]).sqrt());
    let lon = v[1].atan2(v[0]);
    LatLon::new(lat.to_degrees(), lon.to_degrees())
}

/// Central angle between two points in radians
pub(crate) fn central_angle(from: LatLon, to: LatLon) -> f64 {
    let a = to_vector(from);
    let b = to_vector(to);
    let dot = a[0] * b[0] + a[1] * b[1] + a[2] * b[2];
    let cross = [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ];
    let cross_len = (cross[0] * cross[0] + cross[1] * cross[1] + cross[2] * cross[2]).sqrt();
    cross_len.atan2(dot)
}

/// Interpolate the shorter great-circle arc between two points.
///
/// Returns `[lon, lat]` polylines; the path is split wherever it crosses
/// the antimeridian so each polyline can be drawn on a lon/lat plate.
pub(crate) fn great_circle_path(from: LatLon, to: LatLon) -> Vec<Vec<[f64; 2]>> {
    let angle = central_angle(from, to);
    let steps = ((angle.to_degrees() * POINTS_PER_DEGREE).ceil() as usize).max(1);

    let points: Vec<LatLon> = if angle.sin().abs() < 1e-9 {
        vec![from, to]
    } else {
        let a = to_vector(from);
        let b = to_vector(to);
        (0..=steps)
            .map(|i| {
                let f = i as f64 / steps as f64;
                let wa = ((1.0 - f) * angle).sin() / angle.sin();
                let wb = (f * angle).sin() / angle.sin();
                from_vector([
                    wa * a[0] + wb * b[0],
                    wa * a[1] + wb * b[1],
                    wa * a[2] + wb * b[2],
                ])
            })
            .collect()
    };

    split_at_antimeridian(&points)
}

fn split_at_antimeridian(points: &[LatLon]) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();

    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            let prev = points[i - 1];
            let delta = p.lon - prev.lon;
            if delta.abs() > 180.0 {
                // Unwrap the next longitude, then cut at the edge it crosses
                let edge = if delta < 0.0 { 180.0 } else { -180.0 };
                let unwrapped = if delta < 0.0 { p.lon + 360.0 } else { p.lon - 360.0 };
                let t = (edge - prev.lon) / (unwrapped - prev.lon);
                let lat = prev.lat + t * (p.lat - prev.lat);
                current.push([edge, lat]);
                segments.push(std::mem::take(&mut current));
                current.push([-edge, lat]);
            }
        }
        current.push([p.lon, p.lat]);
    }

    if current.len() > 1 {
        segments.push(current);
    }
    segments
}
