//! Checkpoint generation along a route.
//!
//! Walks the route's geodesic segments and emits a checkpoint at every
//! distance-interval multiple, linearly interpolating the crossing point
//! inside the segment it falls on. ETAs assume a constant average speed.

use crate::{constants, core::geo::LatLng, route::data::RouteCheckpoint};

#[derive(Debug, Clone)]
pub struct CheckpointOptions {
    /// Distance between checkpoints, in kilometers
    pub interval_km: f64,
    /// Average travel speed used for ETAs, in km/h
    pub average_speed_kmh: f64,
}

impl Default for CheckpointOptions {
    fn default() -> Self {
        Self {
            interval_km: constants::DEFAULT_CHECKPOINT_INTERVAL_KM,
            average_speed_kmh: constants::DEFAULT_AVERAGE_SPEED_KMH,
        }
    }
}

/// Generates checkpoints at every `interval_km` along `path`.
///
/// Returns an empty list for degenerate input (fewer than two points, or a
/// non-positive interval or speed). Distances are rounded to 0.1 km and
/// ETAs to 0.01 h, matching the precision the popups display.
pub fn generate_checkpoints(path: &[LatLng], options: &CheckpointOptions) -> Vec<RouteCheckpoint> {
    if path.len() < 2 || options.interval_km <= 0.0 || options.average_speed_kmh <= 0.0 {
        return Vec::new();
    }

    let mut checkpoints = Vec::new();
    let mut traveled_km = 0.0;
    let mut next_target_km = options.interval_km;

    for segment in path.windows(2) {
        let (start, end) = (segment[0], segment[1]);
        let segment_km = start.distance_to(&end) / 1000.0;
        if segment_km <= 0.0 {
            continue;
        }

        while traveled_km + segment_km >= next_target_km {
            let along_km = next_target_km - traveled_km;
            let point = start.interpolate(&end, along_km / segment_km);

            checkpoints.push(RouteCheckpoint {
                lat: point.lat,
                lon: point.lng,
                distance_km: round_to(next_target_km, 10.0),
                eta_hours: round_to(next_target_km / options.average_speed_kmh, 100.0),
            });

            next_target_km += options.interval_km;
        }

        traveled_km += segment_km;
    }

    checkpoints
}

/// Total geodesic length of a path in kilometers.
pub fn path_length_km(path: &[LatLng]) -> f64 {
    path.windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]) / 1000.0)
        .sum()
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A roughly 111 km path straight up a meridian (1° of latitude).
    fn meridian_path() -> Vec<LatLng> {
        vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 0.0)]
    }

    #[test]
    fn test_checkpoints_at_interval_multiples() {
        let path = meridian_path();
        let total = path_length_km(&path);
        assert!((total - 111.2).abs() < 1.0);

        let checkpoints = generate_checkpoints(&path, &CheckpointOptions::default());

        // 10, 20, ... up to but not past ~111 km
        assert_eq!(checkpoints.len(), (total / 10.0) as usize);
        for (i, checkpoint) in checkpoints.iter().enumerate() {
            assert_eq!(checkpoint.distance_km, 10.0 * (i + 1) as f64);
            assert_eq!(checkpoint.lon, 0.0);
        }

        // Latitudes increase monotonically toward the endpoint
        for pair in checkpoints.windows(2) {
            assert!(pair[1].lat > pair[0].lat);
        }
    }

    #[test]
    fn test_eta_at_average_speed() {
        let checkpoints = generate_checkpoints(&meridian_path(), &CheckpointOptions::default());

        // 10 km at 60 km/h -> 0.17 h after rounding
        assert_eq!(checkpoints[0].eta_hours, 0.17);
        assert_eq!(checkpoints[2].eta_hours, 0.5);
        assert_eq!(checkpoints[5].eta_hours, 1.0);
    }

    #[test]
    fn test_interval_spanning_multiple_segments() {
        // Three short segments of ~37 km each; the second checkpoint falls
        // in the second segment
        let path = vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.333, 0.0),
            LatLng::new(0.666, 0.0),
            LatLng::new(1.0, 0.0),
        ];
        let options = CheckpointOptions {
            interval_km: 25.0,
            average_speed_kmh: 50.0,
        };

        let checkpoints = generate_checkpoints(&path, &options);
        assert_eq!(checkpoints.len(), 4);
        assert_eq!(checkpoints[1].distance_km, 50.0);
        assert_eq!(checkpoints[1].eta_hours, 1.0);
    }

    #[test]
    fn test_long_segment_yields_multiple_checkpoints() {
        let options = CheckpointOptions {
            interval_km: 30.0,
            average_speed_kmh: 60.0,
        };
        let checkpoints = generate_checkpoints(&meridian_path(), &options);

        // A single ~111 km segment crosses 30, 60 and 90 km
        assert_eq!(checkpoints.len(), 3);
        assert_eq!(checkpoints[2].distance_km, 90.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(generate_checkpoints(&[], &CheckpointOptions::default()).is_empty());
        assert!(
            generate_checkpoints(&[LatLng::new(0.0, 0.0)], &CheckpointOptions::default())
                .is_empty()
        );

        let bad = CheckpointOptions {
            interval_km: 0.0,
            average_speed_kmh: 60.0,
        };
        assert!(generate_checkpoints(&meridian_path(), &bad).is_empty());
    }
}
