//! Organic blob outline synthesis.

use std::f32::consts::TAU;

use rand::Rng;

use crate::types::{BlobPath, PathCommand, Point};

/// Smallest number of radial sample points per blob.
const MIN_POINTS: usize = 7;

/// Largest number of radial sample points per blob.
const MAX_POINTS: usize = 15;

/// Generate a closed smooth outline around the origin.
///
/// Samples 7 to 15 points at evenly spaced angles, each pushed out to an
/// independent random distance in `radius * [0.4, 1.1)`; the uneven radii
/// are what break circular symmetry. The outline then runs quadratic
/// segments from midpoint to midpoint, using each sampled point only as a
/// control point, which keeps the curve smooth at every join.
pub fn organic_blob<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> BlobPath {
    let point_count = rng.random_range(MIN_POINTS..=MAX_POINTS);

    let mut points = Vec::with_capacity(point_count);
    for i in 0..point_count {
        let angle = (TAU / point_count as f32) * i as f32;
        let variance = radius * rng.random_range(0.4..1.1);

        points.push(Point::new(angle.cos() * variance, angle.sin() * variance));
    }

    let mut commands = Vec::with_capacity(point_count + 1);
    commands.push(PathCommand::MoveTo(points[0]));

    for i in 1..points.len() {
        let prev = points[i - 1];
        let current = points[i];

        commands.push(PathCommand::QuadTo {
            ctrl: prev,
            to: prev.midpoint(current),
        });
    }

    // The gap back to the start is left to the path-closing convention.
    commands.push(PathCommand::Close);

    BlobPath::new(points, commands)
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::types::WindingRule;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0xb10b)
    }

    #[test]
    fn test_point_count_in_range() {
        let mut rng = rng();
        for _ in 0..200 {
            let blob = organic_blob(&mut rng, 100.0);
            let n = blob.points().len();
            assert!((MIN_POINTS..=MAX_POINTS).contains(&n), "point count {}", n);
        }
    }

    #[test]
    fn test_path_structure() {
        let mut rng = rng();
        for _ in 0..50 {
            let blob = organic_blob(&mut rng, 80.0);
            let n = blob.points().len();

            assert!(matches!(blob.commands()[0], PathCommand::MoveTo(_)));
            assert_eq!(blob.segment_count(), n - 1);
            assert!(blob.is_closed());
            assert_eq!(blob.commands().len(), n + 1);
            assert_eq!(blob.winding(), WindingRule::NonZero);
        }
    }

    #[test]
    fn test_point_magnitudes_within_variance_band() {
        let mut rng = rng();
        for _ in 0..100 {
            let blob = organic_blob(&mut rng, 100.0);
            for point in blob.points() {
                let magnitude = point.magnitude();
                assert!(
                    (40.0..=110.0).contains(&magnitude),
                    "magnitude {} outside [40, 110]",
                    magnitude
                );
            }
        }
    }

    #[test]
    fn test_magnitudes_scale_with_radius() {
        let mut rng = rng();
        let blob = organic_blob(&mut rng, 5.0);
        for point in blob.points() {
            let magnitude = point.magnitude();
            assert!((2.0..=5.5).contains(&magnitude));
        }
    }

    #[test]
    fn test_first_segment_starts_at_first_point() {
        let mut rng = rng();
        let blob = organic_blob(&mut rng, 60.0);

        let PathCommand::MoveTo(start) = blob.commands()[0] else {
            panic!("path must start with MoveTo");
        };
        assert_eq!(start, blob.points()[0]);
    }

    #[test]
    fn test_segments_pass_through_midpoints() {
        let mut rng = rng();
        let blob = organic_blob(&mut rng, 60.0);
        let points = blob.points();

        for (i, command) in blob.commands()[1..].iter().enumerate() {
            let PathCommand::QuadTo { ctrl, to } = command else {
                continue;
            };
            assert_eq!(*ctrl, points[i]);
            assert_eq!(*to, points[i].midpoint(points[i + 1]));
        }
    }

    #[test]
    fn test_same_seed_same_blob() {
        let a = organic_blob(&mut SmallRng::seed_from_u64(9), 100.0);
        let b = organic_blob(&mut SmallRng::seed_from_u64(9), 100.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_successive_blobs_differ() {
        let mut rng = rng();
        let a = organic_blob(&mut rng, 100.0);
        let b = organic_blob(&mut rng, 100.0);
        assert_ne!(a, b);
    }
}
