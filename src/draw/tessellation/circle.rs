//! Circle polygonization
//!
//! The only approximation step in the generator: every true circle becomes a
//! regular polygon inscribed at the requested radius.

use std::f64::consts::PI;

use crate::draw::geometry::{Point, PolygonBoundary};
use crate::error::{GeometryError, GeometryResult};

/// Smallest polygon that still encloses an area
pub const MIN_SEGMENTS: usize = 3;

/// Sample a circle into `segments` vertices, starting at angle 0 and
/// stepping counterclockwise by `2π / segments`.
pub fn polygonize_circle(center: Point, radius: f64, segments: usize) -> GeometryResult<PolygonBoundary> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeometryError::InvalidRadius { radius_mm: radius });
    }
    if segments < MIN_SEGMENTS {
        return Err(GeometryError::InvalidSegmentCount { segments });
    }

    let vertices = (0..segments)
        .map(|i| {
            let angle = (i as f64 / segments as f64) * 2.0 * PI;
            Point {
                x: center.x + radius * angle.cos(),
                y: center.y + radius * angle.sin(),
            }
        })
        .collect();

    Ok(PolygonBoundary { center, radius, vertices })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_on_circle() {
        let center = Point::new(12.5, -3.0);
        for segments in [3, 4, 17, 240, 256] {
            let boundary = polygonize_circle(center, 88.7, segments).unwrap();
            assert_eq!(boundary.segments(), segments);
            for v in boundary.vertices() {
                assert!((v.distance_to(center) - 88.7).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_first_vertex_at_angle_zero() {
        let boundary = polygonize_circle(Point::ORIGIN, 10.0, 8).unwrap();
        let first = boundary.vertices()[0];
        assert_eq!(first, Point::new(10.0, 0.0));
    }

    #[test]
    fn test_uniform_angular_step() {
        let segments = 12;
        let boundary = polygonize_circle(Point::ORIGIN, 5.0, segments).unwrap();
        let step = 2.0 * PI / segments as f64;
        for (i, v) in boundary.vertices().iter().enumerate() {
            let expected = i as f64 * step;
            let angle = v.y.atan2(v.x).rem_euclid(2.0 * PI);
            let diff = (angle - expected).abs();
            assert!(diff < 1e-9 || (2.0 * PI - diff) < 1e-9, "vertex {} at {}", i, angle);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = polygonize_circle(Point::new(1.0, 2.0), 30.6, 240).unwrap();
        let b = polygonize_circle(Point::new(1.0, 2.0), 30.6, 240).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            polygonize_circle(Point::ORIGIN, 0.0, 32),
            Err(GeometryError::InvalidRadius { radius_mm: 0.0 })
        );
        assert_eq!(
            polygonize_circle(Point::ORIGIN, -1.0, 32),
            Err(GeometryError::InvalidRadius { radius_mm: -1.0 })
        );
        assert_eq!(
            polygonize_circle(Point::ORIGIN, 1.0, 2),
            Err(GeometryError::InvalidSegmentCount { segments: 2 })
        );
    }
}
