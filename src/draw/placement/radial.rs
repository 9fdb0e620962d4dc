//! Bolt-circle placement
//!
//! Evenly spaced points on a circle around the board center, used for
//! mounting holes.

use std::f64::consts::PI;

use crate::draw::geometry::Point;
use crate::error::{GeometryError, GeometryResult};

/// `count` positions evenly spaced on a circle of `circle_diameter_mm`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialArray {
    count: usize,
    circle_diameter_mm: f64,
    angle_offset_rad: f64,
}

impl RadialArray {
    pub fn new(count: usize, circle_diameter_mm: f64) -> GeometryResult<Self> {
        if count < 1 {
            return Err(GeometryError::InvalidBoltCount { count });
        }
        if !circle_diameter_mm.is_finite() || circle_diameter_mm <= 0.0 {
            return Err(GeometryError::InvalidRadius { radius_mm: circle_diameter_mm / 2.0 });
        }
        Ok(Self { count, circle_diameter_mm, angle_offset_rad: 0.0 })
    }

    /// Rotate the whole pattern; the first point sits at `angle_offset_rad`.
    pub fn with_offset(mut self, angle_offset_rad: f64) -> Self {
        self.angle_offset_rad = angle_offset_rad;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn radius_mm(&self) -> f64 {
        self.circle_diameter_mm / 2.0
    }

    pub fn points(&self) -> Vec<Point> {
        let r = self.radius_mm();
        (0..self.count)
            .map(|i| {
                let angle = self.angle_offset_rad + (i as f64 / self.count as f64) * 2.0 * PI;
                Point { x: r * angle.cos(), y: r * angle.sin() }
            })
            .collect()
    }
}

/// Bolt-circle positions with the first hole at angle 0
pub fn bolt_circle(count: usize, circle_diameter_mm: f64) -> GeometryResult<Vec<Point>> {
    Ok(RadialArray::new(count, circle_diameter_mm)?.points())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_bolts_on_54mm() {
        let points = bolt_circle(3, 54.0).unwrap();
        let expected = [(27.0, 0.0), (-13.5, 23.38), (-13.5, -23.38)];
        assert_eq!(points.len(), 3);
        for (p, (x, y)) in points.iter().zip(expected) {
            assert!((p.x - x).abs() < 0.01, "x {} vs {}", p.x, x);
            assert!((p.y - y).abs() < 0.01, "y {} vs {}", p.y, y);
        }
    }

    #[test]
    fn test_count_radius_and_spacing() {
        for count in 1..=12 {
            let array = RadialArray::new(count, 40.0).unwrap();
            let points = array.points();
            assert_eq!(points.len(), count);
            for p in &points {
                assert!((p.norm() - 20.0).abs() < 1e-9);
            }
            let step = 2.0 * PI / count as f64;
            for pair in points.windows(2) {
                let a0 = pair[0].y.atan2(pair[0].x);
                let a1 = pair[1].y.atan2(pair[1].x);
                let delta = (a1 - a0).rem_euclid(2.0 * PI);
                assert!((delta - step).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_single_point_at_angle_zero() {
        let points = bolt_circle(1, 10.0).unwrap();
        assert_eq!(points, vec![Point::new(5.0, 0.0)]);
    }

    #[test]
    fn test_offset_rotates_pattern() {
        let points = RadialArray::new(4, 20.0).unwrap().with_offset(PI / 4.0).points();
        let s = 10.0 * (PI / 4.0).cos();
        assert!((points[0].x - s).abs() < 1e-9);
        assert!((points[0].y - s).abs() < 1e-9);
    }

    #[test]
    fn test_zero_count_rejected() {
        assert_eq!(bolt_circle(0, 54.0), Err(GeometryError::InvalidBoltCount { count: 0 }));
    }

    #[test]
    fn test_non_positive_diameter_rejected() {
        assert!(matches!(bolt_circle(3, 0.0), Err(GeometryError::InvalidRadius { .. })));
    }
}
