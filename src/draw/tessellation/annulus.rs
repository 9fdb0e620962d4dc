//! Annular zone outlines
//!
//! Shrinks the outer board edge and grows the inner cutout by the same
//! margin, leaving clearance between copper and both edges.

use crate::draw::geometry::{Point, ZoneOutline};
use crate::error::{GeometryError, GeometryResult};
use super::circle::polygonize_circle;

/// Build a zone outline centered on the origin.
///
/// With `inner_radius` the zone is an annulus whose hole sits at
/// `inner_radius + margin`; without it the zone is a solid disk.
pub fn build_annulus_zone(
    outer_radius: f64,
    inner_radius: Option<f64>,
    margin: f64,
    segments: usize,
) -> GeometryResult<ZoneOutline> {
    if !margin.is_finite() || margin < 0.0 {
        return Err(GeometryError::InvalidDimension { name: "annulus_margin_mm", value: margin });
    }

    let outer_mm = outer_radius - margin;
    let inner_mm = inner_radius.map_or(0.0, |r| r + margin);
    if outer_mm <= inner_mm {
        return Err(GeometryError::DegenerateAnnulus { outer_mm, inner_mm });
    }

    let outer = polygonize_circle(Point::ORIGIN, outer_mm, segments)?;
    let hole = match inner_radius {
        Some(_) => Some(polygonize_circle(Point::ORIGIN, inner_mm, segments)?),
        None => None,
    };

    Ok(ZoneOutline { outer, hole })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annulus_radii_apply_margin() {
        let zone = build_annulus_zone(88.0, Some(28.0), 0.25, 64).unwrap();
        assert!((zone.outer().radius() - 87.75).abs() < 1e-12);
        let hole = zone.hole().unwrap();
        assert!((hole.radius() - 28.25).abs() < 1e-12);
        assert_eq!(zone.vertex_count(), 128);
    }

    #[test]
    fn test_hole_strictly_inside_outer() {
        let zone = build_annulus_zone(40.0, Some(39.0), 0.4, 240).unwrap();
        // Inscribed polygon: the apothem bounds the interior
        let apothem = zone.outer().radius() * (std::f64::consts::PI / 240.0).cos();
        for p in zone.hole().unwrap().vertices() {
            assert!(p.norm() < apothem);
        }
    }

    #[test]
    fn test_degenerate_when_margins_meet() {
        let err = build_annulus_zone(30.0, Some(29.5), 0.25, 64).unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateAnnulus { .. }));

        let err = build_annulus_zone(20.0, Some(25.0), 0.0, 64).unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateAnnulus { .. }));
    }

    #[test]
    fn test_solid_disk_has_no_hole() {
        let zone = build_annulus_zone(30.6, None, 0.25, 32).unwrap();
        assert!(zone.hole().is_none());
        assert!((zone.outer().radius() - 30.35).abs() < 1e-12);
    }

    #[test]
    fn test_solid_disk_margin_consumes_radius() {
        let err = build_annulus_zone(0.2, None, 0.25, 32).unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateAnnulus { .. }));
    }

    #[test]
    fn test_negative_margin_rejected() {
        let err = build_annulus_zone(30.0, Some(10.0), -0.1, 32).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidDimension { .. }));
    }
}
