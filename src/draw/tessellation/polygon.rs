//! Zone triangulation using earcut
//!
//! Triangulates zone outlines (outer ring plus optional hole) to report how
//! much copper a polygonized zone actually covers.

use std::f64::consts::PI;

use serde::Serialize;

use crate::draw::geometry::ZoneOutline;
use crate::error::GeometryResult;

/// Vertex and area figures for one zone outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneStats {
    pub vertex_count: usize,
    pub triangle_count: usize,
    /// Area covered by the triangulated polygon
    pub copper_area_mm2: f64,
    /// Area of the true circles the polygon approximates
    pub nominal_area_mm2: f64,
}

/// Triangulate a zone outline with earcut.
/// Returns the flat coordinate array and triangle indices.
pub fn triangulate_zone(zone: &ZoneOutline) -> GeometryResult<(Vec<f64>, Vec<usize>)> {
    let mut flat_coords = zone.outer().flat_coords();
    let mut hole_indices: Vec<usize> = Vec::new();

    if let Some(hole) = zone.hole() {
        hole_indices.push(flat_coords.len() / 2);
        flat_coords.extend(hole.flat_coords());
    }

    let indices = earcutr::earcut(&flat_coords, &hole_indices, 2)?;
    Ok((flat_coords, indices))
}

/// Compute statistics for a zone outline
pub fn zone_stats(zone: &ZoneOutline) -> GeometryResult<ZoneStats> {
    let (coords, indices) = triangulate_zone(zone)?;

    let copper_area_mm2 = indices
        .chunks_exact(3)
        .map(|tri| {
            let (ax, ay) = (coords[tri[0] * 2], coords[tri[0] * 2 + 1]);
            let (bx, by) = (coords[tri[1] * 2], coords[tri[1] * 2 + 1]);
            let (cx, cy) = (coords[tri[2] * 2], coords[tri[2] * 2 + 1]);
            ((bx - ax) * (cy - ay) - (cx - ax) * (by - ay)).abs() * 0.5
        })
        .sum();

    let outer_r = zone.outer().radius();
    let hole_r = zone.hole().map_or(0.0, |h| h.radius());

    Ok(ZoneStats {
        vertex_count: zone.vertex_count(),
        triangle_count: indices.len() / 3,
        copper_area_mm2,
        nominal_area_mm2: PI * (outer_r * outer_r - hole_r * hole_r),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::tessellation::build_annulus_zone;
    use crate::error::GeometryError;

    #[test]
    fn test_square_disk_area() {
        // 4 segments at radius r form a square of area 2r²
        let zone = build_annulus_zone(10.0, None, 0.0, 4).unwrap();
        let stats = zone_stats(&zone).unwrap();
        assert_eq!(stats.triangle_count, 2);
        assert!((stats.copper_area_mm2 - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_annulus_area_approaches_nominal() {
        let zone = build_annulus_zone(88.0, Some(28.0), 0.25, 240).unwrap();
        let stats = zone_stats(&zone).unwrap();
        assert_eq!(stats.vertex_count, 480);
        assert!(stats.triangle_count > 0);
        assert!(stats.copper_area_mm2 < stats.nominal_area_mm2);
        assert!((stats.nominal_area_mm2 - stats.copper_area_mm2) / stats.nominal_area_mm2 < 1e-3);
    }

    #[test]
    fn test_triangulation_covers_every_vertex() {
        let zone = build_annulus_zone(40.0, Some(10.0), 0.0, 16).unwrap();
        let (coords, indices) = triangulate_zone(&zone).unwrap();
        assert_eq!(coords.len(), 64);
        // A ring of 2n vertices triangulates into 2n triangles
        assert_eq!(indices.len(), 32 * 3);
        assert!(indices.iter().all(|&i| i < 32));
    }

    #[test]
    fn test_earcut_failure_is_an_error() {
        let err: GeometryError = earcutr::Error::Unknown.into();
        assert!(matches!(err, GeometryError::Triangulation(_)));
        assert!(err.to_string().starts_with("zone triangulation failed"));
    }
}
