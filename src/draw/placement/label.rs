//! Label anchor placement

use crate::draw::geometry::Point;
use crate::error::{GeometryError, GeometryResult};

/// Anchor on the vertical axis, `inset_mm` below the top edge of a disk.
///
/// The anchor must land strictly between the center and the edge.
/// No collision check against other geometry is made.
pub fn label_anchor(disk_diameter_mm: f64, inset_mm: f64) -> GeometryResult<Point> {
    let disk_radius_mm = disk_diameter_mm / 2.0;
    let offset_mm = disk_radius_mm - inset_mm;
    if !offset_mm.is_finite() || offset_mm <= 0.0 || offset_mm >= disk_radius_mm {
        return Err(GeometryError::InvalidLabelPosition { offset_mm, disk_radius_mm });
    }
    Ok(Point::new(0.0, offset_mm))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_inside_disk() {
        let p = label_anchor(61.2, 8.0).unwrap();
        assert_eq!(p.x, 0.0);
        assert!((p.y - 22.6).abs() < 1e-9);
    }

    #[test]
    fn test_inset_past_center_rejected() {
        assert!(matches!(
            label_anchor(61.2, 35.0),
            Err(GeometryError::InvalidLabelPosition { .. })
        ));
        assert!(matches!(
            label_anchor(61.2, 30.6),
            Err(GeometryError::InvalidLabelPosition { .. })
        ));
    }

    #[test]
    fn test_anchor_on_edge_rejected() {
        assert!(matches!(
            label_anchor(61.2, 0.0),
            Err(GeometryError::InvalidLabelPosition { .. })
        ));
        assert!(matches!(
            label_anchor(61.2, -1.0),
            Err(GeometryError::InvalidLabelPosition { .. })
        ));
    }
}
