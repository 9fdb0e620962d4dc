//! Core geometry types for reflector board data
//!
//! Points, polygon boundaries, zones, holes, pads and labels. All lengths
//! are millimetres, all coordinates are relative to the board center.

use serde::{Deserialize, Serialize};

/// A 2D point in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Distance from the origin
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// A regular polygon inscribed in a circle.
///
/// Vertices are in traversal order and the ring is closed implicitly:
/// the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolygonBoundary {
    pub(crate) center: Point,
    pub(crate) radius: f64,
    pub(crate) vertices: Vec<Point>,
}

impl PolygonBoundary {
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn segments(&self) -> usize {
        self.vertices.len()
    }

    /// Flat `[x0, y0, x1, y1, ...]` coordinate array
    pub fn flat_coords(&self) -> Vec<f64> {
        self.vertices.iter().flat_map(|p| [p.x, p.y]).collect()
    }
}

/// A copper region: outer boundary with an optional hole
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneOutline {
    pub(crate) outer: PolygonBoundary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) hole: Option<PolygonBoundary>,
}

impl ZoneOutline {
    pub fn outer(&self) -> &PolygonBoundary {
        &self.outer
    }

    pub fn hole(&self) -> Option<&PolygonBoundary> {
        self.hole.as_ref()
    }

    pub fn vertex_count(&self) -> usize {
        self.outer.segments() + self.hole.as_ref().map_or(0, |h| h.segments())
    }
}

/// How a zone connects to pads sharing its net
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadConnection {
    #[default]
    Full,
    ThermalRelief,
    None,
}

/// Host-side zone parameters carried alongside each outline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneSettings {
    pub clearance_mm: f64,
    pub min_thickness_mm: f64,
    pub pad_connection: PadConnection,
    pub filled: bool,
}

/// A zone outline bound to one copper layer and one net
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneLayer {
    pub layer: String,
    pub net: String,
    pub settings: ZoneSettings,
    pub outline: ZoneOutline,
}

/// A board-edge circle. The host draws a true circle; `boundary` is the
/// polygonized form for hosts that only accept polylines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineCircle {
    pub layer: String,
    pub center: Point,
    pub radius_mm: f64,
    pub line_width_mm: f64,
    pub boundary: PolygonBoundary,
}

/// A plated through-hole mounting hole
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HolePlacement {
    pub reference: String,
    pub position: Point,
    pub drill_mm: f64,
    pub pad_mm: f64,
    pub net: String,
}

/// Pad copper shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PadShape {
    Circle,
    Rectangle,
}

/// A through-hole pad inside a component footprint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PadPlacement {
    pub footprint: String,
    pub number: String,
    pub position: Point,
    pub size_mm: f64,
    pub drill_mm: f64,
    pub shape: PadShape,
    pub net: String,
}

/// Horizontal text justification around the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    Left,
    #[default]
    Center,
    Right,
}

/// A text label on the board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelPlacement {
    pub position: Point,
    pub text: String,
    pub size_mm: f64,
    pub thickness_mm: f64,
    pub layer: String,
    pub justify: Justify,
}
