//! Geometry module for reflector board data
//!
//! # Submodules
//! - `types` - Core geometric primitives (Point, PolygonBoundary, ZoneOutline, etc.)
//! - `spec` - The assembled `GeometrySpec`

mod types;
mod spec;

pub use types::{
    Point,
    PolygonBoundary,
    ZoneOutline,
    PadConnection,
    ZoneSettings,
    ZoneLayer,
    OutlineCircle,
    HolePlacement,
    PadShape,
    PadPlacement,
    Justify,
    LabelPlacement,
};

pub use spec::GeometrySpec;
