//! Tessellation module for reflector geometry
//!
//! Converts true circles into polygon boundaries and composes them into
//! zone outlines.
//!
//! # Submodules
//! - `circle` - Regular polygon approximation of a circle
//! - `annulus` - Outer-with-hole zone outlines with edge margins
//! - `polygon` - Zone triangulation and copper area statistics

mod circle;
mod annulus;
mod polygon;

pub use circle::{
    MIN_SEGMENTS,
    polygonize_circle,
};

pub use annulus::build_annulus_zone;

pub use polygon::{
    ZoneStats,
    triangulate_zone,
    zone_stats,
};
