//! Reflector geometry derivation
//!
//! # Submodules
//! - `dimensions` - Frequency to wavelength and diameter conversion
//! - `geometry` - Geometry types and the assembled `GeometrySpec`
//! - `tessellation` - Circle polygonization and zone outlines
//! - `placement` - Mounting holes, connector pads and label anchor
//! - `builder` - Ordered assembly of a complete `GeometrySpec`

pub mod dimensions;
pub mod geometry;
pub mod tessellation;
pub mod placement;
pub mod builder;
