//! Parametric geometry for backfire helix reflector boards
//!
//! Derives a reflector disk or annulus from a center frequency, places
//! mounting holes, an optional feed connector and a label, and returns the
//! result as one immutable [`GeometrySpec`]. Creating the objects in a board
//! editor is left to a [`HostAdapter`].
//!
//! # Example
//! ```ignore
//! let config = DonutConfig { frequency_mhz: 1420.0, ..DonutConfig::default() };
//! let spec = build_geometry_spec(&config)?;
//! println!("outer diameter: {:.2} mm", spec.dimensions().outer_diameter_mm);
//! ```

pub mod adapter;
pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod logger;

pub use adapter::{apply_spec, Capability, CapabilitySet, HostAdapter};
pub use config::DonutConfig;
pub use draw::builder::{build_geometry_spec, build_sweep, GeometrySpecBuilder};
pub use draw::dimensions::{resolve_dimensions, wavelength_mm, ResolvedDimensions};
pub use draw::geometry::GeometrySpec;
pub use error::{AdapterError, GeometryError, GeometryResult};
