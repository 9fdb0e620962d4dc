//! Error types for geometry derivation and host adapters
//!
//! Every geometry failure is a deterministic function of the caller's
//! parameters, so none of these are retried.

use thiserror::Error;

use crate::adapter::Capability;

/// Failures raised while deriving reflector geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Frequency is zero, negative or not finite.
    #[error("invalid frequency: {frequency_mhz} MHz (must be > 0)")]
    InvalidFrequency { frequency_mhz: f64 },

    /// Circle radius is zero, negative or not finite.
    #[error("invalid radius: {radius_mm} mm (must be > 0)")]
    InvalidRadius { radius_mm: f64 },

    /// Fewer than three polygon segments requested.
    #[error("invalid segment count: {segments} (must be >= 3)")]
    InvalidSegmentCount { segments: usize },

    /// Margin-adjusted hole touches or exceeds the margin-adjusted outer boundary.
    #[error("degenerate annulus: outer {outer_mm:.3} mm <= inner {inner_mm:.3} mm after margins")]
    DegenerateAnnulus { outer_mm: f64, inner_mm: f64 },

    /// Radial array count below one.
    #[error("invalid bolt count: {count} (must be >= 1)")]
    InvalidBoltCount { count: usize },

    /// Label anchor falls outside the disk, on its edge, or in the center cutout.
    #[error("invalid label position: offset {offset_mm:.3} mm on a disk of radius {disk_radius_mm:.3} mm")]
    InvalidLabelPosition { offset_mm: f64, disk_radius_mm: f64 },

    /// A connector pad reaches into the center cutout of an annulus.
    #[error("connector pad {footprint}.{number} reaches {reach_mm:.3} mm from center, inside the {cutout_radius_mm:.3} mm cutout")]
    PadInCutout {
        footprint: String,
        number: String,
        reach_mm: f64,
        cutout_radius_mm: f64,
    },

    /// A literal size or margin that must be positive is not.
    #[error("invalid dimension '{name}': {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    /// Earcut could not triangulate a zone outline.
    #[error("zone triangulation failed: {0}")]
    Triangulation(#[from] earcutr::Error),
}

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Failures raised while handing a finished spec to a host.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The geometry needs a capability the host adapter does not offer.
    #[error("host adapter does not support {0:?}")]
    Unsupported(Capability),

    /// The host rejected an object.
    #[error("host error: {0}")]
    Host(String),

    #[error("xml write error: {0}")]
    Xml(#[from] quick_xml::Error),
}
