//! Frequency to physical dimension conversion
//!
//! Every board diameter is a fixed fraction of the free-space wavelength,
//! unless the caller pins it with a literal value.

use serde::Serialize;

use crate::config::DonutConfig;
use crate::error::{GeometryError, GeometryResult};

/// Speed of light in mm·MHz (mm/µs), so `c / f[MHz]` is a length in mm.
pub const SPEED_OF_LIGHT_MM_MHZ: f64 = 299_792.458;

/// Free-space wavelength in millimetres for a frequency in MHz
pub fn wavelength_mm(frequency_mhz: f64) -> GeometryResult<f64> {
    if !frequency_mhz.is_finite() || frequency_mhz <= 0.0 {
        return Err(GeometryError::InvalidFrequency { frequency_mhz });
    }
    Ok(SPEED_OF_LIGHT_MM_MHZ / frequency_mhz)
}

/// Diameter as a proportional factor of the wavelength
pub fn diameter_mm(wavelength_mm: f64, factor: f64) -> f64 {
    factor * wavelength_mm
}

/// Use the literal override when present, otherwise derive from the wavelength.
/// The result must be a positive length either way.
pub fn resolve_diameter(
    name: &'static str,
    override_mm: Option<f64>,
    factor: f64,
    wavelength_mm: f64,
) -> GeometryResult<f64> {
    let value = match override_mm {
        Some(literal) => literal,
        None => diameter_mm(wavelength_mm, factor),
    };
    if !value.is_finite() || value <= 0.0 {
        return Err(GeometryError::InvalidDimension { name, value });
    }
    Ok(value)
}

/// Board diameters resolved for one build
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedDimensions {
    pub wavelength_mm: f64,
    /// Absent for a solid disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_diameter_mm: Option<f64>,
    pub outer_diameter_mm: f64,
    pub helix_diameter_mm: f64,
}

impl ResolvedDimensions {
    pub fn outer_radius_mm(&self) -> f64 {
        self.outer_diameter_mm / 2.0
    }

    pub fn inner_radius_mm(&self) -> Option<f64> {
        self.inner_diameter_mm.map(|d| d / 2.0)
    }
}

/// Resolve every diameter in `config`. Also serves as the live preview used
/// while parameters are being edited, since it builds no geometry.
pub fn resolve_dimensions(config: &DonutConfig) -> GeometryResult<ResolvedDimensions> {
    let lambda = wavelength_mm(config.frequency_mhz)?;

    let inner_diameter_mm = if config.annulus {
        Some(resolve_diameter(
            "inner_diameter_mm",
            config.inner_diameter_mm,
            config.inner_diameter_factor,
            lambda,
        )?)
    } else {
        None
    };
    let outer_diameter_mm = resolve_diameter(
        "outer_diameter_mm",
        config.outer_diameter_mm,
        config.outer_diameter_factor,
        lambda,
    )?;
    let helix_diameter_mm = diameter_mm(lambda, config.helix_diameter_factor);

    Ok(ResolvedDimensions {
        wavelength_mm: lambda,
        inner_diameter_mm,
        outer_diameter_mm,
        helix_diameter_mm,
    })
}
