//! Build configuration for the reflector generator
//!
//! A `DonutConfig` is an immutable value handed to each build. Defaults are
//! the parameters of the 1520 MHz reference board; any subset may be
//! overridden from a JSON file.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::draw::geometry::{Justify, PadConnection, Point};
use crate::error::{GeometryError, GeometryResult};

/// Top-level generator parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutConfig {
    /// Center frequency in MHz.
    pub frequency_mhz: f64,

    /// Inner diameter as a fraction of the wavelength.
    pub inner_diameter_factor: f64,

    /// Literal inner diameter; skips the factor when set.
    pub inner_diameter_mm: Option<f64>,

    /// `false` builds a solid disk with no center cutout.
    pub annulus: bool,

    /// Outer diameter as a fraction of the wavelength.
    pub outer_diameter_factor: f64,

    /// Literal outer diameter; skips the factor when set.
    pub outer_diameter_mm: Option<f64>,

    /// Helix diameter factor. Reported only, no geometry is drawn for it.
    pub helix_diameter_factor: f64,

    /// Vertices per polygonized circle.
    pub segments_per_circle: usize,

    pub bolts: BoltConfig,
    pub zone: ZoneConfig,
    pub outline: OutlineConfig,

    /// Feed connector footprint. Omitted when `None`.
    pub connector: Option<ConnectorConfig>,

    /// Board label. Omitted when `None`.
    pub label: Option<LabelConfig>,
}

/// Mounting holes on a bolt circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoltConfig {
    pub count: usize,
    pub circle_diameter_mm: f64,
    pub drill_mm: f64,
    pub pad_mm: f64,
    pub angle_offset_deg: f64,
    /// Prefix for hole references, numbered from 1.
    pub reference_prefix: String,
}

/// Copper pour parameters shared by every zone layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    pub layers: Vec<String>,
    pub net: String,
    pub clearance_mm: f64,
    pub min_thickness_mm: f64,
    /// Radial spacing between the board edge and the zone polygon.
    pub annulus_margin_mm: f64,
    pub pad_connection: PadConnection,
}

/// Board edge outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    pub layer: String,
    pub line_width_mm: f64,
}

/// Placement of the fixed feed connector footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    pub center: Point,
    pub reference: String,
}

/// Board label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub text: String,
    pub size_mm: f64,
    /// Distance from the outer edge down to the anchor.
    pub inset_mm: f64,
    pub layer: String,
    /// Stroke thickness. `None` resolves to 15% of `size_mm`.
    pub thickness_mm: Option<f64>,
    pub justify: Justify,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            frequency_mhz: 1520.0,
            inner_diameter_factor: 0.29,
            inner_diameter_mm: None,
            annulus: true,
            outer_diameter_factor: 0.90,
            outer_diameter_mm: None,
            helix_diameter_factor: 0.32,
            segments_per_circle: 240,
            bolts: BoltConfig::default(),
            zone: ZoneConfig::default(),
            outline: OutlineConfig::default(),
            connector: None,
            label: Some(LabelConfig::default()),
        }
    }
}

impl Default for BoltConfig {
    fn default() -> Self {
        Self {
            count: 3,
            circle_diameter_mm: 54.0,
            drill_mm: 3.2,
            pad_mm: 6.0,
            angle_offset_deg: 0.0,
            reference_prefix: "MH".to_string(),
        }
    }
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            layers: vec!["F.Cu".to_string(), "B.Cu".to_string()],
            net: "GND".to_string(),
            clearance_mm: 0.3,
            min_thickness_mm: 0.2,
            annulus_margin_mm: 0.25,
            pad_connection: PadConnection::Full,
        }
    }
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            layer: "Edge.Cuts".to_string(),
            line_width_mm: 0.1,
        }
    }
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            reference: "J1".to_string(),
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            text: "BACKFIRE".to_string(),
            size_mm: 2.0,
            inset_mm: 8.0,
            layer: "F.SilkS".to_string(),
            thickness_mm: None,
            justify: Justify::Center,
        }
    }
}

impl LabelConfig {
    pub fn resolved_thickness_mm(&self) -> f64 {
        self.thickness_mm.unwrap_or(self.size_mm * 0.15)
    }
}

impl DonutConfig {
    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: DonutConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Check the literal parameters that no derivation step validates.
    ///
    /// Frequency, radii, segment counts, bolt counts and label placement are
    /// checked by the component that consumes them.
    pub fn validate(&self) -> GeometryResult<()> {
        positive("outer_diameter_factor", self.outer_diameter_factor)?;
        if self.annulus {
            positive("inner_diameter_factor", self.inner_diameter_factor)?;
        }
        positive("helix_diameter_factor", self.helix_diameter_factor)?;
        non_negative("zone.annulus_margin_mm", self.zone.annulus_margin_mm)?;
        non_negative("zone.clearance_mm", self.zone.clearance_mm)?;
        non_negative("zone.min_thickness_mm", self.zone.min_thickness_mm)?;
        positive("outline.line_width_mm", self.outline.line_width_mm)?;
        if self.zone.layers.is_empty() {
            return Err(GeometryError::InvalidDimension {
                name: "zone.layers",
                value: 0.0,
            });
        }

        positive("bolts.drill_mm", self.bolts.drill_mm)?;
        positive("bolts.pad_mm", self.bolts.pad_mm)?;
        if self.bolts.drill_mm >= self.bolts.pad_mm {
            return Err(GeometryError::InvalidDimension {
                name: "bolts.drill_mm",
                value: self.bolts.drill_mm,
            });
        }
        finite("bolts.angle_offset_deg", self.bolts.angle_offset_deg)?;

        if let Some(label) = &self.label {
            positive("label.size_mm", label.size_mm)?;
            positive("label.thickness_mm", label.resolved_thickness_mm())?;
        }
        Ok(())
    }
}

fn finite(name: &'static str, value: f64) -> GeometryResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::InvalidDimension { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> GeometryResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidDimension { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> GeometryResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidDimension { name, value })
    }
}
