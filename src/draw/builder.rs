//! Geometry spec assembly
//!
//! Runs every derivation stage in a fixed order and assembles one immutable
//! `GeometrySpec`. The first failing stage aborts the build; a partial spec
//! is never returned.

use std::f64::consts::FRAC_1_SQRT_2;
use std::time::Instant;

use indexmap::IndexSet;
use rayon::prelude::*;

use crate::config::DonutConfig;
use crate::draw::dimensions::{resolve_dimensions, ResolvedDimensions};
use crate::draw::geometry::*;
use crate::draw::placement::{label_anchor, RadialArray, SMA_JACK_THT};
use crate::draw::tessellation::{build_annulus_zone, polygonize_circle};
use crate::error::{GeometryError, GeometryResult};

/// Builds a `GeometrySpec` from a borrowed config
pub struct GeometrySpecBuilder<'a> {
    config: &'a DonutConfig,
}

impl<'a> GeometrySpecBuilder<'a> {
    pub fn new(config: &'a DonutConfig) -> Self {
        Self { config }
    }

    pub fn build(&self) -> GeometryResult<GeometrySpec> {
        let start = Instant::now();
        let config = self.config;
        config.validate()?;

        let dimensions = resolve_dimensions(config)?;
        log::debug!(
            "{:.3} MHz: lambda {:.3} mm, outer {:.3} mm, inner {:?}",
            config.frequency_mhz,
            dimensions.wavelength_mm,
            dimensions.outer_diameter_mm,
            dimensions.inner_diameter_mm
        );

        let outlines = self.build_outlines(&dimensions)?;
        let zones = self.build_zones(&dimensions)?;
        let holes = self.build_holes()?;
        let pads = self.build_connector_pads(&dimensions)?;
        let label = self.build_label(&dimensions)?;

        warn_holes_off_copper(&holes, &zones);

        let mut nets = IndexSet::new();
        for zone in &zones {
            nets.insert(zone.net.clone());
        }
        for hole in &holes {
            nets.insert(hole.net.clone());
        }
        for pad in &pads {
            nets.insert(pad.net.clone());
        }

        let spec = GeometrySpec {
            frequency_mhz: config.frequency_mhz,
            dimensions,
            nets,
            outlines,
            zones,
            holes,
            pads,
            label,
        };

        log::info!(
            "Built geometry for {:.3} MHz: {} zones, {} holes, {} pads, {} vertices in {:.2}ms",
            spec.frequency_mhz,
            spec.zones.len(),
            spec.holes.len(),
            spec.pads.len(),
            spec.vertex_count(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(spec)
    }

    /// Edge-cut circles: outer edge, then the inner cutout for an annulus
    fn build_outlines(&self, dims: &ResolvedDimensions) -> GeometryResult<Vec<OutlineCircle>> {
        let outline = &self.config.outline;
        let segments = self.config.segments_per_circle;

        let mut radii = vec![dims.outer_radius_mm()];
        radii.extend(dims.inner_radius_mm());

        radii
            .into_iter()
            .map(|radius_mm| -> GeometryResult<OutlineCircle> {
                Ok(OutlineCircle {
                    layer: outline.layer.clone(),
                    center: Point::ORIGIN,
                    radius_mm,
                    line_width_mm: outline.line_width_mm,
                    boundary: polygonize_circle(Point::ORIGIN, radius_mm, segments)?,
                })
            })
            .collect()
    }

    /// One identical zone outline per configured copper layer
    fn build_zones(&self, dims: &ResolvedDimensions) -> GeometryResult<Vec<ZoneLayer>> {
        let zone = &self.config.zone;
        let outline = build_annulus_zone(
            dims.outer_radius_mm(),
            dims.inner_radius_mm(),
            zone.annulus_margin_mm,
            self.config.segments_per_circle,
        )?;
        let settings = ZoneSettings {
            clearance_mm: zone.clearance_mm,
            min_thickness_mm: zone.min_thickness_mm,
            pad_connection: zone.pad_connection,
            filled: true,
        };

        Ok(zone
            .layers
            .iter()
            .map(|layer| ZoneLayer {
                layer: layer.clone(),
                net: zone.net.clone(),
                settings: settings.clone(),
                outline: outline.clone(),
            })
            .collect())
    }

    /// Plated mounting holes on the bolt circle, bound to the zone net
    fn build_holes(&self) -> GeometryResult<Vec<HolePlacement>> {
        let bolts = &self.config.bolts;
        let array = RadialArray::new(bolts.count, bolts.circle_diameter_mm)?
            .with_offset(bolts.angle_offset_deg.to_radians());

        Ok(array
            .points()
            .into_iter()
            .enumerate()
            .map(|(i, position)| HolePlacement {
                reference: format!("{}{}", bolts.reference_prefix, i + 1),
                position,
                drill_mm: bolts.drill_mm,
                pad_mm: bolts.pad_mm,
                net: self.config.zone.net.clone(),
            })
            .collect())
    }

    /// Connector pads; on an annulus no pad may reach into the cutout
    fn build_connector_pads(&self, dims: &ResolvedDimensions) -> GeometryResult<Vec<PadPlacement>> {
        let Some(connector) = &self.config.connector else {
            return Ok(Vec::new());
        };
        let pads = SMA_JACK_THT.place(connector.center, &connector.reference);

        if let Some(cutout_radius_mm) = dims.inner_radius_mm() {
            for pad in &pads {
                let reach_mm = pad.position.norm() - pad_half_extent_mm(pad);
                if reach_mm <= cutout_radius_mm {
                    return Err(GeometryError::PadInCutout {
                        footprint: pad.footprint.clone(),
                        number: pad.number.clone(),
                        reach_mm,
                        cutout_radius_mm,
                    });
                }
            }
        }
        Ok(pads)
    }

    /// Label anchored below the top of the outer edge, outside the cutout
    fn build_label(&self, dims: &ResolvedDimensions) -> GeometryResult<Option<LabelPlacement>> {
        let Some(label) = &self.config.label else {
            return Ok(None);
        };
        let position = label_anchor(dims.outer_diameter_mm, label.inset_mm)?;
        if let Some(cutout_radius_mm) = dims.inner_radius_mm() {
            if position.y <= cutout_radius_mm {
                return Err(GeometryError::InvalidLabelPosition {
                    offset_mm: position.y,
                    disk_radius_mm: dims.outer_radius_mm(),
                });
            }
        }
        Ok(Some(LabelPlacement {
            position,
            text: label.text.clone(),
            size_mm: label.size_mm,
            thickness_mm: label.resolved_thickness_mm(),
            layer: label.layer.clone(),
            justify: label.justify,
        }))
    }
}

/// Build the geometry for one config
pub fn build_geometry_spec(config: &DonutConfig) -> GeometryResult<GeometrySpec> {
    GeometrySpecBuilder::new(config).build()
}

/// Build one spec per frequency in parallel. Every other parameter comes
/// from `config`. Results keep the order of `frequencies_mhz`.
pub fn build_sweep(config: &DonutConfig, frequencies_mhz: &[f64]) -> Vec<GeometryResult<GeometrySpec>> {
    frequencies_mhz
        .par_iter()
        .map(|&frequency_mhz| {
            let config = DonutConfig { frequency_mhz, ..config.clone() };
            build_geometry_spec(&config)
        })
        .collect()
}

/// Largest distance from a pad center to its edge
fn pad_half_extent_mm(pad: &PadPlacement) -> f64 {
    match pad.shape {
        PadShape::Circle => pad.size_mm / 2.0,
        PadShape::Rectangle => pad.size_mm * FRAC_1_SQRT_2,
    }
}

/// Holes whose pad leaves the copper ring are legal but rarely intended
fn warn_holes_off_copper(holes: &[HolePlacement], zones: &[ZoneLayer]) {
    let Some(zone) = zones.first() else {
        return;
    };
    let outer = zone.outline.outer().radius();
    let inner = zone.outline.hole().map_or(0.0, |h| h.radius());

    for hole in holes {
        let r = hole.position.norm();
        let half_pad = hole.pad_mm / 2.0;
        if r - half_pad < inner || r + half_pad > outer {
            log::warn!(
                "{} pad at radius {:.3} mm is not fully on copper ({:.3}..{:.3} mm)",
                hole.reference,
                r,
                inner,
                outer
            );
        }
    }
}
