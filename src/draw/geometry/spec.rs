//! The finished geometry description handed to a host

use indexmap::IndexSet;
use serde::Serialize;

use crate::draw::dimensions::ResolvedDimensions;
use super::types::{HolePlacement, LabelPlacement, OutlineCircle, PadPlacement, ZoneLayer};

/// Complete, immutable board geometry for one set of parameters.
///
/// Only the builder constructs one. Hosts read it through the accessors and
/// copy what they need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometrySpec {
    pub(crate) frequency_mhz: f64,
    pub(crate) dimensions: ResolvedDimensions,
    pub(crate) nets: IndexSet<String>,
    pub(crate) outlines: Vec<OutlineCircle>,
    pub(crate) zones: Vec<ZoneLayer>,
    pub(crate) holes: Vec<HolePlacement>,
    pub(crate) pads: Vec<PadPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) label: Option<LabelPlacement>,
}

impl GeometrySpec {
    pub fn frequency_mhz(&self) -> f64 {
        self.frequency_mhz
    }

    pub fn dimensions(&self) -> &ResolvedDimensions {
        &self.dimensions
    }

    /// Net names in first-use order
    pub fn nets(&self) -> &IndexSet<String> {
        &self.nets
    }

    pub fn outlines(&self) -> &[OutlineCircle] {
        &self.outlines
    }

    pub fn zones(&self) -> &[ZoneLayer] {
        &self.zones
    }

    pub fn holes(&self) -> &[HolePlacement] {
        &self.holes
    }

    pub fn pads(&self) -> &[PadPlacement] {
        &self.pads
    }

    pub fn label(&self) -> Option<&LabelPlacement> {
        self.label.as_ref()
    }

    /// Total polygon vertices across outlines and zones
    pub fn vertex_count(&self) -> usize {
        let outline: usize = self.outlines.iter().map(|o| o.boundary.segments()).sum();
        let zones: usize = self.zones.iter().map(|z| z.outline.vertex_count()).sum();
        outline + zones
    }
}
