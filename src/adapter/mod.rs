//! Host adapter boundary
//!
//! A host editor realizes a `GeometrySpec` through the `HostAdapter` trait.
//! Host differences (API versions, missing object kinds) are reported as a
//! capability set and checked once, before anything is created.
//!
//! # Submodules
//! - `xml` - Adapter that writes a board description XML document

pub mod xml;

use serde::Serialize;

use crate::draw::geometry::{GeometrySpec, HolePlacement, LabelPlacement, OutlineCircle, PadPlacement, ZoneLayer};
use crate::error::AdapterError;

pub use xml::XmlBoardWriter;

/// One kind of object a host can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Capability {
    AddOutline,
    AddZoneOutline,
    AddPlatedHole,
    AddFootprintPad,
    AddLabel,
}

impl Capability {
    pub const ALL: [Capability; 5] = [
        Capability::AddOutline,
        Capability::AddZoneOutline,
        Capability::AddPlatedHole,
        Capability::AddFootprintPad,
        Capability::AddLabel,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of capabilities, stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    pub fn empty() -> Self {
        CapabilitySet(0)
    }

    pub fn all() -> Self {
        Capability::ALL.into_iter().collect()
    }

    pub fn with(mut self, capability: Capability) -> Self {
        self.0 |= capability.bit();
        self
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter().fold(CapabilitySet::empty(), CapabilitySet::with)
    }
}

/// Object-creation calls a host editor implements
pub trait HostAdapter {
    fn capabilities(&self) -> CapabilitySet;
    fn add_outline(&mut self, outline: &OutlineCircle) -> Result<(), AdapterError>;
    fn add_zone_outline(&mut self, zone: &ZoneLayer) -> Result<(), AdapterError>;
    fn add_plated_hole(&mut self, hole: &HolePlacement) -> Result<(), AdapterError>;
    fn add_footprint_pad(&mut self, pad: &PadPlacement) -> Result<(), AdapterError>;
    fn add_label(&mut self, label: &LabelPlacement) -> Result<(), AdapterError>;
}

/// Capabilities a spec needs; empty collections need nothing
pub fn required_capabilities(spec: &GeometrySpec) -> CapabilitySet {
    let mut required = CapabilitySet::empty();
    if !spec.outlines().is_empty() {
        required = required.with(Capability::AddOutline);
    }
    if !spec.zones().is_empty() {
        required = required.with(Capability::AddZoneOutline);
    }
    if !spec.holes().is_empty() {
        required = required.with(Capability::AddPlatedHole);
    }
    if !spec.pads().is_empty() {
        required = required.with(Capability::AddFootprintPad);
    }
    if spec.label().is_some() {
        required = required.with(Capability::AddLabel);
    }
    required
}

/// Counts of objects handed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ApplyReport {
    pub outlines: usize,
    pub zones: usize,
    pub holes: usize,
    pub pads: usize,
    pub labels: usize,
}

/// Hand every object in `spec` to `adapter`, outlines first and label last.
///
/// Fails with `AdapterError::Unsupported` before the first call if the
/// adapter lacks a capability the geometry needs.
pub fn apply_spec<A: HostAdapter + ?Sized>(spec: &GeometrySpec, adapter: &mut A) -> Result<ApplyReport, AdapterError> {
    let offered = adapter.capabilities();
    if let Some(missing) = required_capabilities(spec).iter().find(|c| !offered.contains(*c)) {
        return Err(AdapterError::Unsupported(missing));
    }

    let mut report = ApplyReport::default();
    for outline in spec.outlines() {
        adapter.add_outline(outline)?;
        report.outlines += 1;
    }
    for zone in spec.zones() {
        adapter.add_zone_outline(zone)?;
        report.zones += 1;
    }
    for hole in spec.holes() {
        adapter.add_plated_hole(hole)?;
        report.holes += 1;
    }
    for pad in spec.pads() {
        adapter.add_footprint_pad(pad)?;
        report.pads += 1;
    }
    if let Some(label) = spec.label() {
        adapter.add_label(label)?;
        report.labels += 1;
    }

    log::debug!("Applied spec to host: {:?}", report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_set() {
        let set = CapabilitySet::empty()
            .with(Capability::AddOutline)
            .with(Capability::AddLabel);
        assert!(set.contains(Capability::AddOutline));
        assert!(set.contains(Capability::AddLabel));
        assert!(!set.contains(Capability::AddPlatedHole));
        assert_eq!(set.iter().count(), 2);
        assert_eq!(CapabilitySet::all().iter().count(), 5);
    }
}
