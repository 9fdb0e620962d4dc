//! Board description XML writer
//!
//! A `HostAdapter` that records every object as an XML element instead of
//! creating it in a live editor. Hosts that import files rather than expose
//! an object API consume this document.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::draw::geometry::{
    GeometrySpec, HolePlacement, Justify, LabelPlacement, OutlineCircle, PadConnection, PadPlacement, PadShape, PolygonBoundary,
    ZoneLayer,
};
use crate::error::AdapterError;
use super::{apply_spec, CapabilitySet, HostAdapter};

const ROOT: &str = "BoardGeometry";

/// Millimetres with micrometre resolution
fn mm(value: f64) -> String {
    format!("{:.6}", value)
}

fn pad_connection_name(connection: PadConnection) -> &'static str {
    match connection {
        PadConnection::Full => "full",
        PadConnection::ThermalRelief => "thermal_relief",
        PadConnection::None => "none",
    }
}

fn pad_shape_name(shape: PadShape) -> &'static str {
    match shape {
        PadShape::Circle => "circle",
        PadShape::Rectangle => "rect",
    }
}

pub struct XmlBoardWriter {
    writer: Writer<Vec<u8>>,
    capabilities: CapabilitySet,
}

impl XmlBoardWriter {
    /// Start a document with every capability enabled
    pub fn new() -> Result<Self, AdapterError> {
        Self::with_capabilities(CapabilitySet::all())
    }

    /// Start a document that only accepts `capabilities`, mimicking a
    /// host that lacks some object kinds.
    pub fn with_capabilities(capabilities: CapabilitySet) -> Result<Self, AdapterError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        let mut root = BytesStart::new(ROOT);
        root.push_attribute(("units", "mm"));
        writer.write_event(Event::Start(root))?;
        Ok(Self { writer, capabilities })
    }

    /// Close the root element and return the document
    pub fn finish(mut self) -> Result<String, AdapterError> {
        self.writer.write_event(Event::End(BytesEnd::new(ROOT)))?;
        let bytes = self.writer.into_inner();
        String::from_utf8(bytes).map_err(|e| AdapterError::Host(e.to_string()))
    }

    fn write_boundary(&mut self, tag: &str, boundary: &PolygonBoundary) -> Result<(), AdapterError> {
        let mut start = BytesStart::new(tag);
        start.push_attribute(("radius", mm(boundary.radius()).as_str()));
        start.push_attribute(("segments", boundary.segments().to_string().as_str()));
        self.writer.write_event(Event::Start(start))?;
        for v in boundary.vertices() {
            let mut pt = BytesStart::new("Pt");
            pt.push_attribute(("x", mm(v.x).as_str()));
            pt.push_attribute(("y", mm(v.y).as_str()));
            self.writer.write_event(Event::Empty(pt))?;
        }
        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }
}

impl HostAdapter for XmlBoardWriter {
    fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }

    fn add_outline(&mut self, outline: &OutlineCircle) -> Result<(), AdapterError> {
        let mut elem = BytesStart::new("Circle");
        elem.push_attribute(("layer", outline.layer.as_str()));
        elem.push_attribute(("cx", mm(outline.center.x).as_str()));
        elem.push_attribute(("cy", mm(outline.center.y).as_str()));
        elem.push_attribute(("r", mm(outline.radius_mm).as_str()));
        elem.push_attribute(("width", mm(outline.line_width_mm).as_str()));
        self.writer.write_event(Event::Empty(elem))?;
        Ok(())
    }

    fn add_zone_outline(&mut self, zone: &ZoneLayer) -> Result<(), AdapterError> {
        let mut elem = BytesStart::new("Zone");
        elem.push_attribute(("layer", zone.layer.as_str()));
        elem.push_attribute(("net", zone.net.as_str()));
        elem.push_attribute(("clearance", mm(zone.settings.clearance_mm).as_str()));
        elem.push_attribute(("minThickness", mm(zone.settings.min_thickness_mm).as_str()));
        elem.push_attribute(("padConnection", pad_connection_name(zone.settings.pad_connection)));
        elem.push_attribute(("filled", if zone.settings.filled { "true" } else { "false" }));
        self.writer.write_event(Event::Start(elem))?;
        self.write_boundary("Outer", zone.outline.outer())?;
        if let Some(hole) = zone.outline.hole() {
            self.write_boundary("Hole", hole)?;
        }
        self.writer.write_event(Event::End(BytesEnd::new("Zone")))?;
        Ok(())
    }

    fn add_plated_hole(&mut self, hole: &HolePlacement) -> Result<(), AdapterError> {
        let mut elem = BytesStart::new("PlatedHole");
        elem.push_attribute(("ref", hole.reference.as_str()));
        elem.push_attribute(("x", mm(hole.position.x).as_str()));
        elem.push_attribute(("y", mm(hole.position.y).as_str()));
        elem.push_attribute(("drill", mm(hole.drill_mm).as_str()));
        elem.push_attribute(("pad", mm(hole.pad_mm).as_str()));
        elem.push_attribute(("net", hole.net.as_str()));
        self.writer.write_event(Event::Empty(elem))?;
        Ok(())
    }

    fn add_footprint_pad(&mut self, pad: &PadPlacement) -> Result<(), AdapterError> {
        let mut elem = BytesStart::new("Pad");
        elem.push_attribute(("footprint", pad.footprint.as_str()));
        elem.push_attribute(("number", pad.number.as_str()));
        elem.push_attribute(("x", mm(pad.position.x).as_str()));
        elem.push_attribute(("y", mm(pad.position.y).as_str()));
        elem.push_attribute(("size", mm(pad.size_mm).as_str()));
        elem.push_attribute(("drill", mm(pad.drill_mm).as_str()));
        elem.push_attribute(("shape", pad_shape_name(pad.shape)));
        elem.push_attribute(("net", pad.net.as_str()));
        self.writer.write_event(Event::Empty(elem))?;
        Ok(())
    }

    fn add_label(&mut self, label: &LabelPlacement) -> Result<(), AdapterError> {
        let justify = match label.justify {
            Justify::Left => "left",
            Justify::Center => "center",
            Justify::Right => "right",
        };
        let mut elem = BytesStart::new("Text");
        elem.push_attribute(("layer", label.layer.as_str()));
        elem.push_attribute(("x", mm(label.position.x).as_str()));
        elem.push_attribute(("y", mm(label.position.y).as_str()));
        elem.push_attribute(("size", mm(label.size_mm).as_str()));
        elem.push_attribute(("thickness", mm(label.thickness_mm).as_str()));
        elem.push_attribute(("justify", justify));
        self.writer.write_event(Event::Start(elem))?;
        self.writer.write_event(Event::Text(BytesText::new(&label.text)))?;
        self.writer.write_event(Event::End(BytesEnd::new("Text")))?;
        Ok(())
    }
}

/// Render a whole spec as a board description document
pub fn spec_to_xml(spec: &GeometrySpec) -> Result<String, AdapterError> {
    let mut writer = XmlBoardWriter::new()?;
    apply_spec(spec, &mut writer)?;
    writer.finish()
}
