//! Compact JSON with base64 vertex arrays
//!
//! Polygon boundaries dominate the size of a spec. Here each boundary is a
//! base64 string of little-endian f64 pairs (x, y, x, y, ...) instead of an
//! array of point objects.

use base64::{Engine as _, engine::general_purpose};
use serde::{Serialize, Serializer};

use crate::draw::dimensions::ResolvedDimensions;
use crate::draw::geometry::{
    GeometrySpec, HolePlacement, LabelPlacement, PadPlacement, PolygonBoundary, ZoneSettings,
};

/// Serialize f64 values as a base64 string of little-endian bytes
pub fn serialize_f64_vec_base64<S>(data: &Vec<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut bytes = Vec::with_capacity(data.len() * std::mem::size_of::<f64>());
    for v in data {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    serializer.serialize_str(&general_purpose::STANDARD.encode(bytes))
}

/// Decode a base64 string produced by `serialize_f64_vec_base64`
pub fn decode_f64_base64(encoded: &str) -> anyhow::Result<Vec<f64>> {
    let bytes = general_purpose::STANDARD.decode(encoded)?;
    anyhow::ensure!(bytes.len() % 8 == 0, "packed length {} is not a multiple of 8", bytes.len());
    Ok(bytes
        .chunks_exact(8)
        .map(|chunk| {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(chunk);
            f64::from_le_bytes(raw)
        })
        .collect())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PackedBoundary {
    radius: f64,
    segments: usize,
    #[serde(serialize_with = "serialize_f64_vec_base64")]
    vertex_data: Vec<f64>,
}

impl From<&PolygonBoundary> for PackedBoundary {
    fn from(boundary: &PolygonBoundary) -> Self {
        PackedBoundary {
            radius: boundary.radius(),
            segments: boundary.segments(),
            vertex_data: boundary.flat_coords(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PackedOutline<'a> {
    layer: &'a str,
    radius_mm: f64,
    line_width_mm: f64,
    boundary: PackedBoundary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PackedZone<'a> {
    layer: &'a str,
    net: &'a str,
    settings: &'a ZoneSettings,
    outer: PackedBoundary,
    #[serde(skip_serializing_if = "Option::is_none")]
    hole: Option<PackedBoundary>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PackedSpec<'a> {
    frequency_mhz: f64,
    dimensions: &'a ResolvedDimensions,
    nets: Vec<&'a str>,
    outlines: Vec<PackedOutline<'a>>,
    zones: Vec<PackedZone<'a>>,
    holes: &'a [HolePlacement],
    pads: &'a [PadPlacement],
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a LabelPlacement>,
}

/// Render a spec as compact JSON with packed boundaries
pub fn to_packed_json(spec: &GeometrySpec) -> anyhow::Result<String> {
    let packed = PackedSpec {
        frequency_mhz: spec.frequency_mhz(),
        dimensions: spec.dimensions(),
        nets: spec.nets().iter().map(String::as_str).collect(),
        outlines: spec
            .outlines()
            .iter()
            .map(|o| PackedOutline {
                layer: &o.layer,
                radius_mm: o.radius_mm,
                line_width_mm: o.line_width_mm,
                boundary: PackedBoundary::from(&o.boundary),
            })
            .collect(),
        zones: spec
            .zones()
            .iter()
            .map(|z| PackedZone {
                layer: &z.layer,
                net: &z.net,
                settings: &z.settings,
                outer: PackedBoundary::from(z.outline.outer()),
                hole: z.outline.hole().map(PackedBoundary::from),
            })
            .collect(),
        holes: spec.holes(),
        pads: spec.pads(),
        label: spec.label(),
    };
    Ok(serde_json::to_string(&packed)?)
}
