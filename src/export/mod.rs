//! Export encodings for geometry specs
//!
//! # Submodules
//! - `packed` - JSON with base64-packed vertex arrays
//! - `binary` - Little-endian binary stream

pub mod packed;
pub mod binary;

use crate::adapter::xml::spec_to_xml;
use crate::draw::geometry::GeometrySpec;

pub use binary::{read_header, to_binary, BinaryHeader};
pub use packed::{decode_f64_base64, to_packed_json};

/// Output encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    PackedJson,
    MsgPack,
    Binary,
    Xml,
}

/// Pretty-printed JSON of the whole spec
pub fn to_json(spec: &GeometrySpec) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(spec)?)
}

/// MessagePack with field names
pub fn to_msgpack(spec: &GeometrySpec) -> anyhow::Result<Vec<u8>> {
    Ok(rmp_serde::to_vec_named(spec)?)
}

/// Encode a spec in `format`
pub fn export_spec(spec: &GeometrySpec, format: ExportFormat) -> anyhow::Result<Vec<u8>> {
    let bytes = match format {
        ExportFormat::Json => to_json(spec)?.into_bytes(),
        ExportFormat::PackedJson => to_packed_json(spec)?.into_bytes(),
        ExportFormat::MsgPack => to_msgpack(spec)?,
        ExportFormat::Binary => to_binary(spec)?,
        ExportFormat::Xml => spec_to_xml(spec)?.into_bytes(),
    };
    log::debug!("Exported spec as {:?}: {} bytes", format, bytes.len());
    Ok(bytes)
}
