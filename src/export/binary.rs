//! Binary serialization for geometry specs
//!
//! Format: [header][outlines][zones][holes][pads][label], all little-endian.
//! Strings are len(u32) + UTF-8 bytes; boundaries are count(u32) + xy f64 pairs.
//! Header: "DONUTGEO" (8 bytes magic) + version(u32) + frequency(f64)
//!   + wavelength(f64) + outer_diameter(f64) + inner_diameter(f64, 0 = solid)
//! Outlines: count(u32), each: layer + cx, cy, radius, line_width (f64) + boundary
//! Zones: count(u32), each: layer + net + clearance, min_thickness (f64)
//!   + pad_connection(u8) + filled(u8) + outer boundary + hole boundary (0 = none)
//! Holes: count(u32), each: reference + x, y, drill, pad (f64) + net
//! Pads: count(u32), each: footprint + number + x, y, size, drill (f64)
//!   + shape(u8) + net
//! Label: present(u8), then text + layer + x, y, size, thickness (f64) + justify(u8)

use std::io::{self, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::draw::geometry::{GeometrySpec, Justify, PadConnection, PadShape, PolygonBoundary};

pub const MAGIC: &[u8; 8] = b"DONUTGEO";
pub const FORMAT_VERSION: u32 = 2;

fn write_str<W: Write>(w: &mut W, s: &str) -> io::Result<()> {
    w.write_u32::<LittleEndian>(s.len() as u32)?;
    w.write_all(s.as_bytes())
}

fn write_boundary<W: Write>(w: &mut W, boundary: Option<&PolygonBoundary>) -> io::Result<()> {
    match boundary {
        Some(b) => {
            w.write_u32::<LittleEndian>(b.segments() as u32)?;
            for v in b.vertices() {
                w.write_f64::<LittleEndian>(v.x)?;
                w.write_f64::<LittleEndian>(v.y)?;
            }
        }
        None => w.write_u32::<LittleEndian>(0)?,
    }
    Ok(())
}

/// Encode a spec into the binary format
pub fn to_binary(spec: &GeometrySpec) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let dims = spec.dimensions();

    buffer.write_all(MAGIC)?;
    buffer.write_u32::<LittleEndian>(FORMAT_VERSION)?;
    buffer.write_f64::<LittleEndian>(spec.frequency_mhz())?;
    buffer.write_f64::<LittleEndian>(dims.wavelength_mm)?;
    buffer.write_f64::<LittleEndian>(dims.outer_diameter_mm)?;
    buffer.write_f64::<LittleEndian>(dims.inner_diameter_mm.unwrap_or(0.0))?;

    buffer.write_u32::<LittleEndian>(spec.outlines().len() as u32)?;
    for outline in spec.outlines() {
        write_str(&mut buffer, &outline.layer)?;
        buffer.write_f64::<LittleEndian>(outline.center.x)?;
        buffer.write_f64::<LittleEndian>(outline.center.y)?;
        buffer.write_f64::<LittleEndian>(outline.radius_mm)?;
        buffer.write_f64::<LittleEndian>(outline.line_width_mm)?;
        write_boundary(&mut buffer, Some(&outline.boundary))?;
    }

    buffer.write_u32::<LittleEndian>(spec.zones().len() as u32)?;
    for zone in spec.zones() {
        write_str(&mut buffer, &zone.layer)?;
        write_str(&mut buffer, &zone.net)?;
        buffer.write_f64::<LittleEndian>(zone.settings.clearance_mm)?;
        buffer.write_f64::<LittleEndian>(zone.settings.min_thickness_mm)?;
        buffer.write_u8(match zone.settings.pad_connection {
            PadConnection::Full => 0,
            PadConnection::ThermalRelief => 1,
            PadConnection::None => 2,
        })?;
        buffer.write_u8(zone.settings.filled as u8)?;
        write_boundary(&mut buffer, Some(zone.outline.outer()))?;
        write_boundary(&mut buffer, zone.outline.hole())?;
    }

    buffer.write_u32::<LittleEndian>(spec.holes().len() as u32)?;
    for hole in spec.holes() {
        write_str(&mut buffer, &hole.reference)?;
        buffer.write_f64::<LittleEndian>(hole.position.x)?;
        buffer.write_f64::<LittleEndian>(hole.position.y)?;
        buffer.write_f64::<LittleEndian>(hole.drill_mm)?;
        buffer.write_f64::<LittleEndian>(hole.pad_mm)?;
        write_str(&mut buffer, &hole.net)?;
    }

    buffer.write_u32::<LittleEndian>(spec.pads().len() as u32)?;
    for pad in spec.pads() {
        write_str(&mut buffer, &pad.footprint)?;
        write_str(&mut buffer, &pad.number)?;
        buffer.write_f64::<LittleEndian>(pad.position.x)?;
        buffer.write_f64::<LittleEndian>(pad.position.y)?;
        buffer.write_f64::<LittleEndian>(pad.size_mm)?;
        buffer.write_f64::<LittleEndian>(pad.drill_mm)?;
        buffer.write_u8(match pad.shape {
            PadShape::Circle => 0,
            PadShape::Rectangle => 1,
        })?;
        write_str(&mut buffer, &pad.net)?;
    }

    match spec.label() {
        Some(label) => {
            buffer.write_u8(1)?;
            write_str(&mut buffer, &label.text)?;
            write_str(&mut buffer, &label.layer)?;
            buffer.write_f64::<LittleEndian>(label.position.x)?;
            buffer.write_f64::<LittleEndian>(label.position.y)?;
            buffer.write_f64::<LittleEndian>(label.size_mm)?;
            buffer.write_f64::<LittleEndian>(label.thickness_mm)?;
            buffer.write_u8(match label.justify {
                Justify::Left => 0,
                Justify::Center => 1,
                Justify::Right => 2,
            })?;
        }
        None => buffer.write_u8(0)?,
    }

    Ok(buffer)
}

/// Fixed-size header at the start of a binary spec
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryHeader {
    pub version: u32,
    pub frequency_mhz: f64,
    pub wavelength_mm: f64,
    pub outer_diameter_mm: f64,
    /// `None` for a solid disk
    pub inner_diameter_mm: Option<f64>,
}

/// Read and check the header of a binary spec
pub fn read_header<R: Read>(r: &mut R) -> io::Result<BinaryHeader> {
    let mut magic = [0u8; 8];
    r.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "not a DONUTGEO stream"));
    }
    let version = r.read_u32::<LittleEndian>()?;
    let frequency_mhz = r.read_f64::<LittleEndian>()?;
    let wavelength_mm = r.read_f64::<LittleEndian>()?;
    let outer_diameter_mm = r.read_f64::<LittleEndian>()?;
    let inner = r.read_f64::<LittleEndian>()?;
    Ok(BinaryHeader {
        version,
        frequency_mhz,
        wavelength_mm,
        outer_diameter_mm,
        inner_diameter_mm: if inner > 0.0 { Some(inner) } else { None },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConnectorConfig, DonutConfig};
    use crate::draw::builder::build_geometry_spec;

    #[test]
    fn test_header_matches_spec() {
        let spec = build_geometry_spec(&DonutConfig::default()).unwrap();
        let bytes = to_binary(&spec).unwrap();
        let header = read_header(&mut bytes.as_slice()).unwrap();
        assert_eq!(header.version, FORMAT_VERSION);
        assert_eq!(header.frequency_mhz, 1520.0);
        assert_eq!(header.wavelength_mm, spec.dimensions().wavelength_mm);
        assert_eq!(header.inner_diameter_mm, spec.dimensions().inner_diameter_mm);
    }

    #[test]
    fn test_rejects_bad_magic() {
        let bytes = b"NOTDONUT\x01\x00\x00\x00".to_vec();
        assert!(read_header(&mut bytes.as_slice()).is_err());
    }

    fn read_str(r: &mut &[u8]) -> String {
        let len = r.read_u32::<LittleEndian>().unwrap() as usize;
        let mut bytes = vec![0u8; len];
        r.read_exact(&mut bytes).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    fn read_f64s(r: &mut &[u8], n: usize) -> Vec<f64> {
        (0..n).map(|_| r.read_f64::<LittleEndian>().unwrap()).collect()
    }

    fn skip_boundary(r: &mut &[u8]) -> usize {
        let count = r.read_u32::<LittleEndian>().unwrap() as usize;
        read_f64s(r, count * 2);
        count
    }

    #[test]
    fn test_outline_count_follows_header() {
        let spec = build_geometry_spec(&DonutConfig::default()).unwrap();
        let bytes = to_binary(&spec).unwrap();
        let mut cursor = bytes.as_slice();
        read_header(&mut cursor).unwrap();
        assert_eq!(cursor.read_u32::<LittleEndian>().unwrap(), 2);
    }

    #[test]
    fn test_stream_carries_every_object() {
        let config = DonutConfig {
            annulus: false,
            connector: Some(ConnectorConfig::default()),
            ..DonutConfig::default()
        };
        let spec = build_geometry_spec(&config).unwrap();
        let bytes = to_binary(&spec).unwrap();
        let mut r = bytes.as_slice();
        read_header(&mut r).unwrap();

        assert_eq!(r.read_u32::<LittleEndian>().unwrap(), 1);
        assert_eq!(read_str(&mut r), "Edge.Cuts");
        let outline = read_f64s(&mut r, 4);
        assert_eq!(outline[2], spec.outlines()[0].radius_mm);
        assert_eq!(outline[3], 0.1);
        assert_eq!(skip_boundary(&mut r), 240);

        assert_eq!(r.read_u32::<LittleEndian>().unwrap(), 2);
        for layer in ["F.Cu", "B.Cu"] {
            assert_eq!(read_str(&mut r), layer);
            assert_eq!(read_str(&mut r), "GND");
            assert_eq!(read_f64s(&mut r, 2), vec![0.3, 0.2]);
            assert_eq!(r.read_u8().unwrap(), 0);
            assert_eq!(r.read_u8().unwrap(), 1);
            assert_eq!(skip_boundary(&mut r), 240);
            assert_eq!(skip_boundary(&mut r), 0);
        }

        assert_eq!(r.read_u32::<LittleEndian>().unwrap(), 3);
        for i in 1..=3 {
            assert_eq!(read_str(&mut r), format!("MH{}", i));
            read_f64s(&mut r, 4);
            assert_eq!(read_str(&mut r), "GND");
        }

        assert_eq!(r.read_u32::<LittleEndian>().unwrap(), 5);
        for (i, pad) in spec.pads().iter().enumerate() {
            assert_eq!(read_str(&mut r), "J1");
            assert_eq!(read_str(&mut r), (i + 1).to_string());
            read_f64s(&mut r, 4);
            assert_eq!(r.read_u8().unwrap(), if i == 0 { 0 } else { 1 });
            assert_eq!(read_str(&mut r), pad.net);
        }

        assert_eq!(r.read_u8().unwrap(), 1);
        assert_eq!(read_str(&mut r), "BACKFIRE");
        assert_eq!(read_str(&mut r), "F.SilkS");
        read_f64s(&mut r, 4);
        assert_eq!(r.read_u8().unwrap(), 1);
        assert!(r.is_empty());
    }
}
