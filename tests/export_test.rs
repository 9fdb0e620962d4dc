// Export encodings of a built spec
use backfire_donut::export::{export_spec, read_header, ExportFormat};
use backfire_donut::{build_geometry_spec, DonutConfig};
use std::time::Instant;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_export_fields() {
        let spec = build_geometry_spec(&DonutConfig::default()).unwrap();
        let bytes = export_spec(&spec, ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["frequency_mhz"], 1520.0);
        assert_eq!(value["nets"], serde_json::json!(["GND"]));
        assert_eq!(value["zones"].as_array().unwrap().len(), 2);
        assert_eq!(value["zones"][0]["outline"]["outer"]["vertices"].as_array().unwrap().len(), 240);
        assert_eq!(value["holes"][0]["reference"], "MH1");
        assert_eq!(value["label"]["justify"], "center");
    }

    #[test]
    fn test_every_format_exports() {
        let spec = build_geometry_spec(&DonutConfig::default()).unwrap();
        for format in [
            ExportFormat::Json,
            ExportFormat::PackedJson,
            ExportFormat::MsgPack,
            ExportFormat::Binary,
            ExportFormat::Xml,
        ] {
            let start = Instant::now();
            let bytes = export_spec(&spec, format).unwrap();
            println!("{:?}: {} bytes in {:.3}ms", format, bytes.len(), start.elapsed().as_secs_f64() * 1000.0);
            assert!(!bytes.is_empty());
        }
    }

    #[test]
    fn test_msgpack_decodes_to_same_values() {
        let spec = build_geometry_spec(&DonutConfig::default()).unwrap();
        let bytes = export_spec(&spec, ExportFormat::MsgPack).unwrap();
        let value: serde_json::Value = rmp_serde::from_slice(&bytes).unwrap();
        let json: serde_json::Value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["holes"], json["holes"]);
        assert_eq!(value["dimensions"], json["dimensions"]);
    }

    #[test]
    fn test_binary_export_to_file() {
        let config = DonutConfig { annulus: false, ..DonutConfig::default() };
        let spec = build_geometry_spec(&config).unwrap();
        let bytes = export_spec(&spec, ExportFormat::Binary).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("donut.bin");
        std::fs::write(&path, &bytes).unwrap();

        let data = std::fs::read(&path).unwrap();
        let header = read_header(&mut data.as_slice()).unwrap();
        assert_eq!(header.inner_diameter_mm, None);
        assert_eq!(header.outer_diameter_mm, spec.dimensions().outer_diameter_mm);
    }
}
