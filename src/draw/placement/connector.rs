//! Feed connector footprint
//!
//! One connector family only: a through-hole SMA jack with a center signal
//! pin and four ground legs on a square. The leg offsets are mechanical
//! constants of that part and are not derived from any count.

use crate::draw::geometry::{PadPlacement, PadShape, Point};

pub const NET_RF: &str = "RF";
pub const NET_GND: &str = "GND";

/// Pad and drill sizes of a connector footprint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorFootprint {
    pub signal_pad_mm: f64,
    pub signal_drill_mm: f64,
    pub leg_pad_mm: f64,
    pub leg_drill_mm: f64,
    pub leg_offset_x_mm: f64,
    pub leg_offset_y_mm: f64,
}

/// Straight PCB-mount SMA jack, 5.08 mm leg pitch
pub const SMA_JACK_THT: ConnectorFootprint = ConnectorFootprint {
    signal_pad_mm: 2.0,
    signal_drill_mm: 1.3,
    leg_pad_mm: 2.6,
    leg_drill_mm: 1.7,
    leg_offset_x_mm: 2.54,
    leg_offset_y_mm: 2.54,
};

impl ConnectorFootprint {
    /// Leg offsets from the connector center, counterclockwise from (+x, +y)
    pub fn leg_offsets(&self) -> [Point; 4] {
        let (x, y) = (self.leg_offset_x_mm, self.leg_offset_y_mm);
        [
            Point::new(x, y),
            Point::new(-x, y),
            Point::new(-x, -y),
            Point::new(x, -y),
        ]
    }

    /// Pad "1" is the center signal contact, pads "2".."5" the ground legs.
    pub fn place(&self, center: Point, reference: &str) -> Vec<PadPlacement> {
        let mut pads = Vec::with_capacity(5);
        pads.push(PadPlacement {
            footprint: reference.to_string(),
            number: "1".to_string(),
            position: center,
            size_mm: self.signal_pad_mm,
            drill_mm: self.signal_drill_mm,
            shape: PadShape::Circle,
            net: NET_RF.to_string(),
        });
        for (i, offset) in self.leg_offsets().iter().enumerate() {
            pads.push(PadPlacement {
                footprint: reference.to_string(),
                number: (i + 2).to_string(),
                position: Point::new(center.x + offset.x, center.y + offset.y),
                size_mm: self.leg_pad_mm,
                drill_mm: self.leg_drill_mm,
                shape: PadShape::Rectangle,
                net: NET_GND.to_string(),
            });
        }
        pads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_pattern() {
        let pads = SMA_JACK_THT.place(Point::new(10.0, -5.0), "J1");
        assert_eq!(pads.len(), 5);

        let signal = &pads[0];
        assert_eq!(signal.net, NET_RF);
        assert_eq!(signal.position, Point::new(10.0, -5.0));

        let legs = &pads[1..];
        assert!(legs.iter().all(|p| p.net == NET_GND && p.footprint == "J1"));
        let expected = [(12.54, -2.46), (7.46, -2.46), (7.46, -7.54), (12.54, -7.54)];
        for (pad, (x, y)) in legs.iter().zip(expected) {
            assert!((pad.position.x - x).abs() < 1e-9);
            assert!((pad.position.y - y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_pad_numbers_unique() {
        let pads = SMA_JACK_THT.place(Point::ORIGIN, "J1");
        let numbers: Vec<&str> = pads.iter().map(|p| p.number.as_str()).collect();
        assert_eq!(numbers, vec!["1", "2", "3", "4", "5"]);
    }
}
