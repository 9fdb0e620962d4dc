//! Placement of discrete board features
//!
//! # Submodules
//! - `radial` - Mounting holes on a bolt circle
//! - `connector` - Fixed feed connector footprint
//! - `label` - Text anchor inside the disk

mod radial;
mod connector;
mod label;

pub use radial::{
    RadialArray,
    bolt_circle,
};

pub use connector::{
    ConnectorFootprint,
    SMA_JACK_THT,
    NET_GND,
    NET_RF,
};

pub use label::label_anchor;
