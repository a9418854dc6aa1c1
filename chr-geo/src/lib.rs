//! Geography for the county choropleth.
//!
//! - `topology`: decode a TopoJSON topology (e.g. `us-atlas` counties-10m)
//!   into county polygons and interior state-border lines
//! - `projection`: composite Albers USA projection with Alaska and Hawaii insets
//! - `path`: SVG path data from projected geometry
//! - `map`: the projected, ready-to-draw map built once after loading
//! - `zoom`: pan/zoom transform applied on top of the drawn map

pub mod map;
pub mod path;
pub mod projection;
pub mod topology;
pub mod zoom;

pub use map::{CountyShape, ProjectedMap};
pub use projection::AlbersUsa;
pub use topology::Topology;
pub use zoom::ZoomTransform;
