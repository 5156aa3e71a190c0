pub mod config;
pub mod model;
pub mod raster;
pub mod surface;

pub use config::SketchConfig;
pub use model::*;
pub use raster::Raster;
pub use surface::{Surface, normalized_rect};

// Re-export geometry so downstream crates agree on the point type
pub use kurbo::{Point, Rect};
