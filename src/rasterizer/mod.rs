//! Software rasterizer
//!
//! Features:
//! - Yaw-only perspective projection with a hard near plane
//! - Flat-colored filled polygons with dark outlines
//! - Painter's algorithm (average-depth sort, no z-buffer)

mod math;
mod types;
mod render;
mod pipeline;

pub use math::*;
pub use types::*;
pub use render::*;
pub use pipeline::*;
