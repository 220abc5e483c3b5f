//! World module - static level content
//!
//! - Mesh buffers and primitive builders
//! - Walkable collision boxes and floor queries
//! - The named palette and the fixed course catalog

mod geometry;
mod level;
pub mod palette;
mod catalog;

pub use geometry::*;
pub use level::*;
pub use catalog::*;
