//! Mesh buffers, primitive builders and collision boxes
//!
//! Pure data structures with minimal behavior.
//! Rendering lives in the rasterizer, physics in the game module.

use crate::rasterizer::{Color, Vec3};

/// A flat-colored polygon (3+ vertex indices into its mesh)
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub indices: Vec<usize>,
    pub color: Color,
}

impl Face {
    pub fn new(indices: Vec<usize>, color: Color) -> Self {
        Self { indices, color }
    }

    /// Create a face from indices relative to `base`
    pub fn offset(base: usize, local: &[usize], color: Color) -> Self {
        Self {
            indices: local.iter().map(|i| base + i).collect(),
            color,
        }
    }
}

/// Vertex and face lists owned by one producer
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Append vertices and faces given in local index space
    fn push_shape(&mut self, vertices: &[Vec3], faces: &[&[usize]], color: Color) {
        let base = self.vertices.len();
        self.vertices.extend_from_slice(vertices);
        self.faces
            .extend(faces.iter().map(|local| Face::offset(base, local, color)));
    }

    /// Axis-aligned box centered at `center` with full extents `size`
    pub fn add_box(&mut self, center: Vec3, size: Vec3, color: Color) {
        let (x, y, z) = (center.x, center.y, center.z);
        let (hw, hh, hd) = (size.x / 2.0, size.y / 2.0, size.z / 2.0);
        self.push_shape(
            &[
                Vec3::new(x - hw, y - hh, z - hd),
                Vec3::new(x + hw, y - hh, z - hd),
                Vec3::new(x + hw, y + hh, z - hd),
                Vec3::new(x - hw, y + hh, z - hd),
                Vec3::new(x - hw, y - hh, z + hd),
                Vec3::new(x + hw, y - hh, z + hd),
                Vec3::new(x + hw, y + hh, z + hd),
                Vec3::new(x - hw, y + hh, z + hd),
            ],
            &[
                &[0, 1, 2, 3],
                &[4, 5, 6, 7],
                &[0, 4, 7, 3],
                &[1, 5, 6, 2],
                &[3, 2, 6, 7],
                &[0, 1, 5, 4],
            ],
            color,
        );
    }

    /// Four-sided pyramid: base rectangle at `base.y`, apex `height` above
    pub fn add_roof(&mut self, base: Vec3, width: f32, height: f32, depth: f32, color: Color) {
        let (x, y, z) = (base.x, base.y, base.z);
        let (hw, hd) = (width / 2.0, depth / 2.0);
        self.push_shape(
            &[
                Vec3::new(x - hw, y, z - hd),
                Vec3::new(x + hw, y, z - hd),
                Vec3::new(x + hw, y, z + hd),
                Vec3::new(x - hw, y, z + hd),
                Vec3::new(x, y + height, z),
            ],
            &[&[0, 1, 4], &[1, 2, 4], &[2, 3, 4], &[3, 0, 4], &[0, 1, 2, 3]],
            color,
        );
    }

    /// Wedge rising from `base.y` at -z to `base.y + height` at +z
    pub fn add_slope(&mut self, base: Vec3, width: f32, height: f32, depth: f32, color: Color) {
        let (x, y, z) = (base.x, base.y, base.z);
        let (hw, hd) = (width / 2.0, depth / 2.0);
        self.push_shape(
            &[
                Vec3::new(x - hw, y, z - hd),
                Vec3::new(x + hw, y, z - hd),
                Vec3::new(x + hw, y, z + hd),
                Vec3::new(x - hw, y, z + hd),
                Vec3::new(x - hw, y + height, z + hd),
                Vec3::new(x + hw, y + height, z + hd),
            ],
            &[&[0, 1, 2, 3], &[2, 5, 4, 3], &[0, 1, 5, 4], &[0, 3, 4], &[1, 2, 5]],
            color,
        );
    }

    /// Open cylinder approximated by `segments` side quads (no caps)
    pub fn add_cylinder(&mut self, base: Vec3, radius: f32, height: f32, segments: usize, color: Color) {
        if segments < 3 {
            return;
        }
        let start = self.vertices.len();
        for i in 0..segments {
            let a = std::f32::consts::TAU * i as f32 / segments as f32;
            let px = base.x + radius * a.cos();
            let pz = base.z + radius * a.sin();
            self.vertices.push(Vec3::new(px, base.y, pz));
            self.vertices.push(Vec3::new(px, base.y + height, pz));
        }
        for i in 0..segments {
            let j = (i + 1) % segments;
            let b0 = start + i * 2;
            let b1 = start + j * 2;
            self.faces.push(Face::new(vec![b0, b1, b1 + 1, b0 + 1], color));
        }
    }
}

/// Axis-aligned walkable box (center plus full extents)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionBox {
    pub center: Vec3,
    pub size: Vec3,
}

impl CollisionBox {
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    /// Height of the walkable top surface
    pub fn top(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Whether the horizontal footprint contains (x, z), edges inclusive
    pub fn contains_xz(&self, x: f32, z: f32) -> bool {
        let (hx, hz) = (self.size.x / 2.0, self.size.z / 2.0);
        self.center.x - hx <= x
            && x <= self.center.x + hx
            && self.center.z - hz <= z
            && z <= self.center.z + hz
    }
}

/// Everything the player can stand on
#[derive(Debug, Clone, Default)]
pub struct Terrain {
    pub boxes: Vec<CollisionBox>,
    /// Fixed ground plane height, `None` for levels floating over a void
    pub ground: Option<f32>,
}

impl Terrain {
    pub fn new(boxes: Vec<CollisionBox>, ground: Option<f32>) -> Self {
        Self { boxes, ground }
    }

    /// Flat ground at height 0 with no boxes
    pub fn flat() -> Self {
        Self::new(Vec::new(), Some(0.0))
    }

    /// Resolve the floor under a position.
    ///
    /// A box qualifies when its footprint contains (x, z), the position is at
    /// or below its top, and `y + vy` does not pass the top by more than
    /// `tolerance`. The tallest qualifying top wins. This is a discrete check:
    /// fast vertical motion can tunnel through thin boxes.
    pub fn floor_at(&self, position: Vec3, vy: f32, tolerance: f32) -> f32 {
        let base = self.ground.unwrap_or(f32::NEG_INFINITY);
        self.boxes
            .iter()
            .filter(|b| b.contains_xz(position.x, position.z))
            .map(CollisionBox::top)
            .filter(|&top| position.y <= top && position.y + vy <= top + tolerance)
            .fold(base, f32::max)
    }
}
