//! Level data and the builder used by the course catalog
//!
//! A level is immutable once built: render geometry, walkable boxes,
//! collectible placements, spawn point and sky color. Collectible state
//! (collected flags, animation phases) lives in the gameplay session.

use crate::rasterizer::{Color, Vec3};
use super::geometry::{CollisionBox, Mesh, Terrain};
use super::palette::{TREE_GREEN, TRUNK_BROWN};

/// Height above the placement point at which line/ring coins hover
const COIN_LIFT: f32 = 30.0;

/// A fully built level
#[derive(Debug, Clone)]
pub struct Level {
    /// Display name shown in the HUD
    pub name: String,
    pub mesh: Mesh,
    pub terrain: Terrain,
    pub stars: Vec<Vec3>,
    pub coins: Vec<Vec3>,
    /// Spawn (x, z); the player always spawns at y = 0
    pub spawn: (f32, f32),
    pub sky: Color,
}

impl Level {
    /// Spawn point as a world position
    pub fn spawn_position(&self) -> Vec3 {
        Vec3::new(self.spawn.0, 0.0, self.spawn.1)
    }
}

/// Accumulates geometry and placements for one level
pub struct LevelBuilder {
    name: String,
    sky: Color,
    spawn: (f32, f32),
    mesh: Mesh,
    boxes: Vec<CollisionBox>,
    ground: Option<f32>,
    stars: Vec<Vec3>,
    coins: Vec<Vec3>,
}

impl LevelBuilder {
    pub fn new(name: &str, sky: Color, spawn: (f32, f32)) -> Self {
        Self {
            name: name.to_string(),
            sky,
            spawn,
            mesh: Mesh::new(),
            boxes: Vec::new(),
            ground: Some(0.0),
            stars: Vec::new(),
            coins: Vec::new(),
        }
    }

    /// Remove the ground plane: falling off every box ends in the death plane
    pub fn void(mut self) -> Self {
        self.ground = None;
        self
    }

    /// Visual-only box
    pub fn scenery(&mut self, center: [f32; 3], size: [f32; 3], color: Color) {
        self.mesh.add_box(center.into(), size.into(), color);
    }

    /// Box the player can stand on
    pub fn platform(&mut self, center: [f32; 3], size: [f32; 3], color: Color) {
        self.scenery(center, size, color);
        self.boxes.push(CollisionBox::new(center.into(), size.into()));
    }

    /// Pyramid roof; `size` is (width, height, depth)
    pub fn roof(&mut self, base: [f32; 3], size: [f32; 3], color: Color) {
        let [w, h, d] = size;
        self.mesh.add_roof(base.into(), w, h, d, color);
    }

    /// Ramp; `size` is (width, rise, depth). A negative rise slopes down.
    pub fn slope(&mut self, base: [f32; 3], size: [f32; 3], color: Color) {
        let [w, h, d] = size;
        self.mesh.add_slope(base.into(), w, h, d, color);
    }

    pub fn cylinder(&mut self, base: [f32; 3], radius: f32, height: f32, segments: usize, color: Color) {
        self.mesh.add_cylinder(base.into(), radius, height, segments, color);
    }

    /// Standard tree: trunk plus two stacked canopies
    pub fn tree(&mut self, x: f32, z: f32) {
        self.tree_sized(x, z, 90.0, 110.0, 90.0);
    }

    pub fn tree_sized(&mut self, x: f32, z: f32, trunk_h: f32, canopy_w: f32, canopy_h: f32) {
        self.scenery([x, 30.0, z], [35.0, trunk_h, 35.0], TRUNK_BROWN);
        self.roof([x, trunk_h + 20.0, z], [canopy_w, canopy_h, canopy_w], TREE_GREEN);
        self.roof(
            [x, trunk_h + 60.0, z],
            [canopy_w * 0.7, canopy_h * 0.6, canopy_w * 0.7],
            TREE_GREEN,
        );
    }

    pub fn star(&mut self, position: [f32; 3]) {
        self.stars.push(position.into());
    }

    /// Single coin at an exact position
    pub fn coin(&mut self, position: [f32; 3]) {
        self.coins.push(position.into());
    }

    /// `count` coins evenly spaced from `from` to `to` inclusive
    pub fn coins_line(&mut self, from: [f32; 3], to: [f32; 3], count: usize) {
        let (a, b) = (Vec3::from(from), Vec3::from(to));
        let steps = count.saturating_sub(1).max(1) as f32;
        for i in 0..count {
            let p = a.lerp(b, i as f32 / steps);
            self.coins.push(Vec3::new(p.x, p.y + COIN_LIFT, p.z));
        }
    }

    /// `count` coins on a horizontal circle around `center`
    pub fn coins_ring(&mut self, center: [f32; 3], radius: f32, count: usize) {
        let [cx, y, cz] = center;
        for i in 0..count {
            let a = std::f32::consts::TAU * i as f32 / count as f32;
            self.coins
                .push(Vec3::new(cx + radius * a.cos(), y + COIN_LIFT, cz + radius * a.sin()));
        }
    }

    pub fn build(self) -> Level {
        Level {
            name: self.name,
            mesh: self.mesh,
            terrain: Terrain::new(self.boxes, self.ground),
            stars: self.stars,
            coins: self.coins,
            spawn: self.spawn,
            sky: self.sky,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::palette::STONE_GRAY;

    fn builder() -> LevelBuilder {
        LevelBuilder::new("Test", Color::BLACK, (10.0, -20.0))
    }

    #[test]
    fn test_only_platforms_collide() {
        let mut b = builder();
        b.scenery([0.0, 0.0, 0.0], [100.0, 10.0, 100.0], STONE_GRAY);
        b.platform([0.0, 50.0, 0.0], [20.0, 20.0, 20.0], STONE_GRAY);
        let level = b.build();
        assert_eq!(level.mesh.faces.len(), 12);
        assert_eq!(level.terrain.boxes.len(), 1);
        assert_eq!(level.terrain.boxes[0].top(), 60.0);
        assert_eq!(level.terrain.ground, Some(0.0));
    }

    #[test]
    fn test_void_level_has_no_ground() {
        let level = builder().void().build();
        assert_eq!(level.terrain.ground, None);
        assert_eq!(level.spawn_position(), Vec3::new(10.0, 0.0, -20.0));
    }

    #[test]
    fn test_tree_parts() {
        let mut b = builder();
        b.tree(100.0, 200.0);
        let level = b.build();
        // Trunk box plus two roofs
        assert_eq!(level.mesh.vertices.len(), 8 + 5 + 5);
        assert_eq!(level.mesh.faces.len(), 6 + 5 + 5);
        assert!(level.terrain.boxes.is_empty());
        // Upper canopy apex: base at 90 + 60, height 90 * 0.6
        let apex = level.mesh.vertices[17];
        assert!((apex.y - 204.0).abs() < 1e-4);
        assert_eq!((apex.x, apex.z), (100.0, 200.0));
    }

    #[test]
    fn test_coins_line_spacing() {
        let mut b = builder();
        b.coins_line([-100.0, 0.0, 0.0], [100.0, 20.0, 0.0], 5);
        let level = b.build();
        let xs: Vec<f32> = level.coins.iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![-100.0, -50.0, 0.0, 50.0, 100.0]);
        assert_eq!(level.coins[0].y, 30.0);
        assert_eq!(level.coins[4].y, 50.0);
    }

    #[test]
    fn test_coins_line_single_coin_at_start() {
        let mut b = builder();
        b.coins_line([5.0, 0.0, 5.0], [500.0, 0.0, 500.0], 1);
        let level = b.build();
        assert_eq!(level.coins, vec![Vec3::new(5.0, 30.0, 5.0)]);
    }

    #[test]
    fn test_coins_ring_radius() {
        let mut b = builder();
        b.coins_ring([100.0, 200.0, -50.0], 80.0, 8);
        let level = b.build();
        assert_eq!(level.coins.len(), 8);
        for coin in &level.coins {
            let d = ((coin.x - 100.0).powi(2) + (coin.z + 50.0).powi(2)).sqrt();
            assert!((d - 80.0).abs() < 1e-3);
            assert_eq!(coin.y, 230.0);
        }
        assert!((level.coins[0].x - 180.0).abs() < 1e-4);
    }
}
