//! Stars and coins
//!
//! Both animate a phase every tick, fire a pickup exactly once when the
//! player comes within range, and contribute no geometry once collected.

use crate::config::CollectibleConfig;
use crate::rasterizer::Vec3;
use crate::world::palette::{GOLD, STAR_YELLOW, YELLOW};
use crate::world::{Face, Mesh};
use super::player::Player;

pub trait Collectible {
    /// Advance the animation phase by one tick
    fn update(&mut self, cfg: &CollectibleConfig);

    /// Test for pickup. Returns true only on the tick the item is collected.
    fn check(&mut self, player: &mut Player, cfg: &CollectibleConfig) -> bool;

    /// Current mesh; empty once collected
    fn mesh(&self, cfg: &CollectibleConfig) -> Mesh;

    fn is_collected(&self) -> bool;
}

#[derive(Debug, Clone)]
pub struct Star {
    pub position: Vec3,
    collected: bool,
    bob: f32,
}

impl Star {
    pub fn new(position: Vec3) -> Self {
        Self { position, collected: false, bob: 0.0 }
    }

    /// Position including the vertical bob
    pub fn animated_position(&self, cfg: &CollectibleConfig) -> Vec3 {
        Vec3::new(
            self.position.x,
            self.position.y + self.bob.sin() * cfg.star_bob_height,
            self.position.z,
        )
    }
}

impl Collectible for Star {
    fn update(&mut self, cfg: &CollectibleConfig) {
        self.bob += cfg.star_bob_rate;
    }

    fn check(&mut self, player: &mut Player, cfg: &CollectibleConfig) -> bool {
        if self.collected {
            return false;
        }
        if player.position.distance(self.animated_position(cfg)) < cfg.star_radius {
            self.collected = true;
            player.stars += 1;
            return true;
        }
        false
    }

    /// Double pyramid: yellow upper half, gold lower half
    fn mesh(&self, cfg: &CollectibleConfig) -> Mesh {
        if self.collected {
            return Mesh::new();
        }
        let s = cfg.star_size;
        let Vec3 { x, y, z } = self.animated_position(cfg);
        let vertices = vec![
            Vec3::new(x, y + s * 2.0, z),
            Vec3::new(x - s, y + s * 0.5, z - s),
            Vec3::new(x + s, y + s * 0.5, z - s),
            Vec3::new(x + s, y + s * 0.5, z + s),
            Vec3::new(x - s, y + s * 0.5, z + s),
            Vec3::new(x, y - s, z),
        ];
        let faces = [[0, 1, 2], [0, 2, 3], [0, 3, 4], [0, 4, 1]]
            .into_iter()
            .map(|f| Face::new(f.to_vec(), STAR_YELLOW))
            .chain(
                [[5, 2, 1], [5, 3, 2], [5, 4, 3], [5, 1, 4]]
                    .into_iter()
                    .map(|f| Face::new(f.to_vec(), GOLD)),
            )
            .collect();
        Mesh { vertices, faces }
    }

    fn is_collected(&self) -> bool {
        self.collected
    }
}

#[derive(Debug, Clone)]
pub struct Coin {
    pub position: Vec3,
    collected: bool,
    spin: f32,
}

impl Coin {
    pub fn new(position: Vec3) -> Self {
        Self { position, collected: false, spin: 0.0 }
    }
}

impl Collectible for Coin {
    fn update(&mut self, cfg: &CollectibleConfig) {
        self.spin += cfg.coin_spin_rate;
    }

    fn check(&mut self, player: &mut Player, cfg: &CollectibleConfig) -> bool {
        if self.collected {
            return false;
        }
        if player.position.distance(self.position) < cfg.coin_radius {
            self.collected = true;
            player.coins += 1;
            return true;
        }
        false
    }

    /// Upright quad whose width follows the spin
    fn mesh(&self, cfg: &CollectibleConfig) -> Mesh {
        if self.collected {
            return Mesh::new();
        }
        let s = cfg.coin_size;
        let w = self.spin.cos().abs() * s + 2.0;
        let Vec3 { x, y, z } = self.position;
        Mesh {
            vertices: vec![
                Vec3::new(x - w, y, z),
                Vec3::new(x + w, y, z),
                Vec3::new(x + w, y + s * 2.0, z),
                Vec3::new(x - w, y + s * 2.0, z),
            ],
            faces: vec![Face::new(vec![0, 1, 2, 3], YELLOW)],
        }
    }

    fn is_collected(&self) -> bool {
        self.collected
    }
}
