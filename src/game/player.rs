//! Player physics and collision
//!
//! Two flight states, grounded and airborne, advanced once per tick:
//! steer and accelerate, clamp speed, friction, gravity, integrate,
//! resolve the floor, jump, then check the death plane.

use crate::config::PhysicsConfig;
use crate::rasterizer::{wrap_angle, Vec3};
use crate::world::palette::{PLAYER_BLUE, PLAYER_RED};
use crate::world::{Face, Mesh, Terrain};
use super::input::InputState;

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Facing angle around the vertical axis (0 faces +z)
    pub yaw: f32,
    pub grounded: bool,
    /// Floor height resolved on the last tick
    pub floor_y: f32,
    pub stars: u32,
    pub coins: u32,
    pub lives: u32,
    /// Set on death, cleared by respawn
    dead: bool,
}

impl Player {
    pub fn new(spawn: Vec3, lives: u32) -> Self {
        Self {
            position: spawn,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            grounded: true,
            floor_y: 0.0,
            stars: 0,
            coins: 0,
            lives,
            dead: false,
        }
    }

    /// Put the player back on the spawn point. Counters are kept.
    pub fn respawn(&mut self, spawn: (f32, f32)) {
        self.position = Vec3::new(spawn.0, 0.0, spawn.1);
        self.velocity = Vec3::ZERO;
        self.grounded = true;
        self.floor_y = 0.0;
        self.dead = false;
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn horizontal_speed(&self) -> f32 {
        self.velocity.x.hypot(self.velocity.z)
    }

    /// Advance one tick. Returns the remaining lives if the player fell
    /// through the death plane on this tick.
    pub fn update(
        &mut self,
        input: &InputState,
        camera_yaw: f32,
        terrain: &Terrain,
        cfg: &PhysicsConfig,
    ) -> Option<u32> {
        let (move_x, move_z) = input.move_axes();
        if move_x != 0.0 || move_z != 0.0 {
            let target = camera_yaw + move_x.atan2(move_z);
            self.yaw += wrap_angle(target - self.yaw) * cfg.turn_factor;
            let accel = if self.grounded { cfg.ground_accel } else { cfg.air_accel };
            self.velocity.x += self.yaw.sin() * accel;
            self.velocity.z += self.yaw.cos() * accel;
        }

        let speed = self.horizontal_speed();
        if speed > cfg.max_speed && speed > 0.0 {
            let s = cfg.max_speed / speed;
            self.velocity.x *= s;
            self.velocity.z *= s;
        }

        if self.grounded {
            self.velocity.x *= cfg.friction;
            self.velocity.z *= cfg.friction;
        }

        self.velocity.y = (self.velocity.y - cfg.gravity).max(cfg.terminal_velocity);
        self.position += self.velocity;

        self.floor_y = terrain.floor_at(self.position, self.velocity.y, cfg.floor_tolerance);
        if self.position.y <= self.floor_y {
            self.position.y = self.floor_y;
            self.velocity.y = 0.0;
            self.grounded = true;
        } else {
            self.grounded = false;
        }

        if input.jump && self.grounded {
            self.velocity.y = cfg.jump_impulse;
            self.grounded = false;
        }

        if self.position.y < cfg.death_plane && !self.dead {
            self.dead = true;
            self.lives = self.lives.saturating_sub(1);
            return Some(self.lives);
        }
        None
    }

    /// Two-tone box standing on the player's position
    pub fn mesh(&self, cfg: &PhysicsConfig) -> Mesh {
        let s = cfg.body_size;
        let h = s * 2.0;
        let Vec3 { x, y, z } = self.position;
        let vertices = vec![
            Vec3::new(x - s, y, z - s),
            Vec3::new(x + s, y, z - s),
            Vec3::new(x + s, y, z + s),
            Vec3::new(x - s, y, z + s),
            Vec3::new(x - s, y + h, z - s),
            Vec3::new(x + s, y + h, z - s),
            Vec3::new(x + s, y + h, z + s),
            Vec3::new(x - s, y + h, z + s),
        ];
        let faces = vec![
            Face::new(vec![0, 1, 2, 3], PLAYER_BLUE),
            Face::new(vec![4, 5, 6, 7], PLAYER_RED),
            Face::new(vec![0, 4, 5, 1], PLAYER_RED),
            Face::new(vec![2, 6, 7, 3], PLAYER_RED),
            Face::new(vec![1, 5, 6, 2], PLAYER_BLUE),
            Face::new(vec![0, 4, 7, 3], PLAYER_BLUE),
        ];
        Mesh { vertices, faces }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::CollisionBox;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    fn forward() -> InputState {
        InputState { forward: true, ..Default::default() }
    }

    #[test]
    fn test_drop_onto_box_settles() {
        let cfg = PhysicsConfig::default();
        let terrain = Terrain::new(
            vec![CollisionBox::new(Vec3::new(0.0, 50.0, 0.0), Vec3::new(100.0, 100.0, 100.0))],
            None,
        );
        let mut player = Player::new(Vec3::new(0.0, 150.0, 0.0), 4);
        player.grounded = false;

        let idle = InputState::default();
        let mut landed_at = None;
        for tick in 0..60 {
            player.update(&idle, 0.0, &terrain, &cfg);
            if player.grounded && landed_at.is_none() {
                landed_at = Some(tick);
            }
        }
        assert!(landed_at.is_some());
        // Stays put once landed
        for _ in 0..10 {
            assert_eq!(player.update(&idle, 0.0, &terrain, &cfg), None);
            assert!(player.grounded);
            assert_eq!(player.position.y, 100.0);
            assert_eq!(player.velocity.y, 0.0);
        }
    }

    #[test]
    fn test_idle_on_flat_ground_stays_still() {
        let cfg = PhysicsConfig::default();
        let mut player = Player::new(Vec3::ZERO, 4);
        for _ in 0..5 {
            player.update(&InputState::default(), 0.0, &Terrain::flat(), &cfg);
        }
        assert_eq!(player.position, Vec3::ZERO);
        assert_eq!(player.velocity, Vec3::ZERO);
        assert!(player.grounded);
    }

    #[test]
    fn test_jump_from_ground() {
        let cfg = PhysicsConfig::default();
        let mut player = Player::new(Vec3::ZERO, 4);
        let jump = InputState { jump: true, ..Default::default() };
        player.update(&jump, 0.0, &Terrain::flat(), &cfg);
        assert_eq!(player.velocity.y, 24.0);
        assert!(!player.grounded);
        assert_eq!(player.position.y, 0.0);

        player.update(&InputState::default(), 0.0, &Terrain::flat(), &cfg);
        assert!((player.position.y - 22.7).abs() < 1e-4);
        assert!(!player.grounded);

        // Holding jump in the air does nothing
        let vy = player.velocity.y;
        player.update(&jump, 0.0, &Terrain::flat(), &cfg);
        assert!((player.velocity.y - (vy - cfg.gravity)).abs() < 1e-4);
    }

    #[test]
    fn test_turn_is_gradual() {
        let cfg = PhysicsConfig::default();
        let mut player = Player::new(Vec3::ZERO, 4);
        let right = InputState { right: true, ..Default::default() };
        player.update(&right, 0.0, &Terrain::flat(), &cfg);
        // Quarter of the way to +x (PI / 2)
        assert!((player.yaw - PI / 8.0).abs() < 1e-5);
        assert!(player.velocity.x > 0.0);
        assert!(player.velocity.z > 0.0);
    }

    #[test]
    fn test_heading_follows_camera_yaw() {
        let cfg = PhysicsConfig::default();
        let mut player = Player::new(Vec3::ZERO, 4);
        player.yaw = PI / 2.0;
        player.update(&forward(), PI / 2.0, &Terrain::flat(), &cfg);
        assert!((player.yaw - PI / 2.0).abs() < 1e-6);
        assert!(player.velocity.z.abs() < 1e-5);
        assert!(player.velocity.x > 0.0);
    }

    #[test]
    fn test_turn_takes_short_way_round() {
        let cfg = PhysicsConfig::default();
        let mut player = Player::new(Vec3::ZERO, 4);
        player.yaw = 3.0;
        // Target -3.0 is 0.28 rad away through PI, not 6 rad back through 0
        player.update(&forward(), -3.0, &Terrain::flat(), &cfg);
        assert!(player.yaw > 3.0);
    }

    #[test]
    fn test_air_acceleration_is_weaker() {
        let cfg = PhysicsConfig::default();
        let void = Terrain::new(Vec::new(), None);
        let mut airborne = Player::new(Vec3::new(0.0, 100.0, 0.0), 4);
        airborne.grounded = false;
        airborne.update(&forward(), 0.0, &void, &cfg);
        assert!((airborne.velocity.z - cfg.air_accel).abs() < 1e-6);

        let mut grounded = Player::new(Vec3::ZERO, 4);
        grounded.update(&forward(), 0.0, &Terrain::flat(), &cfg);
        assert!((grounded.velocity.z - cfg.ground_accel * cfg.friction).abs() < 1e-6);
    }

    #[test]
    fn test_death_fires_once_per_crossing() {
        let cfg = PhysicsConfig::default();
        let void = Terrain::new(Vec::new(), None);
        let mut player = Player::new(Vec3::new(0.0, -480.0, 0.0), 4);
        let deaths: Vec<u32> = (0..200)
            .filter_map(|_| player.update(&InputState::default(), 0.0, &void, &cfg))
            .collect();
        assert_eq!(deaths, vec![3]);
        assert_eq!(player.lives, 3);
        assert!(player.is_dead());

        player.respawn((10.0, 20.0));
        assert_eq!(player.position, Vec3::new(10.0, 0.0, 20.0));
        assert!(player.grounded);
        assert!(!player.is_dead());
    }

    #[test]
    fn test_lives_saturate_at_zero() {
        let cfg = PhysicsConfig::default();
        let void = Terrain::new(Vec::new(), None);
        let mut player = Player::new(Vec3::ZERO, 2);
        let mut reports = Vec::new();
        for _ in 0..4 {
            player.position.y = -499.0;
            player.velocity = Vec3::ZERO;
            for _ in 0..10 {
                if let Some(lives) = player.update(&InputState::default(), 0.0, &void, &cfg) {
                    reports.push(lives);
                }
            }
            player.respawn((0.0, 0.0));
        }
        assert_eq!(reports, vec![1, 0, 0, 0]);
        assert_eq!(player.lives, 0);
    }

    #[test]
    fn test_mesh_sits_on_position() {
        let cfg = PhysicsConfig::default();
        let player = Player::new(Vec3::new(100.0, 40.0, -100.0), 4);
        let mesh = player.mesh(&cfg);
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.faces.len(), 6);
        assert_eq!(mesh.vertices[0], Vec3::new(75.0, 40.0, -125.0));
        assert_eq!(mesh.vertices[6], Vec3::new(125.0, 90.0, -75.0));
        assert_eq!(mesh.faces[1].color, PLAYER_RED);
    }

    proptest! {
        #[test]
        fn test_speed_never_exceeds_max(
            camera_yaw in -PI..PI,
            ticks in 1usize..300,
            start_speed in 0.0f32..40.0,
            strafe in any::<bool>(),
            airborne in any::<bool>(),
        ) {
            let cfg = PhysicsConfig::default();
            let (terrain, y) = if airborne {
                (Terrain::new(Vec::new(), None), 1.0e7)
            } else {
                (Terrain::flat(), 0.0)
            };
            let mut player = Player::new(Vec3::new(0.0, y, 0.0), 4);
            player.grounded = !airborne;
            player.velocity = Vec3::new(start_speed, 0.0, 0.0);
            let input = InputState { forward: true, right: strafe, ..Default::default() };
            for _ in 0..ticks {
                player.update(&input, camera_yaw, &terrain, &cfg);
                prop_assert!(player.horizontal_speed() <= cfg.max_speed + 1e-3);
            }
        }
    }
}
