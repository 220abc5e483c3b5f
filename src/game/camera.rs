//! Chase camera: orbits behind the player at a fixed distance and height,
//! easing towards its target a fraction of the gap per tick.

use crate::config::CameraConfig;
use crate::rasterizer::{CameraPose, Vec3};
use super::input::InputState;

#[derive(Debug, Clone, Default)]
pub struct ChaseCamera {
    pub position: Vec3,
    pub yaw: f32,
}

impl ChaseCamera {
    /// Camera at the world origin facing +z
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the camera wants to be for a given player position
    pub fn target(&self, player: Vec3, cfg: &CameraConfig) -> Vec3 {
        Vec3::new(
            player.x - self.yaw.sin() * cfg.distance,
            player.y + cfg.height,
            player.z - self.yaw.cos() * cfg.distance,
        )
    }

    pub fn update(&mut self, input: &InputState, player: Vec3, cfg: &CameraConfig) {
        if input.cam_left {
            self.yaw -= cfg.rotate_speed;
        }
        if input.cam_right {
            self.yaw += cfg.rotate_speed;
        }
        let target = self.target(player, cfg);
        self.position = self.position.lerp(target, cfg.follow);
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.position, self.yaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_fraction_of_gap() {
        let cfg = CameraConfig::default();
        let mut camera = ChaseCamera::new();
        camera.update(&InputState::default(), Vec3::ZERO, &cfg);
        // Target is (0, 350, -700); 8% of the way there
        assert!((camera.position.y - 28.0).abs() < 1e-4);
        assert!((camera.position.z + 56.0).abs() < 1e-4);
        assert_eq!(camera.position.x, 0.0);
    }

    #[test]
    fn test_converges_on_target() {
        let cfg = CameraConfig::default();
        let mut camera = ChaseCamera::new();
        let player = Vec3::new(300.0, 50.0, 200.0);
        for _ in 0..400 {
            camera.update(&InputState::default(), player, &cfg);
        }
        let target = camera.target(player, &cfg);
        assert!(camera.position.distance(target) < 0.01);
    }

    #[test]
    fn test_rotation_keys() {
        let cfg = CameraConfig::default();
        let mut camera = ChaseCamera::new();
        let left = InputState { cam_left: true, ..Default::default() };
        let both = InputState { cam_left: true, cam_right: true, ..Default::default() };
        camera.update(&left, Vec3::ZERO, &cfg);
        camera.update(&left, Vec3::ZERO, &cfg);
        assert!((camera.yaw + 0.08).abs() < 1e-6);
        camera.update(&both, Vec3::ZERO, &cfg);
        assert!((camera.yaw + 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_target_is_behind_facing() {
        let cfg = CameraConfig::default();
        let camera = ChaseCamera {
            position: Vec3::ZERO,
            yaw: std::f32::consts::FRAC_PI_2,
        };
        let target = camera.target(Vec3::ZERO, &cfg);
        assert!((target.x + 700.0).abs() < 1e-3);
        assert!(target.z.abs() < 1e-3);
    }
}
