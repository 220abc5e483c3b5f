//! Vector math and the yaw-only perspective projection

use std::ops::{Add, AddAssign, Mul, Sub};
use super::types::RenderConfig;

/// 3D Vector
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn len(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Vec3) -> f32 {
        (self - other).len()
    }

    pub fn scale(self, s: f32) -> Vec3 {
        Vec3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    /// Linear interpolation towards `target` by factor `t`
    pub fn lerp(self, target: Vec3, t: f32) -> Vec3 {
        self + (target - self).scale(t)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        *self = *self + other;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f32) -> Vec3 {
        self.scale(s)
    }
}

/// Rotate an (x, z) pair around the vertical axis
pub fn rotate_y(x: f32, z: f32, angle: f32) -> (f32, f32) {
    let (sin_a, cos_a) = angle.sin_cos();
    (x * cos_a - z * sin_a, x * sin_a + z * cos_a)
}

/// Wrap an angle difference into (-PI, PI]
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Camera pose used for projection. The camera never pitches or rolls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
}

impl CameraPose {
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }

    /// Camera-space position of a world point (before the perspective divide)
    pub fn to_camera_space(&self, p: Vec3) -> Vec3 {
        let rel = p - self.position;
        let (rx, rz) = rotate_y(rel.x, rel.z, -self.yaw);
        Vec3::new(rx, rel.y, rz)
    }
}

/// A projected vertex: integral screen position plus its camera-space depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: i32,
    pub y: i32,
    pub depth: f32,
}

/// Project a world point to screen space.
/// Returns `None` when the point lies on or behind the near plane.
pub fn project_point(p: Vec3, camera: &CameraPose, config: &RenderConfig) -> Option<Projected> {
    let cam = camera.to_camera_space(p);
    if cam.z <= config.near_plane {
        return None;
    }

    let scale = config.fov / cam.z;
    let (cx, cy) = config.center();
    Some(Projected {
        x: (cam.x * scale + cx) as i32,
        y: (-cam.y * scale + cy) as i32,
        depth: cam.z,
    })
}
