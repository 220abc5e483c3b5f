//! Title screen with a spinning two-tone cube

use crate::present::{self, ScreenFit};
use crate::rasterizer::{rotate_y, Color, Framebuffer};
use crate::world::palette::{OUTLINE_BLACK, PLAYER_BLUE, PLAYER_RED, WHITE, YELLOW};

const BACKGROUND: Color = Color::new(92, 148, 252);
const SPIN_RATE: f32 = 0.03;
const CUBE_HALF: f32 = 50.0;
/// Ticks per on/off phase of the start prompt
const BLINK_TICKS: u32 = 30;

const CUBE_FACES: [[usize; 4]; 4] = [[0, 1, 2, 3], [4, 5, 6, 7], [0, 4, 7, 3], [1, 5, 6, 2]];

#[derive(Debug, Clone, Default)]
pub struct MenuScene {
    pub ticks: u32,
    pub yaw: f32,
}

impl MenuScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self) {
        self.ticks += 1;
        self.yaw += SPIN_RATE;
    }

    pub fn prompt_visible(&self) -> bool {
        (self.ticks / BLINK_TICKS) % 2 == 0
    }

    /// Cube corners on screen. Uses its own shallow perspective, not the
    /// world camera.
    fn cube_points(&self, cx: f32, cy: f32) -> [(i32, i32); 8] {
        let h = CUBE_HALF;
        let corners = [
            (-h, -h, -h),
            (h, -h, -h),
            (h, h, -h),
            (-h, h, -h),
            (-h, -h, h),
            (h, -h, h),
            (h, h, h),
            (-h, h, h),
        ];
        corners.map(|(x, y, z)| {
            let (rx, rz) = rotate_y(x, z, self.yaw);
            let s = 400.0 / (rz + 300.0);
            ((rx * s + cx) as i32, (y * s + cy) as i32)
        })
    }

    pub fn render(&self, fb: &mut Framebuffer) {
        fb.clear(BACKGROUND);
        let (cx, cy) = (fb.width as f32 / 2.0, fb.height as f32 / 2.0 + 50.0);
        let points = self.cube_points(cx, cy);
        for face in CUBE_FACES {
            let poly: Vec<(i32, i32)> = face.iter().map(|&i| points[i]).collect();
            let color = if face[0] < 4 { PLAYER_RED } else { PLAYER_BLUE };
            fb.fill_polygon(&poly, color);
            fb.stroke_polygon(&poly, OUTLINE_BLACK);
        }
    }

    pub fn draw_text(&self, fit: &ScreenFit, width: f32, height: f32) {
        let cx = width / 2.0;
        present::text_centered(fit, "STAR ROAD 64", cx + 4.0, 134.0, 60.0, OUTLINE_BLACK);
        present::text_centered(fit, "STAR ROAD 64", cx, 130.0, 60.0, YELLOW);
        present::text_centered(fit, "~ Sixteen Course Edition ~", cx, 195.0, 28.0, WHITE);
        if self.prompt_visible() {
            present::text_centered(fit, "PRESS SPACE TO START", cx, height - 80.0, 28.0, WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_blinks() {
        let mut menu = MenuScene::new();
        assert!(menu.prompt_visible());
        for _ in 0..30 {
            menu.update();
        }
        assert!(!menu.prompt_visible());
        for _ in 0..30 {
            menu.update();
        }
        assert!(menu.prompt_visible());
        assert!((menu.yaw - 1.8).abs() < 1e-4);
    }

    #[test]
    fn test_cube_drawn_at_center() {
        let menu = MenuScene::new();
        let mut fb = Framebuffer::new(800, 600);
        menu.render(&mut fb);
        assert_eq!(fb.get_pixel(5, 5), Some(BACKGROUND));
        // Faces are painted in fixed order, so the far face ends up on top
        assert_eq!(fb.get_pixel(400, 350), Some(PLAYER_BLUE));
        // Only the near face reaches this far out
        assert_eq!(fb.get_pixel(400 - 70, 350), Some(PLAYER_RED));
    }
}
