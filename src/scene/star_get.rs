//! Star celebration drawn over the frozen level

use crate::present::{self, ScreenFit};
use crate::rasterizer::{Color, Framebuffer};
use crate::world::palette::{STAR_YELLOW, WHITE, YELLOW};

const MAX_ALPHA: u32 = 180;
/// Ticks before the spinning star shows up
const STAR_DELAY: u32 = 20;
const CONTINUE_DELAY: u32 = 60;
const PROMPT_DELAY: u32 = 120;

#[derive(Debug, Clone, Default)]
pub struct StarGetScene {
    pub timer: u32,
}

impl StarGetScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self) {
        self.timer += 1;
    }

    pub fn can_continue(&self) -> bool {
        self.timer > CONTINUE_DELAY
    }

    pub fn prompt_visible(&self) -> bool {
        self.timer > PROMPT_DELAY
    }

    /// Darkening overlay alpha, ramping up to 180
    pub fn overlay_alpha(&self) -> u8 {
        self.timer.saturating_mul(4).min(MAX_ALPHA) as u8
    }

    fn bob(&self) -> f32 {
        (self.timer as f32 * 0.1).sin() * 5.0
    }

    fn star_size(&self) -> f32 {
        (self.timer.saturating_sub(STAR_DELAY)).min(30) as f32
    }

    /// Centres and radius of the five spinning star points
    pub fn dot_positions(&self, width: usize, height: usize) -> (Vec<(i32, i32)>, i32) {
        if self.timer <= STAR_DELAY {
            return (Vec::new(), 0);
        }
        let size = self.star_size();
        let cx = width as f32 / 2.0;
        let cy = height as f32 / 2.0 - 30.0 + self.bob();
        let ring = size * 2.0 + 20.0;
        let spin = self.timer as f32 * 2.0;
        let dots = (0..5)
            .map(|i| {
                let angle = (i as f32 * 72.0 + spin).to_radians();
                ((cx + angle.cos() * ring) as i32, (cy + angle.sin() * ring) as i32)
            })
            .collect();
        (dots, ((size / 3.0) as i32).max(3))
    }

    pub fn render(&self, fb: &mut Framebuffer) {
        let alpha = self.overlay_alpha() as f32 / 255.0;
        fb.blend_rect(0, 0, fb.width as i32, fb.height as i32, Color::BLACK, alpha);
        let (dots, radius) = self.dot_positions(fb.width, fb.height);
        for (x, y) in dots {
            fb.draw_circle(x, y, radius, STAR_YELLOW);
        }
    }

    pub fn draw_text(&self, fit: &ScreenFit, width: usize, height: usize, total_stars: u32) {
        if self.timer <= STAR_DELAY {
            return;
        }
        let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
        present::text_centered(fit, "STAR GET!", cx, cy - 30.0, 36.0, STAR_YELLOW);
        present::text_centered(fit, &format!("Total: {}", total_stars), cx, cy + 30.0, 28.0, YELLOW);
        if self.prompt_visible() {
            present::text_centered(fit, "Press SPACE to continue", cx, cy + 80.0, 20.0, WHITE);
        }
    }
}
