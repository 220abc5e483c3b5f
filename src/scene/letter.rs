//! The invitation letter shown before the course list

use crate::present::{self, ScreenFit};
use crate::rasterizer::{Color, Framebuffer};
use crate::world::palette::{INK, PARCHMENT, WHITE};

const LINES: [&str; 8] = [
    "Dear Mario,",
    "",
    "Please come to the castle.",
    "I've baked a cake for you.",
    "",
    "Yours truly,",
    "Princess Toadstool",
    "  ~ Peach",
];

const PAPER_W: i32 = 450;
const PAPER_H: i32 = 400;
/// Ticks before the continue prompt appears
const PROMPT_DELAY: u32 = 60;

#[derive(Debug, Clone, Default)]
pub struct LetterScene {
    pub timer: u32,
}

impl LetterScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self) {
        self.timer += 1;
    }

    pub fn prompt_visible(&self) -> bool {
        self.timer > PROMPT_DELAY
    }

    fn paper_origin(width: usize, height: usize) -> (i32, i32) {
        ((width as i32 - PAPER_W) / 2, (height as i32 - PAPER_H) / 2)
    }

    pub fn render(&self, fb: &mut Framebuffer) {
        fb.clear(Color::new(20, 20, 20));
        let (x, y) = Self::paper_origin(fb.width, fb.height);
        fb.fill_rect(x, y, PAPER_W, PAPER_H, PARCHMENT);
        fb.stroke_rect(x, y, PAPER_W, PAPER_H, 4, INK);
    }

    pub fn draw_text(&self, fit: &ScreenFit, width: usize, height: usize) {
        let (_, top) = Self::paper_origin(width, height);
        let cx = width as f32 / 2.0;
        for (i, line) in LINES.iter().enumerate() {
            present::text_centered(fit, line, cx, (top + 50) as f32 + i as f32 * 40.0, 30.0, INK);
        }
        if self.prompt_visible() {
            present::text(
                fit,
                "Press SPACE to Continue",
                width as f32 - 280.0,
                height as f32 - 40.0,
                18.0,
                WHITE,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_after_delay() {
        let mut letter = LetterScene::new();
        for _ in 0..60 {
            letter.update();
        }
        assert!(!letter.prompt_visible());
        letter.update();
        assert!(letter.prompt_visible());
    }

    #[test]
    fn test_paper_centered() {
        let mut fb = Framebuffer::new(800, 600);
        LetterScene::new().render(&mut fb);
        assert_eq!(fb.get_pixel(400, 300), Some(PARCHMENT));
        assert_eq!(fb.get_pixel(175, 100), Some(INK));
        assert_eq!(fb.get_pixel(170, 300), Some(Color::new(20, 20, 20)));
    }
}
