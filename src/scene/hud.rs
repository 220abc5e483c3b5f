//! In-level heads-up display

use crate::game::Player;
use crate::present::{self, ScreenFit};
use crate::rasterizer::{Color, Framebuffer};
use crate::world::palette::{OUTLINE_BLACK, PLAYER_RED, STAR_YELLOW, WHITE, YELLOW};

pub const BAR_HEIGHT: i32 = 45;

/// Translucent strip behind the counters
pub fn render_bar(fb: &mut Framebuffer) {
    let w = fb.width as i32;
    fb.blend_rect(0, 0, w, BAR_HEIGHT, Color::BLACK, 0.5);
    fb.fill_rect(0, BAR_HEIGHT - 1, w, 2, OUTLINE_BLACK);
}

pub fn draw_text(fit: &ScreenFit, player: &Player, level_name: &str, width: usize, height: usize) {
    present::text(fit, &player.stars.to_string(), 15.0, 2.0, 36.0, STAR_YELLOW);
    present::text(fit, &format!("Coins: {:03}", player.coins), 120.0, 14.0, 18.0, YELLOW);
    present::text(fit, &format!("Lives: {}", player.lives), 220.0, 14.0, 18.0, PLAYER_RED);
    present::text_right(fit, level_name, width as f32 - 15.0, 14.0, 18.0, WHITE);
    present::text_centered(
        fit,
        "WASD/ARROWS: Move | SPACE: Jump | Q/E: Camera | ESC: Level Select",
        width as f32 / 2.0,
        height as f32 - 22.0,
        16.0,
        WHITE,
    );
}
