//! Presenting the framebuffer
//!
//! The framebuffer is uploaded as a nearest-filtered texture and scaled to
//! the window with its aspect ratio kept. Text is drawn on top with
//! macroquad, positioned in framebuffer coordinates through `ScreenFit`.

use macroquad::prelude::{
    draw_text, draw_texture_ex, measure_text, screen_height, screen_width, DrawTextureParams,
    FilterMode, Texture2D, Vec2,
};
use crate::rasterizer::{Color, Framebuffer};

/// Placement of the framebuffer inside the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenFit {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl ScreenFit {
    /// Largest aspect-preserving fit, centered
    pub fn new(screen_w: f32, screen_h: f32, fb_w: usize, fb_h: usize) -> Self {
        let (fw, fh) = (fb_w.max(1) as f32, fb_h.max(1) as f32);
        let scale = (screen_w / fw).min(screen_h / fh);
        Self {
            x: (screen_w - fw * scale) / 2.0,
            y: (screen_h - fh * scale) / 2.0,
            scale,
        }
    }

    /// Framebuffer coordinates to window coordinates
    pub fn to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x + x * self.scale, self.y + y * self.scale)
    }

    fn font_px(&self, size: f32) -> u16 {
        (size * self.scale).round().clamp(1.0, u16::MAX as f32) as u16
    }
}

pub fn to_mq(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// Draw the framebuffer scaled into the window
pub fn blit(fb: &Framebuffer) -> ScreenFit {
    let fit = ScreenFit::new(screen_width(), screen_height(), fb.width, fb.height);
    let texture = Texture2D::from_rgba8(fb.width as u16, fb.height as u16, &fb.pixels);
    texture.set_filter(FilterMode::Nearest);

    draw_texture_ex(
        &texture,
        fit.x,
        fit.y,
        macroquad::color::WHITE,
        DrawTextureParams {
            dest_size: Some(Vec2::new(fb.width as f32 * fit.scale, fb.height as f32 * fit.scale)),
            ..Default::default()
        },
    );
    fit
}

/// Text width in framebuffer units
pub fn text_width(fit: &ScreenFit, text: &str, size: f32) -> f32 {
    measure_text(text, None, fit.font_px(size), 1.0).width / fit.scale
}

/// Draw text with its top-left corner at (x, y) in framebuffer coordinates
pub fn text(fit: &ScreenFit, text: &str, x: f32, y: f32, size: f32, color: Color) {
    let px = fit.font_px(size);
    let dims = measure_text(text, None, px, 1.0);
    let (sx, sy) = fit.to_screen(x, y);
    draw_text(text, sx, sy + dims.offset_y, px as f32, to_mq(color));
}

/// Draw text centered on (cx, cy) in framebuffer coordinates
pub fn text_centered(fit: &ScreenFit, s: &str, cx: f32, cy: f32, size: f32, color: Color) {
    let px = fit.font_px(size);
    let dims = measure_text(s, None, px, 1.0);
    let (sx, sy) = fit.to_screen(cx, cy);
    draw_text(s, sx - dims.width / 2.0, sy - dims.height / 2.0 + dims.offset_y, px as f32, to_mq(color));
}

/// Draw text whose right edge sits at `right`
pub fn text_right(fit: &ScreenFit, s: &str, right: f32, y: f32, size: f32, color: Color) {
    let w = text_width(fit, s, size);
    text(fit, s, right - w, y, size, color);
}
