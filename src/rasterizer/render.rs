//! Software framebuffer and 2D primitives
//! Flat filled polygons with outlines, no depth buffer

use std::path::Path;
use super::types::Color;

/// Framebuffer for software rendering
pub struct Framebuffer {
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        if self.width != width || self.height != height {
            *self = Self::new(width, height);
        }
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            let p = &self.pixels[idx..idx + 4];
            Some(Color::with_alpha(p[0], p[1], p[2], p[3]))
        } else {
            None
        }
    }

    /// Fill a horizontal span, clipped to the framebuffer
    fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Color) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let start = x0.max(0);
        let end = x1.min(self.width as i32 - 1);
        if start > end {
            return;
        }
        let bytes = color.to_bytes();
        let row = y as usize * self.width;
        for x in start as usize..=end as usize {
            let idx = (row + x) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(&bytes);
        }
    }

    /// Fill a polygon with the even-odd rule, sampling at pixel centers
    pub fn fill_polygon(&mut self, points: &[(i32, i32)], color: Color) {
        if points.len() < 3 {
            return;
        }

        let min_y = points.iter().map(|p| p.1).min().unwrap_or(0).max(0);
        let max_y = points
            .iter()
            .map(|p| p.1)
            .max()
            .unwrap_or(0)
            .min(self.height as i32 - 1);

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
        for y in min_y..=max_y {
            let sample_y = y as f32 + 0.5;
            crossings.clear();

            for i in 0..points.len() {
                let (x0, y0) = points[i];
                let (x1, y1) = points[(i + 1) % points.len()];
                let (fy0, fy1) = (y0 as f32, y1 as f32);
                if (fy0 <= sample_y && sample_y < fy1) || (fy1 <= sample_y && sample_y < fy0) {
                    let t = (sample_y - fy0) / (fy1 - fy0);
                    crossings.push(x0 as f32 + (x1 - x0) as f32 * t);
                }
            }

            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                let x_start = (pair[0] - 0.5).ceil() as i32;
                let x_end = (pair[1] - 0.5).floor() as i32;
                self.fill_span(y, x_start, x_end, color);
            }
        }
    }

    /// Stroke a closed polygon outline one pixel wide
    pub fn stroke_polygon(&mut self, points: &[(i32, i32)], color: Color) {
        for i in 0..points.len() {
            let (x0, y0) = points[i];
            let (x1, y1) = points[(i + 1) % points.len()];
            self.draw_line(x0, y0, x1, y1, color);
        }
    }

    /// Draw a filled circle at (cx, cy) with given radius and color
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        let r_sq = radius * radius;
        for y in (cy - radius).max(0)..=(cy + radius).min(self.height as i32 - 1) {
            for x in (cx - radius).max(0)..=(cx + radius).min(self.width as i32 - 1) {
                let dx = x - cx;
                let dy = y - cy;
                if dx * dx + dy * dy <= r_sq {
                    self.set_pixel(x as usize, y as usize, color);
                }
            }
        }
    }

    /// Draw a line from (x0, y0) to (x1, y1) using Bresenham's algorithm.
    /// The segment is clipped to the framebuffer first, so far off-screen
    /// endpoints cost nothing.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip_line(x0, y0, x1, y1) else {
            return;
        };

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
                self.set_pixel(x as usize, y as usize, color);
            }

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Liang-Barsky clip against the framebuffer rectangle
    fn clip_line(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Option<(i32, i32, i32, i32)> {
        let (fx0, fy0) = (x0 as f32, y0 as f32);
        let dx = (x1 - x0) as f32;
        let dy = (y1 - y0) as f32;
        let max_x = self.width as f32 - 1.0;
        let max_y = self.height as f32 - 1.0;

        let mut t0 = 0.0f32;
        let mut t1 = 1.0f32;
        let edges = [
            (-dx, fx0),
            (dx, max_x - fx0),
            (-dy, fy0),
            (dy, max_y - fy0),
        ];
        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    if r > t1 {
                        return None;
                    }
                    t0 = t0.max(r);
                } else {
                    if r < t0 {
                        return None;
                    }
                    t1 = t1.min(r);
                }
            }
        }

        Some((
            (fx0 + dx * t0).round() as i32,
            (fy0 + dy * t0).round() as i32,
            (fx0 + dx * t1).round() as i32,
            (fy0 + dy * t1).round() as i32,
        ))
    }

    /// Fill an axis-aligned rectangle, clipped to the framebuffer
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        for py in y..y + h {
            self.fill_span(py, x, x + w - 1, color);
        }
    }

    /// Rectangle border `thickness` pixels wide, drawn inside the bounds
    pub fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, thickness: i32, color: Color) {
        let t = thickness.min(w / 2).min(h / 2).max(1);
        self.fill_rect(x, y, w, t, color);
        self.fill_rect(x, y + h - t, w, t, color);
        self.fill_rect(x, y + t, t, h - 2 * t, color);
        self.fill_rect(x + w - t, y + t, t, h - 2 * t, color);
    }

    /// Blend a rectangle towards `color` by factor `t` (0.0-1.0)
    pub fn blend_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, t: f32) {
        for py in y.max(0)..(y + h).min(self.height as i32) {
            for px in x.max(0)..(x + w).min(self.width as i32) {
                if let Some(current) = self.get_pixel(px as usize, py as usize) {
                    self.set_pixel(px as usize, py as usize, current.lerp(color, t));
                }
            }
        }
    }

    /// Write the framebuffer to a PNG file
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.pixels,
            self.width as u32,
            self.height as u32,
            image::ColorType::Rgba8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0);

    #[test]
    fn test_fill_square() {
        let mut fb = Framebuffer::new(20, 20);
        fb.clear(Color::BLACK);
        fb.fill_polygon(&[(2, 2), (10, 2), (10, 10), (2, 10)], RED);
        assert_eq!(fb.get_pixel(5, 5), Some(RED));
        assert_eq!(fb.get_pixel(2, 2), Some(RED));
        assert_eq!(fb.get_pixel(12, 5), Some(Color::BLACK));
        assert_eq!(fb.get_pixel(5, 12), Some(Color::BLACK));
    }

    #[test]
    fn test_fill_clips_offscreen_polygon() {
        let mut fb = Framebuffer::new(10, 10);
        fb.clear(Color::BLACK);
        fb.fill_polygon(&[(-100, -100), (100, -100), (100, 100), (-100, 100)], RED);
        assert!(fb.pixels.chunks_exact(4).all(|p| p == RED.to_bytes()));
    }

    #[test]
    fn test_later_polygon_overwrites() {
        let mut fb = Framebuffer::new(10, 10);
        fb.clear(Color::BLACK);
        fb.fill_polygon(&[(0, 0), (9, 0), (9, 9), (0, 9)], RED);
        fb.fill_polygon(&[(0, 0), (9, 0), (9, 9), (0, 9)], Color::WHITE);
        assert_eq!(fb.get_pixel(4, 4), Some(Color::WHITE));
    }

    #[test]
    fn test_line_clipped_to_screen() {
        let mut fb = Framebuffer::new(10, 10);
        fb.clear(Color::BLACK);
        fb.draw_line(-1000, 5, 1000, 5, RED);
        for x in 0..10 {
            assert_eq!(fb.get_pixel(x, 5), Some(RED));
        }
        assert_eq!(fb.get_pixel(0, 4), Some(Color::BLACK));
    }

    #[test]
    fn test_line_fully_outside_is_skipped() {
        let mut fb = Framebuffer::new(10, 10);
        fb.clear(Color::BLACK);
        fb.draw_line(-50, -50, -10, 500, RED);
        assert!(fb.pixels.chunks_exact(4).all(|p| p == Color::BLACK.to_bytes()));
    }

    #[test]
    fn test_stroke_rect_leaves_inside() {
        let mut fb = Framebuffer::new(10, 10);
        fb.clear(Color::BLACK);
        fb.stroke_rect(1, 1, 8, 8, 2, RED);
        assert_eq!(fb.get_pixel(1, 1), Some(RED));
        assert_eq!(fb.get_pixel(2, 5), Some(RED));
        assert_eq!(fb.get_pixel(8, 8), Some(RED));
        assert_eq!(fb.get_pixel(3, 3), Some(Color::BLACK));
        assert_eq!(fb.get_pixel(0, 0), Some(Color::BLACK));
        assert_eq!(fb.get_pixel(9, 9), Some(Color::BLACK));
    }

    #[test]
    fn test_blend_rect_towards_black() {
        let mut fb = Framebuffer::new(4, 4);
        fb.clear(Color::new(200, 100, 50));
        fb.blend_rect(0, 0, 4, 4, Color::BLACK, 0.5);
        assert_eq!(fb.get_pixel(3, 3), Some(Color::new(100, 50, 25)));
    }
}
