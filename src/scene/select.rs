//! Course list with a scrolling cursor

use crate::game::MenuInput;
use crate::present::{self, ScreenFit};
use crate::rasterizer::{Color, Framebuffer};
use crate::world::palette::{STAR_YELLOW, WHITE, YELLOW};
use crate::world::COURSES;

/// Rows shown at once
pub const VISIBLE_ROWS: usize = 8;
const ROW_H: i32 = 52;
const LIST_TOP: i32 = 145;
const MARGIN: i32 = 60;

const BACKGROUND: Color = Color::new(20, 15, 40);
const HIGHLIGHT: Color = Color::new(50, 45, 80);
const DIM: Color = Color::new(200, 200, 200);
const LABEL: Color = Color::new(180, 180, 180);
const HINT: Color = Color::new(150, 150, 150);

#[derive(Debug, Clone, Default)]
pub struct CourseSelect {
    pub cursor: usize,
    /// Index of the first visible row
    pub scroll: usize,
}

impl CourseSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.follow_cursor();
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1).min(COURSES.len() - 1);
        self.follow_cursor();
    }

    fn follow_cursor(&mut self) {
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        }
        if self.cursor >= self.scroll + VISIBLE_ROWS {
            self.scroll = self.cursor + 1 - VISIBLE_ROWS;
        }
    }

    /// Apply navigation keys; returns the chosen course index on confirm
    pub fn handle(&mut self, keys: &MenuInput) -> Option<usize> {
        if keys.up {
            self.move_up();
        }
        if keys.down {
            self.move_down();
        }
        keys.confirm.then_some(self.cursor)
    }

    fn visible(&self) -> impl Iterator<Item = usize> {
        self.scroll..(self.scroll + VISIBLE_ROWS).min(COURSES.len())
    }

    fn row_y(&self, index: usize) -> i32 {
        LIST_TOP + (index - self.scroll) as i32 * ROW_H
    }

    pub fn render(&self, fb: &mut Framebuffer) {
        fb.clear(BACKGROUND);
        let row_w = fb.width as i32 - MARGIN * 2;
        for i in self.visible() {
            let y = self.row_y(i);
            if i == self.cursor {
                fb.fill_rect(MARGIN, y - 4, row_w, ROW_H - 4, HIGHLIGHT);
                fb.stroke_rect(MARGIN, y - 4, row_w, ROW_H - 4, 2, STAR_YELLOW);
            }
            fb.fill_rect(80, y + 4, 30, 30, COURSES[i].swatch);
            fb.stroke_rect(80, y + 4, 30, 30, 1, WHITE);
        }
    }

    pub fn draw_text(&self, fit: &ScreenFit, width: usize, height: usize, total_stars: u32) {
        let cx = width as f32 / 2.0;
        present::text_centered(fit, "SELECT COURSE", cx, 55.0, 55.0, STAR_YELLOW);
        present::text_centered(fit, &format!("Total Stars:  {}", total_stars), cx, 105.0, 28.0, YELLOW);

        for i in self.visible() {
            let y = self.row_y(i) as f32;
            let course = &COURSES[i];
            present::text(fit, course.label, 125.0, y + 2.0, 16.0, LABEL);
            let color = if i == self.cursor { WHITE } else { DIM };
            present::text(fit, course.name, 125.0, y + 18.0, 22.0, color);
        }

        let list_bottom = (LIST_TOP + VISIBLE_ROWS as i32 * ROW_H) as f32;
        if self.scroll > 0 {
            present::text_centered(fit, "^", cx, LIST_TOP as f32 - 15.0, 28.0, WHITE);
        }
        if self.scroll + VISIBLE_ROWS < COURSES.len() {
            present::text_centered(fit, "v", cx, list_bottom + 5.0, 28.0, WHITE);
        }
        present::text_centered(
            fit,
            "UP/DOWN: Navigate | SPACE/ENTER: Select | ESC: Back to Menu",
            cx,
            height as f32 - 20.0,
            16.0,
            HINT,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_down() -> MenuInput {
        MenuInput { down: true, ..Default::default() }
    }

    #[test]
    fn test_cursor_clamps_at_ends() {
        let mut select = CourseSelect::new();
        select.move_up();
        assert_eq!(select.cursor, 0);
        for _ in 0..40 {
            select.move_down();
        }
        assert_eq!(select.cursor, COURSES.len() - 1);
        assert_eq!(select.scroll, COURSES.len() - VISIBLE_ROWS);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut select = CourseSelect::new();
        for _ in 0..10 {
            select.handle(&press_down());
        }
        assert_eq!(select.cursor, 10);
        assert_eq!(select.scroll, 3);
        for _ in 0..5 {
            select.move_up();
        }
        assert_eq!(select.cursor, 5);
        assert_eq!(select.scroll, 3);
        for _ in 0..3 {
            select.move_up();
        }
        assert_eq!(select.cursor, 2);
        assert_eq!(select.scroll, 2);
    }

    #[test]
    fn test_confirm_returns_cursor() {
        let mut select = CourseSelect::new();
        assert_eq!(select.handle(&press_down()), None);
        let confirm = MenuInput { confirm: true, ..Default::default() };
        assert_eq!(select.handle(&confirm), Some(1));
    }

    #[test]
    fn test_highlight_on_cursor_row() {
        let mut select = CourseSelect::new();
        select.move_down();
        let mut fb = Framebuffer::new(800, 600);
        select.render(&mut fb);
        // Row 1 highlight, row 0 plain
        assert_eq!(fb.get_pixel(400, (LIST_TOP + ROW_H + 10) as usize), Some(HIGHLIGHT));
        assert_eq!(fb.get_pixel(400, (LIST_TOP + 10) as usize), Some(BACKGROUND));
        assert_eq!(fb.get_pixel(95, (LIST_TOP + 20) as usize), Some(COURSES[0].swatch));
    }
}
