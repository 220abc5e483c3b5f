//! Application state and scene management
//!
//! One scene is active at a time. The gameplay session outlives the
//! star-get overlay so the level keeps drawing behind it, and the star
//! total persists across courses until a game over.

use log::{debug, info, warn};
use crate::config::GameConfig;
use crate::game::{Gameplay, InputState, MenuInput};
use crate::present::ScreenFit;
use crate::rasterizer::Framebuffer;
use crate::scene::{hud, CourseSelect, LetterScene, MenuScene, StarGetScene};
use crate::world::COURSES;

/// The active screen
#[derive(Debug, Clone)]
pub enum Scene {
    Menu(MenuScene),
    Letter(LetterScene),
    CourseSelect(CourseSelect),
    Playing,
    StarGet(StarGetScene),
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::Menu(_) => "menu",
            Scene::Letter(_) => "letter",
            Scene::CourseSelect(_) => "course select",
            Scene::Playing => "playing",
            Scene::StarGet(_) => "star get",
        }
    }
}

pub struct AppState {
    pub scene: Scene,
    /// Live level, present while playing or celebrating a star
    pub game: Option<Gameplay>,
    /// Stars collected this session across all courses
    pub total_stars: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            scene: Scene::Menu(MenuScene::new()),
            game: None,
            total_stars: 0,
        }
    }

    fn switch(&mut self, next: Scene) {
        debug!("Scene {} -> {}", self.scene.name(), next.name());
        self.scene = next;
    }

    /// Build a course and start playing it. Returns false for a bad index.
    pub fn start_course(&mut self, index: usize, cfg: &GameConfig) -> bool {
        let Some(course) = COURSES.get(index) else {
            warn!("No course at index {}", index);
            return false;
        };
        self.game = Some(Gameplay::new(course.build(), cfg));
        self.switch(Scene::Playing);
        true
    }

    /// Advance the active scene by one fixed tick
    pub fn tick(&mut self, input: &InputState, keys: &MenuInput, cfg: &GameConfig) {
        match &mut self.scene {
            Scene::Menu(menu) => {
                menu.update();
                if keys.confirm {
                    self.switch(Scene::Letter(LetterScene::new()));
                }
            }
            Scene::Letter(letter) => {
                letter.update();
                if keys.confirm {
                    self.switch(Scene::CourseSelect(CourseSelect::new()));
                }
            }
            Scene::CourseSelect(select) => {
                if let Some(index) = select.handle(keys) {
                    self.start_course(index, cfg);
                } else if keys.back {
                    self.switch(Scene::Menu(MenuScene::new()));
                }
            }
            Scene::Playing => self.tick_playing(input, keys, cfg),
            Scene::StarGet(star) => {
                star.update();
                let done = keys.confirm && star.can_continue();
                if let Some(game) = &mut self.game {
                    game.animate(cfg);
                }
                if done {
                    self.switch(Scene::Playing);
                }
            }
        }
    }

    fn tick_playing(&mut self, input: &InputState, keys: &MenuInput, cfg: &GameConfig) {
        let Some(game) = &mut self.game else {
            warn!("Playing without a level, returning to course select");
            self.switch(Scene::CourseSelect(CourseSelect::new()));
            return;
        };

        let events = game.tick(input, cfg);
        if let Some(lives) = events.death {
            if lives == 0 {
                info!("Game over in {} with {} stars", game.level.name, self.total_stars);
                self.total_stars = 0;
                self.game = None;
                self.switch(Scene::Menu(MenuScene::new()));
                return;
            }
            info!("Fell out of {}, {} lives left", game.level.name, lives);
            game.respawn();
        }

        if events.star_collected {
            self.total_stars += 1;
            self.switch(Scene::StarGet(StarGetScene::new()));
        } else if keys.back {
            self.switch(Scene::CourseSelect(CourseSelect::new()));
        }
    }

    /// Paint the active scene into the framebuffer
    pub fn render(&self, fb: &mut Framebuffer, cfg: &GameConfig) {
        fb.resize(cfg.render.width, cfg.render.height);
        match &self.scene {
            Scene::Menu(menu) => menu.render(fb),
            Scene::Letter(letter) => letter.render(fb),
            Scene::CourseSelect(select) => select.render(fb),
            Scene::Playing | Scene::StarGet(_) => {
                if let Some(game) = &self.game {
                    game.render(fb, cfg);
                    hud::render_bar(fb);
                }
                if let Scene::StarGet(star) = &self.scene {
                    star.render(fb);
                }
            }
        }
    }

    /// Text drawn over the blitted frame
    pub fn draw_overlay(&self, fit: &ScreenFit, cfg: &GameConfig) {
        let (w, h) = (cfg.render.width, cfg.render.height);
        match &self.scene {
            Scene::Menu(menu) => menu.draw_text(fit, w as f32, h as f32),
            Scene::Letter(letter) => letter.draw_text(fit, w, h),
            Scene::CourseSelect(select) => select.draw_text(fit, w, h, self.total_stars),
            Scene::Playing | Scene::StarGet(_) => {
                if let Some(game) = &self.game {
                    hud::draw_text(fit, &game.player, &game.level.name, w, h);
                }
                if let Scene::StarGet(star) = &self.scene {
                    star.draw_text(fit, w, h, self.total_stars);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::Vec3;
    use crate::world::find_course;

    fn confirm() -> MenuInput {
        MenuInput { confirm: true, ..Default::default() }
    }

    fn back() -> MenuInput {
        MenuInput { back: true, ..Default::default() }
    }

    fn idle(app: &mut AppState, cfg: &GameConfig, ticks: u32) {
        for _ in 0..ticks {
            app.tick(&InputState::default(), &MenuInput::default(), cfg);
        }
    }

    #[test]
    fn test_menu_to_course() {
        let cfg = GameConfig::default();
        let mut app = AppState::new();
        app.tick(&InputState::default(), &confirm(), &cfg);
        assert!(matches!(app.scene, Scene::Letter(_)));
        app.tick(&InputState::default(), &confirm(), &cfg);
        assert!(matches!(app.scene, Scene::CourseSelect(_)));

        let down = MenuInput { down: true, ..Default::default() };
        app.tick(&InputState::default(), &down, &cfg);
        app.tick(&InputState::default(), &confirm(), &cfg);
        assert!(matches!(app.scene, Scene::Playing));
        let game = app.game.as_ref().map(|g| g.level.name.clone());
        assert_eq!(game.as_deref(), Some(COURSES[1].name));
    }

    #[test]
    fn test_back_keys() {
        let cfg = GameConfig::default();
        let mut app = AppState::new();
        app.scene = Scene::CourseSelect(CourseSelect::new());
        app.tick(&InputState::default(), &back(), &cfg);
        assert!(matches!(app.scene, Scene::Menu(_)));

        assert!(app.start_course(0, &cfg));
        app.tick(&InputState::default(), &back(), &cfg);
        assert!(matches!(app.scene, Scene::CourseSelect(_)));
        assert!(!app.start_course(COURSES.len(), &cfg));
    }

    #[test]
    fn test_death_respawns_then_game_over() {
        let cfg = GameConfig::default();
        let mut app = AppState::new();
        let rainbow = find_course("rainbow ride").unwrap();
        assert!(app.start_course(rainbow, &cfg));
        app.total_stars = 5;

        let spawn = app.game.as_ref().unwrap().level.spawn_position();
        // Far from every platform, below the death plane
        let off_course = Vec3::new(50_000.0, -1000.0, 50_000.0);
        app.game.as_mut().unwrap().player.position = off_course;
        idle(&mut app, &cfg, 1);
        assert!(matches!(app.scene, Scene::Playing));
        let game = app.game.as_ref().unwrap();
        assert_eq!(game.player.lives, 3);
        assert_eq!(game.player.position, spawn);

        app.game.as_mut().unwrap().player.lives = 1;
        app.game.as_mut().unwrap().player.position = off_course;
        idle(&mut app, &cfg, 1);
        assert!(matches!(app.scene, Scene::Menu(_)));
        assert!(app.game.is_none());
        assert_eq!(app.total_stars, 0);
    }

    #[test]
    fn test_star_get_waits_before_continue() {
        let cfg = GameConfig::default();
        let mut app = AppState::new();
        let bob_omb = find_course("Bob-omb Battlefield").unwrap();
        assert!(app.start_course(bob_omb, &cfg));
        let game = app.game.as_mut().unwrap();
        game.player.position = game.level.stars[0];
        idle(&mut app, &cfg, 1);
        assert!(matches!(app.scene, Scene::StarGet(_)));
        assert_eq!(app.total_stars, 1);

        let frozen = app.game.as_ref().unwrap().player.position;
        app.tick(&InputState::default(), &confirm(), &cfg);
        assert!(matches!(app.scene, Scene::StarGet(_)));
        idle(&mut app, &cfg, 60);
        assert_eq!(app.game.as_ref().unwrap().player.position, frozen);
        app.tick(&InputState::default(), &confirm(), &cfg);
        assert!(matches!(app.scene, Scene::Playing));
    }

    #[test]
    fn test_render_each_scene() {
        let cfg = GameConfig::default();
        let mut app = AppState::new();
        let mut fb = Framebuffer::new(1, 1);
        app.render(&mut fb, &cfg);
        assert_eq!((fb.width, fb.height), (800, 600));
        assert!(app.start_course(0, &cfg));
        app.render(&mut fb, &cfg);
        app.scene = Scene::StarGet(StarGetScene { timer: 100 });
        app.render(&mut fb, &cfg);
    }
}
