//! One level in play: the level data, its live collectibles, the player
//! and the camera. Advanced by fixed ticks and rendered into a framebuffer.

use log::{debug, info};
use crate::config::GameConfig;
use crate::rasterizer::{Framebuffer, RenderList};
use crate::world::Level;
use super::camera::ChaseCamera;
use super::collectible::{Coin, Collectible, Star};
use super::input::InputState;
use super::player::Player;

/// What happened during one tick. Each event fires at most once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickEvents {
    pub star_collected: bool,
    pub coin_collected: bool,
    /// Lives remaining after a fall through the death plane
    pub death: Option<u32>,
}

pub struct Gameplay {
    pub level: Level,
    pub stars: Vec<Star>,
    pub coins: Vec<Coin>,
    pub player: Player,
    pub camera: ChaseCamera,
}

impl Gameplay {
    /// Enter a level with a fresh player on its spawn point
    pub fn new(level: Level, cfg: &GameConfig) -> Self {
        info!(
            "Entering {}: {} faces, {} collision boxes, {} stars, {} coins",
            level.name,
            level.mesh.faces.len(),
            level.terrain.boxes.len(),
            level.stars.len(),
            level.coins.len()
        );
        let player = Player::new(level.spawn_position(), cfg.physics.starting_lives);
        Self {
            stars: level.stars.iter().copied().map(Star::new).collect(),
            coins: level.coins.iter().copied().map(Coin::new).collect(),
            player,
            camera: ChaseCamera::new(),
            level,
        }
    }

    /// Physics, camera, pickups, then collectible animation
    pub fn tick(&mut self, input: &InputState, cfg: &GameConfig) -> TickEvents {
        let mut events = TickEvents {
            death: self.player.update(input, self.camera.yaw, &self.level.terrain, &cfg.physics),
            ..Default::default()
        };
        self.camera.update(input, self.player.position, &cfg.camera);

        for star in &mut self.stars {
            if star.check(&mut self.player, &cfg.collectibles) {
                info!("Star collected in {} ({} total)", self.level.name, self.player.stars);
                events.star_collected = true;
            }
        }
        for coin in &mut self.coins {
            if coin.check(&mut self.player, &cfg.collectibles) {
                debug!("Coin collected ({})", self.player.coins);
                events.coin_collected = true;
            }
        }

        self.animate(cfg);
        events
    }

    /// Advance collectible animation only. Used while the world is frozen.
    pub fn animate(&mut self, cfg: &GameConfig) {
        for star in &mut self.stars {
            star.update(&cfg.collectibles);
        }
        for coin in &mut self.coins {
            coin.update(&cfg.collectibles);
        }
    }

    pub fn respawn(&mut self) {
        self.player.respawn(self.level.spawn);
    }

    /// Project and sort every visible face for the current camera
    pub fn build_frame(&self, cfg: &GameConfig) -> RenderList {
        let pose = self.camera.pose();
        let render = &cfg.render;
        let mut list = RenderList::new();
        list.push_mesh(&self.level.mesh, &pose, render);
        for star in self.stars.iter().filter(|s| !s.is_collected()) {
            list.push_mesh(&star.mesh(&cfg.collectibles), &pose, render);
        }
        for coin in self.coins.iter().filter(|c| !c.is_collected()) {
            list.push_mesh(&coin.mesh(&cfg.collectibles), &pose, render);
        }
        list.push_mesh(&self.player.mesh(&cfg.physics), &pose, render);
        list.sort();
        list
    }

    /// Clear to the sky color and paint the frame
    pub fn render(&self, fb: &mut Framebuffer, cfg: &GameConfig) {
        fb.resize(cfg.render.width, cfg.render.height);
        fb.clear(self.level.sky);
        self.build_frame(cfg).paint(fb, &cfg.render);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::{Color, Vec3};
    use crate::world::LevelBuilder;

    const SKY: Color = Color::new(10, 20, 30);
    const WALL: Color = Color::new(200, 0, 0);

    fn level_with(build: impl FnOnce(&mut LevelBuilder)) -> Level {
        let mut b = LevelBuilder::new("Test", SKY, (0.0, 0.0));
        build(&mut b);
        b.build()
    }

    #[test]
    fn test_enters_at_spawn() {
        let cfg = GameConfig::default();
        let mut b = LevelBuilder::new("Spawn", SKY, (120.0, -40.0));
        b.star([0.0, 100.0, 0.0]);
        let game = Gameplay::new(b.build(), &cfg);
        assert_eq!(game.player.position, Vec3::new(120.0, 0.0, -40.0));
        assert_eq!(game.player.lives, 4);
        assert_eq!(game.camera.position, Vec3::ZERO);
        assert_eq!(game.stars.len(), 1);
    }

    #[test]
    fn test_pickups_report_once() {
        let cfg = GameConfig::default();
        let level = level_with(|b| {
            b.star([0.0, 30.0, 0.0]);
            b.coin([0.0, 10.0, 0.0]);
            b.coin([10.0, 10.0, 0.0]);
        });
        let mut game = Gameplay::new(level, &cfg);
        let first = game.tick(&InputState::default(), &cfg);
        assert!(first.star_collected);
        assert!(first.coin_collected);
        assert_eq!(first.death, None);
        assert_eq!(game.player.stars, 1);
        assert_eq!(game.player.coins, 2);

        let second = game.tick(&InputState::default(), &cfg);
        assert_eq!(second, TickEvents::default());
    }

    #[test]
    fn test_death_on_void_level() {
        let cfg = GameConfig::default();
        let level = LevelBuilder::new("Void", SKY, (0.0, 0.0)).void().build();
        let mut game = Gameplay::new(level, &cfg);
        let deaths: Vec<u32> = (0..100)
            .filter_map(|_| game.tick(&InputState::default(), &cfg).death)
            .collect();
        assert_eq!(deaths, vec![3]);

        game.respawn();
        assert_eq!(game.player.position, Vec3::ZERO);
        assert!(!game.player.is_dead());
    }

    #[test]
    fn test_render_paints_sky_and_geometry() {
        let cfg = GameConfig::default();
        let mut b = LevelBuilder::new("Wall", SKY, (0.0, -1000.0));
        b.scenery([0.0, 0.0, 500.0], [200.0, 200.0, 10.0], WALL);
        let game = Gameplay::new(b.build(), &cfg);

        let mut fb = Framebuffer::new(1, 1);
        game.render(&mut fb, &cfg);
        assert_eq!((fb.width, fb.height), (800, 600));
        assert_eq!(fb.get_pixel(400, 300), Some(WALL));
        assert_eq!(fb.get_pixel(5, 5), Some(SKY));
    }

    #[test]
    fn test_collected_items_leave_the_frame() {
        let cfg = GameConfig::default();
        let level = level_with(|b| b.star([0.0, 30.0, 600.0]));
        let mut game = Gameplay::new(level, &cfg);
        // Camera at the origin facing +z; the player straddles the near plane
        let before = game.build_frame(&cfg).len();
        assert!(before >= 8);

        game.player.position = Vec3::new(0.0, 30.0, 600.0);
        let collected = game.tick(&InputState::default(), &cfg);
        assert!(collected.star_collected);
        game.camera = ChaseCamera::new();
        game.player.position = Vec3::ZERO;
        assert_eq!(game.build_frame(&cfg).len(), before - 8);
    }
}
