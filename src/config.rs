//! Tunable settings and their RON persistence

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::rasterizer::RenderConfig;

/// Error type for config operations
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Serialize(ron::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Player movement constants (units per tick)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub ground_accel: f32,
    pub air_accel: f32,
    pub max_speed: f32,
    /// Horizontal velocity multiplier applied each grounded tick
    pub friction: f32,
    pub gravity: f32,
    /// Most negative vertical velocity
    pub terminal_velocity: f32,
    pub jump_impulse: f32,
    /// Fraction of the heading error closed per tick
    pub turn_factor: f32,
    pub floor_tolerance: f32,
    /// Falling below this height kills the player
    pub death_plane: f32,
    /// Half-width of the player body; height is twice this
    pub body_size: f32,
    pub starting_lives: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            ground_accel: 1.2,
            air_accel: 0.4,
            max_speed: 22.0,
            friction: 0.82,
            gravity: 1.3,
            terminal_velocity: -45.0,
            jump_impulse: 24.0,
            turn_factor: 0.25,
            floor_tolerance: 5.0,
            death_plane: -500.0,
            body_size: 25.0,
            starting_lives: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Horizontal distance behind the player
    pub distance: f32,
    /// Height above the player
    pub height: f32,
    /// Fraction of the gap to the target closed per tick
    pub follow: f32,
    /// Yaw change per tick while a camera key is held (radians)
    pub rotate_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 700.0,
            height: 350.0,
            follow: 0.08,
            rotate_speed: 0.04,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectibleConfig {
    pub star_radius: f32,
    pub coin_radius: f32,
    pub star_bob_rate: f32,
    pub star_bob_height: f32,
    pub star_size: f32,
    pub coin_spin_rate: f32,
    pub coin_size: f32,
}

impl Default for CollectibleConfig {
    fn default() -> Self {
        Self {
            star_radius: 60.0,
            coin_radius: 45.0,
            star_bob_rate: 0.06,
            star_bob_height: 10.0,
            star_size: 15.0,
            coin_spin_rate: 0.08,
            coin_size: 8.0,
        }
    }
}

/// Everything tunable, passed by reference to the systems that need it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Upper bound on catch-up ticks after a slow frame
    pub max_ticks_per_frame: u32,
    pub render: RenderConfig,
    pub physics: PhysicsConfig,
    pub camera: CameraConfig,
    pub collectibles: CollectibleConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            max_ticks_per_frame: 5,
            render: RenderConfig::default(),
            physics: PhysicsConfig::default(),
            camera: CameraConfig::default(),
            collectibles: CollectibleConfig::default(),
        }
    }
}

impl GameConfig {
    /// Seconds per simulation tick
    pub fn tick_seconds(&self) -> f64 {
        1.0 / self.tick_rate.max(1) as f64
    }
}

/// Load a config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

/// Parse a config from a RON string; missing fields take their defaults
pub fn load_config_from_str(s: &str) -> Result<GameConfig, ConfigError> {
    Ok(ron::from_str(s)?)
}

/// Save a config to a RON file
pub fn save_config<P: AsRef<Path>>(config: &GameConfig, path: P) -> Result<(), ConfigError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, contents)?;
    Ok(())
}
