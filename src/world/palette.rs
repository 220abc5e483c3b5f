//! Named colors shared by levels, actors and menus

use crate::rasterizer::Color;

pub const SKY_BLUE: Color = Color::new(100, 149, 237);
pub const GRASS_GREEN: Color = Color::new(50, 160, 60);
pub const DARK_GREEN: Color = Color::new(30, 120, 30);
pub const STONE_GRAY: Color = Color::new(220, 220, 220);
pub const DARK_GRAY: Color = Color::new(140, 140, 140);
pub const ROOF_RED: Color = Color::new(180, 40, 40);
pub const MOAT_BLUE: Color = Color::new(40, 100, 200);
pub const OUTLINE_BLACK: Color = Color::new(20, 20, 20);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const YELLOW: Color = Color::new(255, 230, 0);
pub const PLAYER_RED: Color = Color::new(255, 0, 0);
pub const PLAYER_BLUE: Color = Color::new(0, 70, 180);
pub const WOOD_BROWN: Color = Color::new(140, 100, 60);
pub const PARCHMENT: Color = Color::new(250, 240, 200);
pub const INK: Color = Color::new(50, 40, 100);
pub const TRUNK_BROWN: Color = Color::new(120, 80, 40);
pub const TREE_GREEN: Color = Color::new(40, 140, 40);
pub const STONE_PATH: Color = Color::new(200, 200, 200);
pub const SAND_YELLOW: Color = Color::new(210, 180, 100);
pub const LAVA_RED: Color = Color::new(220, 60, 20);
pub const LAVA_ORANGE: Color = Color::new(255, 120, 30);
pub const SNOW_WHITE: Color = Color::new(240, 245, 255);
pub const ICE_BLUE: Color = Color::new(180, 210, 240);
pub const WATER_BLUE: Color = Color::new(50, 120, 210);
pub const DEEP_WATER: Color = Color::new(20, 60, 150);
pub const PURPLE: Color = Color::new(120, 40, 160);
pub const BRICK_RED: Color = Color::new(160, 60, 50);
pub const DARK_BROWN: Color = Color::new(80, 50, 25);
pub const CAVE_BROWN: Color = Color::new(100, 80, 55);
pub const CAVE_DARK: Color = Color::new(70, 55, 40);
pub const METAL_GRAY: Color = Color::new(170, 175, 180);
pub const GOLD: Color = Color::new(230, 190, 40);
pub const CLOCK_BEIGE: Color = Color::new(220, 200, 160);
pub const RAINBOW_PINK: Color = Color::new(255, 150, 200);
pub const RAINBOW_CYAN: Color = Color::new(100, 240, 255);
pub const RAINBOW_LIME: Color = Color::new(150, 255, 100);
pub const MANSION_PURPLE: Color = Color::new(90, 70, 110);
pub const MANSION_GREEN: Color = Color::new(60, 90, 60);
pub const DOCK_BLUE: Color = Color::new(30, 80, 160);
pub const FENCE_BROWN: Color = Color::new(110, 75, 40);
pub const VOLCANO_GRAY: Color = Color::new(90, 80, 75);
pub const VOLCANO_RED: Color = Color::new(170, 50, 30);
pub const PYRAMID_TAN: Color = Color::new(200, 170, 110);
pub const PYRAMID_DARK: Color = Color::new(160, 130, 80);
pub const CHAIN_GRAY: Color = Color::new(80, 80, 80);
pub const CANNON_BLACK: Color = Color::new(40, 40, 40);
pub const SKY_CAVE: Color = Color::new(40, 35, 30);
pub const SKY_LAVA: Color = Color::new(60, 20, 10);
pub const SKY_SNOW: Color = Color::new(180, 200, 230);
pub const SKY_RAINBOW: Color = Color::new(140, 160, 255);
pub const SKY_UNDERWATER: Color = Color::new(20, 50, 100);
pub const SKY_DESERT: Color = Color::new(220, 180, 120);
pub const SKY_MANSION: Color = Color::new(30, 20, 40);
pub const STAR_YELLOW: Color = Color::new(255, 255, 100);
