//! The fixed course list
//!
//! Sixteen hand-built levels in menu order. Each entry pairs the name shown
//! in the course list with a label, a swatch color and its builder.

use std::f32::consts::TAU;
use crate::rasterizer::Color;
use super::level::{Level, LevelBuilder};
use super::palette::*;

/// One selectable course
pub struct Course {
    /// Name shown in the course list
    pub name: &'static str,
    /// "Course N" or "(Hub World)"
    pub label: &'static str,
    pub swatch: Color,
    builder: fn() -> Level,
}

impl Course {
    /// Build a fresh copy of the level
    pub fn build(&self) -> Level {
        (self.builder)()
    }
}

const fn course(name: &'static str, label: &'static str, swatch: Color, builder: fn() -> Level) -> Course {
    Course { name, label, swatch, builder }
}

pub static COURSES: [Course; 16] = [
    course("Castle Grounds", "(Hub World)", STONE_GRAY, castle_grounds),
    course("Bob-omb Battlefield", "Course 1", GRASS_GREEN, bob_omb_battlefield),
    course("Whomp's Fortress", "Course 2", STONE_GRAY, whomps_fortress),
    course("Jolly Roger Bay", "Course 3", WATER_BLUE, jolly_roger_bay),
    course("Cool, Cool Mountain", "Course 4", SNOW_WHITE, cool_cool_mountain),
    course("Big Boo's Haunt", "Course 5", MANSION_PURPLE, big_boos_haunt),
    course("Hazy Maze Cave", "Course 6", CAVE_BROWN, hazy_maze_cave),
    course("Lethal Lava Land", "Course 7", LAVA_RED, lethal_lava_land),
    course("Shifting Sand Land", "Course 8", SAND_YELLOW, shifting_sand_land),
    course("Dire, Dire Docks", "Course 9", DOCK_BLUE, dire_dire_docks),
    course("Snowman's Land", "Course 10", SNOW_WHITE, snowmans_land),
    course("Wet-Dry World", "Course 11", WATER_BLUE, wet_dry_world),
    course("Tall, Tall Mountain", "Course 12", DARK_GREEN, tall_tall_mountain),
    course("Tiny-Huge Island", "Course 13", GRASS_GREEN, tiny_huge_island),
    course("Tick Tock Clock", "Course 14", CLOCK_BEIGE, tick_tock_clock),
    course("Rainbow Ride", "Course 15", RAINBOW_PINK, rainbow_ride),
];

/// Case-insensitive lookup by list name
pub fn find_course(name: &str) -> Option<usize> {
    let wanted = name.trim();
    COURSES.iter().position(|c| c.name.eq_ignore_ascii_case(wanted))
}

fn castle_grounds() -> Level {
    let mut b = LevelBuilder::new("Peach's Castle", SKY_BLUE, (0.0, -720.0));
    b.scenery([0.0, 0.0, 0.0], [2000.0, 10.0, 2000.0], GRASS_GREEN);
    b.scenery([0.0, 5.0, 150.0], [180.0, 10.0, 900.0], STONE_PATH);
    b.scenery([-1000.0, 100.0, 0.0], [40.0, 200.0, 2000.0], STONE_GRAY);
    b.scenery([1000.0, 100.0, 0.0], [40.0, 200.0, 2000.0], STONE_GRAY);
    b.scenery([0.0, 100.0, 1000.0], [2000.0, 200.0, 40.0], STONE_GRAY);
    b.scenery([0.0, 150.0, 750.0], [550.0, 300.0, 450.0], STONE_GRAY);
    b.scenery([0.0, 350.0, 750.0], [160.0, 220.0, 160.0], STONE_GRAY);
    b.roof([0.0, 470.0, 750.0], [200.0, 160.0, 200.0], ROOF_RED);
    b.scenery([-240.0, 200.0, 750.0], [110.0, 350.0, 110.0], STONE_GRAY);
    b.roof([-240.0, 420.0, 750.0], [130.0, 110.0, 130.0], ROOF_RED);
    b.scenery([240.0, 200.0, 750.0], [110.0, 350.0, 110.0], STONE_GRAY);
    b.roof([240.0, 420.0, 750.0], [130.0, 110.0, 130.0], ROOF_RED);
    b.scenery([0.0, -5.0, 450.0], [700.0, 8.0, 100.0], MOAT_BLUE);
    b.scenery([-350.0, -5.0, 600.0], [100.0, 8.0, 400.0], MOAT_BLUE);
    b.scenery([350.0, -5.0, 600.0], [100.0, 8.0, 400.0], MOAT_BLUE);
    b.platform([0.0, 5.0, 450.0], [180.0, 14.0, 110.0], WOOD_BROWN);
    b.tree(-550.0, -450.0);
    b.tree(-700.0, 300.0);
    b.tree(550.0, -450.0);
    b.tree(700.0, 300.0);
    b.tree(-300.0, -600.0);
    b.tree(300.0, -600.0);
    b.coins_line([-400.0, 0.0, -200.0], [400.0, 0.0, -200.0], 8);
    b.coins_ring([0.0, 0.0, -400.0], 120.0, 8);
    b.build()
}

fn bob_omb_battlefield() -> Level {
    let mut b = LevelBuilder::new("Bob-omb Battlefield", SKY_BLUE, (0.0, -800.0));
    b.scenery([0.0, 0.0, 0.0], [2400.0, 10.0, 2400.0], GRASS_GREEN);
    b.platform([0.0, 100.0, 400.0], [600.0, 200.0, 600.0], DARK_GREEN);
    b.platform([0.0, 250.0, 400.0], [400.0, 100.0, 400.0], GRASS_GREEN);
    b.platform([0.0, 350.0, 400.0], [200.0, 100.0, 200.0], DARK_GREEN);
    b.roof([0.0, 420.0, 400.0], [240.0, 120.0, 240.0], GRASS_GREEN);
    b.slope([200.0, 5.0, 200.0], [150.0, 100.0, 300.0], STONE_PATH);
    b.cylinder([-500.0, -25.0, -300.0], 20.0, 80.0, 8, WOOD_BROWN);
    b.scenery([-500.0, 5.0, -300.0], [120.0, 12.0, 120.0], DARK_GREEN);
    b.scenery([-500.0, 80.0, -300.0], [80.0, 80.0, 80.0], CHAIN_GRAY);
    b.scenery([600.0, 0.0, -500.0], [60.0, 40.0, 60.0], CANNON_BLACK);
    b.scenery([-600.0, 0.0, 600.0], [60.0, 40.0, 60.0], CANNON_BLACK);
    for i in -6..=6 {
        b.scenery([i as f32 * 80.0, 15.0, -200.0], [10.0, 40.0, 10.0], FENCE_BROWN);
    }
    b.platform([0.0, 80.0, -100.0], [200.0, 12.0, 60.0], WOOD_BROWN);
    b.tree(-800.0, -600.0);
    b.tree(800.0, -600.0);
    b.tree(-700.0, 800.0);
    b.tree(700.0, 800.0);
    b.tree(-300.0, -700.0);
    b.tree(400.0, -500.0);
    b.scenery([-200.0, 15.0, 600.0], [60.0, 40.0, 60.0], DARK_GRAY);
    b.scenery([300.0, 15.0, 700.0], [50.0, 35.0, 50.0], DARK_GRAY);
    b.star([0.0, 450.0, 400.0]);
    b.star([-500.0, 100.0, -300.0]);
    b.star([600.0, 50.0, -500.0]);
    b.coins_line([-300.0, 0.0, -500.0], [300.0, 0.0, -500.0], 8);
    b.coins_ring([0.0, 200.0, 400.0], 100.0, 8);
    b.coins_line([-700.0, 0.0, 0.0], [-700.0, 0.0, 600.0], 5);
    b.build()
}

fn whomps_fortress() -> Level {
    let mut b = LevelBuilder::new("Whomp's Fortress", SKY_BLUE, (0.0, -500.0));
    b.scenery([0.0, 0.0, 0.0], [800.0, 10.0, 800.0], STONE_GRAY);
    b.platform([0.0, 60.0, 200.0], [600.0, 120.0, 600.0], STONE_GRAY);
    b.platform([50.0, 180.0, 250.0], [400.0, 120.0, 400.0], DARK_GRAY);
    b.platform([0.0, 300.0, 300.0], [250.0, 120.0, 250.0], STONE_GRAY);
    b.platform([0.0, 420.0, 300.0], [200.0, 30.0, 200.0], STONE_PATH);
    b.platform([-350.0, 60.0, 0.0], [100.0, 20.0, 200.0], STONE_PATH);
    b.platform([350.0, 120.0, 100.0], [100.0, 20.0, 200.0], STONE_PATH);
    b.platform([-250.0, 180.0, 350.0], [100.0, 20.0, 100.0], STONE_PATH);
    b.scenery([100.0, 200.0, 100.0], [80.0, 80.0, 80.0], DARK_GRAY);
    b.scenery([-100.0, 320.0, 250.0], [80.0, 80.0, 80.0], DARK_GRAY);
    b.slope([-200.0, 0.0, 100.0], [120.0, 60.0, 200.0], STONE_PATH);
    b.slope([150.0, 120.0, 200.0], [100.0, 60.0, 150.0], STONE_PATH);
    b.scenery([0.0, 400.0, 350.0], [80.0, 200.0, 80.0], STONE_GRAY);
    b.roof([0.0, 550.0, 350.0], [100.0, 60.0, 100.0], ROOF_RED);
    b.platform([-200.0, 250.0, 200.0], [180.0, 8.0, 40.0], WOOD_BROWN);
    b.scenery([350.0, 140.0, 350.0], [40.0, 60.0, 40.0], CANNON_BLACK);
    b.star([0.0, 460.0, 300.0]);
    b.star([0.0, 580.0, 350.0]);
    b.star([-350.0, 90.0, 0.0]);
    b.coins_line([-300.0, 0.0, -300.0], [300.0, 0.0, -300.0], 6);
    b.coins_line([-200.0, 260.0, 200.0], [100.0, 260.0, 200.0], 5);
    b.coins_ring([0.0, 420.0, 300.0], 80.0, 8);
    b.build()
}

fn jolly_roger_bay() -> Level {
    let mut b = LevelBuilder::new("Jolly Roger Bay", SKY_UNDERWATER, (0.0, -600.0));
    b.scenery([0.0, 0.0, -400.0], [1200.0, 10.0, 500.0], SAND_YELLOW);
    b.scenery([0.0, -10.0, 300.0], [1800.0, 8.0, 1400.0], WATER_BLUE);
    b.scenery([0.0, -200.0, 300.0], [1800.0, 10.0, 1400.0], DEEP_WATER);
    b.scenery([300.0, -150.0, 500.0], [250.0, 60.0, 80.0], WOOD_BROWN);
    b.scenery([300.0, -120.0, 500.0], [200.0, 30.0, 60.0], DARK_BROWN);
    b.scenery([300.0, -90.0, 500.0], [20.0, 100.0, 10.0], WOOD_BROWN);
    b.scenery([-400.0, -100.0, 700.0], [200.0, 120.0, 200.0], CAVE_BROWN);
    b.scenery([-400.0, -50.0, 700.0], [160.0, 60.0, 160.0], CAVE_DARK);
    b.platform([-200.0, -30.0, 200.0], [100.0, 30.0, 100.0], DARK_GRAY);
    b.platform([100.0, -20.0, 350.0], [80.0, 30.0, 80.0], DARK_GRAY);
    b.platform([0.0, -40.0, 600.0], [120.0, 30.0, 120.0], DARK_GRAY);
    b.scenery([0.0, 80.0, -650.0], [1200.0, 180.0, 40.0], CAVE_BROWN);
    b.platform([500.0, 10.0, -300.0], [200.0, 14.0, 80.0], WOOD_BROWN);
    b.scenery([-300.0, -180.0, 400.0], [40.0, 30.0, 30.0], DARK_BROWN);
    b.scenery([200.0, -180.0, 600.0], [40.0, 30.0, 30.0], DARK_BROWN);
    b.scenery([500.0, -160.0, 800.0], [150.0, 100.0, 150.0], CAVE_DARK);
    b.star([300.0, -80.0, 500.0]);
    b.star([-400.0, -40.0, 700.0]);
    b.star([0.0, -30.0, 600.0]);
    b.coins_line([-400.0, 0.0, -400.0], [400.0, 0.0, -400.0], 8);
    b.coins_ring([0.0, -150.0, 400.0], 150.0, 8);
    b.build()
}

fn cool_cool_mountain() -> Level {
    let mut b = LevelBuilder::new("Cool, Cool Mountain", SKY_SNOW, (0.0, -300.0));
    b.scenery([0.0, 0.0, 0.0], [2000.0, 10.0, 2000.0], SNOW_WHITE);
    b.platform([0.0, 80.0, 300.0], [900.0, 160.0, 900.0], SNOW_WHITE);
    b.platform([0.0, 220.0, 350.0], [600.0, 120.0, 600.0], ICE_BLUE);
    b.platform([0.0, 360.0, 400.0], [350.0, 100.0, 350.0], SNOW_WHITE);
    b.platform([0.0, 470.0, 400.0], [180.0, 80.0, 180.0], SNOW_WHITE);
    b.roof([0.0, 540.0, 400.0], [220.0, 140.0, 220.0], SNOW_WHITE);
    b.scenery([60.0, 540.0, 400.0], [50.0, 80.0, 50.0], BRICK_RED);
    b.scenery([-500.0, 30.0, -500.0], [150.0, 100.0, 120.0], WOOD_BROWN);
    b.roof([-500.0, 100.0, -500.0], [180.0, 70.0, 150.0], SNOW_WHITE);
    b.platform([-200.0, 150.0, 100.0], [250.0, 10.0, 60.0], ICE_BLUE);
    b.scenery([400.0, 25.0, -300.0], [80.0, 60.0, 80.0], SNOW_WHITE);
    b.scenery([400.0, 65.0, -300.0], [60.0, 50.0, 60.0], SNOW_WHITE);
    b.scenery([400.0, 100.0, -300.0], [40.0, 40.0, 40.0], SNOW_WHITE);
    b.slope([-100.0, 160.0, 0.0], [200.0, -100.0, 400.0], ICE_BLUE);
    b.scenery([300.0, -5.0, -600.0], [500.0, 8.0, 400.0], ICE_BLUE);
    for (x, z) in [(-700.0, -700.0), (-600.0, -400.0), (700.0, -600.0), (600.0, -300.0), (-800.0, 500.0), (800.0, 400.0)] {
        b.scenery([x, 25.0, z], [25.0, 80.0, 25.0], TRUNK_BROWN);
        b.roof([x, 80.0, z], [80.0, 100.0, 80.0], DARK_GREEN);
        b.roof([x, 140.0, z], [60.0, 70.0, 60.0], DARK_GREEN);
    }
    b.star([0.0, 560.0, 400.0]);
    b.star([-500.0, 100.0, -500.0]);
    b.star([400.0, 140.0, -300.0]);
    b.coins_line([-400.0, 0.0, -200.0], [400.0, 0.0, -200.0], 8);
    b.coins_ring([0.0, 350.0, 400.0], 100.0, 8);
    b.build()
}

fn big_boos_haunt() -> Level {
    let mut b = LevelBuilder::new("Big Boo's Haunt", SKY_MANSION, (0.0, -500.0));
    b.scenery([0.0, 0.0, 0.0], [2000.0, 10.0, 2000.0], MANSION_GREEN);
    b.scenery([0.0, 150.0, 300.0], [500.0, 300.0, 400.0], MANSION_PURPLE);
    b.roof([0.0, 350.0, 300.0], [550.0, 200.0, 450.0], DARK_GRAY);
    b.platform([0.0, 20.0, 50.0], [300.0, 40.0, 100.0], STONE_GRAY);
    b.scenery([-120.0, 60.0, 50.0], [20.0, 100.0, 20.0], STONE_GRAY);
    b.scenery([120.0, 60.0, 50.0], [20.0, 100.0, 20.0], STONE_GRAY);
    b.scenery([0.0, 80.0, 100.0], [60.0, 100.0, 10.0], DARK_BROWN);
    b.scenery([-150.0, 200.0, 100.0], [60.0, 60.0, 10.0], OUTLINE_BLACK);
    b.scenery([150.0, 200.0, 100.0], [60.0, 60.0, 10.0], OUTLINE_BLACK);
    b.scenery([-150.0, 350.0, 100.0], [50.0, 50.0, 10.0], OUTLINE_BLACK);
    b.scenery([150.0, 350.0, 100.0], [50.0, 50.0, 10.0], OUTLINE_BLACK);
    b.scenery([-350.0, 100.0, 300.0], [200.0, 200.0, 250.0], MANSION_PURPLE);
    b.roof([-350.0, 230.0, 300.0], [230.0, 120.0, 280.0], DARK_GRAY);
    b.scenery([350.0, 100.0, 300.0], [200.0, 200.0, 250.0], MANSION_PURPLE);
    b.roof([350.0, 230.0, 300.0], [230.0, 120.0, 280.0], DARK_GRAY);
    for (x, z) in [
        (-600.0, -200.0),
        (-500.0, -300.0),
        (-700.0, -100.0),
        (-550.0, -400.0),
        (600.0, -200.0),
        (500.0, -300.0),
        (700.0, -100.0),
        (550.0, -400.0),
    ] {
        b.scenery([x, 20.0, z], [30.0, 50.0, 10.0], STONE_GRAY);
    }
    b.scenery([-800.0, 30.0, -500.0], [25.0, 120.0, 25.0], DARK_BROWN);
    b.scenery([-780.0, 100.0, -500.0], [60.0, 8.0, 8.0], DARK_BROWN);
    b.scenery([800.0, 30.0, -500.0], [25.0, 120.0, 25.0], DARK_BROWN);
    b.scenery([810.0, 90.0, -500.0], [50.0, 8.0, 8.0], DARK_BROWN);
    for i in -4..=4 {
        b.scenery([i as f32 * 120.0, 15.0, -600.0], [8.0, 40.0, 8.0], FENCE_BROWN);
    }
    b.platform([0.0, 280.0, 100.0], [200.0, 10.0, 60.0], STONE_GRAY);
    b.star([0.0, 400.0, 300.0]);
    b.star([-350.0, 220.0, 300.0]);
    b.star([350.0, 220.0, 300.0]);
    b.coins_ring([0.0, 0.0, -300.0], 200.0, 8);
    b.coins_line([-400.0, 0.0, -200.0], [400.0, 0.0, -200.0], 6);
    b.build()
}

fn hazy_maze_cave() -> Level {
    let mut b = LevelBuilder::new("Hazy Maze Cave", SKY_CAVE, (0.0, -400.0));
    b.scenery([0.0, 0.0, 0.0], [2400.0, 10.0, 2400.0], CAVE_BROWN);
    b.scenery([0.0, 400.0, 0.0], [2400.0, 10.0, 2400.0], CAVE_DARK);
    for (x, z) in [(-400.0, -400.0), (400.0, -400.0), (-400.0, 400.0), (400.0, 400.0), (0.0, 0.0)] {
        b.scenery([x, 200.0, z], [80.0, 400.0, 80.0], CAVE_BROWN);
    }
    b.scenery([-600.0, 50.0, 0.0], [40.0, 100.0, 800.0], CAVE_DARK);
    b.scenery([600.0, 50.0, 0.0], [40.0, 100.0, 800.0], CAVE_DARK);
    b.scenery([0.0, 50.0, -800.0], [1200.0, 100.0, 40.0], CAVE_DARK);
    b.scenery([-300.0, 50.0, 400.0], [600.0, 100.0, 40.0], CAVE_DARK);
    b.scenery([300.0, 50.0, -400.0], [40.0, 100.0, 400.0], CAVE_DARK);
    b.scenery([-200.0, 50.0, -200.0], [40.0, 100.0, 400.0], CAVE_DARK);
    b.scenery([-700.0, -10.0, 600.0], [600.0, 8.0, 600.0], DEEP_WATER);
    b.platform([-700.0, 0.0, 600.0], [150.0, 20.0, 150.0], CAVE_BROWN);
    b.platform([700.0, 0.0, 700.0], [200.0, 20.0, 200.0], METAL_GRAY);
    b.scenery([700.0, 30.0, 700.0], [40.0, 60.0, 40.0], METAL_GRAY);
    b.platform([0.0, 50.0, 800.0], [100.0, 10.0, 100.0], STONE_PATH);
    b.platform([-400.0, 30.0, -600.0], [200.0, 15.0, 60.0], STONE_PATH);
    b.platform([400.0, 60.0, -600.0], [200.0, 15.0, 60.0], STONE_PATH);
    b.platform([0.0, 90.0, -600.0], [200.0, 15.0, 60.0], STONE_PATH);
    b.scenery([800.0, 20.0, -400.0], [60.0, 50.0, 60.0], DARK_GRAY);
    b.scenery([850.0, 20.0, -500.0], [50.0, 40.0, 50.0], DARK_GRAY);
    b.star([-700.0, 40.0, 600.0]);
    b.star([700.0, 50.0, 700.0]);
    b.star([0.0, 110.0, -600.0]);
    b.coins_line([-500.0, 0.0, -300.0], [500.0, 0.0, -300.0], 8);
    b.coins_ring([0.0, 0.0, 0.0], 200.0, 8);
    b.build()
}

fn lethal_lava_land() -> Level {
    let mut b = LevelBuilder::new("Lethal Lava Land", SKY_LAVA, (0.0, -600.0));
    b.scenery([0.0, -20.0, 0.0], [3000.0, 10.0, 3000.0], LAVA_RED);
    b.scenery([0.0, -15.0, 0.0], [3000.0, 6.0, 3000.0], LAVA_ORANGE);
    b.platform([0.0, 10.0, -600.0], [300.0, 40.0, 300.0], DARK_GRAY);
    let stones = [(-200.0, -300.0), (0.0, -200.0), (200.0, -100.0), (300.0, 100.0), (100.0, 300.0)];
    for (i, (x, z)) in stones.into_iter().enumerate() {
        let y = 20.0 + i as f32 * 10.0;
        b.platform([x, y, z], [120.0, 30.0, 120.0], STONE_GRAY);
    }
    b.platform([0.0, 80.0, 600.0], [500.0, 160.0, 500.0], VOLCANO_GRAY);
    b.platform([0.0, 200.0, 600.0], [300.0, 120.0, 300.0], VOLCANO_GRAY);
    b.platform([0.0, 300.0, 600.0], [150.0, 80.0, 150.0], VOLCANO_RED);
    b.roof([0.0, 370.0, 600.0], [180.0, 100.0, 180.0], VOLCANO_RED);
    b.scenery([0.0, 310.0, 600.0], [100.0, 5.0, 100.0], LAVA_ORANGE);
    b.platform([-500.0, 30.0, 300.0], [200.0, 50.0, 200.0], DARK_GRAY);
    b.platform([500.0, 20.0, -300.0], [100.0, 20.0, 100.0], METAL_GRAY);
    b.platform([500.0, 20.0, 0.0], [100.0, 20.0, 100.0], METAL_GRAY);
    b.platform([-300.0, 15.0, 0.0], [200.0, 12.0, 40.0], WOOD_BROWN);
    b.scenery([600.0, 50.0, 300.0], [40.0, 40.0, 40.0], YELLOW);
    b.star([0.0, 400.0, 600.0]);
    b.star([-500.0, 80.0, 300.0]);
    b.star([100.0, 80.0, 300.0]);
    b.coins_line([-200.0, 30.0, -300.0], [300.0, 60.0, 100.0], 6);
    b.coins_ring([0.0, 250.0, 600.0], 100.0, 8);
    b.build()
}

fn shifting_sand_land() -> Level {
    let mut b = LevelBuilder::new("Shifting Sand Land", SKY_DESERT, (0.0, -700.0));
    b.scenery([0.0, 0.0, 0.0], [3000.0, 10.0, 3000.0], SAND_YELLOW);
    b.scenery([-400.0, -8.0, 0.0], [400.0, 6.0, 400.0], DARK_BROWN);
    b.platform([0.0, 40.0, 400.0], [500.0, 80.0, 500.0], PYRAMID_TAN);
    b.platform([0.0, 100.0, 400.0], [380.0, 60.0, 380.0], PYRAMID_TAN);
    b.roof([0.0, 160.0, 400.0], [420.0, 250.0, 420.0], PYRAMID_DARK);
    b.scenery([0.0, 50.0, 150.0], [80.0, 60.0, 10.0], OUTLINE_BLACK);
    b.scenery([600.0, -3.0, -500.0], [250.0, 8.0, 250.0], WATER_BLUE);
    b.tree_sized(600.0, -500.0, 60.0, 80.0, 60.0);
    b.tree_sized(650.0, -450.0, 60.0, 80.0, 60.0);
    for (x, z) in [(-600.0, 400.0), (-700.0, 200.0), (600.0, 400.0), (700.0, 200.0)] {
        b.scenery([x, 50.0, z], [50.0, 100.0, 50.0], SAND_YELLOW);
    }
    b.scenery([-600.0, 5.0, -300.0], [600.0, 10.0, 80.0], STONE_PATH);
    b.scenery([-600.0, 20.0, -300.0], [80.0, 80.0, 80.0], METAL_GRAY);
    b.platform([700.0, 60.0, 700.0], [150.0, 120.0, 150.0], SAND_YELLOW);
    b.scenery([-200.0, 40.0, -500.0], [30.0, 80.0, 30.0], PYRAMID_DARK);
    b.scenery([200.0, 40.0, -500.0], [30.0, 80.0, 30.0], PYRAMID_DARK);
    b.scenery([0.0, 90.0, -500.0], [440.0, 20.0, 30.0], PYRAMID_DARK);
    b.star([0.0, 420.0, 400.0]);
    b.star([700.0, 180.0, 700.0]);
    b.star([-600.0, 30.0, -300.0]);
    b.coins_line([-400.0, 0.0, -600.0], [400.0, 0.0, -600.0], 8);
    b.coins_ring([0.0, 100.0, 400.0], 150.0, 8);
    b.build()
}

fn dire_dire_docks() -> Level {
    let mut b = LevelBuilder::new("Dire, Dire Docks", SKY_UNDERWATER, (0.0, -400.0));
    b.scenery([0.0, 0.0, -400.0], [600.0, 10.0, 300.0], STONE_GRAY);
    b.scenery([0.0, -15.0, 300.0], [2000.0, 8.0, 1500.0], DOCK_BLUE);
    b.scenery([0.0, -300.0, 300.0], [2000.0, 10.0, 1500.0], DEEP_WATER);
    b.platform([-200.0, 10.0, -200.0], [80.0, 14.0, 300.0], WOOD_BROWN);
    b.platform([200.0, 10.0, -200.0], [80.0, 14.0, 300.0], WOOD_BROWN);
    b.scenery([0.0, -10.0, 500.0], [300.0, 60.0, 120.0], METAL_GRAY);
    b.scenery([0.0, 20.0, 500.0], [250.0, 40.0, 80.0], DARK_GRAY);
    b.scenery([0.0, 50.0, 450.0], [30.0, 60.0, 10.0], METAL_GRAY);
    for i in 0..5 {
        let x = if i % 2 == 0 { 300.0 } else { -300.0 };
        let z = 200.0 + i as f32 * 150.0;
        b.scenery([x, -100.0, z], [80.0, 8.0, 80.0], YELLOW);
    }
    b.scenery([-600.0, -200.0, 600.0], [100.0, 20.0, 200.0], DEEP_WATER);
    b.scenery([0.0, -280.0, 800.0], [100.0, 10.0, 100.0], OUTLINE_BLACK);
    b.scenery([500.0, -250.0, 700.0], [60.0, 50.0, 60.0], METAL_GRAY);
    b.scenery([-500.0, -200.0, 800.0], [60.0, 60.0, 60.0], DARK_GREEN);
    b.platform([-400.0, -20.0, 200.0], [120.0, 30.0, 120.0], STONE_GRAY);
    b.platform([400.0, -30.0, 400.0], [100.0, 30.0, 100.0], STONE_GRAY);
    b.star([0.0, 60.0, 500.0]);
    b.star([-600.0, -160.0, 600.0]);
    b.star([500.0, -200.0, 700.0]);
    b.coins_line([-200.0, 0.0, -400.0], [200.0, 0.0, -400.0], 6);
    b.coins_ring([0.0, -100.0, 400.0], 200.0, 8);
    b.build()
}

fn snowmans_land() -> Level {
    let mut b = LevelBuilder::new("Snowman's Land", SKY_SNOW, (0.0, -600.0));
    b.scenery([0.0, 0.0, 0.0], [2400.0, 10.0, 2400.0], SNOW_WHITE);
    b.platform([0.0, 60.0, 500.0], [300.0, 120.0, 300.0], SNOW_WHITE);
    b.platform([0.0, 170.0, 500.0], [220.0, 100.0, 220.0], SNOW_WHITE);
    b.platform([0.0, 270.0, 500.0], [140.0, 80.0, 140.0], SNOW_WHITE);
    b.scenery([0.0, 330.0, 500.0], [160.0, 15.0, 160.0], OUTLINE_BLACK);
    b.scenery([0.0, 350.0, 500.0], [100.0, 40.0, 100.0], OUTLINE_BLACK);
    b.scenery([-30.0, 290.0, 428.0], [20.0, 20.0, 5.0], OUTLINE_BLACK);
    b.scenery([30.0, 290.0, 428.0], [20.0, 20.0, 5.0], OUTLINE_BLACK);
    b.scenery([0.0, 270.0, 425.0], [10.0, 10.0, 30.0], LAVA_ORANGE);
    b.scenery([-500.0, -5.0, -300.0], [500.0, 8.0, 500.0], ICE_BLUE);
    b.scenery([500.0, 30.0, -400.0], [160.0, 80.0, 160.0], SNOW_WHITE);
    b.roof([500.0, 90.0, -400.0], [180.0, 60.0, 180.0], SNOW_WHITE);
    b.scenery([500.0, 30.0, -320.0], [50.0, 50.0, 10.0], DARK_BROWN);
    b.platform([-300.0, 30.0, 200.0], [100.0, 15.0, 100.0], ICE_BLUE);
    b.platform([-500.0, 60.0, 300.0], [100.0, 15.0, 100.0], ICE_BLUE);
    b.platform([-700.0, 90.0, 200.0], [100.0, 15.0, 100.0], ICE_BLUE);
    b.platform([600.0, 30.0, 500.0], [200.0, 15.0, 200.0], ICE_BLUE);
    for (x, z) in [(-800.0, -600.0), (-700.0, 700.0), (800.0, -500.0), (700.0, 600.0), (-400.0, -700.0), (400.0, -600.0)] {
        b.scenery([x, 25.0, z], [22.0, 70.0, 22.0], TRUNK_BROWN);
        b.roof([x, 70.0, z], [70.0, 90.0, 70.0], SNOW_WHITE);
    }
    b.star([0.0, 380.0, 500.0]);
    b.star([500.0, 80.0, -400.0]);
    b.star([-700.0, 120.0, 200.0]);
    b.coins_line([-400.0, 0.0, -500.0], [400.0, 0.0, -500.0], 8);
    b.coins_ring([0.0, 100.0, 500.0], 120.0, 8);
    b.build()
}

fn wet_dry_world() -> Level {
    let mut b = LevelBuilder::new("Wet-Dry World", SKY_BLUE, (0.0, -400.0));
    b.scenery([0.0, 0.0, 0.0], [1800.0, 10.0, 1800.0], STONE_GRAY);
    b.scenery([0.0, 30.0, 0.0], [1800.0, 5.0, 1800.0], WATER_BLUE);
    b.platform([-400.0, 100.0, 300.0], [200.0, 200.0, 200.0], STONE_GRAY);
    b.platform([-400.0, 230.0, 300.0], [160.0, 60.0, 160.0], DARK_GRAY);
    b.platform([400.0, 80.0, 300.0], [180.0, 160.0, 180.0], STONE_GRAY);
    b.platform([400.0, 190.0, 300.0], [140.0, 50.0, 140.0], DARK_GRAY);
    b.platform([0.0, 120.0, 500.0], [150.0, 240.0, 150.0], STONE_GRAY);
    b.platform([0.0, 280.0, 500.0], [110.0, 60.0, 110.0], DARK_GRAY);
    b.scenery([-200.0, 40.0, -200.0], [30.0, 30.0, 30.0], PURPLE);
    b.scenery([300.0, 120.0, -100.0], [30.0, 30.0, 30.0], PURPLE);
    b.scenery([0.0, 250.0, 500.0], [30.0, 30.0, 30.0], PURPLE);
    b.scenery([-600.0, 80.0, -300.0], [250.0, 160.0, 250.0], METAL_GRAY);
    b.platform([-600.0, 170.0, -300.0], [200.0, 10.0, 200.0], METAL_GRAY);
    b.platform([-200.0, 60.0, 0.0], [150.0, 8.0, 60.0], WOOD_BROWN);
    b.platform([100.0, 90.0, 100.0], [150.0, 8.0, 60.0], WOOD_BROWN);
    b.platform([-100.0, 120.0, 200.0], [150.0, 8.0, 60.0], WOOD_BROWN);
    b.platform([600.0, 50.0, 0.0], [80.0, 8.0, 80.0], YELLOW);
    b.platform([600.0, 120.0, 200.0], [80.0, 8.0, 80.0], YELLOW);
    b.scenery([0.0, 50.0, -900.0], [1800.0, 100.0, 30.0], STONE_GRAY);
    b.scenery([-900.0, 50.0, 0.0], [30.0, 100.0, 1800.0], STONE_GRAY);
    b.scenery([900.0, 50.0, 0.0], [30.0, 100.0, 1800.0], STONE_GRAY);
    b.star([0.0, 340.0, 500.0]);
    b.star([-600.0, 190.0, -300.0]);
    b.star([600.0, 140.0, 200.0]);
    b.coins_line([-500.0, 0.0, -600.0], [500.0, 0.0, -600.0], 8);
    b.coins_ring([0.0, 60.0, 0.0], 150.0, 8);
    b.build()
}

fn tall_tall_mountain() -> Level {
    let mut b = LevelBuilder::new("Tall, Tall Mountain", SKY_BLUE, (0.0, -400.0));
    b.scenery([0.0, 0.0, 0.0], [1600.0, 10.0, 1600.0], GRASS_GREEN);
    b.platform([0.0, 50.0, 300.0], [700.0, 100.0, 700.0], DARK_GREEN);
    b.platform([50.0, 140.0, 350.0], [550.0, 80.0, 550.0], GRASS_GREEN);
    b.platform([0.0, 220.0, 400.0], [400.0, 80.0, 400.0], DARK_GREEN);
    b.platform([-30.0, 300.0, 400.0], [300.0, 60.0, 300.0], GRASS_GREEN);
    b.platform([0.0, 370.0, 400.0], [200.0, 50.0, 200.0], DARK_GREEN);
    b.platform([0.0, 430.0, 400.0], [120.0, 40.0, 120.0], GRASS_GREEN);
    b.scenery([0.0, 150.0, 700.0], [700.0, 300.0, 30.0], CAVE_BROWN);
    b.scenery([250.0, 200.0, 695.0], [60.0, 300.0, 10.0], WATER_BLUE);
    b.scenery([-300.0, 80.0, -200.0], [30.0, 80.0, 30.0], STONE_GRAY);
    b.platform([-300.0, 110.0, -200.0], [80.0, 10.0, 80.0], PLAYER_RED);
    b.scenery([-100.0, 130.0, -100.0], [30.0, 120.0, 30.0], STONE_GRAY);
    b.platform([-100.0, 170.0, -100.0], [80.0, 10.0, 80.0], PLAYER_RED);
    b.scenery([40.0, 460.0, 400.0], [50.0, 60.0, 50.0], DARK_BROWN);
    b.platform([200.0, 180.0, 200.0], [250.0, 8.0, 40.0], WOOD_BROWN);
    b.platform([-200.0, 100.0, 200.0], [180.0, 12.0, 30.0], WOOD_BROWN);
    b.platform([-400.0, 350.0, 0.0], [100.0, 15.0, 100.0], WHITE);
    b.platform([-200.0, 400.0, 100.0], [100.0, 15.0, 100.0], WHITE);
    b.tree(-600.0, -500.0);
    b.tree(600.0, -500.0);
    b.tree(-500.0, -300.0);
    b.tree(500.0, -200.0);
    b.star([0.0, 480.0, 400.0]);
    b.star([-200.0, 420.0, 100.0]);
    b.star([-300.0, 130.0, -200.0]);
    b.coins_line([-400.0, 0.0, -400.0], [400.0, 0.0, -400.0], 8);
    b.coins_ring([0.0, 300.0, 400.0], 100.0, 8);
    b.build()
}

fn tiny_huge_island() -> Level {
    let mut b = LevelBuilder::new("Tiny-Huge Island", SKY_BLUE, (0.0, -600.0));
    b.scenery([0.0, 0.0, 0.0], [2200.0, 10.0, 2200.0], GRASS_GREEN);
    b.platform([0.0, 80.0, 300.0], [500.0, 160.0, 500.0], DARK_GREEN);
    b.platform([0.0, 200.0, 300.0], [300.0, 100.0, 300.0], GRASS_GREEN);
    b.roof([0.0, 300.0, 300.0], [350.0, 150.0, 350.0], DARK_GREEN);
    b.scenery([0.0, -3.0, -700.0], [800.0, 8.0, 300.0], SAND_YELLOW);
    b.scenery([0.0, -8.0, -900.0], [800.0, 6.0, 200.0], WATER_BLUE);
    b.scenery([-400.0, 10.0, -300.0], [20.0, 15.0, 20.0], DARK_BROWN);
    b.scenery([-400.0, 20.0, -300.0], [25.0, 8.0, 25.0], PLAYER_RED);
    b.scenery([-600.0, 10.0, 400.0], [60.0, 50.0, 60.0], DARK_GREEN);
    b.scenery([600.0, 10.0, -400.0], [60.0, 50.0, 60.0], DARK_GREEN);
    b.scenery([300.0, 150.0, 500.0], [120.0, 80.0, 120.0], CAVE_BROWN);
    b.scenery([300.0, 150.0, 500.0], [80.0, 60.0, 80.0], CAVE_DARK);
    b.scenery([-500.0, 5.0, -500.0], [250.0, 10.0, 250.0], STONE_PATH);
    b.scenery([400.0, 20.0, -200.0], [80.0, 40.0, 80.0], STONE_GRAY);
    b.roof([400.0, 50.0, -200.0], [100.0, 30.0, 100.0], ROOF_RED);
    b.scenery([500.0, 15.0, -100.0], [60.0, 30.0, 60.0], STONE_GRAY);
    b.roof([500.0, 35.0, -100.0], [80.0, 25.0, 80.0], ROOF_RED);
    for (x, z) in [(-200.0, 200.0), (-100.0, 350.0), (200.0, 150.0)] {
        b.scenery([x, 15.0, z], [15.0, 40.0, 15.0], DARK_GREEN);
        b.scenery([x, 40.0, z], [30.0, 15.0, 30.0], PLAYER_RED);
    }
    b.scenery([-700.0, -5.0, 700.0], [300.0, 6.0, 300.0], WATER_BLUE);
    b.tree(-800.0, -200.0);
    b.tree(800.0, -300.0);
    b.tree(-300.0, 700.0);
    b.tree(500.0, 700.0);
    b.star([0.0, 400.0, 300.0]);
    b.star([300.0, 200.0, 500.0]);
    b.star([-600.0, 60.0, 400.0]);
    b.coins_line([-600.0, 0.0, -300.0], [600.0, 0.0, -300.0], 10);
    b.coins_ring([0.0, 100.0, 300.0], 120.0, 8);
    b.build()
}

fn tick_tock_clock() -> Level {
    let mut b = LevelBuilder::new("Tick Tock Clock", SKY_CAVE, (0.0, -200.0));
    b.scenery([0.0, 0.0, 0.0], [600.0, 10.0, 600.0], CLOCK_BEIGE);
    b.scenery([-300.0, 400.0, 0.0], [20.0, 800.0, 600.0], CLOCK_BEIGE);
    b.scenery([300.0, 400.0, 0.0], [20.0, 800.0, 600.0], CLOCK_BEIGE);
    b.scenery([0.0, 400.0, -300.0], [600.0, 800.0, 20.0], CLOCK_BEIGE);
    b.scenery([0.0, 400.0, 300.0], [600.0, 800.0, 20.0], CLOCK_BEIGE);
    let steps: [([f32; 3], [f32; 3]); 11] = [
        ([0.0, 40.0, 0.0], [200.0, 12.0, 200.0]),
        ([-100.0, 100.0, 50.0], [150.0, 10.0, 60.0]),
        ([100.0, 170.0, -50.0], [150.0, 10.0, 60.0]),
        ([0.0, 240.0, 100.0], [120.0, 10.0, 120.0]),
        ([-80.0, 310.0, -80.0], [100.0, 10.0, 100.0]),
        ([80.0, 380.0, 80.0], [100.0, 10.0, 100.0]),
        ([0.0, 450.0, 0.0], [150.0, 10.0, 80.0]),
        ([-100.0, 520.0, 100.0], [100.0, 10.0, 100.0]),
        ([100.0, 590.0, -100.0], [100.0, 10.0, 100.0]),
        ([0.0, 660.0, 0.0], [180.0, 10.0, 180.0]),
        ([0.0, 740.0, 0.0], [250.0, 10.0, 250.0]),
    ];
    for (center, size) in steps {
        b.platform(center, size, METAL_GRAY);
    }
    for y in [150.0, 350.0, 550.0] {
        b.scenery([-280.0, y, 0.0], [15.0, 80.0, 80.0], GOLD);
        b.scenery([280.0, y, 0.0], [15.0, 80.0, 80.0], GOLD);
    }
    b.scenery([0.0, 300.0, -280.0], [10.0, 200.0, 10.0], METAL_GRAY);
    b.scenery([0.0, 200.0, -280.0], [40.0, 40.0, 10.0], GOLD);
    b.scenery([0.0, 780.0, 0.0], [280.0, 10.0, 280.0], WHITE);
    b.scenery([0.0, 790.0, 0.0], [120.0, 4.0, 12.0], OUTLINE_BLACK);
    b.scenery([0.0, 790.0, 0.0], [8.0, 4.0, 80.0], OUTLINE_BLACK);
    for i in 0..12 {
        let a = TAU * i as f32 / 12.0;
        b.scenery([a.sin() * 120.0, 790.0, a.cos() * 120.0], [15.0, 6.0, 15.0], OUTLINE_BLACK);
    }
    b.star([0.0, 800.0, 0.0]);
    b.star([0.0, 470.0, 0.0]);
    b.star([-100.0, 530.0, 100.0]);
    b.coins_line([-100.0, 100.0, 0.0], [100.0, 100.0, 0.0], 4);
    b.coins_ring([0.0, 450.0, 0.0], 60.0, 6);
    b.coins_ring([0.0, 740.0, 0.0], 100.0, 8);
    b.build()
}

fn rainbow_ride() -> Level {
    let mut b = LevelBuilder::new("Rainbow Ride", SKY_RAINBOW, (0.0, -300.0)).void();
    b.platform([0.0, 0.0, -300.0], [250.0, 15.0, 250.0], STONE_GRAY);
    let rainbow = [PLAYER_RED, LAVA_ORANGE, YELLOW, GRASS_GREEN, SKY_BLUE, PURPLE, RAINBOW_PINK];
    for i in 0..14 {
        let t = i as f32;
        b.platform(
            [(t * 0.5).sin() * 150.0, t * 15.0, t * 100.0],
            [80.0, 8.0, 80.0],
            rainbow[i % rainbow.len()],
        );
    }
    b.platform([-300.0, 200.0, 800.0], [250.0, 50.0, 100.0], WOOD_BROWN);
    b.scenery([-300.0, 230.0, 800.0], [200.0, 30.0, 70.0], DARK_BROWN);
    b.scenery([-300.0, 270.0, 800.0], [10.0, 100.0, 10.0], WOOD_BROWN);
    b.scenery([-300.0, 340.0, 800.0], [80.0, 5.0, 40.0], WHITE);
    b.platform([400.0, 250.0, 600.0], [180.0, 120.0, 150.0], STONE_GRAY);
    b.roof([400.0, 340.0, 600.0], [220.0, 80.0, 180.0], ROOF_RED);
    b.scenery([400.0, 270.0, 525.0], [40.0, 60.0, 5.0], DARK_BROWN);
    b.platform([-500.0, 100.0, 300.0], [150.0, 20.0, 150.0], GRASS_GREEN);
    b.platform([500.0, 150.0, 400.0], [120.0, 20.0, 120.0], GRASS_GREEN);
    b.platform([-200.0, 300.0, 1000.0], [100.0, 20.0, 100.0], GRASS_GREEN);
    b.platform([200.0, 80.0, 200.0], [80.0, 8.0, 80.0], RAINBOW_CYAN);
    b.platform([300.0, 120.0, 300.0], [80.0, 8.0, 80.0], RAINBOW_LIME);
    b.platform([200.0, 160.0, 400.0], [80.0, 8.0, 80.0], RAINBOW_PINK);
    b.platform([-400.0, 150.0, 500.0], [100.0, 8.0, 60.0], WOOD_BROWN);
    b.platform([-100.0, 200.0, 700.0], [100.0, 8.0, 60.0], WOOD_BROWN);
    b.scenery([-600.0, 80.0, 100.0], [50.0, 40.0, 50.0], CANNON_BLACK);
    for cloud in [[300.0, 400.0, 300.0], [-200.0, 350.0, 600.0], [0.0, 450.0, 900.0]] {
        b.scenery(cloud, [120.0, 20.0, 80.0], WHITE);
    }
    b.star([-300.0, 320.0, 800.0]);
    b.star([400.0, 380.0, 600.0]);
    b.star([-200.0, 330.0, 1000.0]);
    for i in 0..7 {
        let t = i as f32;
        b.coin([(t * 0.5).sin() * 150.0, t * 15.0 + 30.0, t * 100.0]);
    }
    b.coins_ring([-300.0, 250.0, 800.0], 80.0, 8);
    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_lookup() {
        assert_eq!(COURSES.len(), 16);
        assert_eq!(COURSES[0].name, "Castle Grounds");
        assert_eq!(COURSES[15].name, "Rainbow Ride");
        assert_eq!(find_course("rainbow ride"), Some(15));
        assert_eq!(find_course("  BOB-OMB BATTLEFIELD "), Some(1));
        assert_eq!(find_course("Vanish Cap"), None);
    }

    #[test]
    fn test_every_course_builds_valid_geometry() {
        for course in &COURSES {
            let level = course.build();
            assert!(!level.mesh.is_empty(), "{} has no faces", course.name);
            for face in &level.mesh.faces {
                assert!(face.indices.len() >= 3);
                assert!(face.indices.iter().all(|&i| i < level.mesh.vertices.len()));
            }
            assert!(!level.coins.is_empty(), "{} has no coins", course.name);
        }
    }

    #[test]
    fn test_numbered_courses_have_three_stars() {
        assert!(COURSES[0].build().stars.is_empty());
        for course in &COURSES[1..] {
            assert_eq!(course.build().stars.len(), 3, "{}", course.name);
        }
    }

    #[test]
    fn test_only_rainbow_ride_floats_over_void() {
        for (i, course) in COURSES.iter().enumerate() {
            let level = course.build();
            assert_eq!(level.terrain.ground.is_none(), i == 15, "{}", course.name);
        }
    }

    #[test]
    fn test_rainbow_ride_spawn_is_on_a_platform() {
        let level = COURSES[15].build();
        let spawn = level.spawn_position();
        let floor = level.terrain.floor_at(spawn, 0.0, 5.0);
        assert!(floor.is_finite());
        assert!(floor >= spawn.y);
    }

    #[test]
    fn test_display_names_differ_from_list_names() {
        assert_eq!(COURSES[0].build().name, "Peach's Castle");
        assert_eq!(COURSES[4].build().name, "Cool, Cool Mountain");
    }
}
