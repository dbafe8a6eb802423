//! The canonical level
//!
//! Platforms are laid out relative to the canvas bottom. Enemies name the
//! platform they stand on by index so their height follows the geometry.

use super::collision::Aabb;
use super::state::{Enemy, Platform};
use crate::palette;
use crate::tuning::Tuning;

/// Floor thickness; the floor spans the full canvas width
const FLOOR_HEIGHT: f32 = 40.0;
const LEDGE_HEIGHT: f32 = 20.0;

/// Ledges as (x, lift above canvas bottom, width)
const LEDGES: [(f32, f32, f32); 4] = [
    (150.0, 120.0, 180.0),
    (400.0, 200.0, 150.0),
    (50.0, 300.0, 120.0),
    (600.0, 350.0, 100.0),
];

/// Enemy placement on a platform
struct EnemySpawn {
    platform: usize,
    x: f32,
    speed: f32,
    direction: f32,
    patrol_range: f32,
}

const ENEMIES: [EnemySpawn; 3] = [
    EnemySpawn {
        platform: 1,
        x: 200.0,
        speed: 0.7,
        direction: 1.0,
        patrol_range: 60.0,
    },
    // Stationary guard
    EnemySpawn {
        platform: 2,
        x: 450.0,
        speed: 0.0,
        direction: 1.0,
        patrol_range: 0.0,
    },
    EnemySpawn {
        platform: 0,
        x: 650.0,
        speed: 1.0,
        direction: -1.0,
        patrol_range: 80.0,
    },
];

/// Floor first, then the ledges
pub fn platforms(tuning: &Tuning) -> Vec<Platform> {
    let h = tuning.canvas_height;
    let mut platforms = Vec::with_capacity(LEDGES.len() + 1);
    platforms.push(Platform {
        bounds: Aabb::new(0.0, h - FLOOR_HEIGHT, tuning.canvas_width, FLOOR_HEIGHT),
        color: palette::FLOOR,
    });
    platforms.extend(LEDGES.iter().map(|&(x, lift, width)| Platform {
        bounds: Aabb::new(x, h - lift, width, LEDGE_HEIGHT),
        color: palette::LEDGE,
    }));
    platforms
}

/// Enemies standing on their platforms
pub fn enemies(tuning: &Tuning, platforms: &[Platform]) -> Vec<Enemy> {
    ENEMIES
        .iter()
        .filter_map(|spawn| {
            let Some(platform) = platforms.get(spawn.platform) else {
                log::warn!(
                    "Enemy at x={} refers to missing platform {}",
                    spawn.x,
                    spawn.platform
                );
                return None;
            };
            Some(Enemy {
                bounds: Aabb::new(
                    spawn.x,
                    platform.bounds.top() - tuning.enemy_height,
                    tuning.enemy_width,
                    tuning.enemy_height,
                ),
                alive: true,
                speed: spawn.speed,
                direction: spawn.direction,
                start_direction: spawn.direction,
                original_x: spawn.x,
                patrol_range: spawn.patrol_range,
                platform: spawn.platform,
            })
        })
        .collect()
}

/// Put an enemy back at its spawn point on its platform, alive
pub fn restore_enemy(enemy: &mut Enemy, platforms: &[Platform]) {
    enemy.alive = true;
    enemy.bounds.pos.x = enemy.original_x;
    enemy.direction = enemy.start_direction;
    if let Some(platform) = platforms.get(enemy.platform) {
        enemy.bounds.pos.y = platform.bounds.top() - enemy.bounds.size.y;
    }
}
