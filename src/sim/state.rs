//! Game state and core simulation types
//!
//! `GameState` is the whole session: entities, score and phase. It is owned by
//! the frame driver and passed by reference into the tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::level;
use crate::Color;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advances every tick
    Running,
    /// Health ran out; simulation frozen until reset
    GameOver,
}

/// Horizontal facing of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1 for left, +1 for right
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive is down)
    pub dy: f32,
    pub speed: f32,
    pub jump_strength: f32,
    pub gravity: f32,
    pub grounded: bool,
    pub facing: Facing,
    pub attack_cooldown_ms: f64,
    /// None until the first shot
    pub last_attack_ms: Option<f64>,
    pub health: u32,
    pub max_health: u32,
    pub invincible: bool,
    pub last_hit_ms: f64,
    pub invincibility_ms: f64,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_start_x, tuning.player_start_y()),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            dy: 0.0,
            speed: tuning.player_speed,
            jump_strength: tuning.jump_strength,
            gravity: tuning.gravity,
            grounded: false,
            facing: Facing::Right,
            attack_cooldown_ms: tuning.attack_cooldown_ms,
            last_attack_ms: None,
            health: tuning.max_health,
            max_health: tuning.max_health,
            invincible: false,
            last_hit_ms: 0.0,
            invincibility_ms: tuning.invincibility_ms,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Put the player back at the spawn point, standing
    pub fn respawn(&mut self, tuning: &Tuning) {
        self.pos = Vec2::new(tuning.player_start_x, tuning.player_start_y());
        self.dy = 0.0;
        self.grounded = true;
    }

    /// Lose one health point and start the invincibility window
    pub fn take_hit(&mut self, now_ms: f64) {
        self.health = self.health.saturating_sub(1);
        self.invincible = true;
        self.last_hit_ms = now_ms;
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Whether the attack cooldown has elapsed at `now_ms`
    pub fn can_attack(&self, now_ms: f64) -> bool {
        match self.last_attack_ms {
            None => true,
            Some(last) => now_ms - last > self.attack_cooldown_ms,
        }
    }

    /// Whether the attack color is still showing at `now_ms`
    pub fn attack_flash_active(&self, now_ms: f64, flash_ms: f64) -> bool {
        self.last_attack_ms
            .is_some_and(|last| now_ms - last < flash_ms)
    }

    /// Blink phase while invincible: false on frames the player is hidden
    pub fn visible_at(&self, now_ms: f64, blink_ms: f64) -> bool {
        if !self.invincible || blink_ms <= 0.0 {
            return true;
        }
        let phase = ((now_ms - self.last_hit_ms) / blink_ms).floor() as i64;
        phase.rem_euclid(2) != 0
    }
}

/// Static level geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub bounds: Aabb,
    pub color: Color,
}

/// A patrolling (or stationary) enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub bounds: Aabb,
    pub alive: bool,
    /// Pixels per frame; 0 means stationary
    pub speed: f32,
    /// -1 or +1
    pub direction: f32,
    /// Direction restored on reset
    pub start_direction: f32,
    /// Patrol center (left edge)
    pub original_x: f32,
    /// Half-width of the patrol band; 0 means stationary
    pub patrol_range: f32,
    /// Index of the platform this enemy stands on
    pub platform: usize,
}

impl Enemy {
    pub fn patrols(&self) -> bool {
        self.alive && self.speed > 0.0 && self.patrol_range > 0.0
    }

    /// Left-edge band the enemy oscillates within
    pub fn patrol_band(&self) -> (f32, f32) {
        (
            self.original_x - self.patrol_range,
            self.original_x + self.patrol_range,
        )
    }
}

/// A player shot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub radius: f32,
    /// Signed horizontal velocity
    pub dx: f32,
    pub color: Color,
}

impl Projectile {
    pub fn bounds(&self) -> Aabb {
        Aabb::around_circle(self.pos, self.radius)
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    /// Unordered; removal may reorder
    pub projectiles: Vec<Projectile>,
    pub score: u32,
    pub phase: GamePhase,
    /// Simulation ticks since the last reset
    pub time_ticks: u64,
}

impl GameState {
    /// Build the canonical level
    pub fn new(tuning: Tuning) -> Self {
        let platforms = level::platforms(&tuning);
        let enemies = level::enemies(&tuning, &platforms);
        Self {
            player: Player::new(&tuning),
            platforms,
            enemies,
            projectiles: Vec::new(),
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            tuning,
        }
    }

    /// Build a session over custom geometry (tests, editors)
    pub fn with_level(tuning: Tuning, platforms: Vec<Platform>, enemies: Vec<Enemy>) -> Self {
        Self {
            player: Player::new(&tuning),
            platforms,
            enemies,
            projectiles: Vec::new(),
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            tuning,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn living_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive).count()
    }
}
