//! Game balance and world dimensions
//!
//! Every gameplay constant lives here so a JSON document can override any
//! subset of them. Values are per-frame quantities tuned for 60 Hz.

use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, KILL_SCORE};

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    /// Drawable width in logical pixels
    pub canvas_width: f32,
    /// Drawable height in logical pixels
    pub canvas_height: f32,

    // === Player ===
    pub player_start_x: f32,
    /// Spawn top edge measured up from the canvas bottom (feet rest on the floor)
    pub player_start_lift: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Horizontal pixels per frame
    pub player_speed: f32,
    /// Upward velocity applied on jump
    pub jump_strength: f32,
    /// Downward acceleration per frame
    pub gravity: f32,
    pub attack_cooldown_ms: f64,
    pub max_health: u32,
    pub invincibility_ms: f64,
    /// Vertical velocity after bumping a platform from below
    pub head_bump_rebound: f32,

    // === Projectiles ===
    pub projectile_radius: f32,
    /// Horizontal pixels per frame
    pub projectile_speed: f32,

    // === Enemies ===
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub kill_score: u32,

    // === Presentation ===
    /// How long the player shows the attack color after firing
    pub attack_flash_ms: f64,
    /// Half-period of the invincibility blink
    pub blink_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            player_start_x: 100.0,
            player_start_lift: 90.0,
            player_width: 30.0,
            player_height: 50.0,
            player_speed: 4.0,
            jump_strength: 11.0,
            gravity: 0.45,
            attack_cooldown_ms: 400.0,
            max_health: 3,
            invincibility_ms: 1500.0,
            head_bump_rebound: 0.1,

            projectile_radius: 6.0,
            projectile_speed: 8.0,

            enemy_width: 30.0,
            enemy_height: 30.0,
            kill_score: KILL_SCORE,

            attack_flash_ms: 150.0,
            blink_ms: 100.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document; missing keys keep defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse tuning, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring invalid tuning ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Player spawn point (top-left corner)
    pub fn player_start_y(&self) -> f32 {
        self.canvas_height - self.player_start_lift
    }
}
