//! Skyledge - A side-scrolling platform shooter
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (player physics, enemies, projectiles, game state)
//! - `input`: Held-key latch between browser events and the simulation
//! - `renderer`: Drawing surface interface, shape batching, WebGPU pipeline
//! - `driver`: One tick + one paint per display frame
//! - `platform`: Browser startup checks
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use driver::FrameDriver;
pub use input::{Action, InputLatch};
pub use tuning::Tuning;

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions in logical pixels
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 500.0;

    /// Nominal frame interval the physics constants are tuned for (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Points awarded per enemy kill
    pub const KILL_SCORE: u32 = 10;

    /// Landing tolerance: previous feet may sit up to this far below a platform top
    pub const LANDING_TOLERANCE: f32 = 1.0;

    /// Element ids the browser host looks up
    pub const CANVAS_ID: &str = "gameCanvas";
    pub const OVERLAY_ID: &str = "overlay";
    pub const TUNING_ID: &str = "tuning";
}

/// RGBA color with components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// CSS `rgba(...)` string for DOM text
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            self.a
        )
    }
}

/// Colors for game elements
pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::hex(0x555555);
    pub const FLOOR: Color = Color::hex(0x6B8E23);
    pub const LEDGE: Color = Color::hex(0x8B4513);
    pub const ENEMY: Color = Color::hex(0xC0392B);
    pub const PLAYER: Color = Color::hex(0x4A90E2);
    pub const PLAYER_ATTACK: Color = Color::hex(0xE94B3C);
    pub const PROJECTILE: Color = Color::hex(0xF5A623);
    pub const EYE: Color = Color::hex(0xFFFFFF);
    pub const TEXT: Color = Color::hex(0xFFFFFF);
    pub const GAME_OVER_TEXT: Color = Color::hex(0xFF0000);
    pub const GAME_OVER_SHADE: Color = Color::rgba(0.0, 0.0, 0.0, 0.7);
}
