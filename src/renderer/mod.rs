//! Rendering module
//!
//! The game paints through the `Surface` trait: filled rectangles, filled
//! circles, text, and a clear. `draw_frame` issues those calls in a fixed
//! order (platforms, enemies, projectiles, player, HUD) so later layers
//! cover earlier ones. `ShapeBatch` turns the calls into triangles for the
//! WebGPU pipeline and collects text for the DOM overlay.

pub mod batch;
pub mod pipeline;
pub mod vertex;

pub use batch::{ShapeBatch, TextRun};
pub use pipeline::RenderState;
pub use vertex::Vertex;

use glam::Vec2;

use crate::Color;
use crate::palette;
use crate::sim::{Aabb, Facing, GameState, Player};

/// Horizontal anchoring of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Drawing primitives the game needs from a host
pub trait Surface {
    /// Discard everything drawn so far and fill with `color`
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Aabb, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// `pos` is the baseline anchor
    fn draw_text(&mut self, text: &str, pos: Vec2, align: TextAlign, size: f32, color: Color);
}

const HUD_FONT: f32 = 20.0;
const TITLE_FONT: f32 = 40.0;
const HUD_MARGIN: f32 = 20.0;
const HUD_BASELINE: f32 = 30.0;
const EYE_SIZE: f32 = 6.0;

/// Paint one frame of the session
pub fn draw_frame<S: Surface + ?Sized>(state: &GameState, now_ms: f64, surface: &mut S) {
    surface.clear(palette::BACKGROUND);

    for platform in &state.platforms {
        surface.fill_rect(platform.bounds, platform.color);
    }

    for enemy in state.enemies.iter().filter(|e| e.alive) {
        surface.fill_rect(enemy.bounds, palette::ENEMY);
    }

    for p in &state.projectiles {
        surface.fill_circle(p.pos, p.radius, p.color);
    }

    // Drawn even after game over so the last pose stays visible
    draw_player(state, now_ms, surface);
    draw_hud(state, surface);
}

fn draw_player<S: Surface + ?Sized>(state: &GameState, now_ms: f64, surface: &mut S) {
    let player = &state.player;
    if !player.visible_at(now_ms, state.tuning.blink_ms) {
        return;
    }

    let color = if player.attack_flash_active(now_ms, state.tuning.attack_flash_ms) {
        palette::PLAYER_ATTACK
    } else {
        palette::PLAYER
    };
    surface.fill_rect(player.bounds(), color);
    surface.fill_rect(eye_rect(player), palette::EYE);
}

/// The eye sits toward the facing side
fn eye_rect(player: &Player) -> Aabb {
    let offset = match player.facing {
        Facing::Right => player.size.x * 0.65,
        Facing::Left => player.size.x * 0.15,
    };
    Aabb::new(
        player.pos.x + offset,
        player.pos.y + player.size.y * 0.2,
        EYE_SIZE,
        EYE_SIZE,
    )
}

/// `Health: ♥♥♡` with one glyph per point of max health
pub fn health_label(health: u32, max_health: u32) -> String {
    let full = health.min(max_health) as usize;
    let empty = max_health as usize - full;
    format!("Health: {}{}", "♥".repeat(full), "♡".repeat(empty))
}

fn draw_hud<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let width = state.tuning.canvas_width;
    let height = state.tuning.canvas_height;

    surface.draw_text(
        &format!("Score: {}", state.score),
        Vec2::new(HUD_MARGIN, HUD_BASELINE),
        TextAlign::Left,
        HUD_FONT,
        palette::TEXT,
    );
    surface.draw_text(
        &health_label(state.player.health, state.player.max_health),
        Vec2::new(width - HUD_MARGIN, HUD_BASELINE),
        TextAlign::Right,
        HUD_FONT,
        palette::TEXT,
    );

    if state.is_game_over() {
        surface.fill_rect(Aabb::new(0.0, 0.0, width, height), palette::GAME_OVER_SHADE);
        surface.draw_text(
            "GAME OVER",
            Vec2::new(width / 2.0, height / 2.0 - 20.0),
            TextAlign::Center,
            TITLE_FONT,
            palette::GAME_OVER_TEXT,
        );
        surface.draw_text(
            "Press R to restart",
            Vec2::new(width / 2.0, height / 2.0 + 20.0),
            TextAlign::Center,
            HUD_FONT,
            palette::TEXT,
        );
    }
}
