//! Per-frame simulation tick
//!
//! Advances the session by one frame. Physics constants are per-frame
//! quantities, so one call equals one displayed frame. Wall-clock time is
//! passed in for cooldowns and timed windows only.

use glam::Vec2;

use super::collision::{bumps_head, circle_outside_x, clamp_x, lands_on};
use super::level;
use super::state::{Facing, GamePhase, GameState, Player, Projectile};
use crate::input::{Action, InputLatch};
use crate::palette;

/// Gameplay events produced by a tick (for logging and HUD effects)
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    ProjectileFired { pos: Vec2, dx: f32 },
    EnemyKilled { enemy: usize, score: u32 },
    PlayerHit { health: u32 },
    PlayerFell { health: u32 },
    GameOver { score: u32 },
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &InputLatch, now_ms: f64) -> Vec<TickEvent> {
    // Frozen until reset
    if state.phase != GamePhase::Running {
        return Vec::new();
    }

    let mut events = Vec::new();
    state.time_ticks += 1;

    move_horizontal(&mut state.player, input);
    apply_vertical(&mut state.player, input);
    resolve_platforms(state);
    apply_world_bounds(state, now_ms, &mut events);
    if let Some(event) = try_attack(state, input, now_ms) {
        events.push(event);
    }
    decay_invincibility(&mut state.player, now_ms);

    update_projectiles(state);
    update_enemies(state);
    check_projectile_hits(state, &mut events);
    check_player_hits(state, now_ms, &mut events);

    if state.player.is_dead() {
        state.phase = GamePhase::GameOver;
        log::info!("Game over (score {})", state.score);
        events.push(TickEvent::GameOver { score: state.score });
    }

    events
}

/// Restore the session to its initial state. Only honoured after game over.
pub fn reset(state: &mut GameState) -> bool {
    if state.phase != GamePhase::GameOver {
        log::debug!("Reset ignored while running");
        return false;
    }

    state.player = Player::new(&state.tuning);
    state.projectiles.clear();
    for enemy in &mut state.enemies {
        level::restore_enemy(enemy, &state.platforms);
    }
    state.score = 0;
    state.time_ticks = 0;
    state.phase = GamePhase::Running;

    log::info!("Game reset");
    true
}

/// Left/right movement. Both held cancels out; the last one sets facing.
pub fn move_horizontal(player: &mut Player, input: &InputLatch) {
    if input.is_held(Action::MoveLeft) {
        player.pos.x -= player.speed;
        player.facing = Facing::Left;
    }
    if input.is_held(Action::MoveRight) {
        player.pos.x += player.speed;
        player.facing = Facing::Right;
    }
}

/// Jump impulse, gravity and vertical integration
pub fn apply_vertical(player: &mut Player, input: &InputLatch) {
    if input.is_held(Action::Jump) && player.grounded {
        player.dy = -player.jump_strength;
        player.grounded = false;
    }

    player.dy += player.gravity;
    player.pos.y += player.dy;
    player.grounded = false;
}

/// Land on platform tops and bounce off their undersides
pub fn resolve_platforms(state: &mut GameState) {
    let rebound = state.tuning.head_bump_rebound;
    let player = &mut state.player;

    for platform in &state.platforms {
        let p = &platform.bounds;

        if lands_on(&player.bounds(), player.dy, p) {
            player.pos.y = p.top() - player.size.y;
            player.dy = 0.0;
            player.grounded = true;
        }

        if bumps_head(&player.bounds(), player.dy, p) {
            player.pos.y = p.bottom();
            player.dy = rebound;
        }
    }
}

/// Keep the player on the canvas horizontally; falling off the bottom costs health
pub fn apply_world_bounds(state: &mut GameState, now_ms: f64, events: &mut Vec<TickEvent>) {
    let tuning = &state.tuning;
    let player = &mut state.player;

    player.pos.x = clamp_x(player.pos.x, player.size.x, tuning.canvas_width);

    if player.pos.y + player.size.y > tuning.canvas_height && !player.grounded {
        player.take_hit(now_ms);
        log::info!("Player fell, health {}", player.health);
        // On the last point the player stays where it fell
        if !player.is_dead() {
            player.respawn(tuning);
        }
        events.push(TickEvent::PlayerFell {
            health: player.health,
        });
    }
}

/// Fire a projectile from the leading edge if the cooldown allows
pub fn try_attack(state: &mut GameState, input: &InputLatch, now_ms: f64) -> Option<TickEvent> {
    let player = &mut state.player;
    if !input.is_held(Action::Attack) || !player.can_attack(now_ms) {
        return None;
    }

    let radius = state.tuning.projectile_radius;
    let x = match player.facing {
        Facing::Right => player.pos.x + player.size.x + radius,
        Facing::Left => player.pos.x - radius,
    };
    let pos = Vec2::new(x, player.pos.y + player.size.y / 2.0);
    let dx = state.tuning.projectile_speed * player.facing.sign();

    state.projectiles.push(Projectile {
        pos,
        radius,
        dx,
        color: palette::PROJECTILE,
    });
    player.last_attack_ms = Some(now_ms);

    Some(TickEvent::ProjectileFired { pos, dx })
}

/// End the invincibility window once it has run out
pub fn decay_invincibility(player: &mut Player, now_ms: f64) {
    if player.invincible && now_ms - player.last_hit_ms > player.invincibility_ms {
        player.invincible = false;
    }
}

/// Move projectiles and drop the ones that left the canvas
pub fn update_projectiles(state: &mut GameState) {
    let width = state.tuning.canvas_width;
    for p in &mut state.projectiles {
        p.pos.x += p.dx;
    }
    state
        .projectiles
        .retain(|p| !circle_outside_x(p.pos.x, p.radius, width));
}

/// Walk patrolling enemies back and forth inside their bands
pub fn update_enemies(state: &mut GameState) {
    for enemy in state.enemies.iter_mut().filter(|e| e.patrols()) {
        let x = enemy.bounds.pos.x + enemy.speed * enemy.direction;
        let (min, max) = enemy.patrol_band();
        if x < min || x > max {
            enemy.direction = -enemy.direction;
        }
        enemy.bounds.pos.x = x.clamp(min, max);
    }
}

/// Projectile vs enemy: each projectile kills at most one enemy
pub fn check_projectile_hits(state: &mut GameState, events: &mut Vec<TickEvent>) {
    let mut i = 0;
    while i < state.projectiles.len() {
        let shot = state.projectiles[i].bounds();
        let hit = state
            .enemies
            .iter()
            .position(|e| e.alive && e.bounds.overlaps(&shot));

        match hit {
            Some(enemy) => {
                state.enemies[enemy].alive = false;
                state.projectiles.swap_remove(i);
                state.score += state.tuning.kill_score;
                log::info!("Enemy {} down, score {}", enemy, state.score);
                events.push(TickEvent::EnemyKilled {
                    enemy,
                    score: state.score,
                });
            }
            None => i += 1,
        }
    }
}

/// Player vs enemy: at most one hit per tick, none while invincible
pub fn check_player_hits(state: &mut GameState, now_ms: f64, events: &mut Vec<TickEvent>) {
    if state.player.invincible {
        return;
    }

    let body = state.player.bounds();
    let touching = state
        .enemies
        .iter()
        .any(|e| e.alive && e.bounds.overlaps(&body));
    if !touching {
        return;
    }

    let player = &mut state.player;
    player.take_hit(now_ms);
    log::info!("Player hit, health {}", player.health);
    if !player.is_dead() {
        player.respawn(&state.tuning);
    }
    events.push(TickEvent::PlayerHit {
        health: player.health,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Aabb;
    use crate::sim::state::{Enemy, Platform};
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    const T0: f64 = 10_000.0;

    fn held(actions: &[Action]) -> InputLatch {
        let mut latch = InputLatch::new();
        for &a in actions {
            latch.press(a);
        }
        latch
    }

    fn enemy_at(x: f32, y: f32, speed: f32, patrol_range: f32) -> Enemy {
        Enemy {
            bounds: Aabb::new(x, y, 30.0, 30.0),
            alive: true,
            speed,
            direction: 1.0,
            start_direction: 1.0,
            original_x: x,
            patrol_range,
            platform: 0,
        }
    }

    fn floor_only(tuning: &Tuning) -> Vec<Platform> {
        level::platforms(tuning).into_iter().take(1).collect()
    }

    /// Player standing on the floor of an empty level
    fn empty_level() -> GameState {
        let tuning = Tuning::default();
        let platforms = floor_only(&tuning);
        let mut state = GameState::with_level(tuning, platforms, Vec::new());
        tick(&mut state, &InputLatch::new(), T0);
        assert!(state.player.grounded);
        state
    }

    #[test]
    fn test_player_starts_on_floor() {
        let mut state = GameState::new(Tuning::default());
        tick(&mut state, &InputLatch::new(), T0);
        assert!(state.player.grounded);
        assert_eq!(state.player.pos.y + state.player.size.y, 460.0);
        assert_eq!(state.player.dy, 0.0);
        assert_eq!(state.player.health, 3);
    }

    #[test]
    fn test_right_edge_clamp() {
        let mut state = empty_level();
        state.player.pos.x = 770.0;
        tick(&mut state, &held(&[Action::MoveRight]), T0);
        assert_eq!(state.player.pos.x, 770.0);
        assert_eq!(state.player.facing, Facing::Right);
    }

    #[test]
    fn test_left_edge_clamp() {
        let mut state = empty_level();
        state.player.pos.x = 2.0;
        tick(&mut state, &held(&[Action::MoveLeft]), T0);
        assert_eq!(state.player.pos.x, 0.0);
        assert_eq!(state.player.facing, Facing::Left);
    }

    #[test]
    fn test_both_directions_cancel() {
        let mut state = empty_level();
        let x = state.player.pos.x;
        tick(&mut state, &held(&[Action::MoveLeft, Action::MoveRight]), T0);
        assert_eq!(state.player.pos.x, x);
        assert_eq!(state.player.facing, Facing::Right);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut state = empty_level();
        let jump = held(&[Action::Jump]);
        tick(&mut state, &jump, T0);
        assert!(!state.player.grounded);
        assert!((state.player.dy - (-11.0 + 0.45)).abs() < 1e-5);

        // Holding jump mid-air does nothing extra
        let dy = state.player.dy;
        tick(&mut state, &jump, T0);
        assert!((state.player.dy - (dy + 0.45)).abs() < 1e-5);
    }

    #[test]
    fn test_jump_lands_back_on_floor() {
        let mut state = empty_level();
        tick(&mut state, &held(&[Action::Jump]), T0);
        for _ in 0..200 {
            tick(&mut state, &InputLatch::new(), T0);
        }
        assert!(state.player.grounded);
        assert_eq!(state.player.pos.y + state.player.size.y, 460.0);
        assert_eq!(state.player.health, 3);
    }

    #[test]
    fn test_landing_snaps_to_platform_top() {
        let mut state = empty_level();
        state.platforms.push(Platform {
            bounds: Aabb::new(50.0, 300.0, 200.0, 20.0),
            color: palette::LEDGE,
        });
        // Feet 4px above the ledge, falling fast
        state.player.pos = Vec2::new(100.0, 246.0);
        state.player.dy = 6.0;
        state.player.grounded = false;
        tick(&mut state, &InputLatch::new(), T0);
        assert_eq!(state.player.pos.y, 250.0);
        assert_eq!(state.player.dy, 0.0);
        assert!(state.player.grounded);
    }

    #[test]
    fn test_fast_fall_does_not_tunnel() {
        let mut state = empty_level();
        state.platforms.push(Platform {
            bounds: Aabb::new(50.0, 300.0, 200.0, 20.0),
            color: palette::LEDGE,
        });
        // One tick moves the feet 30px, past the whole ledge
        state.player.pos = Vec2::new(100.0, 245.0);
        state.player.dy = 30.0;
        state.player.grounded = false;
        tick(&mut state, &InputLatch::new(), T0);
        assert_eq!(state.player.pos.y, 250.0);
        assert!(state.player.grounded);
    }

    #[test]
    fn test_head_bump() {
        let mut state = empty_level();
        state.platforms.push(Platform {
            bounds: Aabb::new(50.0, 300.0, 200.0, 20.0),
            color: palette::LEDGE,
        });
        // Head 2px under the ledge, rising
        state.player.pos = Vec2::new(100.0, 322.0);
        state.player.dy = -8.0;
        state.player.grounded = false;
        tick(&mut state, &InputLatch::new(), T0);
        assert_eq!(state.player.pos.y, 320.0);
        assert_eq!(state.player.dy, 0.1);
        assert!(!state.player.grounded);
    }

    #[test]
    fn test_passes_up_through_from_beside() {
        let mut state = empty_level();
        state.platforms.push(Platform {
            bounds: Aabb::new(300.0, 300.0, 100.0, 20.0),
            color: palette::LEDGE,
        });
        state.player.pos = Vec2::new(100.0, 322.0);
        state.player.dy = -8.0;
        state.player.grounded = false;
        tick(&mut state, &InputLatch::new(), T0);
        assert!(state.player.pos.y < 322.0);
        assert!(state.player.dy < 0.0);
    }

    #[test]
    fn test_fall_costs_health_and_respawns() {
        let tuning = Tuning::default();
        let mut state = GameState::with_level(tuning, Vec::new(), Vec::new());
        state.player.pos.y = 455.0;
        state.player.dy = 0.0;
        tick(&mut state, &InputLatch::new(), T0);
        assert_eq!(state.player.health, 2);
        assert!(state.player.invincible);
        assert_eq!(state.player.last_hit_ms, T0);
        assert!(state.player.grounded);
        assert_eq!(state.player.pos, Vec2::new(100.0, 410.0));
    }

    #[test]
    fn test_fatal_fall_leaves_player_in_place() {
        let tuning = Tuning::default();
        let mut state = GameState::with_level(tuning, Vec::new(), Vec::new());
        state.player.health = 1;
        state.player.pos.y = 455.0;
        let events = tick(&mut state, &InputLatch::new(), T0);
        assert_eq!(state.player.health, 0);
        assert!(state.player.pos.y > 455.0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(events.contains(&TickEvent::GameOver { score: 0 }));
    }

    #[test]
    fn test_fall_hurts_even_while_invincible() {
        let tuning = Tuning::default();
        let mut state = GameState::with_level(tuning, Vec::new(), Vec::new());
        state.player.invincible = true;
        state.player.last_hit_ms = T0;
        state.player.pos.y = 455.0;
        tick(&mut state, &InputLatch::new(), T0 + 10.0);
        assert_eq!(state.player.health, 2);
    }

    #[test]
    fn test_attack_cooldown_is_hard_floor() {
        let mut state = empty_level();
        let attack = held(&[Action::Attack]);

        assert!(try_attack(&mut state, &attack, T0).is_some());
        assert!(try_attack(&mut state, &attack, T0 + 100.0).is_none());
        assert_eq!(state.projectiles.len(), 1);

        assert!(try_attack(&mut state, &attack, T0 + 450.0).is_some());
        assert_eq!(state.projectiles.len(), 2);
    }

    #[test]
    fn test_projectile_spawns_at_leading_edge() {
        let mut state = empty_level();
        let attack = held(&[Action::Attack]);
        state.player.pos = Vec2::new(200.0, 410.0);

        try_attack(&mut state, &attack, T0);
        let p = &state.projectiles[0];
        assert_eq!(p.pos, Vec2::new(236.0, 435.0));
        assert_eq!(p.dx, 8.0);

        state.player.facing = Facing::Left;
        try_attack(&mut state, &attack, T0 + 500.0);
        let p = &state.projectiles[1];
        assert_eq!(p.pos, Vec2::new(194.0, 435.0));
        assert_eq!(p.dx, -8.0);
    }

    #[test]
    fn test_projectile_culled_past_edge() {
        let mut state = empty_level();
        state.projectiles.push(Projectile {
            pos: Vec2::new(799.0, 200.0),
            radius: 6.0,
            dx: 8.0,
            color: palette::PROJECTILE,
        });
        update_projectiles(&mut state);
        assert!(state.projectiles.is_empty());
        for _ in 0..10 {
            update_projectiles(&mut state);
            assert!(state.projectiles.is_empty());
        }
    }

    #[test]
    fn test_projectile_culled_past_left_edge() {
        let mut state = empty_level();
        state.projectiles.push(Projectile {
            pos: Vec2::new(10.0, 200.0),
            radius: 6.0,
            dx: -8.0,
            color: palette::PROJECTILE,
        });
        update_projectiles(&mut state);
        assert_eq!(state.projectiles.len(), 1);
        update_projectiles(&mut state);
        assert_eq!(state.projectiles.len(), 1);
        update_projectiles(&mut state);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_invincibility_expires() {
        let mut player = Player::new(&Tuning::default());
        player.take_hit(T0);
        decay_invincibility(&mut player, T0 + 1500.0);
        assert!(player.invincible);
        decay_invincibility(&mut player, T0 + 1501.0);
        assert!(!player.invincible);
    }

    #[test]
    fn test_enemy_patrol_turns_at_band_edges() {
        let mut state = empty_level();
        state.enemies.push(enemy_at(200.0, 100.0, 1.0, 5.0));

        let mut xs = Vec::new();
        for _ in 0..30 {
            update_enemies(&mut state);
            xs.push(state.enemies[0].bounds.pos.x);
        }
        assert!(xs.iter().all(|&x| (195.0..=205.0).contains(&x)));
        assert!(xs.contains(&205.0));
        assert!(xs.contains(&195.0));
    }

    #[test]
    fn test_stationary_enemy_never_moves() {
        let mut state = empty_level();
        state.enemies.push(enemy_at(450.0, 100.0, 0.0, 80.0));
        state.enemies.push(enemy_at(600.0, 100.0, 1.5, 0.0));
        for _ in 0..1000 {
            update_enemies(&mut state);
        }
        assert_eq!(state.enemies[0].bounds.pos.x, 450.0);
        assert_eq!(state.enemies[1].bounds.pos.x, 600.0);
    }

    #[test]
    fn test_dead_enemy_stops_patrolling() {
        let mut state = empty_level();
        let mut enemy = enemy_at(200.0, 100.0, 1.0, 50.0);
        enemy.alive = false;
        state.enemies.push(enemy);
        update_enemies(&mut state);
        assert_eq!(state.enemies[0].bounds.pos.x, 200.0);
    }

    #[test]
    fn test_projectile_kills_enemy() {
        let mut state = empty_level();
        state.enemies.push(enemy_at(450.0, 270.0, 0.0, 0.0));
        state.projectiles.push(Projectile {
            pos: Vec2::new(465.0, 285.0),
            radius: 6.0,
            dx: 8.0,
            color: palette::PROJECTILE,
        });

        let events = tick(&mut state, &InputLatch::new(), T0);
        assert!(!state.enemies[0].alive);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.score, 10);
        assert!(events.contains(&TickEvent::EnemyKilled { enemy: 0, score: 10 }));
    }

    #[test]
    fn test_one_projectile_kills_one_enemy() {
        let mut state = empty_level();
        state.enemies.push(enemy_at(450.0, 270.0, 0.0, 0.0));
        state.enemies.push(enemy_at(455.0, 270.0, 0.0, 0.0));
        state.projectiles.push(Projectile {
            pos: Vec2::new(465.0, 285.0),
            radius: 6.0,
            dx: 0.0,
            color: palette::PROJECTILE,
        });
        check_projectile_hits(&mut state, &mut Vec::new());
        assert_eq!(state.living_enemies(), 1);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_projectile_ignores_dead_enemy() {
        let mut state = empty_level();
        let mut enemy = enemy_at(450.0, 270.0, 0.0, 0.0);
        enemy.alive = false;
        state.enemies.push(enemy);
        state.projectiles.push(Projectile {
            pos: Vec2::new(465.0, 285.0),
            radius: 6.0,
            dx: 0.0,
            color: palette::PROJECTILE,
        });
        check_projectile_hits(&mut state, &mut Vec::new());
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_enemy_contact_costs_one_health() {
        let mut state = empty_level();
        // Two enemies overlapping the player at once
        state.enemies.push(enemy_at(300.0, 430.0, 0.0, 0.0));
        state.enemies.push(enemy_at(310.0, 430.0, 0.0, 0.0));
        state.player.pos.x = 300.0;

        let events = tick(&mut state, &InputLatch::new(), T0);
        assert_eq!(state.player.health, 2);
        assert!(state.player.invincible);
        assert_eq!(state.player.pos, Vec2::new(100.0, 410.0));
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, TickEvent::PlayerHit { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn test_invincible_player_ignores_enemies() {
        let mut state = empty_level();
        state.enemies.push(enemy_at(300.0, 430.0, 0.0, 0.0));
        state.player.pos.x = 300.0;
        state.player.invincible = true;
        state.player.last_hit_ms = T0;

        tick(&mut state, &InputLatch::new(), T0 + 100.0);
        assert_eq!(state.player.health, 3);
        assert_eq!(state.player.pos.x, 300.0);
    }

    #[test]
    fn test_last_hit_ends_the_game() {
        let mut state = empty_level();
        state.enemies.push(enemy_at(300.0, 430.0, 0.0, 0.0));
        state.player.pos.x = 300.0;
        state.player.health = 1;

        tick(&mut state, &InputLatch::new(), T0);
        assert_eq!(state.player.health, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        // No respawn on the fatal hit
        assert_eq!(state.player.pos.x, 300.0);

        // Frozen: no physics, no events
        let before = state.player.pos;
        let ticks = state.time_ticks;
        for i in 0..10 {
            let events = tick(&mut state, &held(&[Action::MoveLeft, Action::Jump]), T0 + i as f64);
            assert!(events.is_empty());
        }
        assert_eq!(state.player.pos, before);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_reset_ignored_while_running() {
        let mut state = GameState::new(Tuning::default());
        state.score = 30;
        assert!(!reset(&mut state));
        assert_eq!(state.score, 30);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut state = GameState::new(Tuning::default());
        for _ in 0..50 {
            tick(&mut state, &held(&[Action::MoveRight]), T0);
        }
        state.enemies[0].alive = false;
        state.enemies[2].bounds.pos.x = 600.0;
        state.score = 20;
        state.projectiles.push(Projectile {
            pos: Vec2::new(10.0, 10.0),
            radius: 6.0,
            dx: 8.0,
            color: palette::PROJECTILE,
        });
        state.player.health = 0;
        state.phase = GamePhase::GameOver;

        assert!(reset(&mut state));
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.health, state.player.max_health);
        assert_eq!(state.score, 0);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.player.pos, Vec2::new(100.0, 410.0));
        assert!(state.player.last_attack_ms.is_none());
        for enemy in &state.enemies {
            assert!(enemy.alive);
            assert_eq!(enemy.bounds.pos.x, enemy.original_x);
        }
    }

    fn action_mask(mask: u8) -> InputLatch {
        let mut latch = InputLatch::new();
        for (bit, action) in [Action::MoveLeft, Action::MoveRight, Action::Jump, Action::Attack]
            .into_iter()
            .enumerate()
        {
            latch.set(action, mask & (1 << bit) != 0);
        }
        latch
    }

    proptest! {
        #[test]
        fn health_and_score_stay_in_bounds(
            masks in proptest::collection::vec(0u8..16, 1..400)
        ) {
            let mut state = GameState::new(Tuning::default());
            let mut last_score = 0;
            for (i, mask) in masks.iter().enumerate() {
                let now = T0 + i as f64 * crate::consts::FRAME_MS;
                tick(&mut state, &action_mask(*mask), now);

                prop_assert!(state.player.health <= state.player.max_health);
                prop_assert!(state.score >= last_score);
                prop_assert_eq!(state.score % 10, 0);
                prop_assert!(state.player.pos.x >= 0.0);
                prop_assert!(state.player.pos.x + state.player.size.x <= 800.0);
                prop_assert_eq!(state.is_game_over(), state.player.health == 0);
                last_score = state.score;
            }
        }

        #[test]
        fn landing_rests_feet_on_top(
            start_gap in 0.0f32..20.0,
            dy in 0.0f32..25.0,
        ) {
            let mut state = empty_level();
            state.platforms.push(Platform {
                bounds: Aabb::new(50.0, 300.0, 200.0, 20.0),
                color: palette::LEDGE,
            });
            state.player.pos = Vec2::new(100.0, 250.0 - start_gap);
            state.player.dy = dy;
            state.player.grounded = false;

            let next_dy = dy + state.player.gravity;
            let feet = 250.0 - start_gap + next_dy + state.player.size.y;
            let crosses = feet >= 300.0;
            tick(&mut state, &InputLatch::new(), T0);

            if crosses {
                prop_assert_eq!(state.player.pos.y, 250.0);
                prop_assert_eq!(state.player.dy, 0.0);
                prop_assert!(state.player.grounded);
            } else {
                prop_assert!(state.player.pos.y < 250.0);
            }
        }
    }
}
