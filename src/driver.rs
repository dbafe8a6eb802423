//! Frame driver
//!
//! Glues the input latch, the simulation and the drawing surface: every
//! display frame runs exactly one tick and one paint, in that order.

use crate::input::{Action, InputLatch};
use crate::renderer::{Surface, draw_frame};
use crate::sim::{self, GameState, TickEvent};
use crate::tuning::Tuning;

pub struct FrameDriver {
    state: GameState,
    latch: InputLatch,
    frames: u64,
}

impl FrameDriver {
    pub fn new(tuning: Tuning) -> Self {
        Self::with_state(GameState::new(tuning))
    }

    pub fn with_state(state: GameState) -> Self {
        Self {
            state,
            latch: InputLatch::new(),
            frames: 0,
        }
    }

    /// Returns true if the key is bound, so the host can suppress its default action
    pub fn key_down(&mut self, code: &str) -> bool {
        self.latch.key_down(code)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.latch.key_up(code)
    }

    /// Focus lost; any held key would otherwise stick
    pub fn release_all(&mut self) {
        self.latch.clear();
    }

    pub fn latch(&self) -> &InputLatch {
        &self.latch
    }

    pub fn latch_mut(&mut self) -> &mut InputLatch {
        &mut self.latch
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Frames driven since construction (not reset with the session)
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one display frame: honour a pending restart, tick, then paint
    pub fn frame<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> Vec<TickEvent> {
        self.frames += 1;

        if self.state.is_game_over() && self.latch.is_held(Action::Reset) {
            sim::reset(&mut self.state);
        }

        let events = sim::tick(&mut self.state, &self.latch, now_ms);
        for event in &events {
            if let TickEvent::ProjectileFired { pos, dx } = event {
                log::debug!("Shot fired at ({:.0}, {:.0}) dx {}", pos.x, pos.y, dx);
            }
        }

        draw_frame(&self.state, now_ms, surface);
        events
    }
}
