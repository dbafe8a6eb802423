//! Axis-aligned collision tests and platform contact resolution
//!
//! Everything in the world is a rectangle except projectiles, which are
//! circles tested through their bounding boxes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::LANDING_TOLERANCE;

/// Axis-aligned rectangle in canvas pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Bounding box of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            pos: center - Vec2::splat(radius),
            size: Vec2::splat(radius * 2.0),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict horizontal overlap (touching edges do not count)
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.top() < other.bottom() && self.bottom() > other.top()
    }
}

/// True if a body moving down by `dy` this tick crossed onto the platform top.
///
/// Compares the feet before and after the move so a fast fall cannot skip a
/// thin platform, and so a body passing upward through it is not caught.
pub fn lands_on(body: &Aabb, dy: f32, platform: &Aabb) -> bool {
    let feet = body.bottom();
    let prev_feet = feet - dy;
    dy >= 0.0
        && body.overlaps_x(platform)
        && feet >= platform.top()
        && prev_feet <= platform.top() + LANDING_TOLERANCE
}

/// True if a body moving up by `-dy` this tick crossed the platform underside
pub fn bumps_head(body: &Aabb, dy: f32, platform: &Aabb) -> bool {
    let head = body.top();
    let prev_head = head - dy;
    dy < 0.0
        && body.overlaps_x(platform)
        && head <= platform.bottom()
        && prev_head >= platform.bottom() - LANDING_TOLERANCE
}

/// Clamp a left edge so a body of `width` stays inside `[0, world_width]`
#[inline]
pub fn clamp_x(x: f32, width: f32, world_width: f32) -> f32 {
    x.max(0.0).min(world_width - width)
}

/// True once a circle has fully left the horizontal range `[0, world_width]`
#[inline]
pub fn circle_outside_x(center_x: f32, radius: f32, world_width: f32) -> bool {
    center_x - radius > world_width || center_x + radius < 0.0
}
