//! Triangle batching for 2D primitives
//!
//! Vertices stay in canvas pixels; the pipeline maps them to clip space.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use super::{Surface, TextAlign};
use crate::Color;
use crate::palette;
use crate::sim::Aabb;

/// Default circle tessellation
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Text queued for the host's text layer
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub pos: Vec2,
    pub align: TextAlign,
    pub size: f32,
    pub color: Color,
}

/// One frame worth of shapes and text
#[derive(Debug, Clone)]
pub struct ShapeBatch {
    pub clear_color: Color,
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextRun>,
    circle_segments: u32,
}

impl Default for ShapeBatch {
    fn default() -> Self {
        Self::new(CIRCLE_SEGMENTS)
    }
}

impl ShapeBatch {
    pub fn new(circle_segments: u32) -> Self {
        Self {
            clear_color: palette::BACKGROUND,
            vertices: Vec::with_capacity(1024),
            texts: Vec::new(),
            circle_segments: circle_segments.max(3),
        }
    }

    /// Number of triangles queued
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl Surface for ShapeBatch {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
        self.texts.clear();
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        let c = color.to_array();
        let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());

        // Two triangles
        self.vertices.push(Vertex::new(l, t, c));
        self.vertices.push(Vertex::new(l, b, c));
        self.vertices.push(Vertex::new(r, t, c));

        self.vertices.push(Vertex::new(r, t, c));
        self.vertices.push(Vertex::new(l, b, c));
        self.vertices.push(Vertex::new(r, b, c));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let c = color.to_array();
        let segments = self.circle_segments;

        for i in 0..segments {
            let theta1 = (i as f32 / segments as f32) * TAU;
            let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

            // Triangle from center to edge
            self.vertices.push(Vertex::new(center.x, center.y, c));
            self.vertices.push(Vertex::new(
                center.x + radius * theta1.cos(),
                center.y + radius * theta1.sin(),
                c,
            ));
            self.vertices.push(Vertex::new(
                center.x + radius * theta2.cos(),
                center.y + radius * theta2.sin(),
                c,
            ));
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, align: TextAlign, size: f32, color: Color) {
        self.texts.push(TextRun {
            text: text.to_owned(),
            pos,
            align,
            size,
            color,
        });
    }
}
