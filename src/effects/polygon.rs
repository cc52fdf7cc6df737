use macroquad::prelude::*;

use crate::clock::FrameClock;
use crate::config;
use crate::effect::Effect;
use crate::tween;

/// Regular-ish polygon that morphs from a triangle toward an octagon by a
/// fractional side count, then shrinks away. The drawn vertex count is the
/// floor of the continuous side count, spaced by TAU over the continuous
/// value, so mid-morph shapes are deliberately lopsided.
pub struct MorphingPolygon {
    pub center: Vec2,
    pub color: Color,
    pub sides: f32,
    pub scale: f32,
    pub start_angle: f32,
    pub opacity: f32,
}

impl MorphingPolygon {
    pub fn spawn(center: Vec2, rng: &mut impl ::rand::Rng) -> Self {
        Self {
            center,
            color: tween::random_color(rng),
            sides: config::POLY_START_SIDES,
            scale: 1.0,
            start_angle: rng.gen_range(0.0..std::f32::consts::TAU),
            opacity: config::OPACITY_FULL,
        }
    }

    fn vertices(&self) -> Vec<Vec2> {
        let count = self.sides.floor() as usize;
        let radius = config::POLY_RADIUS * self.scale;
        (0..count)
            .map(|i| {
                let angle = self.start_angle + std::f32::consts::TAU / self.sides * i as f32;
                self.center + Vec2::from_angle(angle) * radius
            })
            .collect()
    }
}

impl Effect for MorphingPolygon {
    fn update(&mut self, _clock: &FrameClock) {
        if self.sides < config::POLY_MAX_SIDES {
            self.sides += config::POLY_SIDE_STEP;
            if self.sides > config::POLY_MAX_SIDES {
                self.sides = config::POLY_MAX_SIDES;
            }
        } else {
            self.scale -= config::POLY_SCALE_STEP;
        }
    }

    fn draw(&self) {
        if self.scale <= 0.0 {
            return;
        }
        let verts = self.vertices();
        let color = tween::with_alpha(self.color, self.opacity);
        // Convex fan fill from the first vertex.
        for i in 1..verts.len().saturating_sub(1) {
            draw_triangle(verts[0], verts[i], verts[i + 1], color);
        }
    }

    fn is_finished(&self) -> bool {
        self.scale <= 0.0
    }

    fn name(&self) -> &'static str {
        "morphing_polygon"
    }
}
