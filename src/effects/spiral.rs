use macroquad::prelude::*;

use crate::clock::FrameClock;
use crate::config;
use crate::effect::Effect;
use crate::tween;

/// Ring of dots assembled one at a time around a center point, then torn
/// down in reverse (stack-pop) order, then faded.
pub struct SpiralCircles {
    pub center: Vec2,
    pub color: Color,
    pub start_angle: f32,
    pub activated: usize,
    pub positions: Vec<Vec2>,
    pub opacity: f32,
}

impl SpiralCircles {
    pub fn spawn(center: Vec2, rng: &mut impl ::rand::Rng) -> Self {
        Self {
            center,
            color: tween::random_color(rng),
            start_angle: rng.gen_range(0.0..std::f32::consts::TAU),
            activated: 0,
            positions: Vec::with_capacity(config::SPIRAL_DOT_COUNT),
            opacity: config::OPACITY_FULL,
        }
    }

    fn dot_position(&self, index: usize) -> Vec2 {
        let step = std::f32::consts::TAU / config::SPIRAL_DOT_COUNT as f32;
        let angle = self.start_angle + index as f32 * step;
        self.center + Vec2::from_angle(angle) * config::SPIRAL_RADIUS
    }
}

impl Effect for SpiralCircles {
    fn update(&mut self, clock: &FrameClock) {
        if clock.frame % config::SPIRAL_ACTIVATE_EVERY == 0
            && self.activated < config::SPIRAL_DOT_COUNT
        {
            let pos = self.dot_position(self.activated);
            self.positions.push(pos);
            self.activated += 1;
        } else if self.activated >= config::SPIRAL_DOT_COUNT && !self.positions.is_empty() {
            self.positions.pop();
        } else if self.positions.is_empty() {
            self.opacity -= config::SPIRAL_FADE;
        }
    }

    fn draw(&self) {
        let color = tween::with_alpha(self.color, self.opacity);
        for pos in &self.positions {
            draw_circle(pos.x, pos.y, config::SPIRAL_DOT_DIAMETER * 0.5, color);
        }
    }

    fn is_finished(&self) -> bool {
        self.opacity <= 0.0 && self.positions.is_empty()
    }

    fn name(&self) -> &'static str {
        "spiral_circles"
    }
}
