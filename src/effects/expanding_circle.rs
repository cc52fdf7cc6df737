use macroquad::prelude::*;

use crate::canvas::Canvas;
use crate::clock::FrameClock;
use crate::config;
use crate::effect::Effect;
use crate::tween;

/// A single disk that grows to a random maximum, then fades out.
pub struct ExpandingCircle {
    pub pos: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub color: Color,
    pub opacity: f32,
}

impl ExpandingCircle {
    pub fn spawn(canvas: &Canvas, rng: &mut impl ::rand::Rng) -> Self {
        Self {
            pos: canvas.random_point(rng),
            radius: rng.gen_range(config::DISK_START_MIN..config::DISK_START_MAX),
            max_radius: rng.gen_range(config::DISK_MAX_MIN..config::DISK_MAX_MAX),
            color: tween::random_color(rng),
            opacity: config::OPACITY_FULL,
        }
    }
}

impl Effect for ExpandingCircle {
    fn update(&mut self, _clock: &FrameClock) {
        if self.radius < self.max_radius {
            self.radius += config::DISK_GROWTH;
        } else {
            self.opacity -= config::DISK_FADE;
        }
    }

    fn draw(&self) {
        // The size value is a diameter.
        draw_circle(
            self.pos.x,
            self.pos.y,
            self.radius * 0.5,
            tween::with_alpha(self.color, self.opacity),
        );
    }

    fn is_finished(&self) -> bool {
        self.opacity <= 0.0
    }

    fn name(&self) -> &'static str {
        "expanding_circle"
    }
}
