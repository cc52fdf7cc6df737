use macroquad::prelude::*;

use crate::canvas::Canvas;
use crate::clock::FrameClock;
use crate::config;
use crate::effect::Effect;
use crate::tween;

/// One horizontal stroke: the head sweeps right toward the target, opacity
/// ramping up with distance traveled; once the head arrives the tail chases
/// it with the ramp inverted. A sinusoidal wobble offsets the rendered y
/// without touching completion logic.
pub struct WaveSegment {
    pub y: f32,
    pub origin_x: f32,
    pub tail_x: f32,
    pub head_x: f32,
    pub target_x: f32,
    pub opacity: f32,
    pub phase: f32,
    pub finished: bool,
}

impl WaveSegment {
    pub fn spawn(y: f32, canvas: &Canvas, rng: &mut impl ::rand::Rng) -> Self {
        Self {
            y,
            origin_x: config::WAVE_ORIGIN_X,
            tail_x: config::WAVE_ORIGIN_X,
            head_x: config::WAVE_ORIGIN_X,
            target_x: canvas.width - config::WAVE_MARGIN_X,
            opacity: 0.0,
            phase: rng.gen_range(0.0..std::f32::consts::TAU),
            finished: false,
        }
    }

    pub fn update(&mut self) {
        if (self.head_x - self.target_x).abs() > config::WAVE_ARRIVE_EPSILON {
            self.head_x += config::WAVE_SPEED;
            self.opacity =
                tween::map_range(self.head_x, self.origin_x, self.target_x, 0.0, 255.0);
        } else if (self.tail_x - self.head_x).abs() > config::WAVE_ARRIVE_EPSILON {
            self.tail_x += config::WAVE_SPEED;
            self.opacity =
                tween::map_range(self.tail_x, self.origin_x, self.target_x, 255.0, 0.0);
        } else {
            self.finished = true;
        }
        self.phase += config::WAVE_PHASE_STEP;
    }

    pub fn draw(&self) {
        let wobble = self.phase.sin() * config::WAVE_AMPLITUDE;
        let y = self.y + wobble;
        draw_line(
            self.tail_x,
            y,
            self.head_x,
            y,
            config::WAVE_STROKE,
            tween::with_alpha(BLACK, self.opacity),
        );
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Six parallel wave segments, vertically centered at a fixed spacing.
pub struct WaveLines {
    pub segments: Vec<WaveSegment>,
    pub finished: bool,
}

impl WaveLines {
    pub fn spawn(canvas: &Canvas, rng: &mut impl ::rand::Rng) -> Self {
        let count = config::WAVE_LINE_COUNT;
        let base_y = canvas.height * 0.5 - (count as f32 * 0.5) * config::WAVE_SPACING;
        let segments = (0..count)
            .map(|i| WaveSegment::spawn(base_y + i as f32 * config::WAVE_SPACING, canvas, rng))
            .collect();
        Self {
            segments,
            finished: false,
        }
    }
}

impl Effect for WaveLines {
    fn update(&mut self, _clock: &FrameClock) {
        let mut all_finished = true;
        for segment in &mut self.segments {
            segment.update();
            if !segment.is_finished() {
                all_finished = false;
            }
        }
        self.finished = all_finished;
    }

    fn draw(&self) {
        for segment in &self.segments {
            segment.draw();
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn name(&self) -> &'static str {
        "wave_lines"
    }
}
