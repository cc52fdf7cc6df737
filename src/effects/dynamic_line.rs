use macroquad::prelude::*;

use crate::canvas::Canvas;
use crate::clock::FrameClock;
use crate::config;
use crate::effect::Effect;
use crate::tween;

const COLOR_START: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const COLOR_END: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// A jagged line crossing the canvas, revealed one segment per frame with
/// render-time jitter, then faded out. The endpoints are biased to enter
/// from off-canvas above or below.
pub struct DynamicLine {
    pub start: Vec2,
    pub end: Vec2,
    pub revealed: u32,
    pub stroke_offset: f32,
    pub opacity: f32,
}

impl DynamicLine {
    pub fn spawn(canvas: &Canvas, rng: &mut impl ::rand::Rng) -> Self {
        let start_y = rng.gen_range(0.0..canvas.height);
        let end_y = rng.gen_range(0.0..canvas.height);

        // Left-to-right or right-to-left, 50/50.
        let (mut start, mut end) = if rng.gen_bool(0.5) {
            (vec2(0.0, start_y), vec2(canvas.width, end_y))
        } else {
            (vec2(canvas.width, start_y), vec2(0.0, end_y))
        };

        // Then override the y coordinates so the line enters from above or
        // below the canvas bounds.
        if rng.gen_bool(0.5) {
            start.y = rng.gen_range(-config::POLYLINE_EDGE_OVERSHOOT..0.0);
            end.y = rng.gen_range(0.0..canvas.height);
        } else {
            start.y = rng.gen_range(canvas.height..canvas.height + config::POLYLINE_EDGE_OVERSHOOT);
            end.y = rng.gen_range(0.0..canvas.height);
        }

        Self {
            start,
            end,
            revealed: 0,
            stroke_offset: 0.0,
            opacity: config::OPACITY_FULL,
        }
    }

    fn stroke_width(&self) -> f32 {
        config::POLYLINE_BASE_STROKE + self.stroke_offset * config::POLYLINE_STROKE_GAIN
    }
}

impl Effect for DynamicLine {
    fn update(&mut self, _clock: &FrameClock) {
        if self.revealed < config::POLYLINE_SEGMENTS {
            self.revealed += 1;
            self.stroke_offset += config::POLYLINE_OFFSET_STEP;
        } else {
            self.opacity -= config::POLYLINE_FADE;
        }
    }

    fn draw(&self) {
        let total = config::POLYLINE_SEGMENTS as f32;
        let ramp = tween::lerp_color(COLOR_START, COLOR_END, self.revealed as f32 / total);
        let color = tween::with_alpha(ramp, self.opacity);
        let width = self.stroke_width();

        // Endpoints are re-jittered on every render, so the line crackles.
        for i in 0..self.revealed {
            let t1 = i as f32 / total;
            let t2 = (i + 1) as f32 / total;
            let x1 = tween::lerp(self.start.x, self.end.x, t1);
            let y1 = tween::lerp(self.start.y, self.end.y, t1)
                + rand::gen_range(-config::POLYLINE_JITTER, config::POLYLINE_JITTER);
            let x2 = tween::lerp(self.start.x, self.end.x, t2);
            let y2 = tween::lerp(self.start.y, self.end.y, t2)
                + rand::gen_range(-config::POLYLINE_JITTER, config::POLYLINE_JITTER);
            draw_line(x1, y1, x2, y2, width, color);
        }
    }

    fn is_finished(&self) -> bool {
        self.opacity <= 0.0
    }

    fn name(&self) -> &'static str {
        "dynamic_line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn line_with_seed(seed: u64) -> DynamicLine {
        let canvas = Canvas::new(800.0, 600.0);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        DynamicLine::spawn(&canvas, &mut rng)
    }

    #[test]
    fn reveals_all_segments_before_fading() {
        let mut l = line_with_seed(1);
        let clock = FrameClock::new();
        for i in 1..=config::POLYLINE_SEGMENTS {
            l.update(&clock);
            assert_eq!(l.revealed, i);
            assert_eq!(l.opacity, config::OPACITY_FULL);
        }
        l.update(&clock);
        assert_eq!(l.revealed, config::POLYLINE_SEGMENTS);
        assert!(l.opacity < config::OPACITY_FULL);
    }

    #[test]
    fn stroke_width_grows_with_reveal_count() {
        let mut l = line_with_seed(1);
        let clock = FrameClock::new();
        let w0 = l.stroke_width();
        l.update(&clock);
        let w1 = l.stroke_width();
        l.update(&clock);
        let w2 = l.stroke_width();
        assert!(w0 < w1 && w1 < w2);
    }

    #[test]
    fn finishes_after_reveal_plus_fade_ticks() {
        let mut l = line_with_seed(1);
        let clock = FrameClock::new();
        // 5 reveal ticks + 51 fade ticks (255 / 5).
        for _ in 0..56 {
            assert!(!l.is_finished());
            l.update(&clock);
        }
        assert!(l.is_finished());
        l.update(&clock);
        assert!(l.is_finished());
    }

    #[test]
    fn start_point_enters_from_off_canvas() {
        let canvas = Canvas::new(800.0, 600.0);
        for seed in 0..40 {
            let l = line_with_seed(seed);
            let above = l.start.y >= -config::POLYLINE_EDGE_OVERSHOOT && l.start.y < 0.0;
            let below = l.start.y >= canvas.height
                && l.start.y < canvas.height + config::POLYLINE_EDGE_OVERSHOOT;
            assert!(above || below, "start.y {} not off-canvas", l.start.y);
            assert!(l.end.y >= 0.0 && l.end.y < canvas.height);
            // Horizontal traversal spans the full width one way or the other.
            assert!((l.start.x == 0.0 && l.end.x == canvas.width)
                || (l.start.x == canvas.width && l.end.x == 0.0));
        }
    }
}
