use macroquad::prelude::*;

use crate::canvas::Canvas;
use crate::clock::FrameClock;
use crate::config;
use crate::effect::Effect;
use crate::tween;

/// One delayed ring: waits out its start delay, grows an outer disk to a
/// random maximum, then grows an inner background-colored disk while
/// fading, leaving a widening ring.
pub struct RingParticle {
    pub pos: Vec2,
    pub outer_size: f32,
    pub inner_size: f32,
    pub max_size: f32,
    pub color: Color,
    pub opacity: f32,
    pub start_at_ms: f64,
}

impl RingParticle {
    pub fn spawn(canvas: &Canvas, clock: &FrameClock, rng: &mut impl ::rand::Rng) -> Self {
        Self {
            pos: canvas.random_point(rng),
            outer_size: rng.gen_range(config::RING_START_MIN..config::RING_START_MAX),
            inner_size: 0.0,
            max_size: rng.gen_range(config::RING_MAX_MIN..config::RING_MAX_MAX),
            color: tween::random_color(rng),
            opacity: config::OPACITY_FULL,
            start_at_ms: clock.now_ms + rng.gen_range(0.0..config::RING_DELAY_MAX_MS),
        }
    }

    pub fn update(&mut self, clock: &FrameClock) {
        if clock.now_ms < self.start_at_ms {
            return;
        }
        if self.outer_size < self.max_size {
            self.outer_size += config::RING_GROWTH;
        } else {
            self.inner_size += config::RING_GROWTH;
            self.opacity -= config::RING_FADE;
        }
    }

    pub fn draw(&self) {
        // Two stacked disks fake the ring; once the inner catches the
        // outer there is nothing left to show.
        if self.inner_size < self.outer_size {
            draw_circle(
                self.pos.x,
                self.pos.y,
                self.outer_size * 0.5,
                tween::with_alpha(self.color, self.opacity),
            );
            draw_circle(
                self.pos.x,
                self.pos.y,
                self.inner_size * 0.5,
                tween::with_alpha(WHITE, self.opacity),
            );
        }
    }

    pub fn is_finished(&self) -> bool {
        self.opacity <= 0.0
    }
}

/// Burst of 5-9 ring particles scattered across the canvas. Finished once
/// every child has faded out and been removed.
pub struct RingBurst {
    pub circles: Vec<RingParticle>,
    pub opacity: f32,
}

impl RingBurst {
    pub fn spawn(canvas: &Canvas, clock: &FrameClock, rng: &mut impl ::rand::Rng) -> Self {
        let count = rng.gen_range(config::RING_COUNT_MIN..config::RING_COUNT_MAX);
        let circles = (0..count)
            .map(|_| RingParticle::spawn(canvas, clock, rng))
            .collect();
        Self {
            circles,
            opacity: config::OPACITY_FULL,
        }
    }
}

impl Effect for RingBurst {
    fn update(&mut self, clock: &FrameClock) {
        for i in (0..self.circles.len()).rev() {
            self.circles[i].update(clock);
            if self.circles[i].is_finished() {
                self.circles.remove(i);
            }
        }
        if self.circles.is_empty() {
            self.opacity = 0.0;
        }
    }

    fn draw(&self) {
        for circle in &self.circles {
            circle.draw();
        }
    }

    fn is_finished(&self) -> bool {
        self.opacity <= 0.0
    }

    fn name(&self) -> &'static str {
        "ring_burst"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(start: f32, max: f32, start_at_ms: f64) -> RingParticle {
        RingParticle {
            pos: vec2(0.0, 0.0),
            outer_size: start,
            inner_size: 0.0,
            max_size: max,
            color: WHITE,
            opacity: config::OPACITY_FULL,
            start_at_ms,
        }
    }

    fn burst_of(circles: Vec<RingParticle>) -> RingBurst {
        RingBurst {
            circles,
            opacity: config::OPACITY_FULL,
        }
    }

    #[test]
    fn delayed_ring_does_nothing_before_its_start_time() {
        let mut r = ring(10.0, 60.0, 200.0);
        let mut clock = FrameClock::new();
        // ~180 ms elapsed, still before the 200 ms start.
        for _ in 0..10 {
            clock.advance(config::FIXED_DT_MS);
            r.update(&clock);
        }
        assert_eq!(r.outer_size, 10.0);
        assert_eq!(r.opacity, config::OPACITY_FULL);
    }

    #[test]
    fn ring_grows_then_hollows_and_fades() {
        let mut r = ring(10.0, 60.0, 0.0);
        let mut clock = FrameClock::new();
        clock.advance(config::FIXED_DT_MS);
        // (60 - 10) / 10 growth ticks.
        for _ in 0..5 {
            r.update(&clock);
        }
        assert_eq!(r.outer_size, 60.0);
        assert_eq!(r.inner_size, 0.0);
        // Fade phase: inner grows while opacity drains at 5 per tick.
        for _ in 0..51 {
            assert!(!r.is_finished());
            r.update(&clock);
        }
        assert!(r.is_finished());
        assert!(r.inner_size > 0.0);
    }

    #[test]
    fn burst_finishes_the_update_after_all_children_complete() {
        let mut burst = burst_of(vec![ring(10.0, 20.0, 0.0), ring(10.0, 20.0, 0.0)]);
        let mut clock = FrameClock::new();
        clock.advance(config::FIXED_DT_MS);
        // 1 growth tick + 51 fade ticks per child, updated in lockstep.
        for _ in 0..52 {
            burst.update(&clock);
        }
        assert!(burst.circles.is_empty());
        assert!(burst.is_finished());
    }

    #[test]
    fn empty_burst_reports_finished_after_one_update() {
        let mut burst = burst_of(Vec::new());
        let clock = FrameClock::new();
        burst.update(&clock);
        assert!(burst.is_finished());
    }

    #[test]
    fn spawn_creates_five_to_nine_children() {
        use ::rand::SeedableRng;
        let canvas = Canvas::new(800.0, 600.0);
        let clock = FrameClock::new();
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(11);
        for _ in 0..40 {
            let burst = RingBurst::spawn(&canvas, &clock, &mut rng);
            assert!(burst.circles.len() >= 5 && burst.circles.len() <= 9);
        }
    }
}
