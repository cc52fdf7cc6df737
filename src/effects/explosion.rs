use macroquad::prelude::*;

use crate::canvas::Canvas;
use crate::clock::FrameClock;
use crate::config;
use crate::effect::Effect;
use crate::tween;

/// One drifting spark: moves along its fixed angle, shrinking and fading.
pub struct Spark {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub angle: f32,
    pub color: Color,
    pub opacity: f32,
}

impl Spark {
    pub fn spawn(canvas: &Canvas, rng: &mut impl ::rand::Rng) -> Self {
        Self {
            pos: canvas.random_point(rng),
            size: rng.gen_range(config::SPARK_SIZE_MIN..config::SPARK_SIZE_MAX),
            speed: rng.gen_range(config::SPARK_SPEED_MIN..config::SPARK_SPEED_MAX),
            angle: rng.gen_range(0.0..std::f32::consts::TAU),
            color: tween::random_color(rng),
            opacity: config::OPACITY_FULL,
        }
    }

    pub fn update(&mut self) {
        self.pos += Vec2::from_angle(self.angle) * self.speed;
        self.size -= config::SPARK_SHRINK;
        self.opacity -= config::SPARK_FADE;
    }

    pub fn draw(&self) {
        draw_circle(
            self.pos.x,
            self.pos.y,
            self.size * 0.5,
            tween::with_alpha(self.color, self.opacity),
        );
    }

    pub fn is_finished(&self) -> bool {
        self.opacity <= 0.0 || self.size <= 0.0
    }
}

/// 20-49 sparks scattered over the whole canvas. Finished once the spark
/// collection drains.
pub struct Explosion {
    pub particles: Vec<Spark>,
    pub opacity: f32,
}

impl Explosion {
    pub fn spawn(canvas: &Canvas, rng: &mut impl ::rand::Rng) -> Self {
        let count = rng.gen_range(config::SPARK_COUNT_MIN..config::SPARK_COUNT_MAX);
        let particles = (0..count).map(|_| Spark::spawn(canvas, rng)).collect();
        Self {
            particles,
            opacity: config::OPACITY_FULL,
        }
    }
}

impl Effect for Explosion {
    fn update(&mut self, _clock: &FrameClock) {
        for i in (0..self.particles.len()).rev() {
            self.particles[i].update();
            if self.particles[i].is_finished() {
                self.particles.remove(i);
            }
        }
        if self.particles.is_empty() {
            self.opacity = 0.0;
        }
    }

    fn draw(&self) {
        for spark in &self.particles {
            spark.draw();
        }
    }

    fn is_finished(&self) -> bool {
        self.opacity <= 0.0
    }

    fn name(&self) -> &'static str {
        "explosion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn spark(size: f32, speed: f32, angle: f32) -> Spark {
        Spark {
            pos: vec2(100.0, 100.0),
            size,
            speed,
            angle,
            color: WHITE,
            opacity: config::OPACITY_FULL,
        }
    }

    #[test]
    fn spark_moves_along_its_angle() {
        let mut s = spark(30.0, 4.0, 0.0);
        s.update();
        assert!((s.pos.x - 104.0).abs() < 1e-4);
        assert!((s.pos.y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn spark_dies_by_opacity_after_51_updates() {
        let mut s = spark(30.0, 1.0, 0.0);
        for _ in 0..51 {
            assert!(!s.is_finished());
            s.update();
        }
        // 255 / 5 = 51 fade ticks; size (30 - 51 * 0.2) is still positive.
        assert!(s.is_finished());
        assert!(s.size > 0.0);
    }

    #[test]
    fn tiny_spark_dies_by_size_first() {
        let mut s = spark(0.9, 1.0, 0.0);
        for _ in 0..5 {
            s.update();
        }
        assert!(s.size <= 0.0);
        assert!(s.is_finished());
        assert!(s.opacity > 0.0);
    }

    #[test]
    fn explosion_drains_and_finishes() {
        let canvas = Canvas::new(800.0, 600.0);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut boom = Explosion::spawn(&canvas, &mut rng);
        let count = boom.particles.len();
        assert!((20..50).contains(&count));

        let clock = FrameClock::new();
        // 51 fade ticks is the longest any spark can live.
        for _ in 0..51 {
            boom.update(&clock);
        }
        assert!(boom.particles.is_empty());
        assert!(boom.is_finished());
    }

    #[test]
    fn empty_explosion_finishes_on_first_update() {
        let mut boom = Explosion {
            particles: Vec::new(),
            opacity: config::OPACITY_FULL,
        };
        let clock = FrameClock::new();
        assert!(!boom.is_finished());
        boom.update(&clock);
        assert!(boom.is_finished());
    }
}
