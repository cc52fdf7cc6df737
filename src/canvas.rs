use macroquad::prelude::*;

/// Canvas dimensions, passed explicitly into effect constructors.
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.width * 0.5, self.height * 0.5)
    }

    pub fn random_point(&self, rng: &mut impl ::rand::Rng) -> Vec2 {
        vec2(
            rng.gen_range(0.0..self.width),
            rng.gen_range(0.0..self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn random_points_stay_inside_the_canvas() {
        let canvas = Canvas::new(800.0, 600.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..200 {
            let p = canvas.random_point(&mut rng);
            assert!(p.x >= 0.0 && p.x < canvas.width);
            assert!(p.y >= 0.0 && p.y < canvas.height);
        }
    }

    #[test]
    fn center_is_half_extents() {
        let canvas = Canvas::new(800.0, 600.0);
        assert_eq!(canvas.center(), vec2(400.0, 300.0));
    }
}
