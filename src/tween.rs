use macroquad::prelude::*;

use crate::config;

/// Linear interpolation between two scalars.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Remap `value` from one range onto another. Unclamped: values outside the
/// input range extrapolate, which the wave-line opacity ramp relies on.
pub fn map_range(value: f32, in_start: f32, in_end: f32, out_start: f32, out_end: f32) -> f32 {
    out_start + (out_end - out_start) * ((value - in_start) / (in_end - in_start))
}

/// Interpolate between two colors. The fraction is clamped to [0, 1].
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::new(
        lerp(a.r, b.r, t),
        lerp(a.g, b.g, t),
        lerp(a.b, b.b, t),
        lerp(a.a, b.a, t),
    )
}

/// Apply a 0-255 opacity scalar to a color's alpha channel.
pub fn with_alpha(color: Color, opacity: f32) -> Color {
    Color::new(
        color.r,
        color.g,
        color.b,
        (opacity / config::OPACITY_FULL).clamp(0.0, 1.0),
    )
}

/// Random fully-opaque color, one uniform draw per channel.
pub fn random_color(rng: &mut impl ::rand::Rng) -> Color {
    Color::new(
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
        1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_hits_endpoints_and_extrapolates() {
        assert_eq!(map_range(100.0, 100.0, 700.0, 0.0, 255.0), 0.0);
        assert_eq!(map_range(700.0, 100.0, 700.0, 0.0, 255.0), 255.0);
        assert_eq!(map_range(400.0, 100.0, 700.0, 0.0, 255.0), 127.5);
        // Unclamped beyond the input range.
        assert!(map_range(760.0, 100.0, 700.0, 0.0, 255.0) > 255.0);
    }

    #[test]
    fn lerp_color_clamps_fraction() {
        let green = Color::new(0.0, 1.0, 0.0, 1.0);
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        let over = lerp_color(green, red, 1.5);
        assert_eq!(over.r, 1.0);
        assert_eq!(over.g, 0.0);
        let mid = lerp_color(green, red, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.g - 0.5).abs() < 1e-6);
    }

    #[test]
    fn with_alpha_clamps_negative_opacity_to_zero() {
        let c = with_alpha(WHITE, -5.0);
        assert_eq!(c.a, 0.0);
        let full = with_alpha(WHITE, 255.0);
        assert_eq!(full.a, 1.0);
    }
}
