use macroquad::prelude::*;

use crate::clock::FrameClock;
use crate::scene::Scene;

/// Screen-space stats overlay.
pub fn draw_hud(scene: &Scene, clock: &FrameClock) {
    let tc = Color::new(0.25, 0.25, 0.3, 1.0);
    let sh = Color::new(1.0, 1.0, 1.0, 0.6);

    let fps_text = format!("FPS: {}", get_fps());
    draw_text(&fps_text, 11.0, 21.0, 18.0, sh);
    draw_text(&fps_text, 10.0, 20.0, 18.0, tc);

    let active_text = format!("Active: {}", scene.active_count());
    draw_text(&active_text, 11.0, 41.0, 18.0, sh);
    draw_text(&active_text, 10.0, 40.0, 18.0, tc);

    let frame_text = format!("Frame: {}", clock.frame);
    draw_text(&frame_text, 11.0, 61.0, 18.0, sh);
    draw_text(&frame_text, 10.0, 60.0, 18.0, tc);
}
