use macroquad::prelude::*;

use crate::canvas::Canvas;
use crate::clock::FrameClock;
use crate::effect::Effect;
use crate::effects::dynamic_line::DynamicLine;
use crate::effects::expanding_circle::ExpandingCircle;
use crate::effects::explosion::Explosion;
use crate::effects::polygon::MorphingPolygon;
use crate::effects::ring_burst::RingBurst;
use crate::effects::spiral::SpiralCircles;
use crate::effects::wave_lines::WaveLines;

/// Fixed grid of clickable cells spanning the canvas.
pub struct RegionGrid {
    pub cols: u32,
    pub rows: u32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl RegionGrid {
    pub fn new(canvas: &Canvas, cols: u32, rows: u32) -> Self {
        Self {
            cols,
            rows,
            cell_width: canvas.width / cols as f32,
            cell_height: canvas.height / rows as f32,
        }
    }

    /// Row-major region index for a pointer position. Columns and rows are
    /// clamped into the grid so the exact right/bottom edge still maps to
    /// the last cell.
    pub fn region_at(&self, pos: Vec2) -> u32 {
        let col = ((pos.x / self.cell_width) as i64).clamp(0, self.cols as i64 - 1) as u32;
        let row = ((pos.y / self.cell_height) as i64).clamp(0, self.rows as i64 - 1) as u32;
        row * self.cols + col
    }
}

/// Map a region index to its effect, if any. Unmapped regions (4 and 8-11)
/// are a deliberate no-op.
pub fn spawn_for_region(
    region: u32,
    canvas: &Canvas,
    clock: &FrameClock,
    rng: &mut impl ::rand::Rng,
) -> Option<Box<dyn Effect>> {
    match region {
        0 => Some(Box::new(ExpandingCircle::spawn(canvas, rng))),
        1 => Some(Box::new(SpiralCircles::spawn(canvas.center(), rng))),
        2 => Some(Box::new(RingBurst::spawn(canvas, clock, rng))),
        3 => Some(Box::new(WaveLines::spawn(canvas, rng))),
        5 => Some(Box::new(Explosion::spawn(canvas, rng))),
        6 => Some(Box::new(DynamicLine::spawn(canvas, rng))),
        7 => Some(Box::new(MorphingPolygon::spawn(canvas.center(), rng))),
        _ => None,
    }
}
