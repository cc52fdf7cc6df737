// All tunable animation constants in one place.

// Canvas and grid
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;
pub const GRID_COLS: u32 = 3;
pub const GRID_ROWS: u32 = 4;

// Frame loop
pub const FIXED_DT: f32 = 1.0 / 60.0;
pub const FIXED_DT_MS: f64 = 1000.0 / 60.0;
pub const TRAIL_FADE_ALPHA: f32 = 20.0 / 255.0;

// Opacity is kept on a 0-255 scale and divided down only at draw time.
pub const OPACITY_FULL: f32 = 255.0;

// Expanding disk
pub const DISK_START_MIN: f32 = 10.0;
pub const DISK_START_MAX: f32 = 40.0;
pub const DISK_MAX_MIN: f32 = 120.0;
pub const DISK_MAX_MAX: f32 = 270.0;
pub const DISK_GROWTH: f32 = 10.0;
pub const DISK_FADE: f32 = 10.0;

// Ring burst
pub const RING_COUNT_MIN: u32 = 5;
pub const RING_COUNT_MAX: u32 = 10;
pub const RING_START_MIN: f32 = 10.0;
pub const RING_START_MAX: f32 = 30.0;
pub const RING_MAX_MIN: f32 = 60.0;
pub const RING_MAX_MAX: f32 = 150.0;
pub const RING_DELAY_MAX_MS: f64 = 300.0;
pub const RING_GROWTH: f32 = 10.0;
pub const RING_FADE: f32 = 5.0;

// Spiral
pub const SPIRAL_DOT_COUNT: usize = 18;
pub const SPIRAL_RADIUS: f32 = 200.0;
pub const SPIRAL_ACTIVATE_EVERY: u64 = 3;
pub const SPIRAL_DOT_DIAMETER: f32 = 30.0;
pub const SPIRAL_FADE: f32 = 1.0;

// Wave lines
pub const WAVE_LINE_COUNT: usize = 6;
pub const WAVE_SPACING: f32 = 60.0;
pub const WAVE_ORIGIN_X: f32 = 100.0;
pub const WAVE_MARGIN_X: f32 = 100.0;
pub const WAVE_SPEED: f32 = 22.0;
pub const WAVE_ARRIVE_EPSILON: f32 = 10.0;
pub const WAVE_STROKE: f32 = 20.0;
pub const WAVE_AMPLITUDE: f32 = 5.0;
pub const WAVE_PHASE_STEP: f32 = 0.1;

// Explosion
pub const SPARK_COUNT_MIN: u32 = 20;
pub const SPARK_COUNT_MAX: u32 = 50;
pub const SPARK_SIZE_MIN: f32 = 20.0;
pub const SPARK_SIZE_MAX: f32 = 40.0;
pub const SPARK_SPEED_MIN: f32 = 1.0;
pub const SPARK_SPEED_MAX: f32 = 6.0;
pub const SPARK_SHRINK: f32 = 0.2;
pub const SPARK_FADE: f32 = 5.0;

// Dynamic polyline
pub const POLYLINE_SEGMENTS: u32 = 5;
pub const POLYLINE_EDGE_OVERSHOOT: f32 = 50.0;
pub const POLYLINE_JITTER: f32 = 30.0;
pub const POLYLINE_FADE: f32 = 5.0;
pub const POLYLINE_BASE_STROKE: f32 = 5.0;
pub const POLYLINE_STROKE_GAIN: f32 = 0.9;
pub const POLYLINE_OFFSET_STEP: f32 = 2.0;

// Morphing polygon
pub const POLY_START_SIDES: f32 = 3.0;
pub const POLY_MAX_SIDES: f32 = 8.0;
pub const POLY_RADIUS: f32 = 300.0;
pub const POLY_SIDE_STEP: f32 = 0.09;
pub const POLY_SCALE_STEP: f32 = 0.05;
