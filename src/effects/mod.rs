pub mod dynamic_line;
pub mod expanding_circle;
pub mod explosion;
pub mod polygon;
pub mod ring_burst;
pub mod spiral;
pub mod wave_lines;
