/// Fixed-tick frame clock. One `advance` per simulation tick; effects read
/// the frame counter for periodic gating and `now_ms` for delay scheduling.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    pub frame: u64,
    pub now_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.frame += 1;
        self.now_ms += dt_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_steps_frame_and_time_together() {
        let mut clock = FrameClock::new();
        for _ in 0..60 {
            clock.advance(1000.0 / 60.0);
        }
        assert_eq!(clock.frame, 60);
        assert!((clock.now_ms - 1000.0).abs() < 1e-6);
    }
}
