use crate::clock::FrameClock;

/// A self-terminating animated effect.
///
/// `update` advances exactly one fixed tick. `draw` renders the current
/// state and must not mutate it. `is_finished` must be monotone: once it
/// returns true it stays true, and the scene reaps the effect.
pub trait Effect {
    fn update(&mut self, clock: &FrameClock);
    fn draw(&self);
    fn is_finished(&self) -> bool;

    /// Short identifier for the HUD and QA logs.
    fn name(&self) -> &'static str;
}
