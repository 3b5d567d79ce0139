use crate::{Cell, DeterministicRng, WorldApi};

/// Agent-side capability handed to every tick.
///
/// All effects are requests: the host decides how and when a requested move or
/// aim is applied.
pub trait AiAgent {
    fn cell(&self) -> Cell;

    /// Ask the host to move toward `next` (normally a neighbor or the next path cell).
    fn request_move_to(&mut self, next: Cell, speed_multiplier: f32);

    fn aim_at(&mut self, cell: Cell);

    /// Facing in degrees, 0° = +x, 90° = +y.
    fn facing_degrees(&self) -> f32;

    fn set_facing_degrees(&mut self, degrees: f32);

    /// Agent-owned random stream. Seeded by the host for deterministic replay.
    fn rng(&mut self) -> &mut dyn DeterministicRng;

    fn world(&self) -> &dyn WorldApi;
}
