use crate::Cell;

/// Read-only world queries used by actions, conditions, and sensors.
///
/// Implemented by the host game. The behavior core never mutates world state
/// through this trait; movement and aiming go out as requests on
/// [`AiAgent`](crate::AiAgent).
pub trait WorldApi {
    fn is_walkable(&self, cell: Cell) -> bool;

    fn has_line_of_sight(&self, from: Cell, to: Cell) -> bool;

    /// Four-connected neighbors of `cell`. Order must be stable for a given world
    /// so seeded runs replay identically.
    fn neighbors4(&self, cell: Cell) -> Vec<Cell>;

    /// Distance estimate between cells, in tiles (Manhattan on 4-connected grids).
    fn heuristic_cost(&self, a: Cell, b: Cell) -> f32 {
        a.manhattan(b) as f32
    }

    /// World clock in seconds.
    fn seconds(&self) -> f32;

    /// Current player cell, or `None` when there is no player to look at.
    fn player_cell(&self) -> Option<Cell>;

    /// The most recent noise the world wants agents to hear this frame.
    fn last_noise_cell(&self) -> Option<Cell>;
}
