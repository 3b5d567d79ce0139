use sentinel_core::{Cell, WorldApi};
use thiserror::Error;

/// Rectangular tile world implementing [`WorldApi`].
///
/// Out-of-bounds cells are treated as blocked. The player and noise signals are
/// plain fields the host updates between frames.
#[derive(Debug, Clone)]
pub struct GridWorld {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
    player: Option<Cell>,
    noise: Option<Cell>,
    clock: f32,
}

/// Grid dimensions rejected by [`GridWorld::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must be non-empty, got {width}x{height}")]
    Empty { width: u32, height: u32 },

    #[error("grid {width}x{height} has more cells than can be indexed")]
    TooLarge { width: u32, height: u32 },
}

impl GridWorld {
    /// An open grid. The area must fit in an `i32` so cell indices never overflow.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }
        let too_large = || GridError::TooLarge { width, height };
        let area = width
            .checked_mul(height)
            .and_then(|area| i32::try_from(area).ok())
            .ok_or_else(too_large)?;
        let width = i32::try_from(width).map_err(|_| too_large())?;
        let height = i32::try_from(height).map_err(|_| too_large())?;
        let cells = usize::try_from(area).map_err(|_| too_large())?;

        Ok(Self {
            width,
            height,
            blocked: vec![false; cells],
            player: None,
            noise: None,
            clock: 0.0,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) {
        if let Some(idx) = self.idx(cell) {
            self.blocked[idx] = blocked;
        }
    }

    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.idx(cell).map(|idx| self.blocked[idx]).unwrap_or(true)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    pub fn set_player(&mut self, player: Option<Cell>) {
        self.player = player;
    }

    /// Make a noise audible at `cell` until [`clear_noise`](Self::clear_noise).
    pub fn emit_noise(&mut self, cell: Cell) {
        self.noise = Some(cell);
    }

    pub fn clear_noise(&mut self) {
        self.noise = None;
    }

    pub fn advance_clock(&mut self, dt: f32) {
        self.clock += dt.max(0.0);
    }

    fn idx(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some((cell.y * self.width + cell.x) as usize)
    }
}

impl WorldApi for GridWorld {
    fn is_walkable(&self, cell: Cell) -> bool {
        !self.is_blocked(cell)
    }

    /// Bresenham walk from `from` to `to`. Every cell strictly between the
    /// endpoints must be open; the endpoints only need to be in bounds.
    fn has_line_of_sight(&self, from: Cell, to: Cell) -> bool {
        if !self.in_bounds(from) || !self.in_bounds(to) {
            return false;
        }

        let dx = (to.x - from.x).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let dy = -(to.y - from.y).abs();
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;

        let mut current = from;
        loop {
            if current == to {
                return true;
            }
            if current != from && self.is_blocked(current) {
                return false;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                current.x += sx;
            }
            if e2 <= dx {
                err += dx;
                current.y += sy;
            }
        }
    }

    fn neighbors4(&self, cell: Cell) -> Vec<Cell> {
        // Fixed order for determinism: N, E, S, W.
        [
            cell.offset(0, -1),
            cell.offset(1, 0),
            cell.offset(0, 1),
            cell.offset(-1, 0),
        ]
        .into_iter()
        .filter(|n| self.in_bounds(*n))
        .collect()
    }

    fn heuristic_cost(&self, a: Cell, b: Cell) -> f32 {
        a.manhattan(b) as f32
    }

    fn seconds(&self) -> f32 {
        self.clock
    }

    fn player_cell(&self) -> Option<Cell> {
        self.player
    }

    fn last_noise_cell(&self) -> Option<Cell> {
        self.noise
    }
}
