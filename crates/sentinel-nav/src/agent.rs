use sentinel_core::{AiAgent, Cell, DeterministicRng, SplitMix64, WorldApi};

/// The last movement request an agent issued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveIntent {
    pub target: Cell,
    pub speed_multiplier: f32,
}

/// Persistent per-agent state owned by the host between frames.
///
/// Bind it to a world with [`AgentBody::bind`] to get an [`AiAgent`] for one tick,
/// then call [`AgentBody::apply_movement`] to resolve the request.
#[derive(Debug, Clone)]
pub struct AgentBody {
    pub cell: Cell,
    pub facing: f32,
    pub rng: SplitMix64,
    pub aim: Option<Cell>,
    intent: Option<MoveIntent>,
    progress: f32,
}

impl AgentBody {
    pub fn new(cell: Cell, seed: u64) -> Self {
        Self {
            cell,
            facing: 0.0,
            rng: SplitMix64::new(seed),
            aim: None,
            intent: None,
            progress: 0.0,
        }
    }

    pub fn with_facing(mut self, degrees: f32) -> Self {
        self.facing = degrees;
        self
    }

    pub fn intent(&self) -> Option<MoveIntent> {
        self.intent
    }

    pub fn bind<'w>(&'w mut self, world: &'w dyn WorldApi) -> GridAgent<'w> {
        GridAgent { body: self, world }
    }

    /// Spend `tiles_per_second * speed * dt` of movement budget on the current
    /// intent, stepping at most one cell. Returns `true` if the agent moved.
    ///
    /// Intents toward blocked cells are dropped; an intent is kept until the
    /// agent reaches its target.
    pub fn apply_movement(&mut self, world: &dyn WorldApi, dt: f32, tiles_per_second: f32) -> bool {
        let Some(intent) = self.intent else {
            return false;
        };

        if intent.target == self.cell || !world.is_walkable(intent.target) {
            self.intent = None;
            self.progress = 0.0;
            return false;
        }

        self.progress += tiles_per_second.max(0.0) * intent.speed_multiplier.max(0.0) * dt.max(0.0);
        if self.progress < 1.0 {
            return false;
        }
        self.progress -= 1.0;

        let dx = (intent.target.x - self.cell.x).signum();
        let dy = (intent.target.y - self.cell.y).signum();
        let horizontal = self.cell.offset(dx, 0);
        let vertical = self.cell.offset(0, dy);
        let prefer_x = (intent.target.x - self.cell.x).abs() >= (intent.target.y - self.cell.y).abs();
        let candidates = if prefer_x {
            [horizontal, vertical]
        } else {
            [vertical, horizontal]
        };

        let Some(step) = candidates
            .into_iter()
            .find(|c| *c != self.cell && world.is_walkable(*c))
        else {
            self.intent = None;
            self.progress = 0.0;
            return false;
        };

        self.facing = self.cell.bearing_degrees(step);
        self.cell = step;
        if step == intent.target {
            self.intent = None;
            self.progress = 0.0;
        }
        true
    }
}

/// An [`AgentBody`] bound to a world for the duration of one tick.
pub struct GridAgent<'w> {
    body: &'w mut AgentBody,
    world: &'w dyn WorldApi,
}

impl AiAgent for GridAgent<'_> {
    fn cell(&self) -> Cell {
        self.body.cell
    }

    fn request_move_to(&mut self, next: Cell, speed_multiplier: f32) {
        if self.body.intent.map(|i| i.target) != Some(next) {
            self.body.progress = 0.0;
        }
        self.body.intent = Some(MoveIntent {
            target: next,
            speed_multiplier,
        });
    }

    fn aim_at(&mut self, cell: Cell) {
        self.body.aim = Some(cell);
        if cell != self.body.cell {
            self.body.facing = self.body.cell.bearing_degrees(cell);
        }
    }

    fn facing_degrees(&self) -> f32 {
        self.body.facing
    }

    fn set_facing_degrees(&mut self, degrees: f32) {
        self.body.facing = degrees;
    }

    fn rng(&mut self) -> &mut dyn DeterministicRng {
        &mut self.body.rng
    }

    fn world(&self) -> &dyn WorldApi {
        self.world
    }
}
