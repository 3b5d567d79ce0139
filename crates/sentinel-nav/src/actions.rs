use serde::Deserialize;
use tracing::debug;

use sentinel_core::{Action, AiAgent, Blackboard, Cell, Status};

use crate::{BoxedProvider, ProviderMode};

/// Which blackboard memory a direct approach steers toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum MoveTarget {
    #[serde(rename = "lastSeenPlayer", alias = "lastSeen")]
    LastSeen,
    #[serde(rename = "lastHeardNoise", alias = "lastHeard")]
    LastHeard,
}

/// JSON parameters of the `move` action.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveParams {
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// When set, the action approaches a remembered cell instead of following a provider.
    #[serde(default)]
    pub toward: Option<MoveTarget>,
    #[serde(default)]
    pub mode: ProviderMode,
    #[serde(default)]
    pub waypoints: Vec<Cell>,
}

fn default_speed() -> f32 {
    1.0
}

impl Default for MoveParams {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            toward: None,
            mode: ProviderMode::default(),
            waypoints: Vec::new(),
        }
    }
}

pub enum MoveMode {
    TowardLastSeen,
    TowardLastHeard,
    Provider(BoxedProvider),
}

impl core::fmt::Debug for MoveMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveMode::TowardLastSeen => f.write_str("TowardLastSeen"),
            MoveMode::TowardLastHeard => f.write_str("TowardLastHeard"),
            MoveMode::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Generic movement leaf.
///
/// - `TowardLastSeen` / `TowardLastHeard` take one greedy step per tick toward
///   the remembered cell and stay `Running`; they fail when the memory is empty
///   or no neighbor is walkable.
/// - `Provider` follows the blackboard's active path, asking the provider for a
///   new one when none is active. It succeeds when the last path cell is reached.
#[derive(Debug)]
pub struct MoveAction {
    mode: MoveMode,
    speed: f32,
}

impl MoveAction {
    pub fn new(mode: MoveMode, speed: f32) -> Self {
        Self { mode, speed }
    }

    pub fn from_params(params: MoveParams) -> Self {
        let mode = match params.toward {
            Some(MoveTarget::LastSeen) => MoveMode::TowardLastSeen,
            Some(MoveTarget::LastHeard) => MoveMode::TowardLastHeard,
            None => MoveMode::Provider(params.mode.build(params.waypoints)),
        };
        Self::new(mode, params.speed)
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn mode(&self) -> &MoveMode {
        &self.mode
    }
}

impl Action for MoveAction {
    fn tick(&mut self, _dt: f32, agent: &mut dyn AiAgent, blackboard: &mut Blackboard) -> Status {
        let speed = self.speed;
        match &mut self.mode {
            MoveMode::TowardLastSeen => match blackboard.seen_target.cell() {
                Some(target) => step_toward(agent, target, speed),
                None => Status::Failure,
            },
            MoveMode::TowardLastHeard => match blackboard.heard_noise.cell() {
                Some(target) => step_toward(agent, target, speed),
                None => Status::Failure,
            },
            MoveMode::Provider(provider) => follow_path(provider, agent, blackboard, speed),
        }
    }
}

fn step_toward(agent: &mut dyn AiAgent, target: Cell, speed: f32) -> Status {
    let origin = agent.cell();
    let world = agent.world();
    let mut ranked = world.neighbors4(origin);
    // Stable sort: equal costs keep the world's neighbor order.
    ranked.sort_by(|a, b| {
        world
            .heuristic_cost(*a, target)
            .total_cmp(&world.heuristic_cost(*b, target))
    });

    let step = ranked.into_iter().find(|n| world.is_walkable(*n));
    match step {
        Some(next) => {
            agent.request_move_to(next, speed);
            Status::Running
        }
        None => Status::Failure,
    }
}

fn follow_path(
    provider: &mut BoxedProvider,
    agent: &mut dyn AiAgent,
    blackboard: &mut Blackboard,
    speed: f32,
) -> Status {
    if blackboard.path_next().is_none() {
        let Some(cells) = provider.next_path(agent, blackboard) else {
            blackboard.note(format!("move: no path from {}", agent.cell()));
            return Status::Failure;
        };
        debug!(len = cells.len(), from = %agent.cell(), "move: new path");
        blackboard.set_path(cells);
    }

    let Some(mut next) = blackboard.path_next() else {
        blackboard.note("move: provider returned an empty path");
        return Status::Failure;
    };

    if agent.cell() == next {
        match blackboard.advance_path() {
            Some(cell) => next = cell,
            None => return Status::Success,
        }
    }

    agent.request_move_to(next, speed);
    Status::Running
}
