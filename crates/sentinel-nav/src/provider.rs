use serde::{Deserialize, Serialize};

use sentinel_core::{shuffle, AiAgent, Blackboard, Cell};

/// Strategy that produces the next short path for the generic `move` action.
///
/// `None` means no path is available right now; callers surface that as
/// [`Status::Failure`](sentinel_core::Status::Failure). Returned paths are non-empty.
pub trait PathProvider: 'static {
    fn next_path(&mut self, agent: &mut dyn AiAgent, blackboard: &Blackboard) -> Option<Vec<Cell>>;
}

pub type BoxedProvider = Box<dyn PathProvider>;

impl<P> PathProvider for Box<P>
where
    P: PathProvider + ?Sized,
{
    fn next_path(&mut self, agent: &mut dyn AiAgent, blackboard: &Blackboard) -> Option<Vec<Cell>> {
        (**self).next_path(agent, blackboard)
    }
}

/// One step to a random walkable neighbor, drawn from the agent's RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAdjacentProvider;

impl PathProvider for RandomAdjacentProvider {
    fn next_path(&mut self, agent: &mut dyn AiAgent, _blackboard: &Blackboard) -> Option<Vec<Cell>> {
        let mut neighbors = agent.world().neighbors4(agent.cell());
        shuffle(agent.rng(), &mut neighbors);
        let world = agent.world();
        neighbors
            .into_iter()
            .find(|n| world.is_walkable(*n))
            .map(|n| vec![n])
    }
}

/// Cycles through fixed waypoints, one per call, wrapping at the end.
///
/// Ignores the agent's position: the move action walks to each waypoint in turn.
#[derive(Debug, Clone, Default)]
pub struct PatrolProvider {
    waypoints: Vec<Cell>,
    cursor: usize,
}

impl PatrolProvider {
    pub fn new(waypoints: Vec<Cell>) -> Self {
        Self {
            waypoints,
            cursor: 0,
        }
    }

    pub fn waypoints(&self) -> &[Cell] {
        &self.waypoints
    }
}

impl PathProvider for PatrolProvider {
    fn next_path(&mut self, _agent: &mut dyn AiAgent, _blackboard: &Blackboard) -> Option<Vec<Cell>> {
        let target = *self.waypoints.get(self.cursor)?;
        self.cursor = (self.cursor + 1) % self.waypoints.len();
        Some(vec![target])
    }
}

/// Try `primary`; when it has no path, ask `fallback`.
#[derive(Debug, Clone, Default)]
pub struct Fallback<P, F> {
    pub primary: P,
    pub fallback: F,
}

impl<P, F> Fallback<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P, F> PathProvider for Fallback<P, F>
where
    P: PathProvider,
    F: PathProvider,
{
    fn next_path(&mut self, agent: &mut dyn AiAgent, blackboard: &Blackboard) -> Option<Vec<Cell>> {
        self.primary
            .next_path(agent, blackboard)
            .filter(|path| !path.is_empty())
            .or_else(|| self.fallback.next_path(agent, blackboard))
    }
}

/// Provider selection by configuration string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProviderMode {
    #[default]
    RandomAdjacent,
    Patrol,
    PatrolOrRandom,
}

impl ProviderMode {
    pub fn build(self, waypoints: Vec<Cell>) -> BoxedProvider {
        match self {
            ProviderMode::RandomAdjacent => Box::new(RandomAdjacentProvider),
            ProviderMode::Patrol => Box::new(PatrolProvider::new(waypoints)),
            ProviderMode::PatrolOrRandom => Box::new(Fallback::new(
                PatrolProvider::new(waypoints),
                RandomAdjacentProvider,
            )),
        }
    }
}
