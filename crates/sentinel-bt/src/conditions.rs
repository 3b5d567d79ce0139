use serde::Deserialize;

use sentinel_core::{AiAgent, Blackboard, Condition};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PlayerVisibleParams {
    #[serde(default = "default_seen_recency", rename = "recentSeconds", alias = "recent_seconds")]
    pub recent_seconds: f32,
}

fn default_seen_recency() -> f32 {
    0.2
}

impl Default for PlayerVisibleParams {
    fn default() -> Self {
        Self {
            recent_seconds: default_seen_recency(),
        }
    }
}

/// The player was seen at most `recent_seconds` ago.
#[derive(Debug, Clone, Copy)]
pub struct PlayerVisible {
    recent_seconds: f32,
}

impl PlayerVisible {
    pub fn new(recent_seconds: f32) -> Self {
        Self { recent_seconds }
    }

    pub fn from_params(params: PlayerVisibleParams) -> Self {
        Self::new(params.recent_seconds)
    }
}

impl Condition for PlayerVisible {
    fn test(&self, _agent: &dyn AiAgent, blackboard: &Blackboard) -> bool {
        blackboard.seen_target.recent(self.recent_seconds).is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HeardNoiseWithinParams {
    #[serde(default = "default_radius")]
    pub radius: i32,
    #[serde(default = "default_heard_recency", rename = "recentSeconds", alias = "recent_seconds")]
    pub recent_seconds: f32,
}

fn default_radius() -> i32 {
    5
}
fn default_heard_recency() -> f32 {
    2.0
}

impl Default for HeardNoiseWithinParams {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            recent_seconds: default_heard_recency(),
        }
    }
}

/// A noise was heard recently, within `radius` tiles (Manhattan) of the agent.
#[derive(Debug, Clone, Copy)]
pub struct HeardNoiseWithin {
    radius: i32,
    recent_seconds: f32,
}

impl HeardNoiseWithin {
    pub fn new(radius: i32, recent_seconds: f32) -> Self {
        Self {
            radius,
            recent_seconds,
        }
    }

    pub fn from_params(params: HeardNoiseWithinParams) -> Self {
        Self::new(params.radius, params.recent_seconds)
    }
}

impl Condition for HeardNoiseWithin {
    fn test(&self, agent: &dyn AiAgent, blackboard: &Blackboard) -> bool {
        blackboard
            .heard_noise
            .recent(self.recent_seconds)
            .is_some_and(|noise| noise.manhattan(agent.cell()) <= self.radius)
    }
}
