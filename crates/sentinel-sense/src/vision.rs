use sentinel_core::{AiAgent, Blackboard};

use crate::Sensor;

/// Line-of-sight sensor for the player.
///
/// The player is seen when it is within `max_tiles` (by the world heuristic)
/// and the line between agent and player is unobstructed. With the field-of-view
/// gate enabled, the player must also lie within `fov_deg / 2` of the agent's facing.
#[derive(Debug, Clone, PartialEq)]
pub struct VisionSensor {
    fov_deg: f32,
    max_tiles: f32,
    use_fov: bool,
}

impl VisionSensor {
    pub fn new(fov_deg: f32, max_tiles: f32) -> Self {
        Self {
            fov_deg,
            max_tiles,
            use_fov: false,
        }
    }

    pub fn with_fov_gate(mut self, enabled: bool) -> Self {
        self.use_fov = enabled;
        self
    }

    pub fn fov_deg(&self) -> f32 {
        self.fov_deg
    }

    pub fn max_tiles(&self) -> f32 {
        self.max_tiles
    }

    fn within_fov(&self, agent: &dyn AiAgent, bearing: f32) -> bool {
        if !self.use_fov || self.fov_deg >= 360.0 {
            return true;
        }
        let diff = (bearing - agent.facing_degrees() + 180.0).rem_euclid(360.0) - 180.0;
        diff.abs() <= self.fov_deg * 0.5
    }
}

impl Sensor for VisionSensor {
    fn sample(&mut self, step: f32, agent: &dyn AiAgent, blackboard: &mut Blackboard) {
        let me = agent.cell();
        let world = agent.world();
        let visible = world.player_cell().filter(|&player| {
            world.heuristic_cost(me, player) <= self.max_tiles
                && (player == me || self.within_fov(agent, me.bearing_degrees(player)))
                && world.has_line_of_sight(me, player)
        });

        match visible {
            Some(player) => blackboard.seen_target.observe(player),
            None => blackboard.seen_target.age(step),
        }
    }

    fn name(&self) -> &'static str {
        "vision"
    }
}
