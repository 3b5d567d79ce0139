//! Built-in perception actions: `listen`, `look`, `scan`.
//!
//! The generic `move` action lives in `sentinel-nav` next to its path providers.

use serde::Deserialize;

use sentinel_core::{Action, AiAgent, Blackboard, Cell, Status};

use crate::ParamError;

fn status_after(remaining: f32) -> Status {
    if remaining > 0.0 {
        Status::Running
    } else {
        Status::Success
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ListenParams {
    #[serde(default = "default_listen_duration")]
    pub duration: f32,
}

fn default_listen_duration() -> f32 {
    0.8
}

impl Default for ListenParams {
    fn default() -> Self {
        Self {
            duration: default_listen_duration(),
        }
    }
}

/// Stand still for `duration` seconds.
#[derive(Debug, Clone)]
pub struct ListenAction {
    duration: f32,
    remaining: f32,
}

impl ListenAction {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: duration,
        }
    }

    pub fn from_params(params: ListenParams) -> Self {
        Self::new(params.duration)
    }
}

impl Action for ListenAction {
    fn enter(&mut self, _agent: &mut dyn AiAgent, _blackboard: &mut Blackboard) {
        self.remaining = self.duration;
    }

    fn tick(&mut self, dt: f32, _agent: &mut dyn AiAgent, _blackboard: &mut Blackboard) -> Status {
        self.remaining -= dt;
        status_after(self.remaining)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookTarget {
    #[default]
    #[serde(alias = "PLAYER", alias = "Player")]
    Player,
    #[serde(alias = "POINT", alias = "Point")]
    Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LookParams {
    #[serde(default)]
    pub target: LookTarget,
    #[serde(default = "default_look_duration")]
    pub duration: f32,
    #[serde(default)]
    pub point: Option<Cell>,
}

fn default_look_duration() -> f32 {
    0.5
}

impl Default for LookParams {
    fn default() -> Self {
        Self {
            target: LookTarget::Player,
            duration: default_look_duration(),
            point: None,
        }
    }
}

/// Where a [`LookAction`] aims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aim {
    /// The live player cell; the action fails while the world reports none.
    Player,
    Point(Cell),
}

/// Aim at the player or a fixed cell every tick for `duration` seconds.
#[derive(Debug, Clone)]
pub struct LookAction {
    aim: Aim,
    duration: f32,
    remaining: f32,
}

impl LookAction {
    pub fn new(aim: Aim, duration: f32) -> Self {
        Self {
            aim,
            duration,
            remaining: duration,
        }
    }

    pub fn from_params(params: LookParams) -> Result<Self, ParamError> {
        let aim = match params.target {
            LookTarget::Player => Aim::Player,
            LookTarget::Point => Aim::Point(params.point.ok_or(ParamError::MissingPoint)?),
        };
        Ok(Self::new(aim, params.duration))
    }

    pub fn aim(&self) -> Aim {
        self.aim
    }
}

impl Action for LookAction {
    fn enter(&mut self, _agent: &mut dyn AiAgent, _blackboard: &mut Blackboard) {
        self.remaining = self.duration;
    }

    fn tick(&mut self, dt: f32, agent: &mut dyn AiAgent, _blackboard: &mut Blackboard) -> Status {
        let target = match self.aim {
            Aim::Player => match agent.world().player_cell() {
                Some(cell) => cell,
                None => return Status::Failure,
            },
            Aim::Point(cell) => cell,
        };
        agent.aim_at(target);

        self.remaining -= dt;
        status_after(self.remaining)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Constant angular velocity.
    #[default]
    Spin,
    /// Sinusoidal sweep of `sweep_deg` total width around the base angle.
    Oscillate,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScanParams {
    #[serde(default = "default_scan_duration")]
    pub duration: f32,
    #[serde(default)]
    pub rotate: bool,
    #[serde(default)]
    pub mode: ScanMode,
    #[serde(default = "default_scan_rate", alias = "degPerSec")]
    pub deg_per_sec: f32,
    #[serde(default = "default_sweep", alias = "sweepDeg")]
    pub sweep_deg: f32,
    #[serde(default = "default_true", alias = "randomStart")]
    pub random_start: bool,
}

fn default_scan_duration() -> f32 {
    0.5
}
fn default_scan_rate() -> f32 {
    120.0
}
fn default_sweep() -> f32 {
    120.0
}
fn default_true() -> bool {
    true
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            duration: default_scan_duration(),
            rotate: false,
            mode: ScanMode::Spin,
            deg_per_sec: default_scan_rate(),
            sweep_deg: default_sweep(),
            random_start: true,
        }
    }
}

/// Look around for `duration` seconds, optionally turning.
///
/// A spin run leaves its final angle as the base for the next run. Any other
/// run starts from a random angle drawn from the agent RNG when
/// `rotate && random_start`, or from the agent's facing otherwise.
#[derive(Debug, Clone)]
pub struct ScanAction {
    params: ScanParams,
    remaining: f32,
    elapsed: f32,
    base_deg: f32,
    carried_deg: Option<f32>,
}

impl ScanAction {
    pub fn new(params: ScanParams) -> Self {
        Self {
            params,
            remaining: params.duration,
            elapsed: 0.0,
            base_deg: 0.0,
            carried_deg: None,
        }
    }

    pub fn params(&self) -> &ScanParams {
        &self.params
    }

    pub fn base_degrees(&self) -> f32 {
        self.base_deg
    }

    fn angle_at(&self, elapsed: f32) -> f32 {
        let p = &self.params;
        match p.mode {
            ScanMode::Spin => self.base_deg + p.deg_per_sec * elapsed,
            ScanMode::Oscillate => {
                let half = p.sweep_deg.max(0.0) * 0.5;
                let phase = (elapsed * p.deg_per_sec).to_radians();
                self.base_deg + phase.sin() * half
            }
        }
    }
}

impl Action for ScanAction {
    fn enter(&mut self, agent: &mut dyn AiAgent, _blackboard: &mut Blackboard) {
        self.remaining = self.params.duration;
        self.elapsed = 0.0;

        self.base_deg = match self.carried_deg.take() {
            Some(angle) => angle,
            None if self.params.rotate && self.params.random_start => {
                agent.rng().next_f32_unit() * 360.0
            }
            None => agent.facing_degrees(),
        };
    }

    fn tick(&mut self, dt: f32, agent: &mut dyn AiAgent, _blackboard: &mut Blackboard) -> Status {
        if self.params.rotate {
            self.elapsed += dt;
            agent.set_facing_degrees(self.angle_at(self.elapsed).rem_euclid(360.0));
        }

        self.remaining -= dt;
        status_after(self.remaining)
    }

    fn exit(&mut self, _agent: &mut dyn AiAgent, _blackboard: &mut Blackboard) {
        if self.params.rotate && self.params.mode == ScanMode::Spin {
            self.carried_deg = Some(self.angle_at(self.elapsed).rem_euclid(360.0));
        }
    }
}
