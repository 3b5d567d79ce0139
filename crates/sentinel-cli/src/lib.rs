//! Scenario files and the headless simulation loop behind the `sentinel` binary.

#![forbid(unsafe_code)]

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::debug;

use sentinel_bt::{BehaviorController, ControllerConfig, Node, Registries, TreeLoader};
use sentinel_core::{derive_seed, Cell, Status};
use sentinel_nav::{AgentBody, GridWorld};
use sentinel_tools::{install_sink, TracingSink};

/// A grid, one agent, and a timeline of player moves and noises.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub blocked: Vec<Cell>,
    pub agent: Cell,
    #[serde(default)]
    pub facing: f32,
    #[serde(default = "default_tiles_per_second")]
    pub tiles_per_second: f32,
    #[serde(default)]
    pub player: Option<Cell>,
    #[serde(default)]
    pub player_moves: Vec<PlayerMove>,
    #[serde(default)]
    pub noises: Vec<NoiseEvent>,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub controller: ControllerConfig,
}

fn default_tiles_per_second() -> f32 {
    4.0
}

/// From `at` seconds on, the player stands at `cell` (`null` hides the player).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlayerMove {
    pub at: f32,
    pub cell: Option<Cell>,
}

/// A noise audible at `cell` during `[at, at + duration)`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NoiseEvent {
    pub at: f32,
    pub cell: Cell,
    #[serde(default = "default_noise_duration")]
    pub duration: f32,
}

fn default_noise_duration() -> f32 {
    0.5
}

impl Scenario {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        let scenario: Scenario = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<()> {
        let world = self.build_world()?;
        if !world.in_bounds(self.agent) || world.is_blocked(self.agent) {
            bail!("agent start {} is outside the grid or blocked", self.agent);
        }
        Ok(())
    }

    pub fn build_world(&self) -> Result<GridWorld> {
        let mut world = GridWorld::new(self.width, self.height).context("invalid scenario grid")?;
        for cell in &self.blocked {
            world.set_blocked(*cell, true);
        }
        world.set_player(self.player);
        Ok(world)
    }

    fn player_at(&self, time: f32) -> Option<Cell> {
        self.player_moves
            .iter()
            .filter(|m| m.at <= time)
            .max_by(|a, b| a.at.total_cmp(&b.at))
            .map_or(self.player, |m| m.cell)
    }

    fn noise_at(&self, time: f32) -> Option<Cell> {
        self.noises
            .iter()
            .filter(|n| n.at <= time && time < n.at + n.duration)
            .last()
            .map(|n| n.cell)
    }
}

/// Load and validate a behavior file against the built-in registries.
pub fn load_behavior(path: &Path) -> Result<Node> {
    let registries = Registries::with_builtins();
    TreeLoader::new(&registries)
        .load_file(path)
        .with_context(|| format!("failed to load behavior {}", path.display()))
}

/// What one frame looked like after the tree ran and the agent moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub time: f32,
    pub status: Status,
    pub cell: Cell,
    pub facing: f32,
    pub seen: Option<Cell>,
    pub heard: Option<Cell>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub frames: u64,
    pub running: u64,
    pub success: u64,
    pub failure: u64,
    pub cells_moved: u64,
    pub frames_seeing_player: u64,
    pub final_status: Option<Status>,
    pub final_cell: Option<Cell>,
}

impl Summary {
    fn record(&mut self, report: &FrameReport, moved: bool) {
        self.frames += 1;
        match report.status {
            Status::Running => self.running += 1,
            Status::Success => self.success += 1,
            Status::Failure => self.failure += 1,
        }
        if moved {
            self.cells_moved += 1;
        }
        if report.seen.is_some() {
            self.frames_seeing_player += 1;
        }
        self.final_status = Some(report.status);
        self.final_cell = Some(report.cell);
    }
}

pub struct Simulation {
    scenario: Scenario,
    world: GridWorld,
    body: AgentBody,
    controller: BehaviorController,
    time: f32,
    summary: Summary,
}

impl Simulation {
    pub fn new(scenario: Scenario, root: Node, seed: u64) -> Result<Self> {
        let world = scenario.build_world()?;
        let body = AgentBody::new(scenario.agent, derive_seed(seed, 0)).with_facing(scenario.facing);
        let mut controller = BehaviorController::with_config(root, &scenario.controller);
        install_sink(controller.blackboard_mut(), Box::new(TracingSink::new("agent-0")));
        Ok(Self {
            scenario,
            world,
            body,
            controller,
            time: 0.0,
            summary: Summary::default(),
        })
    }

    pub fn step(&mut self, dt: f32) -> FrameReport {
        self.time += dt;
        self.world.advance_clock(dt);
        self.world.set_player(self.scenario.player_at(self.time));
        match self.scenario.noise_at(self.time) {
            Some(cell) => self.world.emit_noise(cell),
            None => self.world.clear_noise(),
        }

        let status = {
            let mut agent = self.body.bind(&self.world);
            self.controller.tick(dt, &mut agent)
        };
        let moved = self
            .body
            .apply_movement(&self.world, dt, self.scenario.tiles_per_second);

        let bb = self.controller.blackboard();
        let report = FrameReport {
            frame: self.controller.frame(),
            time: self.time,
            status,
            cell: self.body.cell,
            facing: self.body.facing,
            seen: bb.seen_target.recent(0.0),
            heard: bb.heard_noise.cell(),
        };
        debug!(
            frame = report.frame,
            status = %report.status,
            cell = %report.cell,
            facing = report.facing,
            seen = ?report.seen,
            heard = ?report.heard,
            "frame"
        );
        self.summary.record(&report, moved);
        report
    }

    pub fn run(&mut self, frames: u64, dt: f32) -> &Summary {
        for _ in 0..frames {
            self.step(dt);
        }
        &self.summary
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn body(&self) -> &AgentBody {
        &self.body
    }

    pub fn controller(&self) -> &BehaviorController {
        &self.controller
    }
}
