use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use sentinel_core::{AiAgent, Blackboard, Status};
use sentinel_sense::{Sensor, SensorConfig};
use sentinel_tools::{emit as trace_emit, TraceEvent};

use crate::{LoadError, Node, Registries, TreeLoader};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerConfig {
    /// Sensor sampling rate. Non-positive or non-finite disables sampling.
    #[serde(default = "default_sensor_hz")]
    pub sensor_hz: f32,
    /// Upper bound on sensor samples taken in one controller tick.
    #[serde(default = "default_max_catch_up")]
    pub max_catch_up_samples: u32,
    #[serde(default = "SensorConfig::defaults")]
    pub sensors: Vec<SensorConfig>,
}

fn default_sensor_hz() -> f32 {
    10.0
}

fn default_max_catch_up() -> u32 {
    8
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            sensor_hz: default_sensor_hz(),
            max_catch_up_samples: default_max_catch_up(),
            sensors: SensorConfig::defaults(),
        }
    }
}

/// Drives one agent: a compiled tree, its sensors, and its blackboard.
///
/// Each [`tick`](Self::tick) first samples the sensors at their fixed rate
/// (zero or more times, each with the same fixed step), then ticks the root
/// once with the real frame `dt`.
///
/// After a long frame the catch-up is capped at `max_catch_up_samples`; the
/// unsampled time stays in the accumulator and is worked off on later frames.
pub struct BehaviorController {
    root: Node,
    sensors: Vec<Box<dyn Sensor>>,
    blackboard: Blackboard,
    sensor_hz: f32,
    max_catch_up_samples: u32,
    accumulator: f64,
    frame: u64,
    sensor_samples: u64,
    last_status: Option<Status>,
}

impl core::fmt::Debug for BehaviorController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BehaviorController")
            .field("nodes", &self.root.count())
            .field("sensors", &self.sensors.iter().map(|s| s.name()).collect::<Vec<_>>())
            .field("sensor_hz", &self.sensor_hz)
            .field("frame", &self.frame)
            .field("last_status", &self.last_status)
            .finish()
    }
}

impl BehaviorController {
    pub fn new(root: Node, sensors: Vec<Box<dyn Sensor>>, sensor_hz: f32) -> Self {
        Self {
            root,
            sensors,
            blackboard: Blackboard::new(),
            sensor_hz,
            max_catch_up_samples: default_max_catch_up(),
            accumulator: 0.0,
            frame: 0,
            sensor_samples: 0,
            last_status: None,
        }
    }

    pub fn with_config(root: Node, config: &ControllerConfig) -> Self {
        let sensors = config.sensors.iter().map(SensorConfig::build).collect();
        Self::new(root, sensors, config.sensor_hz).with_max_catch_up(config.max_catch_up_samples)
    }

    /// Load the tree from JSON text and build the controller around it.
    pub fn from_json(
        text: &str,
        registries: &Registries,
        config: &ControllerConfig,
    ) -> Result<Self, LoadError> {
        let root = TreeLoader::new(registries).load_str(text)?;
        Ok(Self::with_config(root, config))
    }

    pub fn with_max_catch_up(mut self, samples: u32) -> Self {
        self.max_catch_up_samples = samples.max(1);
        self
    }

    pub fn tick(&mut self, dt: f32, agent: &mut dyn AiAgent) -> Status {
        self.frame += 1;
        self.sample_sensors(dt, &*agent);

        let status = self.root.tick(dt, agent, &mut self.blackboard);
        trace!(frame = self.frame, %status, "root ticked");
        if self.last_status != Some(status) {
            trace_emit(
                &mut self.blackboard,
                TraceEvent::new(self.frame, format!("bt.root.{status}")),
            );
        }
        self.last_status = Some(status);
        status
    }

    /// Abandon the current run: every entered action gets its `exit`, and
    /// selectors and sequences start over on the next tick.
    pub fn abort(&mut self, agent: &mut dyn AiAgent) {
        self.root.abort(agent, &mut self.blackboard);
        self.last_status = None;
    }

    fn sample_sensors(&mut self, dt: f32, agent: &dyn AiAgent) {
        if !(self.sensor_hz.is_finite() && self.sensor_hz > 0.0) {
            return;
        }
        if dt.is_finite() && dt > 0.0 {
            self.accumulator += f64::from(dt);
        }

        let step = 1.0 / f64::from(self.sensor_hz);
        let mut taken = 0;
        while self.accumulator >= step {
            if taken == self.max_catch_up_samples {
                let backlog = (self.accumulator / step) as u64;
                warn!(
                    frame = self.frame,
                    cap = self.max_catch_up_samples,
                    backlog,
                    "sensor catch-up capped; deferring samples"
                );
                trace_emit(
                    &mut self.blackboard,
                    TraceEvent::new(self.frame, "sense.catch_up.capped")
                        .with_a(u64::from(self.max_catch_up_samples))
                        .with_b(backlog),
                );
                break;
            }

            for sensor in &mut self.sensors {
                sensor.sample(step as f32, agent, &mut self.blackboard);
            }
            self.accumulator -= step;
            self.sensor_samples += 1;
            taken += 1;
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    pub fn blackboard_mut(&mut self) -> &mut Blackboard {
        &mut self.blackboard
    }

    pub fn last_status(&self) -> Option<Status> {
        self.last_status
    }

    /// Number of completed controller ticks.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Number of sampling rounds taken so far (each round samples every sensor once).
    pub fn sensor_samples(&self) -> u64 {
        self.sensor_samples
    }

    pub fn sensor_hz(&self) -> f32 {
        self.sensor_hz
    }
}
