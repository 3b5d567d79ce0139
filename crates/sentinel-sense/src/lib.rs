//! Perception sensors.
//!
//! A sensor is sampled by the behavior controller at a fixed rate, independent
//! of frame rate, and records what it perceives in the agent's
//! [`Blackboard`](sentinel_core::Blackboard). Sensors never fail: a negative
//! sample simply ages the corresponding memory.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod hearing;
pub mod vision;

pub use config::SensorConfig;
pub use hearing::HearingSensor;
pub use vision::VisionSensor;

use sentinel_core::{AiAgent, Blackboard};

pub trait Sensor: 'static {
    /// Take one sample. `step` is the fixed sampling interval in seconds.
    fn sample(&mut self, step: f32, agent: &dyn AiAgent, blackboard: &mut Blackboard);

    fn name(&self) -> &'static str;
}
