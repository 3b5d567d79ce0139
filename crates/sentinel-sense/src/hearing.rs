use sentinel_core::{AiAgent, Blackboard};

use crate::Sensor;

/// Listens for the world's last-noise signal.
///
/// Once nothing has been heard for longer than `decay_seconds`, the remembered
/// cell is forgotten; the elapsed timer keeps counting.
#[derive(Debug, Clone, PartialEq)]
pub struct HearingSensor {
    decay_seconds: f32,
}

impl HearingSensor {
    pub fn new(decay_seconds: f32) -> Self {
        Self { decay_seconds }
    }

    pub fn decay_seconds(&self) -> f32 {
        self.decay_seconds
    }
}

impl Sensor for HearingSensor {
    fn sample(&mut self, step: f32, agent: &dyn AiAgent, blackboard: &mut Blackboard) {
        let memory = &mut blackboard.heard_noise;
        match agent.world().last_noise_cell() {
            Some(noise) => memory.observe(noise),
            None => {
                memory.age(step);
                if memory.elapsed() > self.decay_seconds {
                    memory.forget();
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "hearing"
    }
}
