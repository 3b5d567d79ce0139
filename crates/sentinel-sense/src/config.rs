use serde::{Deserialize, Serialize};

use crate::{HearingSensor, Sensor, VisionSensor};

/// Serializable sensor description, tagged by `kind`.
///
/// ```json
/// [{ "kind": "vision", "fovDeg": 90, "maxTiles": 8 },
///  { "kind": "hearing", "decaySeconds": 3.0 }]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SensorConfig {
    #[serde(rename_all = "camelCase")]
    Vision {
        #[serde(default = "default_fov_deg")]
        fov_deg: f32,
        #[serde(default = "default_max_tiles")]
        max_tiles: f32,
        #[serde(default)]
        use_fov: bool,
    },
    #[serde(rename_all = "camelCase")]
    Hearing {
        #[serde(default = "default_decay_seconds")]
        decay_seconds: f32,
    },
}

fn default_fov_deg() -> f32 {
    90.0
}
fn default_max_tiles() -> f32 {
    8.0
}
fn default_decay_seconds() -> f32 {
    3.0
}

impl SensorConfig {
    /// Vision and hearing with their default settings.
    pub fn defaults() -> Vec<SensorConfig> {
        vec![
            SensorConfig::Vision {
                fov_deg: default_fov_deg(),
                max_tiles: default_max_tiles(),
                use_fov: false,
            },
            SensorConfig::Hearing {
                decay_seconds: default_decay_seconds(),
            },
        ]
    }

    pub fn build(&self) -> Box<dyn Sensor> {
        match *self {
            SensorConfig::Vision {
                fov_deg,
                max_tiles,
                use_fov,
            } => Box::new(VisionSensor::new(fov_deg, max_tiles).with_fov_gate(use_fov)),
            SensorConfig::Hearing { decay_seconds } => Box::new(HearingSensor::new(decay_seconds)),
        }
    }
}
