//! Umbrella crate that re-exports the `sentinel-*` building blocks.
//!
//! - [`core`]: status protocol, blackboard, capability traits, deterministic RNG.
//! - [`nav`]: path providers, the `move` action, a reference grid world.
//! - [`sense`]: vision and hearing sensors.
//! - [`bt`]: nodes, built-in leaves, registries, the JSON loader, the controller.
//! - [`tools`]: decision tracing.
//!
//! The [`prelude`] collects what a host needs to load a behavior file and tick it.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use sentinel_core as core;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use sentinel_tools as tools;

#[cfg(feature = "nav")]
#[cfg_attr(docsrs, doc(cfg(feature = "nav")))]
pub use sentinel_nav as nav;

#[cfg(feature = "sense")]
#[cfg_attr(docsrs, doc(cfg(feature = "sense")))]
pub use sentinel_sense as sense;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use sentinel_bt as bt;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub mod prelude {
    pub use sentinel_bt::{BehaviorController, ControllerConfig, LoadError, Node, Registries, TreeLoader};
    pub use sentinel_core::{Action, AiAgent, Blackboard, Cell, Condition, Status, WorldApi};
    pub use sentinel_nav::{AgentBody, GridWorld, PathProvider};
    pub use sentinel_sense::{Sensor, SensorConfig};
}
