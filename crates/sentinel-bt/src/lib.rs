//! Behavior trees built from JSON, their built-in leaves, and the per-agent controller.
//!
//! A [`TreeLoader`] turns a behavior document into a [`Node`] tree using the
//! leaf factories in a [`Registries`] bundle. A [`BehaviorController`] owns
//! that tree together with the agent's sensors and blackboard and drives both
//! once per frame.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod actions;
pub mod conditions;
pub mod controller;
pub mod error;
pub mod loader;
pub mod node;
pub mod registry;

pub use actions::{
    Aim, ListenAction, ListenParams, LookAction, LookParams, LookTarget, ScanAction, ScanMode,
    ScanParams,
};
pub use conditions::{HeardNoiseWithin, HeardNoiseWithinParams, PlayerVisible, PlayerVisibleParams};
pub use controller::{BehaviorController, ControllerConfig};
pub use error::{LoadError, ParamError};
pub use loader::TreeLoader;
pub use node::{ActionNode, ConditionNode, Node, Selector, Sequence, Wait};
pub use registry::{parse_params, ActionRegistry, ConditionRegistry, Factory, Registries, Registry};
