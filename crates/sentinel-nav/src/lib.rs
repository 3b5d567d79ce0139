//! Path providers, the generic `move` action, and a reference grid world.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod actions;
pub mod agent;
pub mod grid;
pub mod provider;

pub use actions::{MoveAction, MoveMode, MoveParams, MoveTarget};
pub use agent::{AgentBody, GridAgent, MoveIntent};
pub use grid::{GridError, GridWorld};
pub use provider::{
    BoxedProvider, Fallback, PathProvider, PatrolProvider, ProviderMode, RandomAdjacentProvider,
};
