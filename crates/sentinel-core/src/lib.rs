//! Status protocol, per-agent memory, and the capability boundary for frame-driven behavior trees.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod agent;
pub mod blackboard;
pub mod cell;
pub mod rng;
pub mod status;
pub mod world;

pub use action::{Action, Condition};
pub use agent::AiAgent;
pub use blackboard::{ActivePath, BbKey, Blackboard, Memory, DEBUG_NOTES_CAPACITY};
pub use cell::Cell;
pub use rng::{derive_seed, shuffle, DeterministicRng, SplitMix64};
pub use status::Status;
pub use world::WorldApi;
