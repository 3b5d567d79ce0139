//! Decision tracing for behavior controllers.
//!
//! Trace events are plain data recorded during simulation. They land in the
//! agent's bounded debug notes and, when a sink is installed on the blackboard,
//! are forwarded to it for tooling.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{emit, install_sink, TraceEvent, TraceSink, TracingSink, TRACE_SINK};
