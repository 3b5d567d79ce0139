#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

use sentinel_core::{BbKey, Blackboard};

/// A small trace event: the controller frame, a dotted tag, and two payload words.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub frame: u64,
    pub tag: Cow<'static, str>,
    pub a: u64,
    pub b: u64,
}

impl TraceEvent {
    pub fn new(frame: u64, tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            frame,
            tag: tag.into(),
            a: 0,
            b: 0,
        }
    }

    pub fn with_a(mut self, a: u64) -> Self {
        self.a = a;
        self
    }

    pub fn with_b(mut self, b: u64) -> Self {
        self.b = b;
        self
    }
}

impl core::fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}] {} a={} b={}", self.frame, self.tag, self.a, self.b)
    }
}

pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

/// Forwards every event to `tracing` at debug level, tagged with the agent label.
#[derive(Debug, Clone)]
pub struct TracingSink {
    agent: String,
}

impl TracingSink {
    pub fn new(agent: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
        }
    }
}

impl TraceSink for TracingSink {
    fn emit(&mut self, event: TraceEvent) {
        debug!(
            agent = %self.agent,
            frame = event.frame,
            tag = %event.tag,
            a = event.a,
            b = event.b,
            "decision"
        );
    }
}

/// Blackboard slot holding the optional sink.
pub const TRACE_SINK: BbKey<Box<dyn TraceSink>> = BbKey::new(0x5E17_7ACE_0000_0001);

pub fn install_sink(blackboard: &mut Blackboard, sink: Box<dyn TraceSink>) {
    blackboard.set(TRACE_SINK, sink);
}

/// Record `event` as a debug note and forward it to the installed sink, if any.
pub fn emit(blackboard: &mut Blackboard, event: TraceEvent) {
    blackboard.note(event.to_string());
    if let Some(sink) = blackboard.get_mut(TRACE_SINK) {
        sink.emit(event);
    }
}
