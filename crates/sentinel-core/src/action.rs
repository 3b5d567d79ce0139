use crate::{AiAgent, Blackboard, Status};

/// A leaf behavior with an enter/tick/exit lifecycle.
///
/// The owning node guarantees `enter` is called once before the first tick of
/// every run, and `exit` once when a tick returns something other than
/// [`Status::Running`] (or when the run is aborted).
pub trait Action: 'static {
    fn enter(&mut self, _agent: &mut dyn AiAgent, _blackboard: &mut Blackboard) {}

    fn tick(&mut self, dt: f32, agent: &mut dyn AiAgent, blackboard: &mut Blackboard) -> Status;

    fn exit(&mut self, _agent: &mut dyn AiAgent, _blackboard: &mut Blackboard) {}
}

/// A stateless predicate over the agent and its blackboard.
pub trait Condition: 'static {
    fn test(&self, agent: &dyn AiAgent, blackboard: &Blackboard) -> bool;
}
