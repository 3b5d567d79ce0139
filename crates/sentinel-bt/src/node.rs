use sentinel_core::{Action, AiAgent, Blackboard, Condition, Status};

/// A behavior tree node.
///
/// The set of node kinds is closed; leaves are open through the [`Action`] and
/// [`Condition`] traits. A tree is built once and never changes shape; only the
/// per-node run state (running index, entered flag, remaining wait time) moves
/// between ticks.
pub enum Node {
    Selector(Selector),
    Sequence(Sequence),
    Action(ActionNode),
    Condition(ConditionNode),
    Wait(Wait),
}

impl Node {
    pub fn selector(children: Vec<Node>) -> Self {
        Node::Selector(Selector::new(children))
    }

    pub fn sequence(children: Vec<Node>) -> Self {
        Node::Sequence(Sequence::new(children))
    }

    pub fn action(name: impl Into<String>, action: Box<dyn Action>) -> Self {
        Node::Action(ActionNode::new(name, action))
    }

    pub fn condition(name: impl Into<String>, condition: Box<dyn Condition>) -> Self {
        Node::Condition(ConditionNode::new(name, condition))
    }

    pub fn wait(seconds: f32) -> Self {
        Node::Wait(Wait::new(seconds))
    }

    pub fn tick(&mut self, dt: f32, agent: &mut dyn AiAgent, blackboard: &mut Blackboard) -> Status {
        match self {
            Node::Selector(node) => node.tick(dt, agent, blackboard),
            Node::Sequence(node) => node.tick(dt, agent, blackboard),
            Node::Action(node) => node.tick(dt, agent, blackboard),
            Node::Condition(node) => node.tick(agent, blackboard),
            Node::Wait(node) => node.tick(dt),
        }
    }

    /// Abandon whatever is in progress below this node.
    ///
    /// Entered actions get their `exit` call, and selector/sequence cursors go
    /// back to the first child. Wait nodes keep their remaining time.
    pub fn abort(&mut self, agent: &mut dyn AiAgent, blackboard: &mut Blackboard) {
        match self {
            Node::Selector(node) => {
                node.running = None;
                for child in &mut node.children {
                    child.abort(agent, blackboard);
                }
            }
            Node::Sequence(node) => {
                node.index = 0;
                for child in &mut node.children {
                    child.abort(agent, blackboard);
                }
            }
            Node::Action(node) => node.abort(agent, blackboard),
            Node::Condition(_) | Node::Wait(_) => {}
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Node::count).sum::<usize>()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Node::Selector(_) => "selector",
            Node::Sequence(_) => "sequence",
            Node::Action(_) => "action",
            Node::Condition(_) => "condition",
            Node::Wait(_) => "wait",
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Selector(node) => &node.children,
            Node::Sequence(node) => &node.children,
            _ => &[],
        }
    }
}

impl core::fmt::Debug for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Node::Selector(node) => f
                .debug_struct("Selector")
                .field("running", &node.running)
                .field("children", &node.children)
                .finish(),
            Node::Sequence(node) => f
                .debug_struct("Sequence")
                .field("index", &node.index)
                .field("children", &node.children)
                .finish(),
            Node::Action(node) => f
                .debug_struct("Action")
                .field("name", &node.name)
                .field("entered", &node.entered)
                .finish(),
            Node::Condition(node) => f.debug_struct("Condition").field("name", &node.name).finish(),
            Node::Wait(node) => f
                .debug_struct("Wait")
                .field("seconds", &node.seconds)
                .field("remaining", &node.remaining)
                .finish(),
        }
    }
}

/// Returns the first child result that is not `Failure`.
///
/// A `Running` child is remembered and the next tick resumes there directly,
/// so earlier children are not re-evaluated while it is in progress.
pub struct Selector {
    children: Vec<Node>,
    running: Option<usize>,
}

impl Selector {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            running: None,
        }
    }

    pub fn running(&self) -> Option<usize> {
        self.running
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn tick(&mut self, dt: f32, agent: &mut dyn AiAgent, blackboard: &mut Blackboard) -> Status {
        let start = self.running.unwrap_or(0);
        for (i, child) in self.children.iter_mut().enumerate().skip(start) {
            match child.tick(dt, agent, blackboard) {
                Status::Failure => continue,
                Status::Success => {
                    self.running = None;
                    return Status::Success;
                }
                Status::Running => {
                    self.running = Some(i);
                    return Status::Running;
                }
            }
        }

        self.running = None;
        Status::Failure
    }
}

/// Runs children in order until one fails or all succeed.
///
/// A failure restarts the whole sequence from its first child next time.
pub struct Sequence {
    children: Vec<Node>,
    index: usize,
}

impl Sequence {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn tick(&mut self, dt: f32, agent: &mut dyn AiAgent, blackboard: &mut Blackboard) -> Status {
        while self.index < self.children.len() {
            match self.children[self.index].tick(dt, agent, blackboard) {
                Status::Running => return Status::Running,
                Status::Failure => {
                    self.index = 0;
                    return Status::Failure;
                }
                Status::Success => self.index += 1,
            }
        }

        self.index = 0;
        Status::Success
    }
}

/// Wraps an [`Action`] and pairs every `enter` with exactly one `exit`.
pub struct ActionNode {
    name: String,
    action: Box<dyn Action>,
    entered: bool,
}

impl ActionNode {
    pub fn new(name: impl Into<String>, action: Box<dyn Action>) -> Self {
        Self {
            name: name.into(),
            action,
            entered: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    fn tick(&mut self, dt: f32, agent: &mut dyn AiAgent, blackboard: &mut Blackboard) -> Status {
        if !self.entered {
            self.action.enter(agent, blackboard);
            self.entered = true;
        }

        let status = self.action.tick(dt, agent, blackboard);
        if !status.is_running() {
            self.action.exit(agent, blackboard);
            self.entered = false;
        }
        status
    }

    fn abort(&mut self, agent: &mut dyn AiAgent, blackboard: &mut Blackboard) {
        if self.entered {
            self.action.exit(agent, blackboard);
            self.entered = false;
        }
    }
}

pub struct ConditionNode {
    name: String,
    condition: Box<dyn Condition>,
}

impl ConditionNode {
    pub fn new(name: impl Into<String>, condition: Box<dyn Condition>) -> Self {
        Self {
            name: name.into(),
            condition,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn tick(&self, agent: &dyn AiAgent, blackboard: &Blackboard) -> Status {
        Status::from_bool(self.condition.test(agent, blackboard))
    }
}

/// Single-shot timer.
///
/// Each tick subtracts `dt`. The tick that drives the remaining time below
/// zero returns `Success`, and so does every tick after it. A zero-length
/// Wait succeeds immediately.
///
/// A Wait never rewinds itself: not after it succeeds, not when its parent
/// sequence restarts, not on [`Node::abort`]. Rebuild the tree to get a fresh
/// one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wait {
    seconds: f32,
    remaining: f32,
}

impl Wait {
    pub fn new(seconds: f32) -> Self {
        Self {
            seconds,
            remaining: seconds,
        }
    }

    pub fn seconds(&self) -> f32 {
        self.seconds
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    fn tick(&mut self, dt: f32) -> Status {
        if self.seconds <= 0.0 || self.remaining < 0.0 {
            return Status::Success;
        }
        if dt.is_finite() && dt > 0.0 {
            self.remaining -= dt;
        }
        if self.remaining >= 0.0 {
            Status::Running
        } else {
            Status::Success
        }
    }
}
