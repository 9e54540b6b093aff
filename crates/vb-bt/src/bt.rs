use vb_core::{Context, DecoratorKind, Goal, NodeKind, RallyPhase, Status};
use vb_tools::{extract_decision, Decision, TraceNode};

/// Pure predicate over the context.
pub type Predicate = Box<dyn Fn(&Context) -> bool + Send + Sync>;

/// Action body. Only [`ActionOutcome::Success`] makes the engine write the goal.
pub type ActionFn = Box<dyn Fn(&Context) -> ActionOutcome + Send + Sync>;

/// What an action body reports for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionOutcome {
    Success(Goal),
    /// Not resolved this tick (e.g. a move still under way); nothing is written.
    Running,
    Failure,
}

impl From<Option<Goal>> for ActionOutcome {
    fn from(value: Option<Goal>) -> Self {
        match value {
            Some(goal) => ActionOutcome::Success(goal),
            None => ActionOutcome::Failure,
        }
    }
}

impl ActionOutcome {
    pub fn status(self) -> Status {
        match self {
            ActionOutcome::Success(_) => Status::Success,
            ActionOutcome::Running => Status::Running,
            ActionOutcome::Failure => Status::Failure,
        }
    }
}

/// Result of evaluating a node: its status and the trace of everything it visited.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub status: Status,
    pub trace: TraceNode,
}

impl Evaluation {
    pub fn decision(&self) -> Option<Decision> {
        extract_decision(&self.trace)
    }
}

/// Closed set of node bodies. Children are exclusively owned.
pub enum NodeBody {
    Sequence(Vec<Node>),
    Selector(Vec<Node>),
    Decorator(DecoratorKind, Box<Node>),
    Condition(Predicate),
    Action(ActionFn),
}

/// A behavior tree node. Immutable once built; evaluation takes `&self`.
pub struct Node {
    pub(crate) name: String,
    pub(crate) note: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) phase: Option<RallyPhase>,
    pub(crate) body: NodeBody,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self.body {
            NodeBody::Sequence(_) => NodeKind::Sequence,
            NodeBody::Selector(_) => NodeKind::Selector,
            NodeBody::Decorator(..) => NodeKind::Decorator,
            NodeBody::Condition(_) => NodeKind::Condition,
            NodeBody::Action(_) => NodeKind::Action,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn phase(&self) -> Option<RallyPhase> {
        self.phase
    }

    pub fn body(&self) -> &NodeBody {
        &self.body
    }

    /// Declared children (a decorator has exactly one, leaves none).
    pub fn children(&self) -> &[Node] {
        match &self.body {
            NodeBody::Sequence(children) | NodeBody::Selector(children) => children,
            NodeBody::Decorator(_, child) => core::slice::from_ref(child.as_ref()),
            NodeBody::Condition(_) | NodeBody::Action(_) => &[],
        }
    }

    /// Number of declared nodes in this subtree, including `self`.
    pub fn declared_count(&self) -> usize {
        1 + self.children().iter().map(Node::declared_count).sum::<usize>()
    }
}

impl core::fmt::Debug for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("Node");
        s.field("kind", &self.kind()).field("name", &self.name);
        if let NodeBody::Decorator(kind, _) = &self.body {
            s.field("decorator", kind);
        }
        if !self.children().is_empty() {
            s.field("children", &self.children());
        }
        s.finish()
    }
}
