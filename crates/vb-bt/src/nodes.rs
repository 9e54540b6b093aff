//! Node constructors and evaluation semantics.
//!
//! | kind        | semantics                                                             |
//! |-------------|-----------------------------------------------------------------------|
//! | `Sequence`  | declared order; stops on the first `Failure`/`Running` and returns it |
//! | `Selector`  | declared order; stops on the first `Success`/`Running` and returns it |
//! | `Decorator` | evaluates its one child, transforms the status, keeps the child trace |
//! | `Condition` | pure predicate; `Success`/`Failure`                                   |
//! | `Action`    | on success writes `requested_goal`; may report `Running`              |
//!
//! Declared order is the only tie-break. Children after a short-circuit are never evaluated and
//! never appear in the trace.

use vb_core::{Context, DecoratorKind, Goal, RallyPhase, Status};
use vb_tools::TraceNode;

use crate::bt::{ActionOutcome, Evaluation, Node, NodeBody};

impl Node {
    fn with_body(name: impl Into<String>, body: NodeBody) -> Self {
        Self {
            name: name.into(),
            note: None,
            description: None,
            phase: None,
            body,
        }
    }

    pub fn sequence(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::with_body(name, NodeBody::Sequence(children))
    }

    pub fn selector(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::with_body(name, NodeBody::Selector(children))
    }

    pub fn decorator(name: impl Into<String>, kind: DecoratorKind, child: Node) -> Self {
        Self::with_body(name, NodeBody::Decorator(kind, Box::new(child)))
    }

    pub fn invert(name: impl Into<String>, child: Node) -> Self {
        Self::decorator(name, DecoratorKind::Invert, child)
    }

    pub fn force_success(name: impl Into<String>, child: Node) -> Self {
        Self::decorator(name, DecoratorKind::ForceSuccess, child)
    }

    pub fn force_failure(name: impl Into<String>, child: Node) -> Self {
        Self::decorator(name, DecoratorKind::ForceFailure, child)
    }

    /// `predicate` must only read the context and must not look at `requested_goal`.
    pub fn condition(
        name: impl Into<String>,
        predicate: impl Fn(&Context) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::with_body(name, NodeBody::Condition(Box::new(predicate)))
    }

    /// Single-tick action: `Some(goal)` succeeds, `None` fails.
    pub fn action(
        name: impl Into<String>,
        action: impl Fn(&Context) -> Option<Goal> + Send + Sync + 'static,
    ) -> Self {
        let body = move |ctx: &Context| -> ActionOutcome { action(ctx).into() };
        Self::with_body(name, NodeBody::Action(Box::new(body)))
    }

    /// Action that can report [`ActionOutcome::Running`] while it has not resolved.
    pub fn action_with_outcome(
        name: impl Into<String>,
        action: impl Fn(&Context) -> ActionOutcome + Send + Sync + 'static,
    ) -> Self {
        Self::with_body(name, NodeBody::Action(Box::new(action)))
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Rally phase this node is about, for display. Does not affect evaluation.
    pub fn with_phase(mut self, phase: RallyPhase) -> Self {
        self.phase = Some(phase);
        self
    }

    /// Evaluate against `ctx`. Only a successful action writes to the context.
    pub fn evaluate(&self, ctx: &mut Context) -> Evaluation {
        let mut goal = None;
        let (status, children) = match &self.body {
            NodeBody::Sequence(children) => run_sequence(children, ctx),
            NodeBody::Selector(children) => run_selector(children, ctx),
            NodeBody::Decorator(kind, child) => {
                let inner = child.evaluate(ctx);
                (kind.apply(inner.status), vec![inner.trace])
            }
            NodeBody::Condition(predicate) => {
                let status = if predicate(&*ctx) {
                    Status::Success
                } else {
                    Status::Failure
                };
                (status, Vec::new())
            }
            NodeBody::Action(action) => {
                let outcome = action(&*ctx);
                if let ActionOutcome::Success(g) = outcome {
                    ctx.self_player.requested_goal = Some(g);
                    goal = Some(g);
                }
                (outcome.status(), Vec::new())
            }
        };

        let mut trace =
            TraceNode::new(self.kind(), self.name.clone(), status).with_children(children);
        trace.note = self.note.clone();
        trace.description = self.description.clone();
        trace.phase = self.phase;
        trace.goal = goal;
        if let NodeBody::Decorator(kind, _) = &self.body {
            trace.decorator = Some(*kind);
        }

        Evaluation { status, trace }
    }
}

fn run_sequence(children: &[Node], ctx: &mut Context) -> (Status, Vec<TraceNode>) {
    let mut traces = Vec::with_capacity(children.len());
    for child in children {
        let Evaluation { status, trace } = child.evaluate(ctx);
        traces.push(trace);
        match status {
            Status::Success => continue,
            other => return (other, traces),
        }
    }
    (Status::Success, traces)
}

fn run_selector(children: &[Node], ctx: &mut Context) -> (Status, Vec<TraceNode>) {
    let mut traces = Vec::with_capacity(children.len());
    for child in children {
        let Evaluation { status, trace } = child.evaluate(ctx);
        traces.push(trace);
        match status {
            Status::Failure => continue,
            other => return (other, traces),
        }
    }
    (Status::Failure, traces)
}
