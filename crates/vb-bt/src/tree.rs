use vb_core::{Context, ContextError, Role};
use vb_tools::{Decision, TraceNode};

use crate::bt::{Evaluation, Node};

/// A built tree plus the boundary checks around evaluating it.
///
/// Trees are immutable and `Send + Sync`; one instance can be evaluated for many players, on
/// many threads, as long as each call gets its own context.
#[derive(Debug)]
pub struct BehaviorTree {
    name: String,
    role: Option<Role>,
    root: Node,
}

impl BehaviorTree {
    pub fn new(name: impl Into<String>, root: Node) -> Self {
        Self {
            name: name.into(),
            role: None,
            root,
        }
    }

    pub fn for_role(role: Role, root: Node) -> Self {
        Self {
            name: role.as_str().to_string(),
            role: Some(role),
            root,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Validate `ctx`, then evaluate the root.
    ///
    /// A malformed context is rejected before any node runs. A tree that reaches no successful
    /// action is not an error; see [`Evaluation::decision`].
    pub fn evaluate(&self, ctx: &mut Context) -> Result<Evaluation, ContextError> {
        if let Err(err) = ctx.validate() {
            tracing::warn!(
                tree = %self.name,
                player = ctx.self_player.id,
                error = %err,
                "context rejected"
            );
            return Err(err);
        }

        let eval = self.root.evaluate(ctx);
        tracing::debug!(
            tree = %self.name,
            player = ctx.self_player.id,
            phase = ctx.blackboard.phase.as_str(),
            status = %eval.status,
            visited = eval.trace.node_count(),
            goal = ctx.self_player.requested_goal.map(|g| g.label()),
            "tree evaluated"
        );
        Ok(eval)
    }

    /// Evaluate and extract the decisive action in one step.
    pub fn decide(&self, ctx: &mut Context) -> Result<Option<Decision>, ContextError> {
        Ok(self.evaluate(ctx)?.decision())
    }

    /// Trace of an evaluation against [`Context::preview`], for showing the tree's shape before
    /// real input exists. Statuses and goals in the result are meaningless.
    pub fn preview(&self) -> TraceNode {
        let mut ctx = Context::preview(self.role.unwrap_or(Role::OutsideHitter));
        self.root.evaluate(&mut ctx).trace
    }
}
