#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use vb_core::{DecoratorKind, Goal, NodeKind, RallyPhase, Status};

/// One visited node of an evaluation, mirroring the executed control flow.
///
/// `children` holds one entry per child that was actually evaluated, in evaluation order. A
/// selector that succeeds on its second child has exactly two trace children.
///
/// This is the interchange shape between the engine and every consumer (layout, extractor,
/// wizard), so the serialized keys are stable: `nodeKind`, `nodeName`, `status`, `note`,
/// `description`, `children`, plus the optional `decorator`, `phase` and `goal` metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TraceNode {
    pub node_kind: NodeKind,
    pub node_name: String,
    pub status: Status,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub note: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub decorator: Option<DecoratorKind>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub phase: Option<RallyPhase>,
    /// Goal written by a successful action.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub goal: Option<Goal>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<TraceNode>,
}

impl TraceNode {
    pub fn new(node_kind: NodeKind, node_name: impl Into<String>, status: Status) -> Self {
        Self {
            node_kind,
            node_name: node_name.into(),
            status,
            note: None,
            description: None,
            decorator: None,
            phase: None,
            goal: None,
            children: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_decorator(mut self, decorator: DecoratorKind) -> Self {
        self.decorator = Some(decorator);
        self
    }

    pub fn with_phase(mut self, phase: RallyPhase) -> Self {
        self.phase = Some(phase);
        self
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = Some(goal);
        self
    }

    pub fn with_child(mut self, child: TraceNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<TraceNode>) -> Self {
        self.children = children;
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TraceNode::node_count).sum::<usize>()
    }

    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(TraceNode::depth).max().unwrap_or(0)
    }

    /// Depth-first, left-to-right walk (the order evaluation visited the nodes).
    pub fn iter(&self) -> impl Iterator<Item = &TraceNode> {
        let mut stack = vec![self];
        core::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Names of every node in evaluation order.
    pub fn visited_names(&self) -> Vec<&str> {
        self.iter().map(|n| n.node_name.as_str()).collect()
    }
}
