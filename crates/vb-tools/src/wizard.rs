//! Manual step-through of a recorded trace ("wizard").
//!
//! A [`WizardMap`] is a flat, parent/child-linked copy of a [`TraceNode`] tree with freshly
//! assigned ids. A [`WizardSession`] walks that map one decision at a time:
//!
//! - a *decision point* is a `Condition`, or a `Selector` with more than one recorded child;
//! - from any node the session auto-advances through everything else (first recorded child)
//!   until it reaches a decision point or a childless node;
//! - an action recorded as failed or running is not a stopping point: its recorded status is
//!   propagated as if the user had answered for it;
//! - answering replays Sequence/Selector semantics by hand: success moves to the next sibling
//!   under a Sequence, failure moves to the next sibling under a Selector, anything else
//!   propagates to the parent (decorators transform it on the way up).
//!
//! Sessions are values: every operation takes `&self` and returns the next session.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vb_core::{DecoratorKind, NodeKind, Status};

use crate::TraceNode;

pub type WizardNodeId = usize;

/// Sequential id generator threaded through [`WizardMap::from_trace_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdGen {
    next: WizardNodeId,
}

impl IdGen {
    pub fn starting_at(first: WizardNodeId) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> WizardNodeId {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardNode {
    pub id: WizardNodeId,
    pub kind: NodeKind,
    pub name: String,
    pub description: Option<String>,
    pub note: Option<String>,
    pub decorator: Option<DecoratorKind>,
    /// Status recorded during evaluation (not the user's answer).
    pub recorded: Status,
    pub parent_id: Option<WizardNodeId>,
    pub child_ids: Vec<WizardNodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardMap {
    root: WizardNodeId,
    nodes: BTreeMap<WizardNodeId, WizardNode>,
}

impl WizardMap {
    /// Flatten a trace, numbering nodes depth-first from 0.
    pub fn from_trace(trace: &TraceNode) -> Self {
        Self::from_trace_with(trace, &mut IdGen::default())
    }

    pub fn from_trace_with(trace: &TraceNode, ids: &mut IdGen) -> Self {
        let mut nodes = BTreeMap::new();
        let root = flatten(trace, None, ids, &mut nodes);
        Self { root, nodes }
    }

    pub fn root(&self) -> WizardNodeId {
        self.root
    }

    pub fn get(&self, id: WizardNodeId) -> Option<&WizardNode> {
        self.nodes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in id order (depth-first order of the source trace).
    pub fn iter(&self) -> impl Iterator<Item = &WizardNode> {
        self.nodes.values()
    }

    pub fn is_decision_point(&self, id: WizardNodeId) -> bool {
        match self.get(id) {
            Some(n) => match n.kind {
                NodeKind::Condition => true,
                NodeKind::Selector => n.child_ids.len() > 1,
                NodeKind::Sequence | NodeKind::Decorator | NodeKind::Action => false,
            },
            None => false,
        }
    }

    pub fn depth_of(&self, id: WizardNodeId) -> usize {
        let mut depth = 0;
        let mut cur = self.get(id).and_then(|n| n.parent_id);
        while let Some(p) = cur {
            depth += 1;
            cur = self.get(p).and_then(|n| n.parent_id);
        }
        depth
    }

    fn next_sibling(&self, id: WizardNodeId) -> Option<WizardNodeId> {
        let parent = self.get(self.get(id)?.parent_id?)?;
        let pos = parent.child_ids.iter().position(|c| *c == id)?;
        parent.child_ids.get(pos + 1).copied()
    }

    fn node(&self, id: WizardNodeId) -> Result<&WizardNode, WizardError> {
        self.get(id).ok_or(WizardError::UnknownNode(id))
    }
}

fn flatten(
    trace: &TraceNode,
    parent_id: Option<WizardNodeId>,
    ids: &mut IdGen,
    out: &mut BTreeMap<WizardNodeId, WizardNode>,
) -> WizardNodeId {
    let id = ids.next_id();
    let child_ids = trace
        .children
        .iter()
        .map(|child| flatten(child, Some(id), ids, out))
        .collect();

    out.insert(
        id,
        WizardNode {
            id,
            kind: trace.node_kind,
            name: trace.node_name.clone(),
            description: trace.description.clone(),
            note: trace.note.clone(),
            decorator: trace.decorator,
            recorded: trace.status,
            parent_id,
            child_ids,
        },
    );
    id
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// Index into the selector's recorded children.
    Branch(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("node {0} is not in this wizard map")]
    UnknownNode(WizardNodeId),

    #[error("node {0} is not a condition awaiting a yes/no answer")]
    NotACondition(WizardNodeId),

    #[error("node {0} is not a selector with several recorded branches")]
    NotABranchPoint(WizardNodeId),

    #[error("branch {index} out of range ({len} recorded branches)")]
    BranchOutOfRange { index: usize, len: usize },

    #[error("the walk has already finished")]
    Finished,

    #[error("answer history does not match this map at node {0}")]
    StaleAnswer(WizardNodeId),
}

/// What the current node asks of the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    YesNo { node: WizardNodeId },
    Branch {
        node: WizardNodeId,
        options: Vec<WizardNodeId>,
    },
    /// A successful action: the decision this walk arrived at.
    Decision { node: WizardNodeId },
    /// A terminal node that is not an action (e.g. an empty composite).
    Leaf { node: WizardNodeId },
    Finished { status: Status },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DisplayMode {
    #[default]
    Full,
    /// Non-visited nodes render as [`Highlight::Dimmed`].
    Focused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Current,
    Visited,
    Unvisited,
    Dimmed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardSession {
    current_node_id: WizardNodeId,
    visited_path: Vec<WizardNodeId>,
    answers: Vec<(WizardNodeId, Answer)>,
    finished: Option<Status>,
}

impl WizardSession {
    /// Start at the root and auto-advance to the first decision point.
    pub fn start(map: &WizardMap) -> Self {
        let mut session = Self {
            current_node_id: map.root(),
            visited_path: Vec::new(),
            answers: Vec::new(),
            finished: None,
        };
        session.advance_into(map, map.root());
        session
    }

    pub fn reset(&self, map: &WizardMap) -> Self {
        Self::start(map)
    }

    pub fn current_node_id(&self) -> WizardNodeId {
        self.current_node_id
    }

    pub fn visited_path(&self) -> &[WizardNodeId] {
        &self.visited_path
    }

    pub fn answers(&self) -> &[(WizardNodeId, Answer)] {
        &self.answers
    }

    /// `Some(status)` once control flow has propagated out of the root.
    pub fn finished(&self) -> Option<Status> {
        self.finished
    }

    pub fn prompt(&self, map: &WizardMap) -> Prompt {
        if let Some(status) = self.finished {
            return Prompt::Finished { status };
        }
        let id = self.current_node_id;
        let Some(node) = map.get(id) else {
            return Prompt::Leaf { node: id };
        };
        match node.kind {
            NodeKind::Condition => Prompt::YesNo { node: id },
            NodeKind::Selector if node.child_ids.len() > 1 => Prompt::Branch {
                node: id,
                options: node.child_ids.clone(),
            },
            NodeKind::Action if node.recorded == Status::Success => Prompt::Decision { node: id },
            NodeKind::Action | NodeKind::Selector | NodeKind::Sequence | NodeKind::Decorator => {
                Prompt::Leaf { node: id }
            }
        }
    }

    /// Answer the current condition.
    pub fn answer(&self, map: &WizardMap, yes: bool) -> Result<Self, WizardError> {
        let mut next = self.clone();
        next.apply(map, if yes { Answer::Yes } else { Answer::No })?;
        tracing::debug!(
            node = self.current_node_id,
            yes,
            current = next.current_node_id,
            "wizard answer"
        );
        Ok(next)
    }

    /// Pick one of the recorded branches of the current selector.
    pub fn select_branch(&self, map: &WizardMap, index: usize) -> Result<Self, WizardError> {
        let mut next = self.clone();
        next.apply(map, Answer::Branch(index))?;
        tracing::debug!(
            node = self.current_node_id,
            index,
            current = next.current_node_id,
            "wizard branch selected"
        );
        Ok(next)
    }

    /// Drop the most recent answer and replay the rest from the root.
    pub fn go_back(&self, map: &WizardMap) -> Result<Self, WizardError> {
        let keep = self.answers.len().saturating_sub(1);
        let session = Self::replay(map, &self.answers[..keep])?;
        tracing::debug!(
            answers = keep,
            current = session.current_node_id,
            "wizard went back"
        );
        Ok(session)
    }

    /// Rebuild a session from an answer history.
    pub fn replay(
        map: &WizardMap,
        answers: &[(WizardNodeId, Answer)],
    ) -> Result<Self, WizardError> {
        let mut session = Self::start(map);
        for (node, answer) in answers {
            if session.current_node_id != *node || session.finished.is_some() {
                return Err(WizardError::StaleAnswer(*node));
            }
            session.apply(map, *answer)?;
        }
        Ok(session)
    }

    pub fn highlight(&self, id: WizardNodeId, mode: DisplayMode) -> Highlight {
        if id == self.current_node_id {
            Highlight::Current
        } else if self.visited_path.contains(&id) {
            Highlight::Visited
        } else {
            match mode {
                DisplayMode::Full => Highlight::Unvisited,
                DisplayMode::Focused => Highlight::Dimmed,
            }
        }
    }

    fn apply(&mut self, map: &WizardMap, answer: Answer) -> Result<(), WizardError> {
        if self.finished.is_some() {
            return Err(WizardError::Finished);
        }
        let id = self.current_node_id;
        let node = map.node(id)?;

        match answer {
            Answer::Yes | Answer::No => {
                if node.kind != NodeKind::Condition {
                    return Err(WizardError::NotACondition(id));
                }
                let first_child = node.child_ids.first().copied();
                self.answers.push((id, answer));
                match (answer, first_child) {
                    (Answer::Yes, Some(child)) => self.advance_into(map, child),
                    (Answer::Yes, None) => self.propagate(map, id, Status::Success),
                    _ => self.propagate(map, id, Status::Failure),
                }
            }
            Answer::Branch(index) => {
                if !map.is_decision_point(id) || node.kind != NodeKind::Selector {
                    return Err(WizardError::NotABranchPoint(id));
                }
                let Some(child) = node.child_ids.get(index).copied() else {
                    return Err(WizardError::BranchOutOfRange {
                        index,
                        len: node.child_ids.len(),
                    });
                };
                self.answers.push((id, answer));
                self.advance_into(map, child);
            }
        }
        Ok(())
    }

    fn visit(&mut self, id: WizardNodeId) {
        if !self.visited_path.contains(&id) {
            self.visited_path.push(id);
        }
    }

    fn advance_into(&mut self, map: &WizardMap, mut id: WizardNodeId) {
        loop {
            self.visit(id);
            self.current_node_id = id;
            let Some(node) = map.get(id) else { return };
            if map.is_decision_point(id) {
                return;
            }
            match node.child_ids.first().copied() {
                Some(child) => id = child,
                None => {
                    // An action that failed or was still running is replayed, not offered.
                    if node.kind == NodeKind::Action && node.recorded != Status::Success {
                        self.propagate(map, id, node.recorded);
                    }
                    return;
                }
            }
        }
    }

    fn propagate(&mut self, map: &WizardMap, mut from: WizardNodeId, mut status: Status) {
        loop {
            let Some(parent) = map.get(from).and_then(|n| n.parent_id).and_then(|p| map.get(p))
            else {
                self.finished = Some(status);
                return;
            };

            let sibling = map.next_sibling(from);
            match (parent.kind, status, sibling) {
                (NodeKind::Sequence, Status::Success, Some(next))
                | (NodeKind::Selector, Status::Failure, Some(next)) => {
                    self.advance_into(map, next);
                    return;
                }
                (NodeKind::Decorator, _, _) => {
                    if let Some(decorator) = parent.decorator {
                        status = decorator.apply(status);
                    }
                }
                _ => {}
            }
            from = parent.id;
        }
    }
}
