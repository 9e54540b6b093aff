#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use vb_core::{Goal, NodeKind, Status};

use crate::TraceNode;

/// The decisive successful action of a trace, with the reasoning that led to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Decision {
    pub action: String,
    pub goal: Option<Goal>,
    /// The action's note, as a human-readable justification.
    pub note: Option<String>,
    /// Every node the walk visited, in evaluation order, up to and including the action.
    /// Failed conditions and abandoned branches that explain the choice are kept.
    pub path: Vec<String>,
    /// Just the ancestor chain from the root down to the action.
    pub ancestors: Vec<String>,
}

/// Find the first `Action` with `Success` in depth-first, left-to-right order.
///
/// `None` means "no decision this tick": an exhaustively failing tree is a valid outcome, not an
/// error, and no fallback decision is invented.
///
/// The first successful action is reported even when a decorator above it discards that
/// success. Under `ForceFailure(A)` followed by `B`, the result names `A` while the player's
/// `requested_goal` ends up holding `B`'s goal, because `B` wrote last.
pub fn extract_decision(trace: &TraceNode) -> Option<Decision> {
    let mut walked = Vec::new();
    let mut chain = Vec::new();
    find(trace, &mut walked, &mut chain)
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn find<'a>(
    node: &'a TraceNode,
    walked: &mut Vec<&'a str>,
    chain: &mut Vec<&'a str>,
) -> Option<Decision> {
    walked.push(&node.node_name);
    chain.push(&node.node_name);

    if node.node_kind == NodeKind::Action && node.status == Status::Success {
        return Some(Decision {
            action: node.node_name.clone(),
            goal: node.goal,
            note: node.note.clone(),
            path: to_owned(walked),
            ancestors: to_owned(chain),
        });
    }

    for child in &node.children {
        if let Some(found) = find(child, walked, chain) {
            return Some(found);
        }
    }

    chain.pop();
    None
}
