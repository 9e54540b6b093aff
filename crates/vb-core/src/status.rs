#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of evaluating a node for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Status {
    Success,
    Failure,
    /// Not resolved this tick. No built-in leaf produces it; composites propagate it.
    Running,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "SUCCESS",
            Status::Failure => "FAILURE",
            Status::Running => "RUNNING",
        }
    }

    pub fn is_success(self) -> bool {
        self == Status::Success
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of node kinds.
///
/// Every consumer (evaluation, trace, extractor, wizard) matches on this exhaustively, so adding
/// a kind is a breaking change across the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    Sequence,
    Selector,
    Decorator,
    Condition,
    Action,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Sequence => "Sequence",
            NodeKind::Selector => "Selector",
            NodeKind::Decorator => "Decorator",
            NodeKind::Condition => "Condition",
            NodeKind::Action => "Action",
        }
    }

    pub fn is_leaf(self) -> bool {
        matches!(self, NodeKind::Condition | NodeKind::Action)
    }
}

impl core::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status transform applied by a decorator to its single child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum DecoratorKind {
    /// `Success` <-> `Failure`; `Running` stays `Running`.
    Invert,
    ForceSuccess,
    ForceFailure,
    /// `Running` -> `Failure`; resolved statuses pass through.
    RunningIsFailure,
}

impl DecoratorKind {
    pub fn apply(self, child: Status) -> Status {
        match (self, child) {
            (DecoratorKind::Invert, Status::Success) => Status::Failure,
            (DecoratorKind::Invert, Status::Failure) => Status::Success,
            (DecoratorKind::Invert, Status::Running) => Status::Running,
            (DecoratorKind::ForceSuccess, _) => Status::Success,
            (DecoratorKind::ForceFailure, _) => Status::Failure,
            (DecoratorKind::RunningIsFailure, Status::Running) => Status::Failure,
            (DecoratorKind::RunningIsFailure, other) => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DecoratorKind::Invert => "Invert",
            DecoratorKind::ForceSuccess => "ForceSuccess",
            DecoratorKind::ForceFailure => "ForceFailure",
            DecoratorKind::RunningIsFailure => "RunningIsFailure",
        }
    }
}
