//! Behavior tree decision engine for simulated volleyball players.
//!
//! A tree is evaluated once per tick against a [`vb_core::Context`] and returns a status plus a
//! [`vb_tools::TraceNode`] recording exactly the nodes that ran. The only side effect is the
//! acting player's `requested_goal`, written by a successful action.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod nodes;
pub mod roles;
pub mod tree;

pub use bt::{ActionFn, ActionOutcome, Evaluation, Node, NodeBody, Predicate};
pub use roles::tree_for_role;
pub use tree::BehaviorTree;
