//! Reference tree per player role.
//!
//! Every factory returns a freshly built tree; nothing is shared between calls. Branch order in
//! each root selector is the priority order.

pub mod leaves;
pub mod subtrees;

use vb_core::Role;

use crate::{BehaviorTree, Node};

pub fn tree_for_role(role: Role) -> BehaviorTree {
    match role {
        Role::Setter => setter_tree(),
        Role::OutsideHitter => outside_hitter_tree(),
        Role::Opposite => opposite_tree(),
        Role::MiddleBlocker => middle_blocker_tree(),
        Role::Libero => libero_tree(),
    }
}

pub fn setter_tree() -> BehaviorTree {
    BehaviorTree::for_role(
        Role::Setter,
        Node::selector(
            "SetterRoot",
            vec![
                subtrees::override_guard(),
                subtrees::serve(),
                subtrees::setter_release(),
                subtrees::setting(),
                subtrees::blocking(),
                subtrees::defense(),
                subtrees::transition(),
                subtrees::base_fallback(),
            ],
        ),
    )
}

pub fn outside_hitter_tree() -> BehaviorTree {
    BehaviorTree::for_role(
        Role::OutsideHitter,
        Node::selector(
            "OutsideHitterRoot",
            vec![
                subtrees::override_guard(),
                subtrees::serve(),
                subtrees::serve_receive(),
                subtrees::emergency_set(),
                subtrees::attacking(),
                subtrees::blocking(),
                subtrees::defense(),
                subtrees::transition(),
                subtrees::base_fallback(),
            ],
        ),
    )
}

pub fn opposite_tree() -> BehaviorTree {
    BehaviorTree::for_role(
        Role::Opposite,
        Node::selector(
            "OppositeRoot",
            vec![
                subtrees::override_guard(),
                subtrees::serve(),
                subtrees::emergency_set(),
                subtrees::attacking(),
                subtrees::blocking(),
                subtrees::defense(),
                subtrees::transition(),
                subtrees::base_fallback(),
            ],
        ),
    )
}

pub fn middle_blocker_tree() -> BehaviorTree {
    BehaviorTree::for_role(
        Role::MiddleBlocker,
        Node::selector(
            "MiddleBlockerRoot",
            vec![
                subtrees::override_guard(),
                subtrees::serve(),
                subtrees::blocking(),
                subtrees::quick_attack(),
                subtrees::transition(),
                subtrees::base_fallback(),
            ],
        ),
    )
}

pub fn libero_tree() -> BehaviorTree {
    BehaviorTree::for_role(
        Role::Libero,
        Node::selector(
            "LiberoRoot",
            vec![
                subtrees::override_guard(),
                subtrees::serve_receive(),
                subtrees::defense(),
                subtrees::emergency_set(),
                subtrees::transition(),
                subtrees::base_fallback(),
            ],
        ),
    )
}
