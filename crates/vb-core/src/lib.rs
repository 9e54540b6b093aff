//! Context model and shared primitives for the volleyball decision engine.
//!
//! Everything here is plain data: the per-tick [`Context`] a behavior tree reads, the
//! [`Goal`] an action writes back, and the closed enums ([`Status`], [`NodeKind`],
//! [`DecoratorKind`]) shared by the engine and its trace consumers.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod blackboard;
pub mod context;
pub mod error;
pub mod goal;
pub mod math;
pub mod player;
pub mod status;

pub use blackboard::{
    AttackLane, BallState, Blackboard, HitterMode, OpponentState, RallyPhase, RotationState,
    ServingState, TeamState,
};
pub use context::Context;
pub use error::ContextError;
pub use goal::Goal;
pub use math::Vec2;
pub use player::{
    PlayerCategory, PlayerId, PlayerState, Role, Side, Skill, SkillProfile,
};
pub use status::{DecoratorKind, NodeKind, Status};
