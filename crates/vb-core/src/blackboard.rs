#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{PlayerId, Vec2};

/// The nine stages of a rally, in the order they usually occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RallyPhase {
    PreServe,
    ServeInAir,
    ServeReceive,
    Set,
    Attack,
    Block,
    Dig,
    Transition,
    BallDead,
}

impl RallyPhase {
    pub const ALL: [RallyPhase; 9] = [
        RallyPhase::PreServe,
        RallyPhase::ServeInAir,
        RallyPhase::ServeReceive,
        RallyPhase::Set,
        RallyPhase::Attack,
        RallyPhase::Block,
        RallyPhase::Dig,
        RallyPhase::Transition,
        RallyPhase::BallDead,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RallyPhase::PreServe => "pre-serve",
            RallyPhase::ServeInAir => "serve-in-air",
            RallyPhase::ServeReceive => "serve-receive",
            RallyPhase::Set => "set",
            RallyPhase::Attack => "attack",
            RallyPhase::Block => "block",
            RallyPhase::Dig => "dig",
            RallyPhase::Transition => "transition",
            RallyPhase::BallDead => "ball-dead",
        }
    }

    /// CamelCase form used in node names (`IsServeReceivePhase`).
    pub fn title(self) -> &'static str {
        match self {
            RallyPhase::PreServe => "PreServe",
            RallyPhase::ServeInAir => "ServeInAir",
            RallyPhase::ServeReceive => "ServeReceive",
            RallyPhase::Set => "Set",
            RallyPhase::Attack => "Attack",
            RallyPhase::Block => "Block",
            RallyPhase::Dig => "Dig",
            RallyPhase::Transition => "Transition",
            RallyPhase::BallDead => "BallDead",
        }
    }
}

/// Court lane, seen from our side of the net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AttackLane {
    Left,
    Middle,
    Right,
}

impl AttackLane {
    /// Lane containing a court-width coordinate (three 3m lanes).
    pub fn from_x(x: f32) -> Self {
        if x < 3.0 {
            AttackLane::Left
        } else if x < 6.0 {
            AttackLane::Middle
        } else {
            AttackLane::Right
        }
    }

    /// Net-side spot a player takes to play in this lane.
    pub fn net_spot(self) -> Vec2 {
        match self {
            AttackLane::Left => Vec2::new(1.5, 0.5),
            AttackLane::Middle => Vec2::new(4.5, 0.5),
            AttackLane::Right => Vec2::new(7.5, 0.5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HitterMode {
    Two,
    Three,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BallState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub predicted_landing: Vec2,
    /// Contacts already made by the side in possession (0..=2).
    pub touch_count: u8,
    pub on_our_side: bool,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RotationState {
    /// Rotation index, 1..=6.
    pub zone: u8,
    pub front_row: Vec<PlayerId>,
    pub hitter_mode: HitterMode,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TeamState {
    pub setter_id: PlayerId,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OpponentState {
    pub attack_lane: AttackLane,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ServingState {
    pub is_our_serve: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub server_id: Option<PlayerId>,
}

/// Shared, read-only match snapshot for one tick.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Blackboard {
    pub phase: RallyPhase,
    pub ball: BallState,
    pub rotation: RotationState,
    pub team: TeamState,
    pub opponent: OpponentState,
    pub override_active: bool,
    pub serving: ServingState,
}

impl Blackboard {
    pub fn is_front_row(&self, id: PlayerId) -> bool {
        self.rotation.front_row.contains(&id)
    }
}
