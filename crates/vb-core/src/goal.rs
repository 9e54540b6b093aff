#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AttackLane, Vec2};

/// What a player intends to do this tick. Written by a successful action leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum Goal {
    Serve,
    Pass { target: Vec2 },
    Set { lane: AttackLane },
    Attack { lane: AttackLane },
    Block { lane: AttackLane },
    Dig { at: Vec2 },
    Cover { at: Vec2 },
    MoveTo { at: Vec2 },
    Hold,
}

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Serve => "serve",
            Goal::Pass { .. } => "pass",
            Goal::Set { .. } => "set",
            Goal::Attack { .. } => "attack",
            Goal::Block { .. } => "block",
            Goal::Dig { .. } => "dig",
            Goal::Cover { .. } => "cover",
            Goal::MoveTo { .. } => "move-to",
            Goal::Hold => "hold",
        }
    }
}

impl core::fmt::Display for Goal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Goal::Pass { target: p }
            | Goal::Dig { at: p }
            | Goal::Cover { at: p }
            | Goal::MoveTo { at: p } => write!(f, "{} ({:.1}, {:.1})", self.label(), p.x, p.y),
            Goal::Set { lane } | Goal::Attack { lane } | Goal::Block { lane } => {
                write!(f, "{} {:?}", self.label(), lane)
            }
            Goal::Serve | Goal::Hold => f.write_str(self.label()),
        }
    }
}
