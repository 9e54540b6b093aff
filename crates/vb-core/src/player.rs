#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Goal, Vec2};

/// Stable player identifier (jersey-independent).
pub type PlayerId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Role {
    Setter,
    OutsideHitter,
    Opposite,
    MiddleBlocker,
    Libero,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Setter,
        Role::OutsideHitter,
        Role::Opposite,
        Role::MiddleBlocker,
        Role::Libero,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Setter => "setter",
            Role::OutsideHitter => "outside-hitter",
            Role::Opposite => "opposite",
            Role::MiddleBlocker => "middle-blocker",
            Role::Libero => "libero",
        }
    }

    pub fn category(self) -> PlayerCategory {
        match self {
            Role::Setter => PlayerCategory::Playmaker,
            Role::OutsideHitter | Role::Opposite | Role::MiddleBlocker => PlayerCategory::Attacker,
            Role::Libero => PlayerCategory::Defender,
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown role `{s}`"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlayerCategory {
    Playmaker,
    Attacker,
    Defender,
}

/// Accuracy/power pair, both in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Skill {
    pub accuracy: f32,
    pub power: f32,
}

impl Skill {
    pub const fn new(accuracy: f32, power: f32) -> Self {
        Self { accuracy, power }
    }
}

impl Default for Skill {
    fn default() -> Self {
        Self::new(0.5, 0.5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkillProfile {
    pub passing: Skill,
    pub setting: Skill,
    pub attacking: Skill,
    pub blocking: Skill,
    pub serving: Skill,
    pub movement: Skill,
}

impl SkillProfile {
    pub fn named(&self) -> [(&'static str, Skill); 6] {
        [
            ("passing", self.passing),
            ("setting", self.setting),
            ("attacking", self.attacking),
            ("blocking", self.blocking),
            ("serving", self.serving),
            ("movement", self.movement),
        ]
    }
}

/// A player as seen by decision logic.
///
/// For the acting player, `requested_goal` is the single slot evaluation may write.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerState {
    pub id: PlayerId,
    pub side: Side,
    pub role: Role,
    pub category: PlayerCategory,
    /// Lower runs earlier when a host schedules players.
    pub priority: u8,
    pub position: Vec2,
    pub velocity: Vec2,
    pub max_speed: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requested_goal: Option<Goal>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_goal: Option<Goal>,
    pub override_active: bool,
    pub active: bool,
    pub skills: SkillProfile,
}

impl PlayerState {
    /// Distance the player can cover in `seconds`, scaled by movement accuracy.
    pub fn reach(&self, seconds: f32) -> f32 {
        let footwork = 0.5 + 0.5 * self.skills.movement.accuracy;
        self.max_speed * seconds * footwork + 1.0
    }
}
