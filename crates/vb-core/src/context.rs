use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    AttackLane, BallState, Blackboard, ContextError, HitterMode, OpponentState, PlayerState,
    RallyPhase, Role, RotationState, ServingState, Side, SkillProfile, TeamState, Vec2,
};

/// Input to one evaluation: blackboard, the acting player, its peers and a timestamp.
///
/// Owned by the caller. Evaluation only ever writes `self_player.requested_goal`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Context {
    pub blackboard: Blackboard,
    #[cfg_attr(feature = "serde", serde(rename = "self"))]
    pub self_player: PlayerState,
    pub players: Vec<PlayerState>,
    /// Simulation time in seconds.
    pub timestamp: f64,
}

impl Context {
    /// Check the input contract. Called at the tree boundary before evaluation.
    pub fn validate(&self) -> Result<(), ContextError> {
        let bb = &self.blackboard;

        if bb.ball.touch_count > 2 {
            return Err(ContextError::TouchCountOutOfRange(bb.ball.touch_count));
        }
        if !(1..=6).contains(&bb.rotation.zone) {
            return Err(ContextError::ZoneOutOfRange(bb.rotation.zone));
        }
        if bb.rotation.front_row.len() > 3 {
            return Err(ContextError::FrontRowTooLarge(bb.rotation.front_row.len()));
        }
        let mut seen = BTreeSet::new();
        for id in &bb.rotation.front_row {
            if !seen.insert(*id) {
                return Err(ContextError::DuplicateFrontRow(*id));
            }
        }
        if bb.serving.is_our_serve && bb.serving.server_id.is_none() {
            return Err(ContextError::MissingServer);
        }
        for (field, v) in [
            ("ball.position", bb.ball.position),
            ("ball.velocity", bb.ball.velocity),
            ("ball.predictedLanding", bb.ball.predicted_landing),
        ] {
            if !v.is_finite() {
                return Err(ContextError::NonFinite(field));
            }
        }
        if !self.timestamp.is_finite() {
            return Err(ContextError::NonFinite("timestamp"));
        }

        let mut ids = BTreeSet::new();
        for player in core::iter::once(&self.self_player).chain(self.players.iter()) {
            if !ids.insert(player.id) {
                return Err(ContextError::DuplicatePlayer(player.id));
            }
            validate_player(player)?;
        }

        Ok(())
    }

    /// Synthetic, valid context used to recover a tree's shape before real input exists.
    ///
    /// Pre-serve, receiving side, acting player in the back row with neutral skills.
    pub fn preview(role: Role) -> Self {
        let self_player = PlayerState {
            id: 1,
            side: Side::Home,
            role,
            category: role.category(),
            priority: 0,
            position: Vec2::new(4.5, 6.0),
            velocity: Vec2::ZERO,
            max_speed: 4.0,
            requested_goal: None,
            base_goal: None,
            override_active: false,
            active: true,
            skills: SkillProfile::default(),
        };

        Self {
            blackboard: Blackboard {
                phase: RallyPhase::PreServe,
                ball: BallState {
                    position: Vec2::new(4.5, 18.0),
                    velocity: Vec2::ZERO,
                    predicted_landing: Vec2::new(4.5, 18.0),
                    touch_count: 0,
                    on_our_side: false,
                },
                rotation: RotationState {
                    zone: 1,
                    front_row: vec![2, 3, 4],
                    hitter_mode: HitterMode::Three,
                },
                team: TeamState { setter_id: 5 },
                opponent: OpponentState {
                    attack_lane: AttackLane::Middle,
                },
                override_active: false,
                serving: ServingState {
                    is_our_serve: false,
                    server_id: None,
                },
            },
            self_player,
            players: Vec::new(),
            timestamp: 0.0,
        }
    }

    /// Active peers on the acting player's side.
    pub fn teammates(&self) -> impl Iterator<Item = &PlayerState> {
        let side = self.self_player.side;
        let me = self.self_player.id;
        self.players
            .iter()
            .filter(move |p| p.active && p.side == side && p.id != me)
    }
}

fn validate_player(player: &PlayerState) -> Result<(), ContextError> {
    if !player.position.is_finite() {
        return Err(ContextError::NonFinite("player.position"));
    }
    if !player.velocity.is_finite() {
        return Err(ContextError::NonFinite("player.velocity"));
    }
    if !player.max_speed.is_finite() {
        return Err(ContextError::NonFinite("player.maxSpeed"));
    }
    if player.max_speed <= 0.0 {
        return Err(ContextError::NonPositiveSpeed {
            player: player.id,
            value: player.max_speed,
        });
    }
    for (skill, s) in player.skills.named() {
        for value in [s.accuracy, s.power] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ContextError::SkillOutOfRange {
                    player: player.id,
                    skill,
                    value,
                });
            }
        }
    }
    Ok(())
}
