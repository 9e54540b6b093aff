#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use vb_bt::{ActionOutcome, Node};
use vb_core::{
    AttackLane, BallState, Blackboard, Context, Goal, HitterMode, OpponentState, PlayerId,
    PlayerState, RallyPhase, Role, RotationState, ServingState, Side, SkillProfile, TeamState,
    Vec2,
};

pub const SETTER: PlayerId = 1;
pub const OUTSIDE_FRONT: PlayerId = 2;
pub const MIDDLE: PlayerId = 3;
pub const OPPOSITE: PlayerId = 4;
pub const OUTSIDE_BACK: PlayerId = 5;
pub const LIBERO: PlayerId = 6;

pub fn player(id: PlayerId, role: Role, position: Vec2) -> PlayerState {
    PlayerState {
        id,
        side: Side::Home,
        role,
        category: role.category(),
        priority: id as u8,
        position,
        velocity: Vec2::ZERO,
        max_speed: 5.0,
        requested_goal: None,
        base_goal: None,
        override_active: false,
        active: true,
        skills: SkillProfile::default(),
    }
}

/// Rotation 1, setter back right, front row 2/3/4.
pub fn lineup() -> Vec<PlayerState> {
    vec![
        player(SETTER, Role::Setter, Vec2::new(7.5, 7.0)),
        player(OUTSIDE_FRONT, Role::OutsideHitter, Vec2::new(1.5, 1.0)),
        player(MIDDLE, Role::MiddleBlocker, Vec2::new(4.5, 1.0)),
        player(OPPOSITE, Role::Opposite, Vec2::new(7.5, 1.0)),
        player(OUTSIDE_BACK, Role::OutsideHitter, Vec2::new(1.5, 7.0)),
        player(LIBERO, Role::Libero, Vec2::new(4.5, 7.0)),
    ]
}

/// Context for `me` in `phase`, ball heading to the middle of the back court.
pub fn rally(me: PlayerId, phase: RallyPhase) -> Context {
    let mut players = lineup();
    let idx = players
        .iter()
        .position(|p| p.id == me)
        .expect("player in lineup");
    let self_player = players.remove(idx);

    Context {
        blackboard: Blackboard {
            phase,
            ball: BallState {
                position: Vec2::new(4.5, 12.0),
                velocity: Vec2::new(0.0, -8.0),
                predicted_landing: Vec2::new(4.5, 6.5),
                touch_count: 0,
                on_our_side: true,
            },
            rotation: RotationState {
                zone: 1,
                front_row: vec![OUTSIDE_FRONT, MIDDLE, OPPOSITE],
                hitter_mode: HitterMode::Three,
            },
            team: TeamState { setter_id: SETTER },
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
        players,
        timestamp: 12.5,
    }
}

pub fn with_base(mut ctx: Context, goal: Goal) -> Context {
    ctx.self_player.base_goal = Some(goal);
    ctx
}

/// Shared call counter for instrumented leaves.
#[derive(Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    pub fn condition(&self, name: &str, result: bool) -> Node {
        let calls = self.0.clone();
        Node::condition(name, move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            result
        })
    }

    pub fn action(&self, name: &str, goal: Option<Goal>) -> Node {
        let calls = self.0.clone();
        Node::action(name, move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            goal
        })
    }

    /// Action that never resolves within the tick.
    pub fn running(&self, name: &str) -> Node {
        let calls = self.0.clone();
        Node::action_with_outcome(name, move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            ActionOutcome::Running
        })
    }
}
