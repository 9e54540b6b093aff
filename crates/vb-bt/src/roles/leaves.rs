//! Predicates and action bodies used by the role trees.
//!
//! Every function here reads only the context. Actions return the goal to request; the engine
//! performs the write.

use vb_core::{AttackLane, Context, Goal, HitterMode, PlayerState, Vec2};

/// Where a first contact should be sent when the setter's position is unknown.
pub const DEFAULT_SET_TARGET: Vec2 = Vec2::new(6.0, 1.0);

/// Back-row players need at least this much attacking power to hit from behind the 3m line.
pub const BACK_ROW_ATTACK_POWER: f32 = 0.6;

pub fn override_active(ctx: &Context) -> bool {
    ctx.blackboard.override_active || ctx.self_player.override_active
}

pub fn is_our_serve(ctx: &Context) -> bool {
    ctx.blackboard.serving.is_our_serve
}

pub fn is_server(ctx: &Context) -> bool {
    ctx.blackboard.serving.server_id == Some(ctx.self_player.id)
}

pub fn is_front_row(ctx: &Context) -> bool {
    ctx.blackboard.is_front_row(ctx.self_player.id)
}

pub fn is_designated_setter(ctx: &Context) -> bool {
    ctx.blackboard.team.setter_id == ctx.self_player.id
}

pub fn ball_on_our_side(ctx: &Context) -> bool {
    ctx.blackboard.ball.on_our_side
}

pub fn is_second_contact(ctx: &Context) -> bool {
    ctx.blackboard.ball.on_our_side && ctx.blackboard.ball.touch_count == 1
}

pub fn is_third_contact(ctx: &Context) -> bool {
    ctx.blackboard.ball.on_our_side && ctx.blackboard.ball.touch_count == 2
}

pub fn is_three_hitter_mode(ctx: &Context) -> bool {
    ctx.blackboard.rotation.hitter_mode == HitterMode::Three
}

pub fn opponent_attacks_my_lane(ctx: &Context) -> bool {
    AttackLane::from_x(ctx.self_player.position.x) == ctx.blackboard.opponent.attack_lane
}

/// Seconds until the ball lands, from its current speed (floored at 1 m/s).
fn time_to_landing(ctx: &Context) -> f32 {
    let ball = &ctx.blackboard.ball;
    let speed = ball.velocity.length().max(1.0);
    ball.position.distance(ball.predicted_landing) / speed
}

pub fn can_reach_landing(ctx: &Context) -> bool {
    let landing = ctx.blackboard.ball.predicted_landing;
    let me = &ctx.self_player;
    me.position.distance(landing) <= me.reach(time_to_landing(ctx))
}

/// Whether the acting player is the nearest active teammate to the landing spot.
///
/// Ties go to the lower scheduling priority, then the lower id, so exactly one player claims
/// the ball.
pub fn is_closest_to_landing(ctx: &Context) -> bool {
    let landing = ctx.blackboard.ball.predicted_landing;
    let key = |p: &PlayerState| (p.position.distance(landing), p.priority, p.id);
    let mine = key(&ctx.self_player);
    ctx.teammates().all(|p| {
        let theirs = key(p);
        match mine.0.partial_cmp(&theirs.0) {
            Some(core::cmp::Ordering::Less) => true,
            Some(core::cmp::Ordering::Equal) => (mine.1, mine.2) < (theirs.1, theirs.2),
            _ => false,
        }
    })
}

pub fn serve(_ctx: &Context) -> Option<Goal> {
    Some(Goal::Serve)
}

pub fn pass_to_setter(ctx: &Context) -> Option<Goal> {
    let setter = ctx.blackboard.team.setter_id;
    let target = ctx
        .teammates()
        .find(|p| p.id == setter)
        .map(|p| Vec2::new(p.position.x, p.position.y.min(2.0)))
        .unwrap_or(DEFAULT_SET_TARGET);
    Some(Goal::Pass { target })
}

pub fn set_ball(ctx: &Context) -> Option<Goal> {
    let lane = match ctx.blackboard.rotation.hitter_mode {
        HitterMode::Three if ctx.self_player.skills.setting.accuracy >= 0.6 => AttackLane::Middle,
        HitterMode::Three | HitterMode::Two => AttackLane::Left,
    };
    Some(Goal::Set { lane })
}

pub fn attack(ctx: &Context) -> Option<Goal> {
    let me = &ctx.self_player;
    if !is_front_row(ctx) && me.skills.attacking.power < BACK_ROW_ATTACK_POWER {
        return None;
    }
    Some(Goal::Attack {
        lane: AttackLane::from_x(me.position.x),
    })
}

pub fn block(ctx: &Context) -> Option<Goal> {
    if !is_front_row(ctx) {
        return None;
    }
    Some(Goal::Block {
        lane: ctx.blackboard.opponent.attack_lane,
    })
}

pub fn dig(ctx: &Context) -> Option<Goal> {
    if !can_reach_landing(ctx) {
        return None;
    }
    Some(Goal::Dig {
        at: ctx.blackboard.ball.predicted_landing,
    })
}

/// Cover spot 3m off the net behind the lane the ball is in.
pub fn cover(ctx: &Context) -> Option<Goal> {
    let lane = AttackLane::from_x(ctx.blackboard.ball.position.x);
    Some(Goal::Cover {
        at: Vec2::new(lane.net_spot().x, 3.0),
    })
}

pub fn move_to_set_target(_ctx: &Context) -> Option<Goal> {
    Some(Goal::MoveTo {
        at: DEFAULT_SET_TARGET,
    })
}

pub fn approach(ctx: &Context) -> Option<Goal> {
    let spot = AttackLane::from_x(ctx.self_player.position.x).net_spot();
    Some(Goal::MoveTo {
        at: Vec2::new(spot.x, 3.5),
    })
}

pub fn defensive_base(ctx: &Context) -> Option<Goal> {
    Some(Goal::MoveTo {
        at: Vec2::new(ctx.self_player.position.x, 7.0),
    })
}

pub fn hold(_ctx: &Context) -> Option<Goal> {
    Some(Goal::Hold)
}

pub fn return_to_base(ctx: &Context) -> Option<Goal> {
    Some(ctx.self_player.base_goal.unwrap_or(Goal::Hold))
}
