//! Named sub-trees shared by the role factories. Each call builds fresh nodes.

use vb_core::RallyPhase;

use crate::roles::leaves;
use crate::Node;

/// `Is<Phase>Phase` condition tagged with the phase it tests.
pub fn phase_is(phase: RallyPhase) -> Node {
    Node::condition(format!("Is{}Phase", phase.title()), move |ctx| {
        ctx.blackboard.phase == phase
    })
    .with_phase(phase)
}

pub fn override_guard() -> Node {
    Node::sequence(
        "OverrideGuard",
        vec![
            Node::condition("IsOverrideActive", leaves::override_active),
            Node::action("HoldPosition", leaves::hold)
                .with_note("coach override: stay put until released"),
        ],
    )
    .with_description("Manual override takes precedence over every rally behavior")
}

pub fn serve() -> Node {
    Node::sequence(
        "Serve",
        vec![
            phase_is(RallyPhase::PreServe),
            Node::condition("IsOurServe", leaves::is_our_serve),
            Node::condition("IsServer", leaves::is_server),
            Node::action("ServeBall", leaves::serve).with_note("our serve and I am the server"),
        ],
    )
}

pub fn serve_receive() -> Node {
    Node::sequence(
        "ServeReceive",
        vec![
            phase_is(RallyPhase::ServeReceive),
            Node::selector(
                "ReceiveOrCover",
                vec![
                    Node::sequence(
                        "TakeFirstBall",
                        vec![
                            Node::condition("IsClosestToLanding", leaves::is_closest_to_landing),
                            Node::condition("CanReachLanding", leaves::can_reach_landing),
                            Node::action("PassToSetter", leaves::pass_to_setter)
                                .with_note("closest reachable receiver passes to the setter"),
                        ],
                    ),
                    Node::action("CoverReceiver", leaves::cover)
                        .with_note("someone else takes the serve; cover the pass"),
                ],
            ),
        ],
    )
}

/// Setter hides out of the passing lanes and runs to the target.
pub fn setter_release() -> Node {
    Node::sequence(
        "SetterRelease",
        vec![
            phase_is(RallyPhase::ServeReceive),
            Node::action("RunToSetTarget", leaves::move_to_set_target)
                .with_note("release to the target before the pass arrives"),
        ],
    )
}

pub fn setting() -> Node {
    Node::sequence(
        "SetBall",
        vec![
            phase_is(RallyPhase::Set),
            Node::condition("IsSecondContact", leaves::is_second_contact),
            Node::condition("IsDesignatedSetter", leaves::is_designated_setter),
            Node::action("DeliverSet", leaves::set_ball)
                .with_note("second contact belongs to the setter"),
        ],
    )
}

/// Second contact when the setter is not the one taking it.
pub fn emergency_set() -> Node {
    Node::sequence(
        "EmergencySet",
        vec![
            phase_is(RallyPhase::Set),
            Node::condition("IsSecondContact", leaves::is_second_contact),
            Node::invert(
                "SetterUnavailable",
                Node::condition("IsDesignatedSetter", leaves::is_designated_setter),
            ),
            Node::condition("IsClosestToLanding", leaves::is_closest_to_landing),
            Node::action("HighSetToOutside", leaves::set_ball)
                .with_note("setter took the first ball; nearest player sets"),
        ],
    )
}

pub fn attacking() -> Node {
    Node::sequence(
        "Attack",
        vec![
            phase_is(RallyPhase::Attack),
            Node::selector(
                "HitOrCover",
                vec![
                    Node::sequence(
                        "Hit",
                        vec![
                            Node::condition("IsThirdContact", leaves::is_third_contact),
                            Node::condition("IsClosestToLanding", leaves::is_closest_to_landing),
                            Node::action("Spike", leaves::attack)
                                .with_note("third contact in my reach: attack my lane"),
                        ],
                    ),
                    Node::action("CoverHitter", leaves::cover)
                        .with_note("teammate is hitting; cover the block"),
                ],
            ),
        ],
    )
}

pub fn blocking() -> Node {
    Node::sequence(
        "Blocking",
        vec![
            phase_is(RallyPhase::Block),
            Node::invert(
                "BallNotOnOurSide",
                Node::condition("BallOnOurSide", leaves::ball_on_our_side),
            ),
            Node::condition("IsFrontRow", leaves::is_front_row),
            Node::selector(
                "BlockChoice",
                vec![
                    Node::sequence(
                        "BlockMyLane",
                        vec![
                            Node::condition(
                                "OpponentAttacksMyLane",
                                leaves::opponent_attacks_my_lane,
                            ),
                            Node::action("BlockLane", leaves::block)
                                .with_note("opponent is attacking through my lane"),
                        ],
                    ),
                    Node::action("CloseBlock", leaves::block)
                        .with_note("join the block on the attacking lane"),
                ],
            ),
        ],
    )
}

pub fn defense() -> Node {
    Node::sequence(
        "Defense",
        vec![
            phase_is(RallyPhase::Dig),
            Node::selector(
                "DigOrBase",
                vec![
                    Node::sequence(
                        "DigBall",
                        vec![
                            Node::condition("IsClosestToLanding", leaves::is_closest_to_landing),
                            Node::action("Dig", leaves::dig)
                                .with_note("nearest defender digs the attack"),
                        ],
                    ),
                    Node::sequence(
                        "BackRowBase",
                        vec![
                            Node::invert(
                                "IsBackRow",
                                Node::condition("IsFrontRow", leaves::is_front_row),
                            ),
                            Node::action("HoldDefensiveBase", leaves::defensive_base)
                                .with_note("back row holds deep defense"),
                        ],
                    ),
                    Node::action("CoverTip", leaves::cover).with_note("front row covers the tip"),
                ],
            ),
        ],
    )
}

pub fn transition() -> Node {
    Node::sequence(
        "Transition",
        vec![
            phase_is(RallyPhase::Transition),
            Node::selector(
                "ApproachOrBase",
                vec![
                    Node::sequence(
                        "OpenForAttack",
                        vec![
                            Node::condition("IsFrontRow", leaves::is_front_row),
                            Node::action("Approach", leaves::approach)
                                .with_note("front row opens up to attack"),
                        ],
                    ),
                    Node::action("ReturnToBase", leaves::return_to_base)
                        .with_note("back row returns to base"),
                ],
            ),
        ],
    )
}

/// Only fires in three-hitter rotations; middles skip the attack otherwise.
pub fn quick_attack() -> Node {
    Node::sequence(
        "QuickAttack",
        vec![Node::condition("IsThreeHitterMode", leaves::is_three_hitter_mode), attacking()],
    )
}

pub fn base_fallback() -> Node {
    Node::action("ReturnToBase", leaves::return_to_base)
        .with_note("nothing else applies: take my base position")
}
