use thiserror::Error;

use crate::PlayerId;

/// A context that breaks the input contract. Raised before any node is evaluated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContextError {
    #[error("touch count {0} out of range (expected 0..=2)")]
    TouchCountOutOfRange(u8),

    #[error("rotation zone {0} out of range (expected 1..=6)")]
    ZoneOutOfRange(u8),

    #[error("front row lists {0} players (at most 3)")]
    FrontRowTooLarge(usize),

    #[error("player {0} listed twice in the front row")]
    DuplicateFrontRow(PlayerId),

    #[error("player {0} appears more than once in the context")]
    DuplicatePlayer(PlayerId),

    #[error("non-finite value in `{0}`")]
    NonFinite(&'static str),

    #[error("skill `{skill}` of player {player} is {value} (expected 0..=1)")]
    SkillOutOfRange {
        player: PlayerId,
        skill: &'static str,
        value: f32,
    },

    #[error("player {player} has non-positive max speed {value}")]
    NonPositiveSpeed { player: PlayerId, value: f32 },

    #[error("our serve is flagged but no server id is set")]
    MissingServer,
}
