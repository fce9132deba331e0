//! Matchup queries
//!
//! Answers which enemy units a player unit is strong or weak against.
//! Attack-type reach (ground/air/both against fliers) is checked first, then
//! damage-type resilience and vulnerability.

mod matchup;

pub use matchup::{
    GateDirection, StrengthMode, UnitMatchups, compatible_enemies, matchup_board, strong_against,
    weak_against,
};
