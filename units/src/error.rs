//! Error types for the registry join and matchup queries

use thiserror::Error;

/// The dataset documents parsed but cannot be joined into a registry
#[derive(Error, Debug)]
pub enum DataError {
    #[error(transparent)]
    Protocol(#[from] wbc_protocol::ParseError),

    #[error("Unit {unit_id}: unknown {kind} tag {tag:?}")]
    UnknownTag {
        unit_id: String,
        kind: &'static str,
        tag: String,
    },

    #[error("Unit id {0} appears more than once in the unit list")]
    DuplicateUnit(String),
}

/// A caller passed something the matchup queries do not accept
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatchupError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("At most {max} enemy races can be selected, got {selected}")]
    TooManyEnemies { max: usize, selected: usize },
}
