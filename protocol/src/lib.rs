//! Wire types for the two WBC dataset documents.
//!
//! `races.json` lists each race with the ordered ids and tiers of its units,
//! `units.json` carries the stat block of every unit. This crate only knows
//! the document shapes; joining and domain typing happen in `wbc-units`.

use thiserror::Error;

pub mod abilities;
pub mod races;
pub mod units;


pub use abilities::{AbilityCatalog, parse_abilities};
pub use races::{RaceEntry, RaceUnitRef, RawTier, parse_races};
pub use units::{RawProduction, RawUnit, parse_units};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid JSON document: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
