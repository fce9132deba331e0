//! Unit registry and matchup queries for Warlords Battlecry.
//!
//! This crate turns the raw race and unit documents into a typed registry and
//! answers the questions the matchup board asks about it.
//!
//! # Overview
//!
//! `wbc-units` sits between `wbc-protocol` (document shapes) and the loader:
//!
//! ```text
//! wbc-protocol (races.json / units.json)
//!        │
//!        ▼
//! wbc-units (registry + filters + matchups) ← THIS CRATE
//!        │
//!        └─> wbc-client (fetch + session cache)
//! ```
//!
//! # Main Types
//!
//! - [`UnitRegistry`] - joined unit table plus the race directory
//! - [`UnitRecord`] - one unit with its race, tier, tags and stats
//! - [`UnitTable`] - ordered, cheaply cloned collection of units
//! - [`UnitFilter`] - hides builders, tier-1 fliers, dragons or titans
//! - [`UnitMatchups`] - resistance, vulnerability and weakness lists for one unit
//! - [`MatchupSelection`] - player race plus up to five enemy races
//!
//! # Example Usage
//!
//! ```ignore
//! use wbc_units::{MatchupSelection, UnitFilter, UnitRegistry, matchup_board};
//!
//! let registry = UnitRegistry::from_json(&races_body, &units_body, None)?;
//! let selection = MatchupSelection::new("Dwarf").with_enemies(["Undead"]);
//! selection.validate()?;
//!
//! let players = UnitFilter::default().apply(&selection.player_units(registry.units()));
//! let enemies = UnitFilter { builders: false, ..Default::default() }
//!     .apply(&selection.enemy_units(registry.units()));
//!
//! for report in matchup_board(&players, &enemies) {
//!     println!("{}: weak to {:?}", report.unit_id, report.weak_to);
//! }
//! ```

mod error;
pub mod filter;
pub mod query;
pub mod registry;
pub mod render;
pub mod selection;
pub mod types;

pub use error::{DataError, MatchupError};
pub use filter::{UnitCategory, UnitFilter, filter_units};
pub use query::{
    GateDirection, StrengthMode, UnitMatchups, compatible_enemies, matchup_board, strong_against,
    weak_against,
};
pub use registry::UnitRegistry;
pub use selection::{MAX_ENEMY_RACES, MatchupSelection};
pub use types::{
    AttackType, CombatStats, DamageType, ProductionCost, RaceSet, UnitId, UnitRecord, UnitTable,
    derive_races,
};

pub use wbc_protocol::AbilityCatalog;
