//! Domain types for the unit registry

mod attack_type;
mod damage_type;
mod table;
mod unit;

pub use attack_type::AttackType;
pub use damage_type::{DamageType, icons};
pub use table::{RaceSet, UnitTable, derive_races};
pub use unit::{CombatStats, ProductionCost, UnitId, UnitRecord, is_flier_ability};
