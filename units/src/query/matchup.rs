//! Good and bad matchups of a player unit against an enemy table

use std::collections::HashSet;
use std::str::FromStr;

use crate::error::MatchupError;
use crate::types::{UnitId, UnitRecord, UnitTable};

/// Which side of the engagement the attack-type gate checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateDirection {
    /// Enemies the player unit can hit
    Strengths,
    /// Enemies that can hit the player unit
    Weaknesses,
}

impl FromStr for GateDirection {
    type Err = MatchupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strengths" => Ok(GateDirection::Strengths),
            "weaknesses" => Ok(GateDirection::Weaknesses),
            other => Err(MatchupError::InvalidArgument(format!(
                "unknown gate direction {other:?}, expected strengths or weaknesses"
            ))),
        }
    }
}

/// Which rule makes an enemy a good matchup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthMode {
    /// The player resists the enemy's damage type
    Resistance,
    /// The enemy is vulnerable to the player's damage type
    EnemyVulnerability,
}

impl FromStr for StrengthMode {
    type Err = MatchupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resistance" => Ok(StrengthMode::Resistance),
            "enemy_vulnerability" => Ok(StrengthMode::EnemyVulnerability),
            other => Err(MatchupError::InvalidArgument(format!(
                "unknown strength mode {other:?}, expected resistance or enemy_vulnerability"
            ))),
        }
    }
}

/// Enemies that can interact with `player` in the given direction.
///
/// Ground attackers only reach non-fliers, air attackers only fliers, and
/// `both` reaches everything. For strengths the player is the attacker; for
/// weaknesses each enemy is.
pub fn compatible_enemies(
    player: &UnitRecord,
    enemies: &UnitTable,
    direction: GateDirection,
) -> UnitTable {
    match direction {
        GateDirection::Strengths => {
            enemies.filter(|enemy| player.attack_type.reaches(enemy.is_flier()))
        }
        GateDirection::Weaknesses => {
            enemies.filter(|enemy| enemy.attack_type.reaches(player.is_flier()))
        }
    }
}

/// Enemy ids `player` is strong against, in enemy-table order without repeats
pub fn strong_against(
    player: &UnitRecord,
    enemies: &UnitTable,
    mode: StrengthMode,
) -> Vec<UnitId> {
    let reachable = compatible_enemies(player, enemies, GateDirection::Strengths);

    match mode {
        StrengthMode::EnemyVulnerability => {
            matching_ids(&reachable, |enemy| enemy.is_vulnerable_to(player.damage_type))
        }
        StrengthMode::Resistance => {
            matching_ids(&reachable, |enemy| player.resists(enemy.damage_type))
        }
    }
}

/// Enemy ids that can hit `player` with a damage type it is vulnerable to
pub fn weak_against(player: &UnitRecord, enemies: &UnitTable) -> Vec<UnitId> {
    let threats = compatible_enemies(player, enemies, GateDirection::Weaknesses);
    matching_ids(&threats, |enemy| player.is_vulnerable_to(enemy.damage_type))
}

fn matching_ids(
    table: &UnitTable,
    mut predicate: impl FnMut(&UnitRecord) -> bool,
) -> Vec<UnitId> {
    let mut seen = HashSet::new();
    table
        .iter()
        .filter(|enemy| predicate(enemy))
        .filter(|enemy| seen.insert(&enemy.id))
        .map(|enemy| enemy.id.clone())
        .collect()
}

/// All matchup lists for one player unit
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnitMatchups {
    pub unit_id: UnitId,
    /// Enemies whose damage type the unit resists
    pub resists: Vec<UnitId>,
    /// Enemies vulnerable to the unit's damage type
    pub exploits: Vec<UnitId>,
    /// Enemies able to hit the unit with a damage type it is vulnerable to
    pub weak_to: Vec<UnitId>,
}

impl UnitMatchups {
    pub fn resolve(player: &UnitRecord, enemies: &UnitTable) -> Self {
        Self {
            unit_id: player.id.clone(),
            resists: strong_against(player, enemies, StrengthMode::Resistance),
            exploits: strong_against(player, enemies, StrengthMode::EnemyVulnerability),
            weak_to: weak_against(player, enemies),
        }
    }

    pub fn strong_against(&self, mode: StrengthMode) -> &[UnitId] {
        match mode {
            StrengthMode::Resistance => &self.resists,
            StrengthMode::EnemyVulnerability => &self.exploits,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.resists.is_empty() && self.exploits.is_empty() && self.weak_to.is_empty()
    }
}

/// One matchup report per player unit, in player-table order
pub fn matchup_board(players: &UnitTable, enemies: &UnitTable) -> Vec<UnitMatchups> {
    players
        .iter()
        .map(|player| UnitMatchups::resolve(player, enemies))
        .collect()
}
