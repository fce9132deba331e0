//! Player and enemy race selection

use crate::error::MatchupError;
use crate::types::UnitTable;

/// Most enemy races a single matchup can include
pub const MAX_ENEMY_RACES: usize = 5;

/// The player's race and the enemy races it is compared against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchupSelection {
    pub player: String,
    pub enemies: Vec<String>,
}

impl MatchupSelection {
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            enemies: Vec::new(),
        }
    }

    pub fn with_enemies<I, S>(mut self, enemies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enemies = enemies.into_iter().map(Into::into).collect();
        self
    }

    /// Reject selections with more than [`MAX_ENEMY_RACES`] enemies
    pub fn validate(&self) -> Result<(), MatchupError> {
        if self.enemies.len() > MAX_ENEMY_RACES {
            return Err(MatchupError::TooManyEnemies {
                max: MAX_ENEMY_RACES,
                selected: self.enemies.len(),
            });
        }
        Ok(())
    }

    /// Swap sides: the first enemy becomes the player, the player the only enemy.
    ///
    /// Without any enemy there is nothing to swap with.
    pub fn reversed(&self) -> Self {
        match self.enemies.first() {
            Some(first_enemy) => Self {
                player: first_enemy.clone(),
                enemies: vec![self.player.clone()],
            },
            None => self.clone(),
        }
    }

    /// Player units sorted by tier
    pub fn player_units(&self, table: &UnitTable) -> UnitTable {
        table.of_race(&self.player)
    }

    /// Enemy units sorted by race then tier
    pub fn enemy_units(&self, table: &UnitTable) -> UnitTable {
        table.of_races(self.enemies.as_slice())
    }
}
