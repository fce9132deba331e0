//! Unit records

use super::attack_type::AttackType;
use super::damage_type::DamageType;

/// Four-character unit identifier from the dataset (e.g. "ADBX")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UnitId(String);

impl UnitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UnitId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UnitId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for UnitId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for UnitId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Combat numbers shown on the unit card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CombatStats {
    pub damage: u32,
    pub range: u32,
    pub combat: u32,
    /// Hit points
    pub hits: u32,
    pub armour: u32,
    pub speed: u32,
    /// Flat resistance value, unrelated to the resilience list
    pub resistance: u32,
}

/// Resources and build time needed to produce a unit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProductionCost {
    pub gold: u32,
    pub metal: u32,
    pub stone: u32,
    pub crystal: u32,
    pub time: u32,
}

/// One playable unit joined with its race and tier
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnitRecord {
    pub id: UnitId,
    pub name: String,
    pub race: String,

    /// Rank within the race's build tree
    pub tier: u8,

    pub damage_type: DamageType,
    pub attack_type: AttackType,

    /// Damage types this unit resists
    pub resilience: Vec<DamageType>,

    /// Damage types this unit takes bonus damage from
    pub vulnerability: Vec<DamageType>,

    pub stats: CombatStats,
    pub production: ProductionCost,

    ability: Option<String>,
    is_flier: bool,
}

impl UnitRecord {
    /// Create a unit with empty resilience/vulnerability and zeroed stats
    pub fn new(
        id: impl Into<UnitId>,
        name: impl Into<String>,
        race: impl Into<String>,
        tier: u8,
        damage_type: DamageType,
        attack_type: AttackType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            race: race.into(),
            tier,
            damage_type,
            attack_type,
            resilience: Vec::new(),
            vulnerability: Vec::new(),
            stats: CombatStats::default(),
            production: ProductionCost::default(),
            ability: None,
            is_flier: false,
        }
    }

    pub fn with_resilience(mut self, resilience: impl Into<Vec<DamageType>>) -> Self {
        self.resilience = resilience.into();
        self
    }

    pub fn with_vulnerability(mut self, vulnerability: impl Into<Vec<DamageType>>) -> Self {
        self.vulnerability = vulnerability.into();
        self
    }

    pub fn with_stats(mut self, stats: CombatStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_production(mut self, production: ProductionCost) -> Self {
        self.production = production;
        self
    }

    /// Set the ability text, refreshing the flier flag
    pub fn with_ability(mut self, ability: Option<String>) -> Self {
        self.is_flier = is_flier_ability(ability.as_deref());
        self.ability = ability;
        self
    }

    pub fn ability(&self) -> Option<&str> {
        self.ability.as_deref()
    }

    /// Whether this unit moves through the air.
    ///
    /// Decided by the ability text only; `attack_type` says nothing about it.
    pub fn is_flier(&self) -> bool {
        self.is_flier
    }

    pub fn resists(&self, damage_type: DamageType) -> bool {
        self.resilience.contains(&damage_type)
    }

    pub fn is_vulnerable_to(&self, damage_type: DamageType) -> bool {
        self.vulnerability.contains(&damage_type)
    }
}

/// Ability text mentioning "flying" (any case) marks a flier
pub fn is_flier_ability(ability: Option<&str>) -> bool {
    ability.is_some_and(|text| text.to_lowercase().contains("flying"))
}
