//! Damage categories and their display icons

/// Damage categories carried by attacks, resiliences and vulnerabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum DamageType {
    Slashing = 0,
    Piercing = 1,
    Crushing = 2,
    Physical = 3,
    Fire = 4,
    Cold = 5,
    Electric = 6,
    Poison = 7,
    Magic = 8,
    Psionic = 9,
}

impl DamageType {
    pub const ALL: [DamageType; 10] = [
        DamageType::Slashing,
        DamageType::Piercing,
        DamageType::Crushing,
        DamageType::Physical,
        DamageType::Fire,
        DamageType::Cold,
        DamageType::Electric,
        DamageType::Poison,
        DamageType::Magic,
        DamageType::Psionic,
    ];

    pub fn all() -> &'static [DamageType] {
        &Self::ALL
    }

    /// Parse a dataset tag (case-insensitive)
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "slashing" => Some(DamageType::Slashing),
            "piercing" => Some(DamageType::Piercing),
            "crushing" => Some(DamageType::Crushing),
            "physical" => Some(DamageType::Physical),
            "fire" => Some(DamageType::Fire),
            "cold" | "ice" => Some(DamageType::Cold),
            "electric" | "electricity" | "lightning" => Some(DamageType::Electric),
            "poison" => Some(DamageType::Poison),
            "magic" => Some(DamageType::Magic),
            "psionic" => Some(DamageType::Psionic),
            _ => None,
        }
    }

    /// Canonical lowercase tag
    pub fn as_str(&self) -> &'static str {
        match self {
            DamageType::Slashing => "slashing",
            DamageType::Piercing => "piercing",
            DamageType::Crushing => "crushing",
            DamageType::Physical => "physical",
            DamageType::Fire => "fire",
            DamageType::Cold => "cold",
            DamageType::Electric => "electric",
            DamageType::Poison => "poison",
            DamageType::Magic => "magic",
            DamageType::Psionic => "psionic",
        }
    }

    /// Icon shown on unit cards and in the legend
    pub fn icon(&self) -> &'static str {
        match self {
            DamageType::Slashing => "🗡️",
            DamageType::Piercing => "🏹",
            DamageType::Crushing => "🔨",
            DamageType::Physical => "👊",
            DamageType::Fire => "🔥",
            DamageType::Cold => "❄️",
            DamageType::Electric => "⚡",
            DamageType::Poison => "☠️",
            DamageType::Magic => "✨",
            DamageType::Psionic => "🧠",
        }
    }
}

impl std::fmt::Display for DamageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Join the icons of a resilience or vulnerability list.
///
/// An empty list renders as an empty string.
pub fn icons(damage_types: &[DamageType]) -> String {
    damage_types
        .iter()
        .map(DamageType::icon)
        .collect::<Vec<_>>()
        .join(",")
}
