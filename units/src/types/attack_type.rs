//! Which layer of the battlefield a unit can target

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AttackType {
    Ground,
    Air,
    Both,
}

impl AttackType {
    /// Parse a dataset tag (case-insensitive)
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ground" => Some(AttackType::Ground),
            "air" => Some(AttackType::Air),
            "both" => Some(AttackType::Both),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttackType::Ground => "ground",
            AttackType::Air => "air",
            AttackType::Both => "both",
        }
    }

    /// Whether an attacker of this type can hit a target with the given flier status
    pub fn reaches(&self, target_is_flier: bool) -> bool {
        match self {
            AttackType::Ground => !target_is_flier,
            AttackType::Air => target_is_flier,
            AttackType::Both => true,
        }
    }
}

impl std::fmt::Display for AttackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
