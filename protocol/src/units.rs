use serde::Deserialize;

use crate::ParseError;

/// One unit stat block from `units.json`.
///
/// Tags (`damageType`, `attackType`, `resilience`, `vulnerability`) stay as
/// strings here; the domain crate maps them onto its closed enums.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUnit {
    pub id: String,
    pub name: String,

    pub damage_type: String,
    pub attack_type: String,

    #[serde(default)]
    pub resilience: Vec<String>,
    #[serde(default)]
    pub vulnerability: Vec<String>,

    /// Ability description, when the dataset carries one
    #[serde(default)]
    pub ability: Option<String>,

    #[serde(default)]
    pub damage: u32,
    #[serde(default)]
    pub range: u32,
    #[serde(default)]
    pub combat: u32,
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub armour: u32,
    #[serde(default)]
    pub speed: u32,
    /// Flat resistance value shown on the unit card
    #[serde(default)]
    pub resistance: u32,

    #[serde(default)]
    pub production: RawProduction,
}

/// Build cost block nested under `production`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawProduction {
    pub gold: u32,
    pub metal: u32,
    pub stone: u32,
    pub crystal: u32,
    pub time: u32,
}

/// Parse the body of `units.json`
pub fn parse_units(body: &str) -> Result<Vec<RawUnit>, ParseError> {
    Ok(serde_json::from_str(body)?)
}
