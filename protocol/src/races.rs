use serde::Deserialize;

use crate::ParseError;

/// One race from `races.json`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RaceEntry {
    pub name: String,
    #[serde(default)]
    pub units: Vec<RaceUnitRef>,
}

/// A unit slot inside a race's build tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RaceUnitRef {
    pub id: String,
    #[serde(default)]
    pub tier: Option<RawTier>,
}

/// Tier exactly as the document delivers it.
///
/// The dataset is hand maintained and mixes numbers with numeric strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTier {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawTier {
    /// Coerce to an integer tier.
    ///
    /// Integral floats and numeric strings are accepted, anything else is rejected.
    pub fn to_tier(&self) -> Result<u8, ParseError> {
        let invalid = || ParseError::InvalidFormat(format!("tier is not numeric: {self}"));

        let value = match self {
            RawTier::Int(n) => *n,
            RawTier::Float(f) if f.fract() == 0.0 => *f as i64,
            RawTier::Float(_) => return Err(invalid()),
            RawTier::Text(s) => s.trim().parse::<i64>().map_err(|_| invalid())?,
        };

        u8::try_from(value).map_err(|_| invalid())
    }
}

impl std::fmt::Display for RawTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawTier::Int(n) => write!(f, "{n}"),
            RawTier::Float(x) => write!(f, "{x}"),
            RawTier::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl RaceUnitRef {
    /// Integer tier of this slot, failing if it is absent or non-numeric
    pub fn tier(&self) -> Result<u8, ParseError> {
        self.tier
            .as_ref()
            .ok_or_else(|| ParseError::MissingField(format!("tier for unit {}", self.id)))?
            .to_tier()
    }
}

/// Parse the body of `races.json`
pub fn parse_races(body: &str) -> Result<Vec<RaceEntry>, ParseError> {
    Ok(serde_json::from_str(body)?)
}
