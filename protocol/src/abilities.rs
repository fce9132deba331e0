use std::collections::HashMap;

use serde::Deserialize;

use crate::ParseError;

/// Unit id to ability description, layered over the unit document.
///
/// The stat dataset does not always describe abilities, so callers can keep
/// their own catalog and hand it to the registry join.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AbilityCatalog(HashMap<String, String>);

impl AbilityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, unit_id: impl Into<String>, ability: impl Into<String>) {
        self.0.insert(unit_id.into(), ability.into());
    }

    pub fn get(&self, unit_id: &str) -> Option<&str> {
        self.0.get(unit_id).map(String::as_str)
    }

    /// Copy every entry of `other` in, replacing existing ids
    pub fn merge(&mut self, other: &AbilityCatalog) {
        self.0
            .extend(other.0.iter().map(|(id, ability)| (id.clone(), ability.clone())));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AbilityCatalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Parse an ability catalog stored as a flat JSON object (`{"AHBX": "..."}`)
pub fn parse_abilities(body: &str) -> Result<AbilityCatalog, ParseError> {
    Ok(serde_json::from_str(body)?)
}
