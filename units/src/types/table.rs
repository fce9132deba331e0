//! Ordered unit tables and the race directory

use std::collections::HashSet;
use std::sync::Arc;

use super::unit::{UnitId, UnitRecord};

/// Ordered collection of units.
///
/// Rows are shared, so cloning a table or taking a filtered view never copies
/// unit data and never touches the source table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitTable {
    rows: Vec<Arc<UnitRecord>>,
}

impl UnitTable {
    pub fn new(units: impl IntoIterator<Item = UnitRecord>) -> Self {
        Self {
            rows: units.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitRecord> {
        self.rows.iter().map(|row| &**row)
    }

    /// Unit ids in row order
    pub fn ids(&self) -> impl Iterator<Item = &UnitId> {
        self.iter().map(|unit| &unit.id)
    }

    pub fn get(&self, id: &str) -> Option<&UnitRecord> {
        self.iter().find(|unit| unit.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// New table with the rows matching `predicate`, original order kept
    pub fn filter(&self, mut predicate: impl FnMut(&UnitRecord) -> bool) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .filter(|row| predicate(row))
                .cloned()
                .collect(),
        }
    }

    /// Units of one race, sorted by tier
    pub fn of_race(&self, race: &str) -> Self {
        let mut table = self.filter(|unit| unit.race == race);
        table.rows.sort_by_key(|unit| unit.tier);
        table
    }

    /// Units belonging to any of `races`, sorted by race then tier
    pub fn of_races<S: AsRef<str>>(&self, races: &[S]) -> Self {
        let mut table = self.filter(|unit| races.iter().any(|r| r.as_ref() == unit.race));
        table.sort_by_race_and_tier();
        table
    }

    /// Copy of the table sorted by race then tier, as the unit browser lists it
    pub fn sorted_by_race_and_tier(&self) -> Self {
        let mut table = self.clone();
        table.sort_by_race_and_tier();
        table
    }

    fn sort_by_race_and_tier(&mut self) {
        self.rows
            .sort_by(|a, b| a.race.cmp(&b.race).then(a.tier.cmp(&b.tier)));
    }

    /// Distinct races in first-seen order
    pub fn races(&self) -> RaceSet {
        derive_races(self)
    }
}

impl FromIterator<UnitRecord> for UnitTable {
    fn from_iter<I: IntoIterator<Item = UnitRecord>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a UnitTable {
    type Item = &'a UnitRecord;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, Arc<UnitRecord>>,
        fn(&'a Arc<UnitRecord>) -> &'a UnitRecord,
    >;

    fn into_iter(self) -> Self::IntoIter {
        let deref: fn(&'a Arc<UnitRecord>) -> &'a UnitRecord = |row| &**row;
        self.rows.iter().map(deref)
    }
}

/// Distinct race names of a table, in the order they first appear
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RaceSet(Vec<String>);

impl RaceSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, race: &str) -> bool {
        self.0.iter().any(|r| r == race)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }
}

/// Collect the distinct races present in a table
pub fn derive_races(table: &UnitTable) -> RaceSet {
    let mut seen = HashSet::new();
    RaceSet(
        table
            .iter()
            .filter(|unit| seen.insert(unit.race.as_str()))
            .map(|unit| unit.race.clone())
            .collect(),
    )
}
