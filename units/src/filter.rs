//! Hiding whole unit categories from the player or enemy table

use crate::types::{UnitId, UnitTable};

pub const BUILDER_IDS: [&str; 12] = [
    "AHBX", "ABBX", "AEBX", "AEAX", "AUBX", "ADBX", "AFBX", "ALBX", "AVBX", "AABX", "AOBX", "ARBX",
];

pub const T1_FLIER_IDS: [&str; 7] = ["AAEG", "AAPH", "AALH", "AABA", "AADF", "AAFB", "AAWA"];

pub const DRAGON_IDS: [&str; 6] = ["AADB", "AADR", "AADG", "AADW", "AADC", "AADU"];

pub const TITAN_IDS: [&str; 16] = [
    "ATDX", "ATPX", "ATEX", "ATHX", "ATBX", "ATFX", "ATMX", "ATLX", "ATWX", "ATVX", "ATKX", "ATAX",
    "ATOX", "ATGX", "ATRX", "ATUX",
];

/// Toggleable unit categories, each backed by a fixed id list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    Builder,
    T1Flier,
    Dragon,
    Titan,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 4] = [
        UnitCategory::Builder,
        UnitCategory::T1Flier,
        UnitCategory::Dragon,
        UnitCategory::Titan,
    ];

    pub fn ids(&self) -> &'static [&'static str] {
        match self {
            UnitCategory::Builder => &BUILDER_IDS,
            UnitCategory::T1Flier => &T1_FLIER_IDS,
            UnitCategory::Dragon => &DRAGON_IDS,
            UnitCategory::Titan => &TITAN_IDS,
        }
    }

    /// The category an id belongs to, if any (the lists are disjoint)
    pub fn of(id: &UnitId) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.ids().contains(&id.as_str()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            UnitCategory::Builder => "Builders",
            UnitCategory::T1Flier => "T1 fliers",
            UnitCategory::Dragon => "Dragons",
            UnitCategory::Titan => "Titans",
        }
    }
}

/// Which categories stay visible. Every flag defaults to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitFilter {
    pub builders: bool,
    pub t1_fliers: bool,
    pub dragons: bool,
    pub titans: bool,
}

impl Default for UnitFilter {
    fn default() -> Self {
        Self {
            builders: true,
            t1_fliers: true,
            dragons: true,
            titans: true,
        }
    }
}

impl UnitFilter {
    pub fn new(builders: bool, t1_fliers: bool, dragons: bool, titans: bool) -> Self {
        Self {
            builders,
            t1_fliers,
            dragons,
            titans,
        }
    }

    pub fn includes(&self, category: UnitCategory) -> bool {
        match category {
            UnitCategory::Builder => self.builders,
            UnitCategory::T1Flier => self.t1_fliers,
            UnitCategory::Dragon => self.dragons,
            UnitCategory::Titan => self.titans,
        }
    }

    /// Rows of `table` not in a disabled category, order preserved
    pub fn apply(&self, table: &UnitTable) -> UnitTable {
        table.filter(|unit| UnitCategory::of(&unit.id).is_none_or(|c| self.includes(c)))
    }
}

/// Drop every row whose category flag is `false`
pub fn filter_units(
    table: &UnitTable,
    builders: bool,
    t1_fliers: bool,
    dragons: bool,
    titans: bool,
) -> UnitTable {
    UnitFilter::new(builders, t1_fliers, dragons, titans).apply(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AttackType, DamageType, UnitRecord};

    fn unit(id: &str) -> UnitRecord {
        UnitRecord::new(id, id, "Test", 1, DamageType::Slashing, AttackType::Ground)
    }

    fn ids(table: &UnitTable) -> Vec<&str> {
        table.ids().map(UnitId::as_str).collect()
    }

    fn mixed_table() -> UnitTable {
        UnitTable::new(
            ["AHBX", "ADWA", "AADR", "AAEG", "ATDX", "AUSK"]
                .into_iter()
                .map(unit),
        )
    }

    #[test]
    fn test_category_lists_are_disjoint() {
        let mut all: Vec<&str> = UnitCategory::ALL
            .iter()
            .flat_map(|c| c.ids().iter().copied())
            .collect();
        let total = all.len();
        all.sort_unstable();
        all.dedup();

        assert_eq!(total, 41);
        assert_eq!(all.len(), total);
    }

    #[test]
    fn test_category_of() {
        assert_eq!(UnitCategory::of(&"AHBX".into()), Some(UnitCategory::Builder));
        assert_eq!(UnitCategory::of(&"AAEG".into()), Some(UnitCategory::T1Flier));
        assert_eq!(UnitCategory::of(&"AADR".into()), Some(UnitCategory::Dragon));
        assert_eq!(UnitCategory::of(&"ATDX".into()), Some(UnitCategory::Titan));
        assert_eq!(UnitCategory::of(&"ADWA".into()), None);
    }

    #[test]
    fn test_category_labels() {
        let labels: Vec<&str> = UnitCategory::ALL.iter().map(UnitCategory::label).collect();
        assert_eq!(labels, vec!["Builders", "T1 fliers", "Dragons", "Titans"]);
    }

    #[test]
    fn test_default_keeps_everything() {
        let table = mixed_table();
        assert_eq!(UnitFilter::default().apply(&table), table);
    }

    #[test]
    fn test_exclude_builders() {
        let mut units: Vec<UnitRecord> = BUILDER_IDS.into_iter().map(unit).collect();
        units.insert(3, unit("ADWA"));
        units.push(unit("AUSK"));
        units.insert(0, unit("AHKN"));
        let table = UnitTable::new(units);

        let filtered = filter_units(&table, false, true, true, true);

        assert_eq!(ids(&filtered), vec!["AHKN", "ADWA", "AUSK"]);
        assert_eq!(table.len(), 15);
    }

    #[test]
    fn test_each_flag_removes_only_its_category() {
        let table = mixed_table();

        assert_eq!(
            ids(&filter_units(&table, true, false, true, true)),
            vec!["AHBX", "ADWA", "AADR", "ATDX", "AUSK"]
        );
        assert_eq!(
            ids(&filter_units(&table, true, true, false, true)),
            vec!["AHBX", "ADWA", "AAEG", "ATDX", "AUSK"]
        );
        assert_eq!(
            ids(&filter_units(&table, true, true, true, false)),
            vec!["AHBX", "ADWA", "AADR", "AAEG", "AUSK"]
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let table = mixed_table();
        let filter = UnitFilter::new(false, true, false, true);

        let once = filter.apply(&table);
        let twice = filter.apply(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_exclusion_order_does_not_matter() {
        let table = mixed_table();
        let all_at_once = filter_units(&table, false, false, false, false);

        let stepwise = filter_units(&table, true, true, true, false);
        let stepwise = filter_units(&stepwise, true, false, true, true);
        let stepwise = filter_units(&stepwise, false, true, true, true);
        let stepwise = filter_units(&stepwise, true, true, false, true);

        assert_eq!(all_at_once, stepwise);
        assert_eq!(ids(&all_at_once), vec!["ADWA", "AUSK"]);
    }

    #[test]
    fn test_empty_table() {
        let filtered = filter_units(&UnitTable::empty(), false, false, false, false);
        assert!(filtered.is_empty());
    }
}
