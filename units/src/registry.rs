//! Building the unit registry from the two dataset documents

use std::collections::{HashMap, HashSet};

use wbc_protocol::{AbilityCatalog, RaceEntry, RaceUnitRef, RawUnit, parse_races, parse_units};

use crate::error::DataError;
use crate::types::{
    AttackType, CombatStats, DamageType, ProductionCost, RaceSet, UnitRecord, UnitTable,
};

/// Every playable unit with its race, plus the race directory.
///
/// Built once per session and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitRegistry {
    units: UnitTable,
    races: RaceSet,
}

impl UnitRegistry {
    /// Join parsed documents.
    ///
    /// Unit stats are left-joined onto race/tier by id. A unit no race lists
    /// (the Guardian Skull) is dropped. `abilities` overrides the ability text
    /// carried by the unit document.
    pub fn from_documents(
        races: &[RaceEntry],
        units: Vec<RawUnit>,
        abilities: Option<&AbilityCatalog>,
    ) -> Result<Self, DataError> {
        let placements = race_placements(races);

        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(units.len());

        for raw in units {
            if !seen.insert(raw.id.clone()) {
                return Err(DataError::DuplicateUnit(raw.id));
            }

            let Some((race, slot)) = placements.get(raw.id.as_str()) else {
                tracing::debug!(unit_id = %raw.id, name = %raw.name, "Dropping unit without race");
                continue;
            };

            let tier = slot.tier()?;
            let ability = abilities
                .and_then(|catalog| catalog.get(&raw.id))
                .map(str::to_string)
                .or_else(|| raw.ability.clone());

            records.push(unit_record(raw, race, tier)?.with_ability(ability));
        }

        let units = UnitTable::new(records);
        let races = units.races();

        Ok(Self { units, races })
    }

    /// Parse and join the raw `races.json` and `units.json` bodies
    pub fn from_json(
        races_body: &str,
        units_body: &str,
        abilities: Option<&AbilityCatalog>,
    ) -> Result<Self, DataError> {
        let races = parse_races(races_body)?;
        let units = parse_units(units_body)?;
        Self::from_documents(&races, units, abilities)
    }

    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    pub fn races(&self) -> &RaceSet {
        &self.races
    }
}

/// Map each unit id to the first race (and slot) that lists it
fn race_placements(races: &[RaceEntry]) -> HashMap<&str, (&str, &RaceUnitRef)> {
    let mut placements = HashMap::new();

    for race in races {
        for slot in &race.units {
            if let Some((first, _)) = placements.get(slot.id.as_str()) {
                tracing::warn!(
                    unit_id = %slot.id,
                    kept = %first,
                    ignored = %race.name,
                    "Unit listed by more than one race"
                );
                continue;
            }
            placements.insert(slot.id.as_str(), (race.name.as_str(), slot));
        }
    }

    placements
}

fn unit_record(raw: RawUnit, race: &str, tier: u8) -> Result<UnitRecord, DataError> {
    let damage_type = damage_tag(&raw.id, "damage type", &raw.damage_type)?;
    let attack_type = AttackType::from_protocol(&raw.attack_type).ok_or_else(|| {
        DataError::UnknownTag {
            unit_id: raw.id.clone(),
            kind: "attack type",
            tag: raw.attack_type.clone(),
        }
    })?;
    let resilience = damage_tags(&raw.id, "resilience", &raw.resilience)?;
    let vulnerability = damage_tags(&raw.id, "vulnerability", &raw.vulnerability)?;

    let stats = CombatStats {
        damage: raw.damage,
        range: raw.range,
        combat: raw.combat,
        hits: raw.hits,
        armour: raw.armour,
        speed: raw.speed,
        resistance: raw.resistance,
    };
    let production = ProductionCost {
        gold: raw.production.gold,
        metal: raw.production.metal,
        stone: raw.production.stone,
        crystal: raw.production.crystal,
        time: raw.production.time,
    };

    Ok(
        UnitRecord::new(raw.id, raw.name, race, tier, damage_type, attack_type)
            .with_resilience(resilience)
            .with_vulnerability(vulnerability)
            .with_stats(stats)
            .with_production(production),
    )
}

fn damage_tag(unit_id: &str, kind: &'static str, tag: &str) -> Result<DamageType, DataError> {
    DamageType::from_protocol(tag).ok_or_else(|| DataError::UnknownTag {
        unit_id: unit_id.to_string(),
        kind,
        tag: tag.to_string(),
    })
}

fn damage_tags(
    unit_id: &str,
    kind: &'static str,
    tags: &[String],
) -> Result<Vec<DamageType>, DataError> {
    tags.iter().map(|tag| damage_tag(unit_id, kind, tag)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RACES: &str = r#"[
        {"name": "Dwarf", "units": [{"id": "ADBX", "tier": 1}, {"id": "ADWA", "tier": "2"}]},
        {"name": "Fey", "units": [{"id": "AFFA", "tier": 2.0}]}
    ]"#;

    const UNITS: &str = r#"[
        {"id": "ADBX", "name": "Dwarf Builder", "damageType": "crushing", "attackType": "ground"},
        {"id": "ADWA", "name": "Warrior", "damageType": "slashing", "attackType": "ground",
         "resilience": ["piercing"], "vulnerability": ["fire"], "hits": 90,
         "production": {"gold": 50, "metal": 20, "time": 25}},
        {"id": "AFFA", "name": "Faerie", "damageType": "magic", "attackType": "both",
         "ability": "Flying. Casts sleep."},
        {"id": "AGSK", "name": "Guardian Skull", "damageType": "magic", "attackType": "both"}
    ]"#;

    fn registry() -> UnitRegistry {
        UnitRegistry::from_json(RACES, UNITS, None).unwrap()
    }

    #[test]
    fn test_join_drops_unit_without_race() {
        let registry = registry();

        assert_eq!(registry.units().len(), 3);
        assert!(!registry.units().contains("AGSK"));
    }

    #[test]
    fn test_join_assigns_race_and_tier() {
        let registry = registry();
        let warrior = registry.units().get("ADWA").unwrap();

        assert_eq!(warrior.race, "Dwarf");
        assert_eq!(warrior.tier, 2);
        assert_eq!(warrior.resilience, vec![DamageType::Piercing]);
        assert_eq!(warrior.vulnerability, vec![DamageType::Fire]);
        assert_eq!(warrior.stats.hits, 90);
        assert_eq!(warrior.production.gold, 50);
        assert_eq!(warrior.production.stone, 0);

        let faerie = registry.units().get("AFFA").unwrap();
        assert_eq!(faerie.tier, 2);
    }

    #[test]
    fn test_join_keeps_unit_list_order() {
        let registry = registry();
        let ids: Vec<&str> = registry.units().ids().map(|id| id.as_str()).collect();

        assert_eq!(ids, vec!["ADBX", "ADWA", "AFFA"]);
    }

    #[test]
    fn test_races_derived() {
        let registry = registry();
        let races: Vec<&str> = registry.races().iter().collect();

        assert_eq!(races, vec!["Dwarf", "Fey"]);
    }

    #[test]
    fn test_flier_computed_at_load() {
        let registry = registry();

        assert!(registry.units().get("AFFA").unwrap().is_flier());
        assert!(!registry.units().get("ADWA").unwrap().is_flier());
    }

    #[test]
    fn test_ability_catalog_overrides_document() {
        let catalog: AbilityCatalog = [("ADWA", "Flying hammer throw"), ("AFFA", "Casts sleep")]
            .into_iter()
            .collect();
        let registry = UnitRegistry::from_json(RACES, UNITS, Some(&catalog)).unwrap();

        let warrior = registry.units().get("ADWA").unwrap();
        assert_eq!(warrior.ability(), Some("Flying hammer throw"));
        assert!(warrior.is_flier());

        let faerie = registry.units().get("AFFA").unwrap();
        assert!(!faerie.is_flier());
    }

    #[test]
    fn test_non_numeric_tier_is_malformed() {
        let races = r#"[{"name": "Dwarf", "units": [{"id": "ADWA", "tier": "elite"}]}]"#;
        let result = UnitRegistry::from_json(races, UNITS, None);

        assert!(matches!(result, Err(DataError::Protocol(_))));
    }

    #[test]
    fn test_tier_of_unjoined_slot_is_not_checked() {
        let races = r#"[{"name": "Dwarf", "units": [
            {"id": "ADWA", "tier": 2},
            {"id": "ZZZZ", "tier": "?"}
        ]}]"#;
        let registry = UnitRegistry::from_json(races, UNITS, None).unwrap();

        assert_eq!(registry.units().len(), 1);
    }

    #[test]
    fn test_unknown_damage_tag() {
        let units = r#"[
            {"id": "ADWA", "name": "Warrior", "damageType": "sonic", "attackType": "ground"}
        ]"#;
        let result = UnitRegistry::from_json(RACES, units, None);

        assert!(matches!(result, Err(DataError::UnknownTag { kind: "damage type", .. })));
    }

    #[test]
    fn test_unknown_attack_tag() {
        let units = r#"[
            {"id": "ADWA", "name": "Warrior", "damageType": "fire", "attackType": "sea"}
        ]"#;
        let result = UnitRegistry::from_json(RACES, units, None);

        assert!(matches!(result, Err(DataError::UnknownTag { kind: "attack type", .. })));
    }

    #[test]
    fn test_duplicate_unit_id() {
        let units = r#"[
            {"id": "ADWA", "name": "Warrior", "damageType": "fire", "attackType": "ground"},
            {"id": "ADWA", "name": "Warrior", "damageType": "fire", "attackType": "ground"}
        ]"#;
        let result = UnitRegistry::from_json(RACES, units, None);

        assert!(matches!(result, Err(DataError::DuplicateUnit(id)) if id == "ADWA"));
    }

    #[test]
    fn test_unit_listed_twice_keeps_first_race() {
        let races = r#"[
            {"name": "Dwarf", "units": [{"id": "ADWA", "tier": 2}]},
            {"name": "Human", "units": [{"id": "ADWA", "tier": 4}]}
        ]"#;
        let registry = UnitRegistry::from_json(races, UNITS, None).unwrap();
        let warrior = registry.units().get("ADWA").unwrap();

        assert_eq!(warrior.race, "Dwarf");
        assert_eq!(warrior.tier, 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_record() {
        let registry = registry();
        let value = serde_json::to_value(registry.units().get("ADWA").unwrap()).unwrap();

        assert_eq!(value["id"], "ADWA");
        assert_eq!(value["damage_type"], "slashing");
        assert_eq!(value["vulnerability"][0], "fire");
        assert_eq!(value["is_flier"], false);
    }

    #[test]
    fn test_schema_mismatch() {
        let result = UnitRegistry::from_json(RACES, r#"{"units": []}"#, None);
        assert!(matches!(result, Err(DataError::Protocol(_))));
    }
}
