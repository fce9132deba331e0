//! HTML markup for unit cards and matchup rows
//!
//! Only the table markup lives here. Turning a unit id into an image is left
//! to the caller, which passes a closure producing the snippet for each id.

use std::collections::HashSet;

use crate::query::UnitMatchups;
use crate::types::{DamageType, UnitId, UnitRecord, icons};

/// Rendered in place of an empty matchup row
pub const EMPTY_CELL: &str = "&nbsp";

const CARD_TABLE: &str = "font-size:16px; border-collapse: collapse; border: none; \
                          margin-top: 0em; table-layout: auto;";
const TRAITS_TABLE: &str = "font-size:16px; border-collapse: separate; border-spacing: 0.3em; \
                            border: none; margin-top: 0em; table-layout: auto;";
const HEADER_CELL: &str = "padding: 0 1em 0 0.5em; border: none;";
const LABEL_CELL: &str = "padding: 0 1em 0 0.5em; text-align: right; border: none;";
const VALUE_CELL: &str = "padding: 0 0.5em 0 0.5em; text-align: left; border: none;";
const TRAIT_CELL: &str = "padding: 0 1em 0 0.5em; text-align: left; border: none;";
const ROW: &str = "border: none;";

/// Stat card: name, build time, costs, combat numbers and damage icons
pub fn unit_card(unit: &UnitRecord) -> String {
    let stats = &unit.stats;
    let cost = &unit.production;

    let rows: [[(String, String); 4]; 4] = [
        [
            ("Tier".into(), unit.tier.to_string()),
            ("Damage".into(), stats.damage.to_string()),
            ("Range".into(), stats.range.to_string()),
            ("💰".into(), cost.gold.to_string()),
        ],
        [
            ("Combat".into(), stats.combat.to_string()),
            ("Damage Type".into(), unit.damage_type.icon().to_string()),
            ("Attack Type".into(), unit.attack_type.to_string()),
            ("🛡️".into(), cost.metal.to_string()),
        ],
        [
            ("HP".into(), stats.hits.to_string()),
            ("Armor".into(), stats.armour.to_string()),
            ("Resistance".into(), icons(&unit.resilience)),
            ("🗿".into(), cost.stone.to_string()),
        ],
        [
            ("Speed".into(), stats.speed.to_string()),
            ("Resistance".into(), stats.resistance.to_string()),
            ("Vulnerability".into(), icons(&unit.vulnerability)),
            ("💎".into(), cost.crystal.to_string()),
        ],
    ];

    let mut html = format!(
        "<table class=\"unit_description\" style=\"{CARD_TABLE}\">\n<thead>\n<tr style=\"{ROW}\">\
         <th colspan=\"2\" style=\"{HEADER_CELL}\">{}</th>\
         <th style=\"{HEADER_CELL}\">⏳: {}</th>\
         <th style=\"{HEADER_CELL}\">Cost:</th></tr>\n</thead>\n<tbody>\n",
        escape(&unit.name),
        cost.time,
    );

    for row in &rows {
        html.push_str(&format!("<tr style=\"{ROW}\">"));
        for (i, (label, value)) in row.iter().enumerate() {
            let style = if i == 0 { LABEL_CELL } else { VALUE_CELL };
            html.push_str(&format!(
                "<td style=\"{style}\">{label}: <strong>{}</strong></td>",
                escape(value)
            ));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

/// Ability text plus the three matchup rows of one unit
pub fn unit_traits(
    unit: &UnitRecord,
    matchups: &UnitMatchups,
    image: impl Fn(&UnitId) -> String,
) -> String {
    let rows = [
        ("<strong>Strong against</strong> (resistance):", &matchups.resists),
        ("Enemy vulnerability:", &matchups.exploits),
        ("<strong>Weak against</strong>:", &matchups.weak_to),
    ];

    let mut html = format!(
        "<table class=\"unit_description\" style=\"{TRAITS_TABLE}\">\n<thead>\n<tr style=\"{ROW}\">\
         <th colspan=\"2\" style=\"{HEADER_CELL}\">Ability:</th></tr>\n</thead>\n<tbody>\n\
         <tr style=\"{ROW}\">\
         <td colspan=\"2\" style=\"{TRAIT_CELL} line-height: 24px;\">{}</td></tr>\n",
        escape(unit.ability().unwrap_or_default()),
    );

    for (label, ids) in rows {
        html.push_str(&format!(
            "<tr style=\"{ROW}\"><td style=\"{TRAIT_CELL}\">{label}</td>\
             <td style=\"{VALUE_CELL}\">{}</td></tr>\n",
            unit_images(ids, &image)
        ));
    }

    html.push_str("</tbody>\n</table>");
    html
}

/// Image snippets for a list of ids, identical snippets collapsed.
///
/// Returns [`EMPTY_CELL`] for an empty list so the row keeps its height.
pub fn unit_images(ids: &[UnitId], image: impl Fn(&UnitId) -> String) -> String {
    if ids.is_empty() {
        return EMPTY_CELL.to_string();
    }

    let mut seen = HashSet::new();
    ids.iter()
        .map(image)
        .filter(|snippet| seen.insert(snippet.clone()))
        .collect()
}

/// Damage type to icon legend, one line per type
pub fn damage_legend() -> String {
    DamageType::all()
        .iter()
        .map(|damage_type| format!("{}: {}", damage_type.as_str(), damage_type.icon()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AttackType, CombatStats, ProductionCost, UnitTable};

    fn image(id: &UnitId) -> String {
        format!("<img alt=\"{id}\">")
    }

    fn warrior() -> UnitRecord {
        let name = "Warrior <Elite>";
        UnitRecord::new("ADWA", name, "Dwarf", 2, DamageType::Slashing, AttackType::Ground)
            .with_resilience([DamageType::Piercing])
            .with_vulnerability([DamageType::Fire, DamageType::Cold])
            .with_stats(CombatStats {
                damage: 12,
                hits: 90,
                ..CombatStats::default()
            })
            .with_production(ProductionCost {
                gold: 50,
                time: 25,
                ..ProductionCost::default()
            })
            .with_ability(Some("Berserk".to_string()))
    }

    #[test]
    fn test_unit_card() {
        let html = unit_card(&warrior());

        assert!(html.contains("Warrior &lt;Elite&gt;"));
        assert!(html.contains("⏳: 25"));
        assert!(html.contains("Tier: <strong>2</strong>"));
        assert!(html.contains("HP: <strong>90</strong>"));
        assert!(html.contains("💰: <strong>50</strong>"));
        assert!(html.contains("Attack Type: <strong>ground</strong>"));
        assert!(html.contains("Resistance: <strong>🏹</strong>"));
        assert!(html.contains("Vulnerability: <strong>🔥,❄️</strong>"));
        assert!(html.ends_with("</table>"));
    }

    #[test]
    fn test_unit_traits_empty_rows() {
        let unit = warrior();
        let matchups = UnitMatchups::resolve(&unit, &UnitTable::empty());
        let html = unit_traits(&unit, &matchups, image);

        assert!(html.contains("Berserk"));
        assert_eq!(html.matches(EMPTY_CELL).count(), 3);
    }

    #[test]
    fn test_unit_traits_rows() {
        let unit = warrior();
        let matchups = UnitMatchups {
            unit_id: unit.id.clone(),
            resists: vec!["AEAR".into()],
            exploits: vec![],
            weak_to: vec!["AHMA".into(), "AUSK".into()],
        };
        let html = unit_traits(&unit, &matchups, image);

        assert!(html.contains("<img alt=\"AEAR\">"));
        assert!(html.contains("<img alt=\"AHMA\"><img alt=\"AUSK\">"));
        assert_eq!(html.matches(EMPTY_CELL).count(), 1);
    }

    #[test]
    fn test_unit_images_collapse_duplicates() {
        let ids: Vec<UnitId> = vec!["AAAA".into(), "BBBB".into(), "AAAA".into()];
        let html = unit_images(&ids, |_| "<img>".to_string());

        assert_eq!(html, "<img>");
    }

    #[test]
    fn test_damage_legend() {
        let legend = damage_legend();

        assert_eq!(legend.lines().count(), DamageType::all().len());
        assert!(legend.contains("fire: 🔥"));
    }
}
