use std::env;
use std::fs;
use std::process;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use wbc_client::{UnitLoader, init_shared, load_registry};
use wbc_protocol::parse_abilities;
use wbc_units::{MatchupSelection, UnitCategory, UnitFilter, UnitId, UnitTable, matchup_board};

fn names(table: &UnitTable, ids: &[UnitId]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter()
        .map(|id| {
            table
                .get(id.as_str())
                .map_or_else(|| id.to_string(), |unit| unit.name.clone())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    if let Some(pos) = args.iter().position(|arg| arg == "--abilities") {
        let path = args
            .get(pos + 1)
            .cloned()
            .context("--abilities needs a catalog file")?;
        args.drain(pos..=pos + 1);

        let body = fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
        let catalog = parse_abilities(&body).with_context(|| format!("Bad catalog {path}"))?;
        if init_shared(UnitLoader::default().with_abilities(catalog)).is_err() {
            anyhow::bail!("Unit loader already initialized");
        }
    }

    let registry = load_registry().await.context("Failed to load unit dataset")?;
    let mut args = args.into_iter();

    let Some(player) = args.next() else {
        println!("Usage: matchup_report [--abilities FILE] PLAYER_RACE [ENEMY_RACE...]\n");
        println!("Races:");
        for race in registry.races().iter() {
            println!("  • {}", race);
        }
        process::exit(1);
    };

    let selection = MatchupSelection::new(player).with_enemies(args);
    selection.validate()?;

    for race in std::iter::once(&selection.player).chain(&selection.enemies) {
        if !registry.races().contains(race) {
            anyhow::bail!("Unknown race: {}", race);
        }
    }

    // Builders are noise on the enemy side
    let players = UnitFilter::default().apply(&selection.player_units(registry.units()));
    let enemy_filter = UnitFilter {
        builders: false,
        ..UnitFilter::default()
    };
    let enemies = enemy_filter.apply(&selection.enemy_units(registry.units()));
    let hidden: Vec<&str> = UnitCategory::ALL
        .into_iter()
        .filter(|category| !enemy_filter.includes(*category))
        .map(|category| category.label())
        .collect();

    println!(
        "\n=== {} vs {} ===\n",
        selection.player,
        if selection.enemies.is_empty() {
            "nobody".to_string()
        } else {
            selection.enemies.join(", ")
        }
    );
    if !hidden.is_empty() {
        println!("Hidden on the enemy side: {}\n", hidden.join(", "));
    }

    for report in matchup_board(&players, &enemies) {
        let Some(unit) = players.get(report.unit_id.as_str()) else {
            continue;
        };

        println!(
            "┌─ T{} {} ({} / {}{})",
            unit.tier,
            unit.name,
            unit.damage_type,
            unit.attack_type,
            if unit.is_flier() { ", flier" } else { "" }
        );
        println!("│  resists:  {}", names(&enemies, &report.resists));
        println!("│  exploits: {}", names(&enemies, &report.exploits));
        println!("└─ weak to:  {}\n", names(&enemies, &report.weak_to));
    }

    Ok(())
}
