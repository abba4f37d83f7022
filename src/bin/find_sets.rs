use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use setcard::utils::logger;
use setcard::{Card, FilenameEncoder, FindSetsConfig, FinderKind, Table};
use std::time::Instant;

#[derive(Serialize)]
struct TableEntry {
    card: Card,
    image: String,
}

#[derive(Serialize)]
struct Report {
    algorithm: FinderKind,
    seed: Option<u64>,
    table: Vec<TableEntry>,
    sets: Vec<[Card; 3]>,
}

fn main() -> anyhow::Result<()> {
    let args = FindSetsConfig::parse();

    let settings = match args.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {}", e.user_friendly_message());
            eprintln!("hint: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_from_settings(args.verbose, &settings, "info");
    tracing::debug!("find-sets config: {:?}", args);

    let mut rng = match settings.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let table = Table::deal(settings.table_size(), &mut rng).context("failed to deal table")?;
    tracing::info!("Dealt {} cards", table.len());

    if args.compare {
        compare_algorithms(&table)?;
    }

    let algorithm = settings.algorithm();
    let sets = table.find_sets(algorithm.finder().as_ref());
    let encoder = settings.encoder();

    if args.json {
        let report = Report {
            algorithm,
            seed: settings.seed(),
            table: entries(&table, &encoder),
            sets,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for entry in entries(&table, &encoder) {
            println!("{} {}", entry.card, entry.image);
        }
        println!();
        for [a, b, c] in &sets {
            println!("{} {} {}", a, b, c);
        }
        println!("{} set(s) found", sets.len());
    }

    Ok(())
}

fn entries(table: &Table, encoder: &FilenameEncoder) -> Vec<TableEntry> {
    table
        .cards()
        .iter()
        .map(|card| TableEntry {
            card: *card,
            image: encoder.filename(card),
        })
        .collect()
}

/// Runs every finder on the same table; all of them must agree.
fn compare_algorithms(table: &Table) -> anyhow::Result<()> {
    let mut reference: Option<Vec<[Card; 3]>> = None;

    for kind in FinderKind::ALL {
        let finder = kind.finder();
        let started = Instant::now();
        let sets = table.find_sets(finder.as_ref());
        tracing::info!(
            "{:<8} {:>4} set(s) in {:?}",
            kind.as_str(),
            sets.len(),
            started.elapsed()
        );

        match reference.as_ref().map(|expected| expected == &sets) {
            Some(false) => {
                anyhow::bail!("algorithm {} disagrees with {}", kind, FinderKind::ALL[0]);
            }
            Some(true) => {}
            None => reference = Some(sets),
        }
    }
    Ok(())
}
