mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use cli::{Cli, Command};
use cohort_roster::{Bucket, PersonRow, RecordStore};

#[derive(Serialize)]
struct NamedRoster<'a> {
    roster: &'a str,
    names: &'a [String],
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let store = RecordStore::new(cli.file.clone());
    let context = || format!("querying {}", cli.file.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Houses => {
            let houses = store.all_houses().with_context(context)?;
            emit_list(&mut out, cli.json, houses.iter())?;
        }
        Command::Cohorts => {
            let cohorts = store.known_cohorts().with_context(context)?;
            emit_list(&mut out, cli.json, cohorts.iter())?;
        }
        Command::Students { cohort } => {
            let names = store.students_by_cohort(cohort).with_context(context)?;
            emit_list(&mut out, cli.json, names.iter())?;
        }
        Command::Rosters => {
            let rosters = store.all_names_by_house().with_context(context)?;
            emit_rosters(&mut out, cli.json, &rosters)?;
        }
        Command::Data => {
            let rows = store.all_data().with_context(context)?;
            emit_rows(&mut out, cli.json, &rows)?;
        }
        Command::Cohort { name } => match store.get_cohort_for(name).with_context(context)? {
            Some(cohort) if cli.json => {
                serde_json::to_writer(&mut out, &cohort)?;
                writeln!(out)?;
            }
            Some(cohort) => writeln!(out, "{cohort}")?,
            None => {
                eprintln!("no record for {name:?}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::DupedLastNames => {
            let names = store.find_duped_last_names().with_context(context)?;
            emit_list(&mut out, cli.json, names.iter())?;
        }
        Command::Housemates { name } => {
            let mates = store.get_housemates_for(name).with_context(context)?;
            emit_list(&mut out, cli.json, mates.iter())?;
        }
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn emit_list<'a, W: Write>(
    out: &mut W,
    json: bool,
    items: impl Iterator<Item = &'a String>,
) -> Result<()> {
    if json {
        let items: Vec<&String> = items.collect();
        serde_json::to_writer_pretty(&mut *out, &items)?;
        writeln!(out)?;
    } else {
        for item in items {
            writeln!(out, "{item}")?;
        }
    }
    Ok(())
}

fn emit_rosters<W: Write>(out: &mut W, json: bool, rosters: &[Vec<String>]) -> Result<()> {
    let named: Vec<NamedRoster<'_>> = Bucket::ALL
        .iter()
        .zip(rosters)
        .map(|(bucket, names)| NamedRoster {
            roster: bucket.label(),
            names,
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &named)?;
        writeln!(out)?;
        return Ok(());
    }
    for roster in &named {
        writeln!(out, "{} ({})", roster.roster, roster.names.len())?;
        for name in roster.names {
            writeln!(out, "  {name}")?;
        }
    }
    Ok(())
}

fn emit_rows<W: Write>(out: &mut W, json: bool, rows: &[PersonRow]) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, rows)?;
        writeln!(out)?;
        return Ok(());
    }
    for row in rows {
        writeln!(
            out,
            "{}|{}|{}|{}",
            row.full_name, row.house, row.adviser, row.cohort
        )?;
    }
    Ok(())
}
