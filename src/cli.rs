use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cohort_roster::ALL_COHORTS;

/// Query a pipe-delimited file of student records.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Path to the data file (`first|last|house|adviser|cohort` per line)
    #[arg(env = "ROSTER_FILE")]
    pub file: PathBuf,

    /// Print results as JSON instead of one item per line
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Distinct house names
    Houses,

    /// Every cohort value in the file, including the G / I sentinels
    Cohorts,

    /// Sorted student names, optionally restricted to one cohort
    Students {
        #[arg(long, default_value = ALL_COHORTS)]
        cohort: String,
    },

    /// Sorted rosters for each house, then ghosts and instructors
    Rosters,

    /// Every record as full name, house, adviser and cohort
    Data,

    /// Cohort of the named person
    Cohort { name: String },

    /// Last names shared by more than one record
    DupedLastNames,

    /// People sharing house and cohort with the named person
    Housemates { name: String },
}
