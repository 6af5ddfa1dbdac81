use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use log::{debug, warn};

use super::error::{Result, RosterError};
use super::loader::load_file;
use super::model::{Bucket, PersonRow, Record, ALL_COHORTS};

// ---------------------------------------------------------------------------
// Roster – one immutable read of the data file
// ---------------------------------------------------------------------------

/// All records from a single read, in file order.
///
/// This is the "load once, query many" handle. It never re-reads the file;
/// use [`crate::RecordStore`] for queries that track the file's current
/// content.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<Record>,
}

impl Roster {
    /// Wrap already-parsed records, keeping their order.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Read and parse the file at `path` once.
    pub fn load(path: &Path) -> Result<Self> {
        load_file(path).map(Self::from_records)
    }

    /// Records in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct non-empty house names.
    pub fn all_houses(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .filter(|rec| !rec.house.is_empty())
            .map(|rec| rec.house.clone())
            .collect()
    }

    /// Every cohort value in the file, including the `G` / `I` sentinels.
    pub fn known_cohorts(&self) -> BTreeSet<String> {
        self.records.iter().map(|rec| rec.cohort.clone()).collect()
    }

    /// Sorted full names of the students in `cohort`, or of every student
    /// when `cohort` is [`ALL_COHORTS`].
    ///
    /// Ghosts and instructors are never included. A cohort that appears
    /// nowhere in the file yields an empty list, as does a cohort that only
    /// holds ghosts or instructors; [`Roster::known_cohorts`] tells the two
    /// apart.
    pub fn students_by_cohort(&self, cohort: &str) -> Vec<String> {
        let every_cohort = cohort == ALL_COHORTS;

        // Phase one: is the cohort known at all?
        if !every_cohort && !self.known_cohorts().contains(cohort) {
            debug!("unknown cohort {cohort:?}");
            return Vec::new();
        }

        // Phase two: collect qualifying students.
        let mut names: Vec<String> = self
            .records
            .iter()
            .filter(|rec| rec.is_student())
            .filter(|rec| every_cohort || rec.cohort == cohort)
            .map(Record::full_name)
            .collect();
        names.sort();
        names
    }

    /// Seven sorted rosters, in [`Bucket::ALL`] order.
    ///
    /// Records whose house is none of the five known houses (and that are
    /// not ghosts or instructors) are left out.
    pub fn all_names_by_house(&self) -> Vec<Vec<String>> {
        let mut rosters: Vec<Vec<String>> = vec![Vec::new(); Bucket::ALL.len()];
        let mut dropped = 0usize;

        for rec in &self.records {
            match Bucket::classify(rec) {
                Some(bucket) => rosters[bucket.index()].push(rec.full_name()),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            warn!("{dropped} records matched no house, ghost or instructor roster");
        }

        for roster in &mut rosters {
            roster.sort();
        }
        rosters
    }

    /// `(full_name, house, adviser, cohort)` per record, in file order.
    pub fn all_data(&self) -> Vec<PersonRow> {
        self.records.iter().map(PersonRow::from).collect()
    }

    /// Cohort of the first record named `name`.
    ///
    /// Later records with the same full name are never consulted; see
    /// [`Roster::duplicate_full_names`].
    pub fn get_cohort_for(&self, name: &str) -> Option<&str> {
        self.find_person(name).map(|rec| rec.cohort.as_str())
    }

    /// Last names carried by two or more records.
    pub fn find_duped_last_names(&self) -> BTreeSet<String> {
        duplicated(self.records.iter().map(|rec| rec.last_name.clone()))
    }

    /// Full names carried by two or more records.
    ///
    /// Name lookups resolve to the first such record in file order.
    pub fn duplicate_full_names(&self) -> BTreeSet<String> {
        duplicated(self.records.iter().map(Record::full_name))
    }

    /// Everyone sharing house and cohort with the first record named `name`,
    /// excluding `name` itself.
    pub fn get_housemates_for(&self, name: &str) -> Result<BTreeSet<String>> {
        let person = self
            .find_person(name)
            .ok_or_else(|| RosterError::PersonNotFound(name.to_string()))?;

        Ok(self
            .records
            .iter()
            .filter(|rec| rec.house == person.house && rec.cohort == person.cohort)
            .filter(|rec| !rec.has_full_name(name))
            .map(Record::full_name)
            .collect())
    }

    fn find_person(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|rec| rec.has_full_name(name))
    }
}

fn duplicated(values: impl Iterator<Item = String>) -> BTreeSet<String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(value, _)| value)
        .collect()
}
