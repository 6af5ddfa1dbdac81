use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::roster::error::Result;
use crate::roster::model::{PersonRow, ALL_COHORTS};
use crate::roster::query::Roster;

// ---------------------------------------------------------------------------
// RecordStore – file-backed queries
// ---------------------------------------------------------------------------

/// Read-only queries against a roster file.
///
/// Every call re-reads the file, so results always reflect its current
/// content. Callers that want to parse once should use [`RecordStore::load`]
/// and query the returned [`Roster`] directly.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Queries against the file at `path`; nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the file as it is right now.
    pub fn load(&self) -> Result<Roster> {
        Roster::load(&self.path)
    }

    /// Distinct non-empty house names.
    pub fn all_houses(&self) -> Result<BTreeSet<String>> {
        Ok(self.load()?.all_houses())
    }

    /// Every cohort value, sentinels included.
    pub fn known_cohorts(&self) -> Result<BTreeSet<String>> {
        Ok(self.load()?.known_cohorts())
    }

    /// Shorthand for `students_by_cohort(ALL_COHORTS)`.
    pub fn all_students(&self) -> Result<Vec<String>> {
        self.students_by_cohort(ALL_COHORTS)
    }

    /// Sorted student names in `cohort`, or all students for `All`.
    pub fn students_by_cohort(&self, cohort: &str) -> Result<Vec<String>> {
        Ok(self.load()?.students_by_cohort(cohort))
    }

    /// Seven sorted rosters, houses first, then ghosts and instructors.
    pub fn all_names_by_house(&self) -> Result<Vec<Vec<String>>> {
        Ok(self.load()?.all_names_by_house())
    }

    /// One row per record, in file order.
    pub fn all_data(&self) -> Result<Vec<PersonRow>> {
        Ok(self.load()?.all_data())
    }

    /// Cohort of the first record named `name`, if any.
    pub fn get_cohort_for(&self, name: &str) -> Result<Option<String>> {
        Ok(self.load()?.get_cohort_for(name).map(str::to_string))
    }

    /// Last names carried by two or more records.
    pub fn find_duped_last_names(&self) -> Result<BTreeSet<String>> {
        Ok(self.load()?.find_duped_last_names())
    }

    /// Fails with [`crate::RosterError::PersonNotFound`] when nobody is
    /// called `name`.
    pub fn get_housemates_for(&self, name: &str) -> Result<BTreeSet<String>> {
        self.load()?.get_housemates_for(name)
    }
}
