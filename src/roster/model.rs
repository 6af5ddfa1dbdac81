use std::fmt;

use serde::Serialize;

/// Cohort value marking a ghost (house is empty).
pub const GHOST_COHORT: &str = "G";

/// Cohort value marking an instructor (house is empty).
pub const INSTRUCTOR_COHORT: &str = "I";

/// Pseudo-cohort meaning "every student, whatever their cohort".
pub const ALL_COHORTS: &str = "All";

/// Number of `|`-separated fields on every line.
pub const FIELD_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// Record – one line of the data file
// ---------------------------------------------------------------------------

/// One parsed line: `first_name|last_name|house|adviser|cohort`.
///
/// Fields are taken from each line by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    /// Empty for ghosts and instructors.
    pub house: String,
    pub adviser: String,
    /// A term such as `Fall 2015`, or one of the `G` / `I` sentinels.
    pub cohort: String,
}

impl Record {
    /// Build a record from its five fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        house: impl Into<String>,
        adviser: impl Into<String>,
        cohort: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            house: house.into(),
            adviser: adviser.into(),
            cohort: cohort.into(),
        }
    }

    /// `first_name` and `last_name` joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Cheaper than building `full_name()` when only comparing.
    pub fn has_full_name(&self, name: &str) -> bool {
        name.strip_prefix(self.first_name.as_str())
            .and_then(|rest| rest.strip_prefix(' '))
            .is_some_and(|rest| rest == self.last_name)
    }

    /// Cohort is the ghost sentinel.
    pub fn is_ghost(&self) -> bool {
        self.cohort == GHOST_COHORT
    }

    /// Cohort is the instructor sentinel.
    pub fn is_instructor(&self) -> bool {
        self.cohort == INSTRUCTOR_COHORT
    }

    /// Ghosts and instructors are never counted as students.
    pub fn is_student(&self) -> bool {
        !self.is_ghost() && !self.is_instructor()
    }
}

// ---------------------------------------------------------------------------
// PersonRow – the flattened view returned by `all_data`
// ---------------------------------------------------------------------------

/// `(full_name, house, adviser, cohort)` for a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRow {
    pub full_name: String,
    pub house: String,
    pub adviser: String,
    pub cohort: String,
}

impl From<&Record> for PersonRow {
    fn from(rec: &Record) -> Self {
        Self {
            full_name: rec.full_name(),
            house: rec.house.clone(),
            adviser: rec.adviser.clone(),
            cohort: rec.cohort.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Bucket – the seven rosters produced by `all_names_by_house`
// ---------------------------------------------------------------------------

/// Roster buckets, in the order `all_names_by_house` returns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Bucket {
    DumbledoresArmy,
    Gryffindor,
    Hufflepuff,
    Ravenclaw,
    Slytherin,
    Ghosts,
    Instructors,
}

impl Bucket {
    pub const ALL: [Bucket; 7] = [
        Bucket::DumbledoresArmy,
        Bucket::Gryffindor,
        Bucket::Hufflepuff,
        Bucket::Ravenclaw,
        Bucket::Slytherin,
        Bucket::Ghosts,
        Bucket::Instructors,
    ];

    /// Position of this bucket in [`Bucket::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name of the roster.
    pub fn label(self) -> &'static str {
        match self {
            Bucket::DumbledoresArmy => "Dumbledore's Army",
            Bucket::Gryffindor => "Gryffindor",
            Bucket::Hufflepuff => "Hufflepuff",
            Bucket::Ravenclaw => "Ravenclaw",
            Bucket::Slytherin => "Slytherin",
            Bucket::Ghosts => "Ghosts",
            Bucket::Instructors => "Instructors",
        }
    }

    /// Which bucket a record belongs to, if any.
    ///
    /// An empty house is split by cohort (`G` → ghosts, `I` → instructors);
    /// otherwise the house must match one of the five names exactly.
    pub fn classify(rec: &Record) -> Option<Bucket> {
        if rec.house.is_empty() {
            return match rec.cohort.as_str() {
                GHOST_COHORT => Some(Bucket::Ghosts),
                INSTRUCTOR_COHORT => Some(Bucket::Instructors),
                _ => None,
            };
        }
        match rec.house.as_str() {
            "Dumbledore's Army" => Some(Bucket::DumbledoresArmy),
            "Gryffindor" => Some(Bucket::Gryffindor),
            "Hufflepuff" => Some(Bucket::Hufflepuff),
            "Ravenclaw" => Some(Bucket::Ravenclaw),
            "Slytherin" => Some(Bucket::Slytherin),
            _ => None,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
