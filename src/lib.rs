//! Read-only queries over a pipe-delimited file of student records.
//!
//! Each line of the input is `first_name|last_name|house|adviser|cohort`.
//! [`RecordStore`] re-reads the file on every query; [`Roster`] is a single
//! parsed snapshot for callers that want to query repeatedly.

pub mod roster;
pub mod store;

pub use roster::error::{Result, RosterError};
pub use roster::loader::{load_file, parse_records};
pub use roster::model::{Bucket, PersonRow, Record, ALL_COHORTS, GHOST_COHORT, INSTRUCTOR_COHORT};
pub use roster::query::Roster;
pub use store::RecordStore;
