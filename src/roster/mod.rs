/// Roster layer: record types, parsing, and derived views.
///
/// Architecture:
/// ```text
///   first|last|house|adviser|cohort
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → Vec<Record>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Roster   │  immutable snapshot of one read
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  houses, cohorts, rosters, housemates ...
///   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod query;
