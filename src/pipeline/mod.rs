//! Pure transformations applied to the finished-match collection.

pub mod filters;
pub mod roster;
pub mod summary;

pub use filters::{filter_by_team, team_name_from_query, DateRange};
pub use roster::team_roster;
pub use summary::{results_in_range, summarize};
