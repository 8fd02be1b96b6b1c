pub mod grammar;
pub mod scoring;
pub mod table;

pub use grammar::END_SENTINEL;
pub use table::{LeagueTable, LineOutcome};
