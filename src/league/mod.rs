//! League sessions and their persisted form.

pub mod session;
pub mod snapshot;

pub use session::{ChampionshipRow, League, RetiredCard};
pub use snapshot::{LeagueSnapshot, SNAPSHOT_SCHEMA_VERSION};
