//! Persisted league state.
//!
//! The snapshot is a versioned schema: the version is read first and
//! anything other than [`SNAPSHOT_SCHEMA_VERSION`] is refused before the
//! rest of the document is parsed. Unknown fields are rejected rather than
//! ignored.
//!
//! Two encodings are supported: JSON for the persistence layer and
//! bincode for compact checkpoints.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::session::RetiredCard;
use crate::cards::Card;
use crate::core::{LeagueError, Result};
use crate::history::HistoryLedger;

pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Everything needed to rebuild a league except its configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeagueSnapshot {
    /// Must stay the first field: binary decoding reads it first.
    pub schema_version: u32,
    pub season: u32,
    /// Live roster in roster order.
    pub cards: Vec<Card>,
    pub retired: Vec<RetiredCard>,
    pub history: HistoryLedger,
    /// Cards already edited in `season`, live or since retired.
    pub rebalanced_this_season: BTreeSet<String>,
}

#[derive(Deserialize)]
struct VersionHeader {
    schema_version: u32,
}

fn check_version(found: u32) -> Result<()> {
    if found == SNAPSHOT_SCHEMA_VERSION {
        Ok(())
    } else {
        Err(LeagueError::UnsupportedSchemaVersion {
            found,
            expected: SNAPSHOT_SCHEMA_VERSION,
        })
    }
}

impl LeagueSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(source: &str) -> Result<Self> {
        let header: VersionHeader = serde_json::from_str(source)?;
        check_version(header.schema_version)?;
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let version: u32 = bincode::deserialize(bytes)?;
        check_version(version)?;
        Ok(bincode::deserialize(bytes)?)
    }
}
