//! League error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Card already exists in roster: {name}")]
    DuplicateEntity { name: String },

    #[error("Card cannot play against itself: {name}")]
    InvalidMatchup { name: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Fewer than two cards where a contest needs two.
    ///
    /// Season and exhibition scheduling treat this as "nothing to play".
    #[error("Roster has too few cards to play")]
    EmptyRoster,

    #[error("Card not found: {name}")]
    EntityNotFound { name: String },

    #[error("Invalid attributes for {name}: {reason}")]
    InvalidAttributes { name: String, reason: String },

    #[error("No record for season {season}")]
    SeasonNotFound { season: u32 },

    #[error("Season {season} has already been simulated")]
    SeasonAlreadyRecorded { season: u32 },

    #[error("Playoffs for season {season} have already been played")]
    PlayoffsAlreadyCompleted { season: u32 },

    #[error("Balance change limit of {limit} cards reached for season {season}")]
    BalanceBudgetExhausted { season: u32, limit: usize },

    #[error("Unsupported snapshot schema version {found} (expected {expected})")]
    UnsupportedSchemaVersion { found: u32, expected: u32 },

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary encoding error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LeagueError>;

impl LeagueError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        LeagueError::InvalidConfiguration(reason.into())
    }
}
