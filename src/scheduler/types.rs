use chrono::{DateTime, Utc};
use thiserror::Error;

/// Règle appliquée quand deux surcharges se chevauchent entre elles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverridePrecedence {
    /// Dans l'ordre de début croissant, la surcharge la plus tardive prend la zone commune.
    #[default]
    LatestWins,
    /// La première surcharge garde la zone commune ; les suivantes comblent le reste.
    EarliestWins,
}

/// Options de fusion des surcharges
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    pub precedence: OverridePrecedence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Unsorted,
    Overlap,
    Gap,
    OutOfWindow,
    Empty,
}

/// Anomalie détectée sur une frise d'entrées.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    /// Index de l'entrée fautive (ou de la seconde entrée pour une paire).
    pub index: usize,
    pub at: DateTime<Utc>,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid policy: {0}")]
    InvalidPolicy(&'static str),
    #[error("invalid window: from must be before until")]
    InvalidWindow,
    #[error("invalid override for {user}: end_at {end_at} must be after start_at {start_at}")]
    InvalidOverride {
        user: String,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
    },
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("rotation arithmetic out of representable time range")]
    TimeOverflow,
}
