use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Why a scorer produced no result. Missing input is an expected outcome,
/// not a failure, so every scorer returns `Result<_, Unavailable>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Unavailable {
    #[error("chronological age is required")]
    MissingAge,

    #[error("biological sex is required")]
    MissingSex,

    #[error("no metric has a usable value")]
    NoUsableMetrics,

    #[error("no component has a usable value")]
    NoUsableComponents,

    #[error("requires VO2max or resting heart rate")]
    NoFitnessSource,
}

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown {setting} policy: {value:?}")]
    UnknownPolicy {
        setting: &'static str,
        value: String,
    },
}
