use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lifestyle::ActivityCurve;
use crate::sleep::SleepWeighting;

/// Advice items shown per assessment unless configured otherwise.
pub const DEFAULT_ADVICE_LIMIT: usize = 5;

/// Scoring choices that have more than one accepted formulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ScoringPolicy {
    pub activity_curve: ActivityCurve,
    pub sleep_weighting: SleepWeighting,
    pub advice_limit: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            activity_curve: ActivityCurve::default(),
            sleep_weighting: SleepWeighting::default(),
            advice_limit: DEFAULT_ADVICE_LIMIT,
        }
    }
}
