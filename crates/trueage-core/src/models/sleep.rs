use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sleep habits questionnaire. Nightly duration lives on
/// [`Subject::sleep_hours`](super::subject::Subject::sleep_hours).
///
/// The yes/no questions are `Some(true)` for "yes".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SleepInputs {
    /// Days per week with a regular bed and wake time (0–7).
    pub regular_days: Option<f64>,
    /// Caffeine in the afternoon or evening.
    pub late_caffeine: Option<bool>,
    /// Screen use in the hour before bed.
    pub screens_before_bed: Option<bool>,
    /// Snoring, witnessed apneas, or daytime sleepiness.
    pub apnea_risk: Option<bool>,
    /// Self-rated sleep quality, 1 (poor) to 5 (excellent).
    pub quality: Option<f64>,
}

/// Parse a `yes` / `no` form answer.
pub fn parse_yes_no(value: &str) -> Option<bool> {
    match value.trim() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}
