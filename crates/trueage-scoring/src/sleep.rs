//! Sleep quality score and letter grade.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use trueage_core::models::sleep::SleepInputs;

use crate::composite::{Component, range_score, weighted_mean};
use crate::error::{ScoringError, Unavailable};

/// Component weights, in order: duration, consistency, caffeine, screens,
/// apnea risk, self-rated quality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SleepWeighting {
    /// Duration and consistency weigh the same (0.30 / 0.30).
    #[default]
    Balanced,
    /// Duration leads consistency (0.35 / 0.25).
    DurationLed,
}

impl SleepWeighting {
    pub fn weights(self) -> [f64; 6] {
        match self {
            SleepWeighting::Balanced => [0.30, 0.30, 0.10, 0.10, 0.10, 0.10],
            SleepWeighting::DurationLed => [0.35, 0.25, 0.10, 0.10, 0.10, 0.10],
        }
    }
}

impl FromStr for SleepWeighting {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "balanced" => Ok(SleepWeighting::Balanced),
            "duration_led" => Ok(SleepWeighting::DurationLed),
            other => Err(ScoringError::UnknownPolicy {
                setting: "sleep weighting",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SleepGrade {
    A,
    B,
    C,
    D,
}

impl SleepGrade {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            SleepGrade::A
        } else if score >= 70.0 {
            SleepGrade::B
        } else if score >= 55.0 {
            SleepGrade::C
        } else {
            SleepGrade::D
        }
    }
}

impl fmt::Display for SleepGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            SleepGrade::A => "A",
            SleepGrade::B => "B",
            SleepGrade::C => "C",
            SleepGrade::D => "D",
        };
        f.write_str(letter)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SleepScore {
    /// 0–100.
    pub score: f64,
    pub grade: SleepGrade,
    pub tips: Vec<String>,
}

fn yes_no_score(answer: Option<bool>, if_yes: f64) -> Option<f64> {
    answer.map(|yes| if yes { if_yes } else { 100.0 })
}

/// Score sleep habits. `duration_hours` is the subject's nightly sleep.
pub fn score_sleep(
    duration_hours: Option<f64>,
    inputs: &SleepInputs,
    weighting: SleepWeighting,
) -> Result<SleepScore, Unavailable> {
    let finite = |v: Option<f64>| v.filter(|x| x.is_finite());
    let duration = finite(duration_hours);
    let [w_duration, w_consistency, w_caffeine, w_screens, w_apnea, w_quality] = weighting.weights();

    let components = [
        Component::new(duration.map(|h| range_score(h, 7.0, 9.0, 4.0, 12.0)), w_duration),
        Component::new(
            finite(inputs.regular_days).map(|d| (d / 7.0 * 100.0).clamp(0.0, 100.0)),
            w_consistency,
        ),
        Component::new(yes_no_score(inputs.late_caffeine, 60.0), w_caffeine),
        Component::new(yes_no_score(inputs.screens_before_bed, 65.0), w_screens),
        Component::new(yes_no_score(inputs.apnea_risk, 40.0), w_apnea),
        Component::new(
            finite(inputs.quality).map(|q| (20.0 * q).clamp(20.0, 100.0)),
            w_quality,
        ),
    ];

    let score = weighted_mean(&components)
        .ok_or(Unavailable::NoUsableComponents)?
        .clamp(0.0, 100.0);

    let mut tips = Vec::new();
    if inputs.late_caffeine == Some(true) {
        tips.push("No caffeine after midday".to_string());
    }
    if inputs.screens_before_bed == Some(true) {
        tips.push("Put screens away before bed".to_string());
    }
    if duration.is_some_and(|h| !(7.0..=9.0).contains(&h)) {
        tips.push("Aim for 7-9 hours a night".to_string());
    }

    Ok(SleepScore {
        score,
        grade: SleepGrade::from_score(score),
        tips,
    })
}
