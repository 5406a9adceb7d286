//! Lifestyle age from five habit components.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use trueage_core::models::lifestyle::{LifestyleInputs, SmokingStatus};

use crate::composite::{Component, weighted_mean};
use crate::error::{ScoringError, Unavailable};

const ACTIVITY_WEIGHT: f64 = 0.35;
const FRUIT_VEG_WEIGHT: f64 = 0.20;
const SMOKING_WEIGHT: f64 = 0.20;
const ALCOHOL_WEIGHT: f64 = 0.10;
const SITTING_WEIGHT: f64 = 0.15;

/// Weekly activity minutes are capped here before scoring.
pub const MAX_ACTIVITY_MINUTES: f64 = 600.0;
/// Guideline minimum of moderate activity per week.
pub const GUIDELINE_MINUTES: f64 = 150.0;
/// Daily fruit and vegetable servings that score 100.
pub const FRUIT_VEG_TARGET: f64 = 5.0;

/// How weekly activity minutes map to a 0–100 score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActivityCurve {
    /// 0 → 150 → 300+ minutes map linearly to 0 → 80 → 100.
    #[default]
    Tiered,
    /// Straight proportion of 300 minutes.
    Proportional,
}

impl ActivityCurve {
    pub fn score(self, minutes: f64) -> f64 {
        let score = match self {
            ActivityCurve::Tiered => {
                if minutes <= 0.0 {
                    0.0
                } else if minutes < GUIDELINE_MINUTES {
                    minutes / GUIDELINE_MINUTES * 80.0
                } else if minutes <= 2.0 * GUIDELINE_MINUTES {
                    80.0 + (minutes - GUIDELINE_MINUTES) / GUIDELINE_MINUTES * 20.0
                } else {
                    100.0
                }
            }
            ActivityCurve::Proportional => minutes / (2.0 * GUIDELINE_MINUTES) * 100.0,
        };
        score.clamp(0.0, 100.0)
    }
}

impl FromStr for ActivityCurve {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "tiered" => Ok(ActivityCurve::Tiered),
            "proportional" => Ok(ActivityCurve::Proportional),
            other => Err(ScoringError::UnknownPolicy {
                setting: "activity curve",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LifestyleScore {
    pub ls_age: f64,
    /// Composite habit score, 0–100.
    pub score: f64,
    /// Years added to chronological age; negative is younger.
    pub delta: f64,
    pub tips: Vec<String>,
}

/// Weekly activity minutes, `days * minutes` clamped to `[0, 600]`.
pub fn activity_minutes(inputs: &LifestyleInputs) -> Option<f64> {
    let days = inputs.active_days.filter(|v| v.is_finite())?;
    let minutes = inputs.minutes_per_session.filter(|v| v.is_finite())?;
    Some((days * minutes).clamp(0.0, MAX_ACTIVITY_MINUTES))
}

fn smoking_score(status: SmokingStatus) -> f64 {
    match status {
        SmokingStatus::None => 100.0,
        SmokingStatus::Former => 70.0,
        SmokingStatus::Current => 20.0,
    }
}

fn alcohol_score(units_per_week: f64) -> f64 {
    if units_per_week <= 7.0 {
        100.0
    } else if units_per_week <= 14.0 {
        80.0
    } else if units_per_week <= 21.0 {
        60.0
    } else {
        30.0
    }
}

fn sitting_score(hours: f64) -> f64 {
    if hours <= 2.0 {
        100.0
    } else if hours >= 12.0 {
        20.0
    } else {
        (100.0 - (hours - 2.0) / 8.0 * 60.0).clamp(20.0, 100.0)
    }
}

pub fn score_lifestyle(
    age: Option<f64>,
    inputs: &LifestyleInputs,
    curve: ActivityCurve,
) -> Result<LifestyleScore, Unavailable> {
    let finite = |v: Option<f64>| v.filter(|x| x.is_finite());

    let minutes = activity_minutes(inputs);
    let fruit_veg = finite(inputs.fruit_veg_servings);

    let components = [
        Component::new(minutes.map(|m| curve.score(m)), ACTIVITY_WEIGHT),
        Component::new(
            fruit_veg.map(|fv| (fv / FRUIT_VEG_TARGET * 100.0).clamp(0.0, 100.0)),
            FRUIT_VEG_WEIGHT,
        ),
        Component::new(inputs.smoking.map(smoking_score), SMOKING_WEIGHT),
        Component::new(finite(inputs.alcohol_units).map(alcohol_score), ALCOHOL_WEIGHT),
        Component::new(finite(inputs.sitting_hours).map(sitting_score), SITTING_WEIGHT),
    ];

    let age = finite(age).ok_or(Unavailable::MissingAge)?;
    let score = weighted_mean(&components)
        .ok_or(Unavailable::NoUsableComponents)?
        .clamp(0.0, 100.0);
    let delta = (50.0 - score) * 0.2;

    let mut tips = Vec::new();
    if inputs.smoking == Some(SmokingStatus::Current) {
        tips.push("Quit smoking".to_string());
    }
    if minutes.is_some_and(|m| m < GUIDELINE_MINUTES) {
        tips.push("Build up to 150 minutes of activity a week".to_string());
    }
    if fruit_veg.is_some_and(|fv| fv < FRUIT_VEG_TARGET) {
        tips.push("Eat five servings of fruit and vegetables a day".to_string());
    }

    Ok(LifestyleScore {
        ls_age: (age + delta).clamp(10.0, 110.0),
        score,
        delta,
        tips,
    })
}
