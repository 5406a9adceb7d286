//! Cardiorespiratory-fitness age.
//!
//! Fitness age is the age at which a typical adult of the same sex would
//! have the subject's VO2max, using a linear decline from age 20.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use trueage_core::models::subject::{Sex, Subject};

use crate::error::Unavailable;

pub const MIN_FITNESS_AGE: f64 = 15.0;
pub const MAX_FITNESS_AGE: f64 = 90.0;

/// Where the VO2max used for the estimate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Vo2Source {
    Measured,
    /// Estimated from resting heart rate with the Uth–Sørensen ratio.
    RestingHeartRate,
}

impl Vo2Source {
    pub fn note(self) -> &'static str {
        match self {
            Vo2Source::Measured => "Based on measured VO2max",
            Vo2Source::RestingHeartRate => "Estimated from resting heart rate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FitnessAge {
    pub crf_age: f64,
    pub delta: f64,
    /// VO2max the estimate was based on, mL/kg/min.
    pub vo2max: f64,
    pub source: Vo2Source,
    pub note: String,
}

/// VO2max from the heart-rate ratio, `15.3 * hrmax / rhr` with
/// `hrmax = 208 - 0.7 * age`. `None` when the ratio overflows.
pub fn estimate_vo2max_from_rhr(age: f64, resting_hr: f64) -> Option<f64> {
    let hr_max = 208.0 - 0.7 * age;
    (hr_max > 0.0 && resting_hr > 0.0)
        .then(|| 15.3 * hr_max / resting_hr)
        .filter(|v| v.is_finite())
}

/// Reference VO2max at age 20 and its yearly decline.
fn decline_curve(sex: Sex) -> (f64, f64) {
    match sex {
        Sex::Male => (50.0, 0.34),
        Sex::Female => (42.0, 0.30),
    }
}

pub fn score_fitness(subject: &Subject) -> Result<FitnessAge, Unavailable> {
    let age = subject.age().ok_or(Unavailable::MissingAge)?;

    let measured = subject.vo2max.filter(|v| v.is_finite());
    let (vo2max, source) = match measured {
        Some(v) => (v, Vo2Source::Measured),
        None => subject
            .resting_hr
            .filter(|v| v.is_finite())
            .and_then(|rhr| estimate_vo2max_from_rhr(age, rhr))
            .map(|v| (v, Vo2Source::RestingHeartRate))
            .ok_or(Unavailable::NoFitnessSource)?,
    };

    let sex = subject.sex.ok_or(Unavailable::MissingSex)?;
    let (v0, decline) = decline_curve(sex);
    let crf_age = (20.0 + (v0 - vo2max) / decline).clamp(MIN_FITNESS_AGE, MAX_FITNESS_AGE);

    Ok(FitnessAge {
        crf_age,
        delta: crf_age - age,
        vo2max,
        source,
        note: source.note().to_string(),
    })
}
